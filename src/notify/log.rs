use crate::notify::{Notifier, TransactionSummary};
use anyhow::Result;

#[derive(Clone, Default)]
pub struct LogNotifier;

#[async_trait::async_trait]
impl Notifier for LogNotifier {
    async fn send_confirmation(&self, email: &str, summary: &TransactionSummary) -> Result<()> {
        tracing::info!(
            "confirmation for {} ({} {}) to {} suppressed, smtp not configured",
            summary.reference,
            summary.amount,
            summary.currency,
            email
        );
        Ok(())
    }
}
