use anyhow::Result;

pub mod log;
pub mod smtp;

#[derive(Debug, Clone)]
pub struct TransactionSummary {
    pub reference: String,
    pub amount: f64,
    pub currency: String,
    pub customer_name: String,
}

#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn send_confirmation(&self, email: &str, summary: &TransactionSummary) -> Result<()>;
}
