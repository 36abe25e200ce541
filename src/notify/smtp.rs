use crate::config::SmtpConfig;
use crate::notify::{Notifier, TransactionSummary};
use anyhow::Result;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

#[derive(Clone)]
pub struct SmtpNotifier {
    pub from_address: String,
    pub transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpNotifier {
    pub fn from_config(cfg: &SmtpConfig) -> Result<Self> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&cfg.host)?.port(cfg.port);
        if let (Some(username), Some(password)) = (&cfg.username, &cfg.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            from_address: cfg.from_address.clone(),
            transport: builder.build(),
        })
    }
}

#[async_trait::async_trait]
impl Notifier for SmtpNotifier {
    async fn send_confirmation(&self, email: &str, summary: &TransactionSummary) -> Result<()> {
        let message = Message::builder()
            .from(self.from_address.parse::<Mailbox>()?)
            .to(email.parse::<Mailbox>()?)
            .subject(format!("Payment received for {}", summary.reference))
            .body(format!(
                "Hi {},\n\nWe received your payment of {} {} (reference {}).\n\nThank you.\n",
                summary.customer_name, summary.amount, summary.currency, summary.reference
            ))?;

        self.transport.send(message).await?;
        Ok(())
    }
}
