use anyhow::Result;

pub mod flutterwave;

#[derive(Debug, Clone)]
pub struct ProviderVerification {
    pub status: String,
    pub amount: f64,
    pub currency: String,
}

#[async_trait::async_trait]
pub trait ProviderClient: Send + Sync {
    async fn verify_by_reference(&self, tx_ref: &str) -> Result<ProviderVerification>;
}
