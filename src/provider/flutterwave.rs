use crate::provider::{ProviderClient, ProviderVerification};
use anyhow::Result;
use serde::Deserialize;

pub struct FlutterwaveClient {
    pub base_url: String,
    pub secret_key: String,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    status: String,
    data: Option<VerifyData>,
}

#[derive(Debug, Deserialize)]
struct VerifyData {
    status: String,
    amount: f64,
    currency: String,
}

#[async_trait::async_trait]
impl ProviderClient for FlutterwaveClient {
    async fn verify_by_reference(&self, tx_ref: &str) -> Result<ProviderVerification> {
        let url = format!("{}/v3/transactions/verify_by_reference", self.base_url);
        let resp = self
            .client
            .get(url)
            .query(&[("tx_ref", tx_ref)])
            .bearer_auth(&self.secret_key)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!(
                "verify_by_reference returned HTTP {}: {}",
                status.as_u16(),
                body.chars().take(200).collect::<String>()
            );
        }

        let body: VerifyResponse = resp.json().await?;
        if body.status != "success" {
            anyhow::bail!("verify_by_reference reported status {}", body.status);
        }

        let data = body
            .data
            .ok_or_else(|| anyhow::anyhow!("verify_by_reference response has no data"))?;

        Ok(ProviderVerification {
            status: data.status,
            amount: data.amount,
            currency: data.currency,
        })
    }
}
