use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Pending,
    Successful,
    Failed,
    #[serde(other)]
    Other,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Pending => "pending",
            EventStatus::Successful => "successful",
            EventStatus::Failed => "failed",
            EventStatus::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct PaymentEvent {
    pub kind: String,
    pub reference: String,
    pub amount: f64,
    pub currency: String,
    pub status: EventStatus,
    pub customer: Customer,
}
