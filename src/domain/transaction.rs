use crate::domain::event::EventStatus;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct TransactionRecord {
    pub id: Uuid,
    pub reference: String,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    pub customer_name: String,
    pub customer_email: String,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub reference: String,
    pub amount: f64,
    pub currency: String,
    pub status: EventStatus,
    pub customer_name: String,
    pub customer_email: String,
}
