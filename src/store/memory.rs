use crate::domain::transaction::{NewTransaction, TransactionRecord};
use crate::store::{InsertOutcome, TransactionStore};
use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct MemoryTransactionStore {
    records: Arc<Mutex<HashMap<String, TransactionRecord>>>,
}

impl MemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl TransactionStore for MemoryTransactionStore {
    async fn insert_if_absent(&self, tx: NewTransaction) -> Result<InsertOutcome> {
        let mut records = self.records.lock().await;
        if records.contains_key(&tx.reference) {
            return Ok(InsertOutcome::Duplicate);
        }

        let record = TransactionRecord {
            id: Uuid::new_v4(),
            reference: tx.reference.clone(),
            amount: tx.amount,
            currency: tx.currency,
            status: tx.status.as_str().to_string(),
            customer_name: tx.customer_name,
            customer_email: tx.customer_email,
            received_at: chrono::Utc::now(),
        };
        records.insert(tx.reference, record.clone());
        Ok(InsertOutcome::Created(record))
    }

    async fn find_all(&self) -> Result<Vec<TransactionRecord>> {
        let records = self.records.lock().await;
        let mut all: Vec<TransactionRecord> = records.values().cloned().collect();
        all.sort_by(|a, b| b.received_at.cmp(&a.received_at));
        Ok(all)
    }

    async fn healthy(&self) -> bool {
        true
    }
}
