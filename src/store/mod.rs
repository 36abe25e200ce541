use crate::domain::transaction::{NewTransaction, TransactionRecord};
use anyhow::Result;

pub mod memory;
pub mod postgres;

#[derive(Debug, Clone)]
pub enum InsertOutcome {
    Created(TransactionRecord),
    Duplicate,
}

#[async_trait::async_trait]
pub trait TransactionStore: Send + Sync {
    async fn insert_if_absent(&self, tx: NewTransaction) -> Result<InsertOutcome>;

    async fn find_all(&self) -> Result<Vec<TransactionRecord>>;

    async fn healthy(&self) -> bool;
}
