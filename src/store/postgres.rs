use crate::domain::transaction::{NewTransaction, TransactionRecord};
use crate::store::{InsertOutcome, TransactionStore};
use anyhow::Result;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Clone)]
pub struct PgTransactionStore {
    pub pool: PgPool,
}

#[async_trait::async_trait]
impl TransactionStore for PgTransactionStore {
    async fn insert_if_absent(&self, tx: NewTransaction) -> Result<InsertOutcome> {
        let row = sqlx::query(
            r#"
            INSERT INTO transactions (id, tx_ref, amount, currency, status, customer_name, customer_email)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (tx_ref) DO NOTHING
            RETURNING id, tx_ref, amount, currency, status, customer_name, customer_email, received_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&tx.reference)
        .bind(tx.amount)
        .bind(&tx.currency)
        .bind(tx.status.as_str())
        .bind(&tx.customer_name)
        .bind(&tx.customer_email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(match row {
            Some(r) => InsertOutcome::Created(record(&r)),
            None => InsertOutcome::Duplicate,
        })
    }

    async fn find_all(&self) -> Result<Vec<TransactionRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, tx_ref, amount, currency, status, customer_name, customer_email, received_at
            FROM transactions
            ORDER BY received_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(record).collect())
    }

    async fn healthy(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

fn record(r: &PgRow) -> TransactionRecord {
    TransactionRecord {
        id: r.get("id"),
        reference: r.get("tx_ref"),
        amount: r.get("amount"),
        currency: r.get("currency"),
        status: r.get("status"),
        customer_name: r.get("customer_name"),
        customer_email: r.get("customer_email"),
        received_at: r.get("received_at"),
    }
}
