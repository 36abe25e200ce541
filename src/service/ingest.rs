use crate::domain::event::EventStatus;
use crate::domain::transaction::NewTransaction;
use crate::notify::{Notifier, TransactionSummary};
use crate::provider::ProviderClient;
use crate::store::{InsertOutcome, TransactionStore};
use crate::webhook::parser::{parse_event, ParseError};
use crate::webhook::signature::{verify_signature, AuthError};
use bytes::Bytes;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct IncomingEvent {
    pub body: Bytes,
    pub signature: Option<String>,
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    Applied,
    AlreadyApplied,
    Ignored,
}

impl IngestOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            IngestOutcome::Applied => "applied",
            IngestOutcome::AlreadyApplied => "already_applied",
            IngestOutcome::Ignored => "ignored",
        }
    }
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("authentication failed: {0}")]
    Authentication(#[from] AuthError),
    #[error("payload rejected: {0}")]
    Parse(ParseError),
    #[error("transaction store failed: {0}")]
    Persistence(#[source] anyhow::Error),
    #[error("provider verification unavailable: {0}")]
    Provider(#[source] anyhow::Error),
}

#[derive(Clone)]
pub struct IngestService {
    pub webhook_secret: String,
    pub store: Arc<dyn TransactionStore>,
    pub notifier: Arc<dyn Notifier>,
    pub provider: Option<Arc<dyn ProviderClient>>,
}

impl IngestService {
    pub async fn ingest(&self, incoming: IncomingEvent) -> Result<IngestOutcome, IngestError> {
        tracing::debug!(
            "received webhook, {} bytes, content-type {}",
            incoming.body.len(),
            incoming.content_type.as_deref().unwrap_or("unset")
        );

        if let Err(reason) = verify_signature(
            &incoming.body,
            incoming.signature.as_deref(),
            &self.webhook_secret,
        ) {
            match reason {
                AuthError::MissingSecret => tracing::error!("rejecting webhook: {}", reason),
                _ => tracing::warn!("rejecting webhook: {}", reason),
            }
            return Err(IngestError::Authentication(reason));
        }

        let event = match parse_event(&incoming.body) {
            Ok(event) => event,
            Err(ParseError::UnrecognizedEvent(kind)) => {
                tracing::info!("ignoring unrecognized event kind {}", kind);
                return Ok(IngestOutcome::Ignored);
            }
            Err(reason) => return Err(IngestError::Parse(reason)),
        };

        if event.status != EventStatus::Successful {
            tracing::info!(
                "ignoring {} for {} with status {}",
                event.kind,
                event.reference,
                event.status.as_str()
            );
            return Ok(IngestOutcome::Ignored);
        }

        if let Some(provider) = &self.provider {
            let verification = provider
                .verify_by_reference(&event.reference)
                .await
                .map_err(IngestError::Provider)?;

            if verification.status != "successful"
                || verification.amount < event.amount
                || verification.currency != event.currency
            {
                tracing::warn!(
                    "ignoring {}: provider reports status {} amount {} {}, webhook claimed {} {}",
                    event.reference,
                    verification.status,
                    verification.amount,
                    verification.currency,
                    event.amount,
                    event.currency
                );
                return Ok(IngestOutcome::Ignored);
            }
        }

        let new_tx = NewTransaction {
            reference: event.reference.clone(),
            amount: event.amount,
            currency: event.currency.clone(),
            status: event.status.clone(),
            customer_name: event.customer.name.clone(),
            customer_email: event.customer.email.clone(),
        };

        match self
            .store
            .insert_if_absent(new_tx)
            .await
            .map_err(IngestError::Persistence)?
        {
            InsertOutcome::Duplicate => {
                tracing::info!("transaction {} already applied", event.reference);
                Ok(IngestOutcome::AlreadyApplied)
            }
            InsertOutcome::Created(record) => {
                let summary = TransactionSummary {
                    reference: record.reference.clone(),
                    amount: record.amount,
                    currency: record.currency.clone(),
                    customer_name: record.customer_name.clone(),
                };
                if let Err(e) = self
                    .notifier
                    .send_confirmation(&record.customer_email, &summary)
                    .await
                {
                    tracing::warn!("confirmation for {} failed: {:#}", record.reference, e);
                }
                tracing::info!("applied {} for {} {}", record.reference, record.amount, record.currency);
                Ok(IngestOutcome::Applied)
            }
        }
    }
}
