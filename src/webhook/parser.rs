use crate::domain::event::{Customer, EventStatus, PaymentEvent};
use serde::Deserialize;
use thiserror::Error;

pub const RECOGNIZED_EVENTS: &[&str] = &["charge.completed"];

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("payload is not a valid event envelope: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unrecognized event kind {0}")]
    UnrecognizedEvent(String),
}

#[derive(Debug, Deserialize)]
struct Envelope {
    event: String,
    data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ChargeData {
    status: EventStatus,
    amount: f64,
    currency: String,
    tx_ref: String,
    customer: Customer,
}

pub fn parse_event(raw: &[u8]) -> Result<PaymentEvent, ParseError> {
    let envelope: Envelope = serde_json::from_slice(raw)?;
    if !RECOGNIZED_EVENTS.contains(&envelope.event.as_str()) {
        return Err(ParseError::UnrecognizedEvent(envelope.event));
    }

    let data: ChargeData = serde_json::from_value(envelope.data)?;
    Ok(PaymentEvent {
        kind: envelope.event,
        reference: data.tx_ref,
        amount: data.amount,
        currency: data.currency,
        status: data.status,
        customer: data.customer,
    })
}
