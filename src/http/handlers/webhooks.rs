use crate::http::error::err;
use crate::service::ingest::{IncomingEvent, IngestError};
use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub received: bool,
    pub outcome: &'static str,
}

pub async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let incoming = IncomingEvent {
        signature: header_value(&headers, "verif-hash"),
        content_type: header_value(&headers, "content-type"),
        body,
    };

    match state.ingest.ingest(incoming).await {
        Ok(outcome) => (
            axum::http::StatusCode::OK,
            Json(WebhookAck {
                received: true,
                outcome: outcome.as_str(),
            }),
        )
            .into_response(),
        Err(IngestError::Authentication(_)) => (
            axum::http::StatusCode::UNAUTHORIZED,
            Json(err("WEBHOOK_AUTH_FAILED", "webhook signature verification failed")),
        )
            .into_response(),
        Err(IngestError::Parse(reason)) => (
            axum::http::StatusCode::BAD_REQUEST,
            Json(err("WEBHOOK_PAYLOAD_INVALID", &reason.to_string())),
        )
            .into_response(),
        Err(e @ (IngestError::Persistence(_) | IngestError::Provider(_))) => {
            tracing::error!("webhook processing failed: {:#}", e);
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(err("INTERNAL_ERROR", "event could not be processed")),
            )
                .into_response()
        }
    }
}

pub async fn health() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "ok")
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers.get(name).and_then(|h| h.to_str().ok()).map(str::to_string)
}
