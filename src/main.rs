use axum::routing::{get, post};
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use webhook_ingest::config::AppConfig;
use webhook_ingest::notify::log::LogNotifier;
use webhook_ingest::notify::smtp::SmtpNotifier;
use webhook_ingest::notify::Notifier;
use webhook_ingest::provider::flutterwave::FlutterwaveClient;
use webhook_ingest::provider::ProviderClient;
use webhook_ingest::service::ingest::IngestService;
use webhook_ingest::store::postgres::PgTransactionStore;
use webhook_ingest::store::TransactionStore;
use webhook_ingest::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();
    if cfg.webhook_secret.is_empty() {
        tracing::error!("FLW_SECRET_HASH is not set, every webhook will be rejected");
    }

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&cfg.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let store: Arc<dyn TransactionStore> = Arc::new(PgTransactionStore { pool });

    let notifier: Arc<dyn Notifier> = match &cfg.smtp {
        Some(smtp) => Arc::new(SmtpNotifier::from_config(smtp)?),
        None => {
            tracing::info!("SMTP_HOST not set, confirmation emails are logged only");
            Arc::new(LogNotifier)
        }
    };

    let provider: Option<Arc<dyn ProviderClient>> = if cfg.verify_with_provider {
        Some(Arc::new(FlutterwaveClient {
            base_url: cfg.provider_base_url.clone(),
            secret_key: cfg.provider_secret_key.clone(),
            timeout_ms: cfg.provider_timeout_ms,
            client: reqwest::Client::new(),
        }))
    } else {
        None
    };

    let ingest = IngestService {
        webhook_secret: cfg.webhook_secret.clone(),
        store,
        notifier,
        provider,
    };

    let state = AppState { ingest };

    let app = Router::new()
        .route("/health", get(webhook_ingest::http::handlers::webhooks::health))
        .route(
            "/api/webhook",
            post(webhook_ingest::http::handlers::webhooks::receive_webhook),
        )
        .route("/ops/readiness", get(webhook_ingest::http::handlers::ops::readiness))
        .route("/ops/liveness", get(webhook_ingest::http::handlers::ops::liveness))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
