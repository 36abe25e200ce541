pub mod config;
pub mod domain {
    pub mod event;
    pub mod transaction;
}
pub mod http {
    pub mod error;
    pub mod handlers {
        pub mod ops;
        pub mod webhooks;
    }
}
pub mod notify;
pub mod provider;
pub mod service {
    pub mod ingest;
}
pub mod store;
pub mod webhook {
    pub mod parser;
    pub mod signature;
}

#[derive(Clone)]
pub struct AppState {
    pub ingest: service::ingest::IngestService,
}
