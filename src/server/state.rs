//! Application state shared across all request handlers.
//!
//! `AppState` holds the resources every handler needs. It is initialized once
//! during startup and cloned per request through Axum's state extraction;
//! all fields are cheap to clone (connection pools, `Arc`-backed clients).

use sea_orm::DatabaseConnection;

use crate::server::service::{
    billing::toss::TossClient, counseling::llm::LlmClient, mirror::MirrorService,
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Client for the OpenAI-compatible chat completions API.
    pub llm: LlmClient,

    /// Client for the Toss Payments confirm API.
    pub toss: TossClient,

    /// Best-effort Firestore dual-write service. May be disabled when the
    /// deployment carries no Firestore configuration.
    pub mirror: MirrorService,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        llm: LlmClient,
        toss: TossClient,
        mirror: MirrorService,
    ) -> Self {
        Self {
            db,
            llm,
            toss,
            mirror,
        }
    }
}
