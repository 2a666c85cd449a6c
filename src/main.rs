mod model;
mod server;

use server::{
    config::Config,
    error::AppError,
    router,
    scheduler::subscription_expiry,
    service::{billing::toss::TossClient, counseling::llm::LlmClient, mirror::MirrorService},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "maumlog=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session_layer = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client();

    let llm = LlmClient::new(
        http_client.clone(),
        config.llm_base_url.clone(),
        config.llm_api_key.clone(),
        config.llm_model.clone(),
    );
    let toss = TossClient::new(
        http_client.clone(),
        config.toss_api_base.clone(),
        config.toss_secret_key.clone(),
    );
    let mirror = MirrorService::from_config(http_client, &config);

    // First deployment has no way into the back office without this.
    startup::ensure_bootstrap_admin(&db, &config).await?;

    // Start the subscription expiry sweep in a separate task.
    let scheduler_db = db.clone();
    let scheduler_mirror = mirror.clone();
    tokio::spawn(async move {
        if let Err(e) = subscription_expiry::start_scheduler(scheduler_db, scheduler_mirror).await {
            tracing::error!("Subscription expiry scheduler error: {}", e);
        }
    });

    let app = router::router()
        .with_state(AppState::new(db, llm, toss, mirror))
        .layer(session_layer)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::cors::CorsLayer::permissive());

    tracing::info!("Starting server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
