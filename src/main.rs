use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use dineout::config::AppConfig;
use dineout::db;
use dineout::handlers;
use dineout::services::bot::lex::LexRuntimeProvider;
use dineout::services::fulfillment;
use dineout::services::messaging::twilio::TwilioSmsProvider;
use dineout::services::queue::SqliteWorkQueue;
use dineout::services::search::google::GooglePlacesProvider;
use dineout::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;
    let db = Arc::new(Mutex::new(conn));

    let bot = LexRuntimeProvider::new(
        config.bot_url.clone(),
        config.bot_name.clone(),
        config.bot_alias.clone(),
    );
    let search = GooglePlacesProvider::new(config.places_url.clone(), config.places_api_key.clone());
    let messaging = TwilioSmsProvider::new(
        config.twilio_account_sid.clone(),
        config.twilio_auth_token.clone(),
        config.twilio_phone_number.clone(),
    );
    let queue = SqliteWorkQueue::new(Arc::clone(&db));

    let state = Arc::new(AppState {
        db,
        config: config.clone(),
        bot: Box::new(bot),
        search: Box::new(search),
        messaging: Box::new(messaging),
        queue: Box::new(queue),
    });

    tokio::spawn(fulfillment::run_worker_loop(Arc::clone(&state)));

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/chat", post(handlers::chat::chat))
        .route("/dialog", post(handlers::dialog::dialog_webhook))
        .route("/api/suggestions", get(handlers::admin::get_suggestions))
        .route("/api/queue/status", get(handlers::admin::queue_status))
        .route("/api/worker/run", post(handlers::admin::run_worker))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
