use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub bot_url: String,
    pub bot_name: String,
    pub bot_alias: String,
    pub default_user_id: String,
    pub places_url: String,
    pub places_api_key: String,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_phone_number: String,
    pub dialog_webhook_secret: String,
    pub worker_poll_secs: u64,
    pub worker_batch_size: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "dineout.db".to_string()),
            bot_url: env::var("BOT_URL").unwrap_or_else(|_| "http://localhost:8080".to_string()),
            bot_name: env::var("BOT_NAME").unwrap_or_else(|_| "DineOutBot".to_string()),
            bot_alias: env::var("BOT_ALIAS").unwrap_or_else(|_| "prod".to_string()),
            default_user_id: env::var("DEFAULT_USER_ID")
                .unwrap_or_else(|_| "anonymous".to_string()),
            places_url: env::var("PLACES_URL").unwrap_or_else(|_| {
                "https://maps.googleapis.com/maps/api/place/textsearch/json".to_string()
            }),
            places_api_key: env::var("PLACES_API_KEY").unwrap_or_default(),
            twilio_account_sid: env::var("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            twilio_auth_token: env::var("TWILIO_AUTH_TOKEN").unwrap_or_default(),
            twilio_phone_number: env::var("TWILIO_PHONE_NUMBER").unwrap_or_default(),
            dialog_webhook_secret: env::var("DIALOG_WEBHOOK_SECRET").unwrap_or_default(),
            worker_poll_secs: env::var("WORKER_POLL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            worker_batch_size: env::var("WORKER_BATCH_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}
