use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::config::AppConfig;
use crate::services::bot::BotProvider;
use crate::services::messaging::MessagingProvider;
use crate::services::queue::WorkQueue;
use crate::services::search::PlaceSearchProvider;

pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
    pub config: AppConfig,
    pub bot: Box<dyn BotProvider>,
    pub search: Box<dyn PlaceSearchProvider>,
    pub messaging: Box<dyn MessagingProvider>,
    pub queue: Box<dyn WorkQueue>,
}
