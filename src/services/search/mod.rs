pub mod google;

use async_trait::async_trait;
use serde::Deserialize;

/// One business returned by the place-search API.
#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    pub name: String,
    pub formatted_address: String,
    #[serde(default)]
    pub rating: f64,
}

#[async_trait]
pub trait PlaceSearchProvider: Send + Sync {
    /// Search for businesses matching a cuisine in a location, best matches
    /// first.
    async fn search(&self, cuisine: &str, location: &str) -> anyhow::Result<Vec<Place>>;
}
