use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;

use super::{Place, PlaceSearchProvider};

pub struct GooglePlacesProvider {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    #[serde(default)]
    results: Vec<Place>,
}

impl GooglePlacesProvider {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url,
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PlaceSearchProvider for GooglePlacesProvider {
    async fn search(&self, cuisine: &str, location: &str) -> anyhow::Result<Vec<Place>> {
        let query = format!("{cuisine} restaurants in {location}");

        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("query", query.as_str()), ("key", self.api_key.as_str())])
            .send()
            .await
            .context("failed to call place search API")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("place search API error ({status}): {body}");
        }

        let data: TextSearchResponse = resp
            .json()
            .await
            .context("failed to parse place search response")?;

        Ok(data.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_search_response() {
        let json = r#"{
            "results": [
                {"name": "Han Dynasty", "formatted_address": "90 3rd Ave, New York, NY 10003", "rating": 4.3},
                {"name": "Wo Hop", "formatted_address": "17 Mott St, New York, NY 10013", "rating": 4.5}
            ],
            "status": "OK"
        }"#;
        let parsed: TextSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.results[0].name, "Han Dynasty");
        assert!((parsed.results[1].rating - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_response_without_rating() {
        let json = r#"{"results": [{"name": "Sombrero", "formatted_address": "1 Main St, Austin, TX"}]}"#;
        let parsed: TextSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.results[0].rating, 0.0);
    }

    #[test]
    fn test_parse_empty_results() {
        let json = r#"{"status": "ZERO_RESULTS"}"#;
        let parsed: TextSearchResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.results.is_empty());
    }
}
