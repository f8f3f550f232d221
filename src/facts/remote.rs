//! Remote fact lookup client.
//!
//! Each category has its own endpoint and response shape. A lookup is a
//! single bounded-timeout GET with no retries; every failure mode is
//! surfaced as an error for the provider to absorb into the fallback path.

use super::Animal;
use crate::config::FactsSettings;
use crate::error::{FaktumError, Result};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for the category-specific remote fact APIs.
pub struct RemoteFactSource {
    client: reqwest::Client,
    cat_url: String,
    dog_url: String,
}

impl RemoteFactSource {
    /// Create a new remote source from facts settings.
    pub fn new(settings: &FactsSettings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            cat_url: settings.cat_api_url.clone(),
            dog_url: settings.dog_api_url.clone(),
        }
    }

    /// Fetch a fact for the given animal from its remote API.
    #[instrument(skip(self))]
    pub async fn fetch(&self, animal: Animal) -> Result<String> {
        let url = match animal {
            Animal::Cat => &self.cat_url,
            Animal::Dog => &self.dog_url,
        };

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FaktumError::FactLookup(format!(
                "{} API returned {}",
                animal, status
            )));
        }

        let payload: Value = response.json().await?;
        debug!("Remote {} fact payload received", animal);

        let text = match animal {
            // Cat API returns a single object with a `text` (or `fact`) field.
            Animal::Cat => payload
                .get("text")
                .or_else(|| payload.get("fact"))
                .and_then(Value::as_str)
                .map(str::to_string),
            // Dog API returns a sequence whose first element has a `fact` field.
            Animal::Dog => payload
                .get(0)
                .and_then(|item| item.get("fact"))
                .or_else(|| payload.get("fact"))
                .and_then(Value::as_str)
                .map(str::to_string),
        };

        text.filter(|t| !t.trim().is_empty()).ok_or_else(|| {
            FaktumError::FactLookup(format!("{} API response contained no fact text", animal))
        })
    }
}
