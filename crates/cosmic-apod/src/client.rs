//! Blocking HTTP client with status classification and response caching

use crate::types::{Apod, RawApod};
use chrono::NaiveDate;
use cosmic_cache::ResponseCache;
use cosmic_core::{CanvasError, Config, Result};
use reqwest::StatusCode;

const CONTEXT: &str = "Failed to fetch APOD";

/// Map a non-success status to the error the UI should show
pub fn classify_status(status: StatusCode) -> CanvasError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => CanvasError::RateLimited,
        StatusCode::FORBIDDEN => CanvasError::Auth,
        other => CanvasError::retrieval("NASA APOD API error", other),
    }
}

fn transport_error(err: reqwest::Error) -> CanvasError {
    if err.is_timeout() {
        CanvasError::retrieval(CONTEXT, "NASA APOD API request timed out. Please try again.")
    } else {
        CanvasError::retrieval(CONTEXT, err)
    }
}

pub struct ApodClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    cache: ResponseCache<(String, Option<NaiveDate>), Apod>,
}

impl ApodClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| CanvasError::retrieval("Failed to create HTTP client", e))?;
        Ok(Self::with_client(config, http))
    }

    pub fn with_client(config: &Config, http: reqwest::blocking::Client) -> Self {
        Self {
            http,
            base_url: config.apod_url.clone(),
            api_key: config.nasa_api_key.clone(),
            cache: ResponseCache::new(config.cache_ttl()),
        }
    }

    /// Picture for `date`, or today's when `None`. Cached per key and date.
    pub fn fetch(&self, date: Option<NaiveDate>) -> Result<Apod> {
        self.cache
            .get_or_try_insert_with((self.api_key.clone(), date), || self.request(date))
    }

    fn request(&self, date: Option<NaiveDate>) -> Result<Apod> {
        let mut params = vec![("api_key", self.api_key.clone())];
        if let Some(date) = date {
            params.push(("date", date.format("%Y-%m-%d").to_string()));
        }

        tracing::debug!(url = %self.base_url, ?date, "fetching daily picture");
        let response = self
            .http
            .get(&self.base_url)
            .query(&params)
            .send()
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "daily picture request rejected");
            return Err(classify_status(status));
        }

        let raw: RawApod = response.json().map_err(|e| {
            CanvasError::retrieval("Invalid JSON response from NASA APOD API", e)
        })?;
        Ok(Apod::from(raw))
    }
}
