//! Daily-picture record and date helpers

use chrono::{Local, NaiveDate};
use cosmic_core::{CanvasError, Result};
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Response as sent by the service; every field may be missing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawApod {
    pub title: Option<String>,
    pub explanation: Option<String>,
    pub url: Option<String>,
    pub hdurl: Option<String>,
    pub media_type: Option<String>,
    pub copyright: Option<String>,
    pub date: Option<String>,
}

/// Daily picture with defaults filled in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apod {
    pub title: String,
    pub explanation: String,
    pub url: String,
    pub hdurl: String,
    pub media_type: String,
    pub copyright: String,
    pub date: String,
}

impl Apod {
    pub fn is_image(&self) -> bool {
        self.media_type == "image"
    }
}

impl From<RawApod> for Apod {
    fn from(raw: RawApod) -> Self {
        let url = raw.url.unwrap_or_default();
        Self {
            title: raw.title.unwrap_or_else(|| "Unknown".to_string()),
            explanation: raw
                .explanation
                .unwrap_or_else(|| "No description available.".to_string()),
            hdurl: raw.hdurl.unwrap_or_else(|| url.clone()),
            url,
            media_type: raw.media_type.unwrap_or_else(|| "image".to_string()),
            copyright: raw
                .copyright
                .map(|c| c.trim().to_string())
                .unwrap_or_else(|| "Public Domain".to_string()),
            date: raw
                .date
                .unwrap_or_else(|| Local::now().format(DATE_FORMAT).to_string()),
        }
    }
}

/// `YYYY-MM-DD` only
pub fn validate_date(date: &str) -> bool {
    parse_date(date).is_ok()
}

pub fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|e| {
        CanvasError::InvalidInput(format!("date '{}' is not YYYY-MM-DD: {}", date, e))
    })
}
