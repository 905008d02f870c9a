//! Observation and product records

use crate::error::CanvasError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two supported archive collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Telescope {
    #[serde(rename = "JWST")]
    Jwst,
    #[serde(rename = "HST")]
    Hst,
}

impl Telescope {
    pub fn all() -> [Telescope; 2] {
        [Telescope::Jwst, Telescope::Hst]
    }

    /// Collection name as used by the archive (`obs_collection`)
    pub fn collection(&self) -> &'static str {
        match self {
            Telescope::Jwst => "JWST",
            Telescope::Hst => "HST",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Telescope::Jwst => "James Webb Space Telescope",
            Telescope::Hst => "Hubble Space Telescope",
        }
    }
}

impl fmt::Display for Telescope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

impl FromStr for Telescope {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "JWST" => Ok(Telescope::Jwst),
            "HST" | "HUBBLE" => Ok(Telescope::Hst),
            other => Err(CanvasError::InvalidInput(format!(
                "unsupported telescope '{}' (expected JWST or HST)",
                other
            ))),
        }
    }
}

/// Identifier passed to the product listing.
///
/// The numeric `obsid` is preferred; the string `obs_id` is the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObservationId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for ObservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObservationId::Numeric(id) => write!(f, "{}", id),
            ObservationId::Text(id) => f.write_str(id),
        }
    }
}

/// One archived imaging product, projected to the fixed field set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub target_name: Option<String>,
    pub obs_id: String,
    pub obsid: Option<u64>,
    pub instrument_name: Option<String>,
    pub filters: Option<String>,
    pub t_obs_release: Option<String>,
    pub proposal_id: Option<String>,
    pub dataproduct_type: Option<String>,
    pub obs_collection: Option<String>,
    pub jpeg_url: Option<String>,
}

impl Observation {
    pub const UNKNOWN_TARGET: &'static str = "Unknown Target";

    pub fn display_target(&self) -> &str {
        self.target_name.as_deref().unwrap_or(Self::UNKNOWN_TARGET)
    }

    /// Identifier for product lookups: numeric `obsid` whenever present
    pub fn lookup_id(&self) -> ObservationId {
        match self.obsid {
            Some(id) => ObservationId::Numeric(id),
            None => ObservationId::Text(self.obs_id.clone()),
        }
    }

    /// Fast-path preview field, if non-empty
    pub fn inline_preview(&self) -> Option<&str> {
        self.jpeg_url
            .as_deref()
            .map(str::trim)
            .filter(|uri| !uri.is_empty())
    }
}

/// A data asset attached to one observation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_type: Option<String>,
    pub data_uri: Option<String>,
}

impl Product {
    pub const PREVIEW_TYPE: &'static str = "PREVIEW";
    const IMAGE_EXTENSIONS: [&'static str; 3] = [".jpg", ".jpeg", ".png"];

    pub fn is_preview_type(&self) -> bool {
        self.product_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case(Self::PREVIEW_TYPE))
    }

    pub fn has_image_extension(&self) -> bool {
        self.data_uri.as_deref().is_some_and(has_image_extension)
    }

    /// Relevant to preview resolution
    pub fn is_displayable(&self) -> bool {
        self.is_preview_type() || self.has_image_extension()
    }
}

/// Case-insensitive check for a jpg/jpeg/png extension anywhere in the URI
pub(crate) fn has_image_extension(uri: &str) -> bool {
    let lower = uri.to_ascii_lowercase();
    Product::IMAGE_EXTENSIONS
        .iter()
        .any(|ext| lower.contains(ext))
}
