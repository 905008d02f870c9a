//! Two-tier preview URL resolution: inline field first, product listing second

use crate::products::ProductLookup;
use cosmic_core::{Observation, ObservationId};

/// Slow-path collaborator: displayable products for one observation
pub trait ProductSource {
    fn preview_products(&self, id: &ObservationId) -> ProductLookup;
}

/// Bare archive URIs are wrapped in the download endpoint; URLs pass through.
pub fn to_download_url(uri: &str, download_url: &str) -> String {
    let lower = uri.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        uri.to_string()
    } else {
        format!("{}?uri={}", download_url, uri)
    }
}

/// Resolved preview plus any product-lookup warning met on the way
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewResolution {
    pub url: Option<String>,
    pub warning: Option<String>,
}

pub struct PreviewUrlResolver<'a, S: ProductSource + ?Sized> {
    source: &'a S,
    download_url: &'a str,
}

impl<'a, S: ProductSource + ?Sized> PreviewUrlResolver<'a, S> {
    pub fn new(source: &'a S, download_url: &'a str) -> Self {
        Self {
            source,
            download_url,
        }
    }

    /// Best-effort preview URL. `None` means no preview, not an error.
    pub fn resolve(&self, observation: &Observation) -> Option<String> {
        self.resolve_with_warning(observation).url
    }

    /// Like `resolve`, but keeps the warning from a failed product lookup.
    pub fn resolve_with_warning(&self, observation: &Observation) -> PreviewResolution {
        match self.inline(observation) {
            Some(url) => PreviewResolution {
                url: Some(url),
                warning: None,
            },
            None => self.from_products(observation),
        }
    }

    fn inline(&self, observation: &Observation) -> Option<String> {
        observation
            .inline_preview()
            .map(|uri| to_download_url(uri, self.download_url))
    }

    fn from_products(&self, observation: &Observation) -> PreviewResolution {
        let id = observation.lookup_id();
        let lookup = self.source.preview_products(&id);
        let url = lookup
            .products
            .iter()
            .filter(|p| p.has_image_extension())
            .find_map(|p| p.data_uri.as_deref())
            .map(|uri| to_download_url(uri, self.download_url));
        if url.is_none() {
            tracing::debug!(obs_id = %id, "no preview available");
        }
        PreviewResolution {
            url,
            warning: lookup.warning,
        }
    }
}
