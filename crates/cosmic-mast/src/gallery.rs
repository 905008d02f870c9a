//! Cached observation gallery: normalizer, product resolver and preview resolver together

use crate::archive::ArchiveClient;
use crate::metadata::{format_metadata, Metadata};
use crate::normalizer::{fetch_observations, ObservationQuery};
use crate::preview::{PreviewResolution, PreviewUrlResolver, ProductSource};
use crate::products::{fetch_preview_products, ProductLookup};
use cosmic_cache::ResponseCache;
use cosmic_core::{Config, Observation, ObservationId, Product, Result, Telescope};
use serde::Serialize;
use std::time::Duration;

/// One rendered gallery tile
#[derive(Debug, Clone, Serialize)]
pub struct GalleryItem {
    pub observation: Observation,
    pub preview_url: Option<String>,
    /// Set when the product lookup for this tile failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub metadata: Metadata,
}

pub struct Gallery<C> {
    client: C,
    download_url: String,
    observations: ResponseCache<ObservationQuery, Vec<Observation>>,
    products: ResponseCache<ObservationId, Vec<Product>>,
}

impl<C: ArchiveClient> Gallery<C> {
    pub fn new(client: C, config: &Config) -> Self {
        Self::with_ttl(client, &config.mast_download_url, config.cache_ttl())
    }

    pub fn with_ttl(client: C, download_url: &str, ttl: Duration) -> Self {
        Self {
            client,
            download_url: download_url.to_string(),
            observations: ResponseCache::new(ttl),
            products: ResponseCache::new(ttl),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Newest observations for `telescope`, at most `limit`, cached per argument set
    pub fn observations(
        &self,
        telescope: Telescope,
        limit: usize,
        object_filter: Option<&str>,
    ) -> Result<Vec<Observation>> {
        let query = ObservationQuery::new(telescope, limit, object_filter)?;
        self.observations
            .get_or_try_insert_with(query.clone(), || fetch_observations(&self.client, &query))
    }

    /// Displayable products for `id`; failures are absorbed into a warning and not cached
    pub fn products(&self, id: &ObservationId) -> ProductLookup {
        let result = self
            .products
            .get_or_try_insert_with(id.clone(), || fetch_preview_products(&self.client, id));
        match result {
            Ok(products) => ProductLookup::found(products),
            Err(e) => ProductLookup::failed(id, &e),
        }
    }

    pub fn preview_url(&self, observation: &Observation) -> Option<String> {
        PreviewUrlResolver::new(self, &self.download_url).resolve(observation)
    }

    pub fn preview(&self, observation: &Observation) -> PreviewResolution {
        PreviewUrlResolver::new(self, &self.download_url).resolve_with_warning(observation)
    }

    /// Observations with their previews and metadata. Only the query itself can fail.
    pub fn items(
        &self,
        telescope: Telescope,
        limit: usize,
        object_filter: Option<&str>,
    ) -> Result<Vec<GalleryItem>> {
        let observations = self.observations(telescope, limit, object_filter)?;
        Ok(observations
            .into_iter()
            .map(|observation| {
                let preview = self.preview(&observation);
                GalleryItem {
                    preview_url: preview.url,
                    warning: preview.warning,
                    metadata: format_metadata(&observation),
                    observation,
                }
            })
            .collect())
    }
}

impl<C: ArchiveClient> ProductSource for Gallery<C> {
    fn preview_products(&self, id: &ObservationId) -> ProductLookup {
        self.products(id)
    }
}
