//! Observation retrieval and preview resolution against the MAST archive

mod archive;
mod gallery;
mod mast;
mod metadata;
mod normalizer;
mod preview;
mod products;

pub use archive::{cell_text, cell_u64, ArchiveClient, ArchiveError, Criteria, Row};
pub use gallery::{Gallery, GalleryItem};
pub use mast::MastClient;
pub use metadata::{format_metadata, Metadata};
pub use normalizer::{fetch_observations, normalize, ObservationQuery};
pub use preview::{to_download_url, PreviewResolution, PreviewUrlResolver, ProductSource};
pub use products::{fetch_preview_products, list_products, product_from_row, ProductLookup};
