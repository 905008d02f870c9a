//! Shared domain types, errors and configuration for the cosmic-canvas dashboard

mod comparison;
mod config;
mod error;
mod types;

pub use comparison::{comparison_pairs, find_comparison, ComparisonPair};
pub use config::{config_path, Config};
pub use error::{CanvasError, Result};
pub use types::{Observation, ObservationId, Product, Telescope};
