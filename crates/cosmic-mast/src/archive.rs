//! Archive query seam and raw tabular rows

use cosmic_core::ObservationId;
use serde_json::Value;
use thiserror::Error;

/// One raw result row, column name to cell value
pub type Row = serde_json::Map<String, Value>;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("archive returned HTTP {0}")]
    Status(u16),

    #[error("archive query failed: {0}")]
    Backend(String),

    #[error("malformed archive response: {0}")]
    Malformed(String),
}

/// Criteria set for an observation query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    pub collection: String,
    pub dataproduct_type: String,
    /// Wildcard pattern, e.g. `*Carina*`
    pub target_name: Option<String>,
}

impl Criteria {
    pub fn images(collection: &str) -> Self {
        Self {
            collection: collection.to_string(),
            dataproduct_type: "image".to_string(),
            target_name: None,
        }
    }

    pub fn with_target(mut self, name: &str) -> Self {
        self.target_name = Some(format!("*{}*", name));
        self
    }
}

/// External observation archive.
///
/// Implementations return rows as received; normalization happens downstream.
pub trait ArchiveClient: Send + Sync {
    fn query_criteria(&self, criteria: &Criteria) -> Result<Vec<Row>, ArchiveError>;

    fn product_list(&self, id: &ObservationId) -> Result<Vec<Row>, ArchiveError>;
}

impl<T: ArchiveClient + ?Sized> ArchiveClient for std::sync::Arc<T> {
    fn query_criteria(&self, criteria: &Criteria) -> Result<Vec<Row>, ArchiveError> {
        (**self).query_criteria(criteria)
    }

    fn product_list(&self, id: &ObservationId) -> Result<Vec<Row>, ArchiveError> {
        (**self).product_list(id)
    }
}

/// Cell as display text; null and missing cells are absent
pub fn cell_text(row: &Row, column: &str) -> Option<String> {
    match row.get(column)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Cell as a non-negative integer, accepting integral floats and digit strings
pub fn cell_u64(row: &Row, column: &str) -> Option<u64> {
    match row.get(column)? {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
