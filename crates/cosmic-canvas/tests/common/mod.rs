use cosmic_core::ObservationId;
use cosmic_mast::{ArchiveClient, ArchiveError, Criteria, Row};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory archive that counts and records every call
#[derive(Default)]
pub struct FakeArchive {
    pub rows: Vec<Row>,
    pub products: HashMap<String, Vec<Row>>,
    pub fail_queries: AtomicBool,
    pub fail_products: AtomicBool,
    pub query_calls: AtomicUsize,
    pub product_calls: AtomicUsize,
    pub seen_criteria: Mutex<Vec<Criteria>>,
    pub seen_ids: Mutex<Vec<ObservationId>>,
}

impl FakeArchive {
    pub fn with_rows(rows: Vec<serde_json::Value>) -> Self {
        Self {
            rows: rows.into_iter().map(to_row).collect(),
            ..Default::default()
        }
    }

    pub fn with_products(mut self, id: &str, rows: Vec<serde_json::Value>) -> Self {
        self.products
            .insert(id.to_string(), rows.into_iter().map(to_row).collect());
        self
    }

    pub fn query_calls(&self) -> usize {
        self.query_calls.load(Ordering::SeqCst)
    }

    pub fn product_calls(&self) -> usize {
        self.product_calls.load(Ordering::SeqCst)
    }
}

impl ArchiveClient for FakeArchive {
    fn query_criteria(&self, criteria: &Criteria) -> Result<Vec<Row>, ArchiveError> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_criteria.lock().unwrap().push(criteria.clone());
        if self.fail_queries.load(Ordering::SeqCst) {
            return Err(ArchiveError::Backend("service unavailable".to_string()));
        }
        Ok(self.rows.clone())
    }

    fn product_list(&self, id: &ObservationId) -> Result<Vec<Row>, ArchiveError> {
        self.product_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_ids.lock().unwrap().push(id.clone());
        if self.fail_products.load(Ordering::SeqCst) {
            return Err(ArchiveError::Backend("Conversion failed".to_string()));
        }
        Ok(self.products.get(&id.to_string()).cloned().unwrap_or_default())
    }
}

pub fn to_row(value: serde_json::Value) -> Row {
    value.as_object().cloned().unwrap_or_default()
}

pub const DOWNLOAD: &str = "https://mast.stsci.edu/api/v0.1/Download/file";
