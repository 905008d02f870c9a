//! MAST invoke API client (blocking)

use crate::archive::{ArchiveClient, ArchiveError, Criteria, Row};
use cosmic_core::{Config, ObservationId};
use serde::Deserialize;
use serde_json::{json, Value};

const FILTERED_SERVICE: &str = "Mast.Caom.Filtered";
const PRODUCTS_SERVICE: &str = "Mast.Caom.Products";

/// Columns requested from criteria queries; everything the normalizer projects
const OBSERVATION_COLUMNS: &str = "target_name,obs_id,obsid,instrument_name,filters,t_obs_release,proposal_id,dataproduct_type,obs_collection,jpegURL";

#[derive(Debug, Deserialize)]
struct InvokeResponse {
    status: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    data: Option<Vec<Row>>,
    #[serde(default)]
    paging: Option<Paging>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Paging {
    #[serde(default)]
    pages_filtered: Option<usize>,
}

pub struct MastClient {
    http: reqwest::blocking::Client,
    invoke_url: String,
    page_size: usize,
    max_pages: usize,
}

impl MastClient {
    pub fn new(config: &Config) -> Result<Self, ArchiveError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("cosmic-canvas/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(config, http))
    }

    /// Use a preconfigured HTTP client (the caller owns its timeout)
    pub fn with_client(config: &Config, http: reqwest::blocking::Client) -> Self {
        Self {
            http,
            invoke_url: config.mast_invoke_url.clone(),
            page_size: config.archive_page_size,
            max_pages: config.archive_max_pages,
        }
    }

    fn invoke(&self, request: &Value) -> Result<InvokeResponse, ArchiveError> {
        let body = request.to_string();
        let response = self
            .http
            .post(&self.invoke_url)
            .form(&[("request", body.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArchiveError::Status(status.as_u16()));
        }

        let parsed: InvokeResponse = response
            .json()
            .map_err(|e| ArchiveError::Malformed(e.to_string()))?;

        match parsed.status.as_deref() {
            Some("COMPLETE") => Ok(parsed),
            Some(other) => Err(ArchiveError::Backend(format!(
                "service status {}: {}",
                other,
                parsed.msg.as_deref().unwrap_or("no message")
            ))),
            None => Err(ArchiveError::Malformed("missing status field".to_string())),
        }
    }
}

/// MAST free-text filters use SQL wildcards
fn free_text(pattern: &str) -> String {
    pattern.replace('*', "%")
}

fn criteria_filters(criteria: &Criteria) -> Vec<Value> {
    let mut filters = vec![
        json!({"paramName": "obs_collection", "values": [criteria.collection]}),
        json!({"paramName": "dataproduct_type", "values": [criteria.dataproduct_type]}),
    ];
    if let Some(target) = &criteria.target_name {
        filters.push(json!({
            "paramName": "target_name",
            "values": [],
            "freeText": free_text(target),
        }));
    }
    filters
}

fn filtered_request(filters: &[Value], page_size: usize, page: usize) -> Value {
    json!({
        "service": FILTERED_SERVICE,
        "format": "json",
        "params": {"columns": OBSERVATION_COLUMNS, "filters": filters},
        "pagesize": page_size,
        "page": page,
    })
}

impl ArchiveClient for MastClient {
    fn query_criteria(&self, criteria: &Criteria) -> Result<Vec<Row>, ArchiveError> {
        let filters = criteria_filters(criteria);
        let mut rows = Vec::new();
        let mut page = 1;

        loop {
            let request = filtered_request(&filters, self.page_size, page);
            let response = self.invoke(&request)?;
            let data = response
                .data
                .ok_or_else(|| ArchiveError::Malformed("missing data field".to_string()))?;
            rows.extend(data);

            let pages = response
                .paging
                .and_then(|p| p.pages_filtered)
                .unwrap_or(1);
            if page >= pages || page >= self.max_pages {
                if page < pages {
                    tracing::debug!(pages, fetched = page, "archive result truncated at page cap");
                }
                break;
            }
            page += 1;
        }

        Ok(rows)
    }

    fn product_list(&self, id: &ObservationId) -> Result<Vec<Row>, ArchiveError> {
        let request = json!({
            "service": PRODUCTS_SERVICE,
            "format": "json",
            "params": {"obsid": id.to_string()},
            "pagesize": self.page_size,
            "page": 1,
        });
        self.invoke(&request)?
            .data
            .ok_or_else(|| ArchiveError::Malformed("missing data field".to_string()))
    }
}
