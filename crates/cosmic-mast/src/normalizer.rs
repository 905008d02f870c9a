//! Raw archive rows to ordered, truncated Observation records

use crate::archive::{cell_text, cell_u64, ArchiveClient, Criteria, Row};
use chrono::{NaiveDate, TimeDelta};
use cosmic_core::{CanvasError, Observation, Result, Telescope};
use serde_json::Value;
use std::cmp::Ordering;

/// Arguments of one gallery query; doubles as the cache key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObservationQuery {
    pub telescope: Telescope,
    pub limit: usize,
    pub object_filter: Option<String>,
}

impl ObservationQuery {
    /// Blank filters are dropped; a zero limit is rejected
    pub fn new(telescope: Telescope, limit: usize, object_filter: Option<&str>) -> Result<Self> {
        if limit == 0 {
            return Err(CanvasError::InvalidInput(
                "result limit must be a positive integer".to_string(),
            ));
        }
        let object_filter = object_filter
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(String::from);
        Ok(Self {
            telescope,
            limit,
            object_filter,
        })
    }

    pub fn criteria(&self) -> Criteria {
        let criteria = Criteria::images(self.telescope.collection());
        match &self.object_filter {
            Some(name) => criteria.with_target(name),
            None => criteria,
        }
    }
}

/// Query the archive for image observations and normalize the result.
///
/// Any archive failure becomes a single retrieval error naming the telescope.
pub fn fetch_observations<C: ArchiveClient + ?Sized>(
    client: &C,
    query: &ObservationQuery,
) -> Result<Vec<Observation>> {
    let criteria = query.criteria();
    tracing::debug!(
        collection = %criteria.collection,
        target = ?criteria.target_name,
        limit = query.limit,
        "querying archive"
    );

    let rows = client.query_criteria(&criteria).map_err(|e| {
        CanvasError::retrieval(
            format!("Failed to query MAST for {} observations", query.telescope),
            e,
        )
    })?;

    let total = rows.len();
    let observations = normalize(rows, query.limit);
    tracing::info!(
        telescope = %query.telescope,
        rows = total,
        returned = observations.len(),
        "archive query complete"
    );
    Ok(observations)
}

/// Project, sort newest release first (missing releases last) and truncate.
///
/// Rows without an `obs_id` are not observations and are skipped.
pub fn normalize(rows: Vec<Row>, limit: usize) -> Vec<Observation> {
    let mut observations: Vec<Observation> = rows.iter().filter_map(project).collect();
    observations.sort_by(|a, b| newest_first(a.t_obs_release.as_deref(), b.t_obs_release.as_deref()));
    observations.truncate(limit);
    observations
}

fn project(row: &Row) -> Option<Observation> {
    let obs_id = cell_text(row, "obs_id").filter(|id| !id.is_empty())?;
    Some(Observation {
        target_name: cell_text(row, "target_name"),
        obs_id,
        obsid: cell_u64(row, "obsid"),
        instrument_name: cell_text(row, "instrument_name"),
        filters: cell_text(row, "filters"),
        t_obs_release: release_text(row),
        proposal_id: cell_text(row, "proposal_id"),
        dataproduct_type: cell_text(row, "dataproduct_type"),
        obs_collection: cell_text(row, "obs_collection"),
        jpeg_url: cell_text(row, "jpegURL"),
    })
}

/// Release stamp as text. Numeric stamps are Modified Julian Dates.
fn release_text(row: &Row) -> Option<String> {
    match row.get("t_obs_release")? {
        Value::Number(n) => n
            .as_f64()
            .and_then(mjd_to_iso)
            .or_else(|| Some(n.to_string())),
        _ => cell_text(row, "t_obs_release"),
    }
}

fn mjd_to_iso(mjd: f64) -> Option<String> {
    if !mjd.is_finite() {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1858, 11, 17)?.and_hms_opt(0, 0, 0)?;
    let offset = TimeDelta::try_milliseconds((mjd * 86_400_000.0).round() as i64)?;
    let stamp = epoch.checked_add_signed(offset)?;
    Some(stamp.format("%Y-%m-%dT%H:%M:%S").to_string())
}

fn newest_first(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
