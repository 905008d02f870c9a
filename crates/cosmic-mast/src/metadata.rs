//! Label/value panel for one observation

use cosmic_core::Observation;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered label/value pairs; missing fields are omitted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    entries: Vec<(&'static str, String)>,
}

impl Metadata {
    fn push(&mut self, label: &'static str, value: Option<&str>) {
        if let Some(value) = value {
            self.entries.push((label, value.to_string()));
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(l, _)| *l).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(l, v)| (*l, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// Target, Instrument, Filters, Released, Proposal ID, Observation ID
pub fn format_metadata(obs: &Observation) -> Metadata {
    let mut metadata = Metadata::default();
    metadata.push("Target", obs.target_name.as_deref());
    metadata.push("Instrument", obs.instrument_name.as_deref());
    metadata.push("Filters", obs.filters.as_deref());
    let released: Option<String> = obs
        .t_obs_release
        .as_deref()
        .map(|raw| raw.chars().take(10).collect());
    metadata.push("Released", released.as_deref());
    metadata.push("Proposal ID", obs.proposal_id.as_deref());
    metadata.push(
        "Observation ID",
        Some(obs.obs_id.as_str()).filter(|id| !id.is_empty()),
    );
    metadata
}
