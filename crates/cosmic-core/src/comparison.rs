//! Hand-curated objects imaged by both telescopes

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonPair {
    pub name: &'static str,
    pub jwst_url: &'static str,
    pub hst_url: &'static str,
}

const COMPARISON_PAIRS: [ComparisonPair; 3] = [
    ComparisonPair {
        name: "Pillars of Creation",
        jwst_url: "https://stsci-opo.org/STScI-01GA76Q01D09HFEV174Z5ZJW5J.png",
        hst_url: "https://stsci-opo.org/STScI-01EVT1Z0Z2VQK8308JZ85E6EEM.png",
    },
    ComparisonPair {
        name: "Carina Nebula",
        jwst_url: "https://stsci-opo.org/STScI-01G7HDGS4743HQX7K9PVGQHXJT.png",
        hst_url: "https://stsci-opo.org/STScI-01G7HDGS27Q61ZJHPXN2R1JR8H.png",
    },
    ComparisonPair {
        name: "Southern Ring Nebula",
        jwst_url: "https://stsci-opo.org/STScI-01G70BTB8SYYQ8QN8JYJX3QE26.png",
        hst_url: "https://cdn.esahubble.org/archives/images/screen/heic1518a.jpg",
    },
];

pub fn comparison_pairs() -> &'static [ComparisonPair] {
    &COMPARISON_PAIRS
}

/// Case-insensitive lookup by display name
pub fn find_comparison(name: &str) -> Option<&'static ComparisonPair> {
    let wanted = name.trim();
    COMPARISON_PAIRS
        .iter()
        .find(|pair| pair.name.eq_ignore_ascii_case(wanted))
}
