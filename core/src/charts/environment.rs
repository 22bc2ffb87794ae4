//! Ecosystem-health charts built from fixed sample tables.

use crate::charts::spec::{ChartKind, ChartSpec};

const BIODIVERSITY_LOSS_PCT: [(&str, f64); 3] = [
    ("Amazon", 15.0),
    ("Congo Basin", 10.0),
    ("Southeast Asia", 12.0),
];

const FOREST_COVER_MKM2: [(&str, f64); 5] = [
    ("2000", 40.0),
    ("2005", 39.0),
    ("2010", 38.0),
    ("2015", 36.0),
    ("2020", 34.0),
];

pub fn biodiversity_loss() -> ChartSpec {
    ChartSpec::from_table(
        ChartKind::Bar,
        "Regional Biodiversity Loss",
        "Region",
        "Species Diversity Loss (%)",
        &BIODIVERSITY_LOSS_PCT,
    )
}

pub fn forest_cover_decline() -> ChartSpec {
    ChartSpec::from_table(
        ChartKind::Area,
        "Global Forest Cover Decline",
        "Year",
        "Forest Cover (Million km²)",
        &FOREST_COVER_MKM2,
    )
}
