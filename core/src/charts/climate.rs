//! Climate-indicator charts built from fixed sample tables.

use crate::charts::spec::{ChartKind, ChartSpec};

const TEMPERATURE_ANOMALIES: [(&str, f64); 9] = [
    ("1950", 0.0),
    ("1960", 0.1),
    ("1970", 0.2),
    ("1980", 0.3),
    ("1990", 0.5),
    ("2000", 0.7),
    ("2010", 1.0),
    ("2020", 1.4),
    ("2023", 1.6),
];

const SEA_LEVEL_RISE_MM: [(&str, f64); 7] = [
    ("1900", 0.0),
    ("1950", 50.0),
    ("1980", 100.0),
    ("2000", 150.0),
    ("2010", 200.0),
    ("2020", 250.0),
    ("2023", 280.0),
];

const EMISSIONS_GT_CO2: [(&str, f64); 5] = [
    ("Energy", 25.0),
    ("Transportation", 8.0),
    ("Industry", 12.0),
    ("Agriculture", 6.0),
    ("Waste", 3.0),
];

pub fn temperature_trend() -> ChartSpec {
    ChartSpec::from_table(
        ChartKind::Line,
        "Global Temperature Anomalies (1950-2023)",
        "Year",
        "Temperature Difference from Baseline",
        &TEMPERATURE_ANOMALIES,
    )
}

pub fn sea_level_rise() -> ChartSpec {
    ChartSpec::from_table(
        ChartKind::Area,
        "Cumulative Sea Level Rise",
        "Year",
        "Cumulative Rise in Millimeters",
        &SEA_LEVEL_RISE_MM,
    )
}

pub fn emissions_by_sector() -> ChartSpec {
    ChartSpec::from_table(
        ChartKind::Pie,
        "Global Carbon Emissions by Sector",
        "Sector",
        "Emissions (Gt CO2)",
        &EMISSIONS_GT_CO2,
    )
}
