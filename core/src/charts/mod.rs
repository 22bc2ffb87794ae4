pub mod climate;
pub mod environment;
pub mod spec;

pub use spec::{ChartKind, ChartRow, ChartSpec};

/// Catalog names accepted by the bridge's chart endpoint.
pub const CATALOG: [&str; 5] = [
    "temperature",
    "sea-level",
    "emissions",
    "biodiversity",
    "forest-cover",
];

pub fn by_name(name: &str) -> Option<ChartSpec> {
    match name {
        "temperature" => Some(climate::temperature_trend()),
        "sea-level" => Some(climate::sea_level_rise()),
        "emissions" => Some(climate::emissions_by_sector()),
        "biodiversity" => Some(environment::biodiversity_loss()),
        "forest-cover" => Some(environment::forest_cover_decline()),
        _ => None,
    }
}
