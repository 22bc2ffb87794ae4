use crate::charts::climate::{emissions_by_sector, sea_level_rise, temperature_trend};
use crate::prelude::{DisplayModule, ModuleKind, ModuleView};

/// Climate change page: temperature, sea-level, and emissions charts with
/// the accompanying observation notes.
pub struct ClimateModule;

impl ClimateModule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClimateModule {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayModule for ClimateModule {
    fn kind(&self) -> ModuleKind {
        ModuleKind::ClimateChange
    }

    fn render(&self) -> ModuleView {
        ModuleView {
            kind: ModuleKind::ClimateChange,
            title: "Climate Change & Land Transformation Analysis".to_string(),
            charts: vec![temperature_trend(), sea_level_rise(), emissions_by_sector()],
            notes: vec![
                "Significant temperature increase since 1950".to_string(),
                "Accelerating warming trend in recent decades".to_string(),
                "2023 shows highest recorded temperature anomaly".to_string(),
                "Projected sea level rise poses significant risks to coastal communities"
                    .to_string(),
            ],
            upload: None,
            simulator: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartKind;

    #[test]
    fn view_carries_the_three_indicator_charts() {
        let view = ClimateModule::new().render();
        assert_eq!(view.kind, ModuleKind::ClimateChange);
        assert_eq!(view.charts.len(), 3);
        assert_eq!(view.charts[0].kind, ChartKind::Line);
        assert_eq!(view.charts[1].kind, ChartKind::Area);
        assert_eq!(view.charts[2].kind, ChartKind::Pie);
        assert_eq!(view.notes.len(), 4);
    }
}
