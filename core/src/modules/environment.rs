use crate::charts::environment::{biodiversity_loss, forest_cover_decline};
use crate::prelude::{DisplayModule, ModuleKind, ModuleView, SimulatorPanel};
use crate::scenario::{
    ScenarioInputs, BASELINE_RECOVERY, CONSERVATION_MAX, EMISSION_REDUCTION_MAX,
};

/// Environmental impact page: regional charts plus the interactive scenario
/// simulator panel with its default projection.
pub struct EnvironmentModule;

impl EnvironmentModule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvironmentModule {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayModule for EnvironmentModule {
    fn kind(&self) -> ModuleKind {
        ModuleKind::EnvironmentalImpact
    }

    fn render(&self) -> ModuleView {
        let defaults = ScenarioInputs::default();
        ModuleView {
            kind: ModuleKind::EnvironmentalImpact,
            title: "Environmental Impact & Ecosystem Health".to_string(),
            charts: vec![biodiversity_loss(), forest_cover_decline()],
            notes: vec![
                "Global forest cover continues to decline".to_string(),
                "Biodiversity loss varies by region".to_string(),
                "Conservation efforts can mitigate environmental degradation".to_string(),
            ],
            upload: None,
            simulator: Some(SimulatorPanel {
                conservation_default: defaults.conservation,
                conservation_max: CONSERVATION_MAX,
                emission_reduction_default: defaults.emission_reduction,
                emission_reduction_max: EMISSION_REDUCTION_MAX,
                baseline: BASELINE_RECOVERY,
                default_projection: defaults.project(),
            }),
        }
    }
}
