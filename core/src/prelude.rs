use serde::{Deserialize, Serialize};

use crate::charts::ChartSpec;
use crate::scenario::RecoveryProjection;

/// Navigation value selecting one of the three display modules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleKind {
    ImageClassification,
    ClimateChange,
    EnvironmentalImpact,
}

impl ModuleKind {
    pub const ALL: [ModuleKind; 3] = [
        ModuleKind::ImageClassification,
        ModuleKind::ClimateChange,
        ModuleKind::EnvironmentalImpact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ModuleKind::ImageClassification => "Image Classification",
            ModuleKind::ClimateChange => "Climate Change",
            ModuleKind::EnvironmentalImpact => "Environmental Impact",
        }
    }

    /// URL-safe name used by the HTTP bridge.
    pub fn slug(&self) -> &'static str {
        match self {
            ModuleKind::ImageClassification => "image-classification",
            ModuleKind::ClimateChange => "climate-change",
            ModuleKind::EnvironmentalImpact => "environmental-impact",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.slug() == slug)
    }
}

/// Upload surface exposed by the classification module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadPanel {
    pub accepted_formats: Vec<String>,
    pub help: String,
}

/// Slider surface exposed by the environmental-impact module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorPanel {
    pub conservation_default: u8,
    pub conservation_max: u8,
    pub emission_reduction_default: u8,
    pub emission_reduction_max: u8,
    pub baseline: f64,
    pub default_projection: RecoveryProjection,
}

/// Fully built page content for one display module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleView {
    pub kind: ModuleKind,
    pub title: String,
    pub charts: Vec<ChartSpec>,
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload: Option<UploadPanel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulator: Option<SimulatorPanel>,
}

/// Trait describing the dashboard display modules the orchestrator selects
/// between. Rendering is pure: building a view performs no I/O.
pub trait DisplayModule {
    fn kind(&self) -> ModuleKind;
    fn render(&self) -> ModuleView;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for kind in ModuleKind::ALL {
            assert_eq!(ModuleKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(ModuleKind::from_slug("weather"), None);
    }
}
