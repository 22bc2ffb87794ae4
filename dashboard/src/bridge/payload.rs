use serde::{Deserialize, Serialize};

/// One navigation entry advertised by the bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleEntry {
    pub slug: String,
    pub label: String,
}

fn default_conservation() -> i64 {
    50
}

fn default_emission_reduction() -> i64 {
    25
}

/// Raw slider query parameters; clamped into range at the bridge edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateQuery {
    #[serde(default = "default_conservation")]
    pub conservation: i64,
    #[serde(default = "default_emission_reduction")]
    pub emission_reduction: i64,
}

/// Upload body for the analyze endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub image_base64: String,
}

/// Metrics snapshot served to the display client's status line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusPayload {
    pub model: String,
    pub analyses_completed: usize,
    pub fallbacks_served: usize,
}
