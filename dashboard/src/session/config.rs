use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Environment variable holding the remote model API key. Absence is a
/// fatal startup condition.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub model: String,
    pub endpoint: String,
    pub max_output_tokens: u32,
    pub request_timeout_secs: u64,
    pub bind_port: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            model: "llama-3.2-11b-vision-preview".to_string(),
            endpoint: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            max_output_tokens: 1024,
            request_timeout_secs: 30,
            bind_port: 9000,
        }
    }
}

impl DashboardConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading dashboard config {}", path_ref.display()))?;
        let config: DashboardConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing dashboard config {}", path_ref.display()))?;
        Ok(config)
    }
}

pub fn api_key_from_env() -> anyhow::Result<String> {
    env::var(API_KEY_ENV).with_context(|| format!("{} must be set to start the dashboard", API_KEY_ENV))
}
