use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    /// Effective campaign source for this invocation
    pub source: String,
    pub api_base_url: String,
    pub timeout_secs: u64,
    pub status_filter: String,
    pub sort_key: String,
    pub sort_direction: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub overwritten: bool,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuidanceViewModel {
    pub source: String,
    pub config_path: String,
    pub config_exists: bool,
}
