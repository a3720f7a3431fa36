//! Service configuration from the environment.
use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8788";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Listen address (`GAMEID_ADDR`)
    pub addr: String,
    /// Catalog YAML replacing the built-in one (`GAMEID_CATALOG`)
    pub catalog_path: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            catalog_path: None,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            addr: non_empty("GAMEID_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string()),
            catalog_path: non_empty("GAMEID_CATALOG").map(PathBuf::from),
        }
    }
}
