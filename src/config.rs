use std::env;

const PRODUCTION_API_ROOT: &str = "https://crispro-backend-v2.onrender.com";
const PRODUCTION_WS_ROOT: &str = "wss://crispro-backend-v2.onrender.com";

pub const API_ROOT_ENV: &str = "KB_API_ROOT";
pub const WS_ROOT_ENV: &str = "KB_WS_ROOT";

/// Backend endpoint roots, resolved once at construction.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    api_root: String,
    ws_root: String,
}

impl ApiConfig {
    /// Resolves from `KB_API_ROOT` / `KB_WS_ROOT`, falling back to the
    /// production deployment. Blank overrides are treated as unset.
    pub fn from_env() -> Self {
        Self::resolve(env::var(API_ROOT_ENV).ok(), env::var(WS_ROOT_ENV).ok())
    }

    pub fn resolve(api_root: Option<String>, ws_root: Option<String>) -> Self {
        let api_root = api_root
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| PRODUCTION_API_ROOT.to_string());
        let ws_root = ws_root
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| PRODUCTION_WS_ROOT.to_string());
        Self {
            api_root: api_root.trim().trim_end_matches('/').to_string(),
            ws_root: ws_root.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    pub fn ws_root(&self) -> &str {
        &self.ws_root
    }

    /// Base path for all knowledge-base endpoints.
    pub fn kb_base(&self) -> String {
        format!("{}/api/kb", self.api_root)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_production() {
        let config = ApiConfig::resolve(None, None);
        assert_eq!(config.api_root(), PRODUCTION_API_ROOT);
        assert_eq!(config.ws_root(), PRODUCTION_WS_ROOT);
        assert_eq!(
            config.kb_base(),
            format!("{PRODUCTION_API_ROOT}/api/kb")
        );
    }

    #[test]
    fn override_wins_and_trailing_slash_is_dropped() {
        let config = ApiConfig::resolve(Some("http://localhost:8000/".to_string()), None);
        assert_eq!(config.api_root(), "http://localhost:8000");
        assert_eq!(config.kb_base(), "http://localhost:8000/api/kb");
        assert_eq!(config.ws_root(), PRODUCTION_WS_ROOT);
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = ApiConfig::resolve(Some("   ".to_string()), Some(String::new()));
        assert_eq!(config.api_root(), PRODUCTION_API_ROOT);
        assert_eq!(config.ws_root(), PRODUCTION_WS_ROOT);
    }
}
