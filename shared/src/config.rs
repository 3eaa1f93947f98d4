use serde::{Deserialize, Serialize};

pub const DEFAULT_DEBOUNCE_MS: u32 = 200;
pub const DEFAULT_MODE_KEY: &str = "mode";

// ===== CONFIGURATION TYPES =====

/// Maps a last path segment to the value of the mode key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ModeRoute {
    pub segment: String,
    pub mode: String,
}

impl ModeRoute {
    pub fn new(segment: impl Into<String>, mode: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            mode: mode.into(),
        }
    }
}

/// Settings of the URL synchronizer.
///
/// Every field has a default, so a partial TOML document (or an empty one)
/// is a valid configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SyncConfig {
    /// Quiet period before a state change is written to the URL.
    pub debounce_ms: u32,
    /// Key filled from the path instead of the query string.
    pub mode_key: String,
    pub mode_routes: Vec<ModeRoute>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            mode_key: DEFAULT_MODE_KEY.to_string(),
            mode_routes: default_mode_routes(),
        }
    }
}

fn default_mode_routes() -> Vec<ModeRoute> {
    vec![
        ModeRoute::new("live", "notifications"),
        ModeRoute::new("weather", "weather"),
        ModeRoute::new("overview", "weather"),
    ]
}

impl SyncConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Failed to parse URL sync config: {}", e))
    }

    /// Mode for the given last path segment, if any route recognizes it.
    pub fn mode_for_segment(&self, segment: &str) -> Option<&str> {
        self.mode_routes
            .iter()
            .find(|route| route.segment == segment)
            .map(|route| route.mode.as_str())
    }

    pub fn with_mode_routes(mut self, routes: Vec<ModeRoute>) -> Self {
        self.mode_routes = routes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_routes_match_known_segments() {
        let config = SyncConfig::default();
        assert_eq!(config.mode_for_segment("live"), Some("notifications"));
        assert_eq!(config.mode_for_segment("weather"), Some("weather"));
        assert_eq!(config.mode_for_segment("overview"), Some("weather"));
        assert_eq!(config.mode_for_segment("app"), None);
        assert_eq!(config.mode_for_segment("liveness"), None);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(SyncConfig::from_toml_str("").unwrap(), SyncConfig::default());
    }

    #[test]
    fn toml_overrides_fields() {
        let config = SyncConfig::from_toml_str(
            r#"
            debounce_ms = 50
            mode_key = "view"

            [[mode_routes]]
            segment = "map"
            mode = "radar"
            "#,
        )
        .unwrap();

        assert_eq!(config.debounce_ms, 50);
        assert_eq!(config.mode_key, "view");
        assert_eq!(config.mode_routes, vec![ModeRoute::new("map", "radar")]);
        assert_eq!(config.mode_for_segment("live"), None);
    }

    #[test]
    fn invalid_toml_is_reported() {
        let error = SyncConfig::from_toml_str("debounce_ms = \"soon\"").unwrap_err();
        assert!(error.starts_with("Failed to parse URL sync config"));
    }

    #[test]
    fn json_config_uses_same_defaults() {
        let config: SyncConfig = serde_json::from_str(r#"{"debounce_ms": 10}"#).unwrap();
        assert_eq!(config.debounce_ms, 10);
        assert_eq!(config.mode_key, DEFAULT_MODE_KEY);
        assert_eq!(config.mode_routes.len(), 3);
    }
}
