//! Scaffold settings loaded from an optional `scaffold.yaml`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the optional per-project settings file
pub const SETTINGS_FILE: &str = "scaffold.yaml";

/// Settings for one scaffold run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Directory the router files are written into, relative to the project root
    #[serde(default = "default_routes_dir")]
    pub routes_dir: String,

    /// Extension of the generated router file
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Import path of the token-verification middleware, as seen from the
    /// generated router file
    #[serde(default = "default_middleware_import")]
    pub middleware_import: String,
}

fn default_routes_dir() -> String {
    "src/routes".to_string()
}

fn default_extension() -> String {
    "js".to_string()
}

fn default_middleware_import() -> String {
    "../middleware/verifyToken".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            routes_dir: default_routes_dir(),
            extension: default_extension(),
            middleware_import: default_middleware_import(),
        }
    }
}

impl Settings {
    /// Load settings from `scaffold.yaml` in `dir`, falling back to defaults
    /// when the file does not exist.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(SETTINGS_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Identifier of the middleware: the last segment of the import path
    pub fn middleware_name(&self) -> &str {
        self.middleware_import
            .rsplit('/')
            .next()
            .unwrap_or(&self.middleware_import)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.routes_dir, "src/routes");
        assert_eq!(settings.extension, "js");
        assert_eq!(settings.middleware_import, "../middleware/verifyToken");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings: Settings = serde_yaml::from_str("extension: ts\n").unwrap();
        assert_eq!(settings.extension, "ts");
        assert_eq!(settings.routes_dir, "src/routes");
        assert_eq!(settings.middleware_import, "../middleware/verifyToken");
    }

    #[test]
    fn test_full_yaml() {
        let settings: Settings = serde_yaml::from_str(
            "routes_dir: app/routers\nextension: mjs\nmiddleware_import: ../auth/guard\n",
        )
        .unwrap();
        assert_eq!(settings.routes_dir, "app/routers");
        assert_eq!(settings.extension, "mjs");
        assert_eq!(settings.middleware_import, "../auth/guard");
    }

    #[test]
    fn test_middleware_name_is_last_segment() {
        let settings = Settings::default();
        assert_eq!(settings.middleware_name(), "verifyToken");

        let settings = Settings {
            middleware_import: "guard".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.middleware_name(), "guard");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/surely")).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
