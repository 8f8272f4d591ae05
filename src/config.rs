use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

pub const DEFAULT_PREFIX: &str = "nssl";
pub const DEFAULT_TITLE: &str = "Storm Viewer";

// ---------------------------------------------------------------------------
// Viewer configuration
// ---------------------------------------------------------------------------

/// Where pictures come from and how the list is titled.
///
/// Layering: defaults ← optional JSON file ← command line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Directory scanned for pictures.
    pub resource_dir: PathBuf,
    /// Only entries whose name starts with this are listed.
    pub prefix: String,
    /// Title of the list screen.
    pub title: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            resource_dir: default_resource_dir(),
            prefix: DEFAULT_PREFIX.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl ViewerConfig {
    /// Read a JSON config file; absent keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validated()
    }

    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(mut self, dir: Option<PathBuf>, prefix: Option<String>) -> Result<Self> {
        if let Some(dir) = dir {
            self.resource_dir = dir;
        }
        if let Some(prefix) = prefix {
            self.prefix = prefix;
        }
        self.validated()
    }

    fn validated(self) -> Result<Self> {
        if self.prefix.trim().is_empty() {
            bail!("picture prefix must not be empty");
        }
        Ok(self)
    }
}

/// `resources/` next to the executable, the bundled picture location.
fn default_resource_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("resources")))
        .unwrap_or_else(|| PathBuf::from("resources"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_the_storm_bundle() {
        let config = ViewerConfig::default();
        assert_eq!(config.prefix, "nssl");
        assert_eq!(config.title, "Storm Viewer");
        assert!(config.resource_dir.ends_with("resources"));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = dir.path().join("viewer.json");
        fs::write(&path, r#"{ "resource_dir": "/srv/storms" }"#).expect("config should be written");

        let config = ViewerConfig::from_file(&path).expect("config should load");

        assert_eq!(config.resource_dir, PathBuf::from("/srv/storms"));
        assert_eq!(config.prefix, DEFAULT_PREFIX);
        assert_eq!(config.title, DEFAULT_TITLE);
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = dir.path().join("viewer.json");
        fs::write(&path, "{ not json").expect("config should be written");

        let err = ViewerConfig::from_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("viewer.json"));
    }

    #[test]
    fn command_line_overrides_file_values() {
        let config = ViewerConfig::default()
            .with_overrides(Some(PathBuf::from("pics")), Some("storm".into()))
            .expect("overrides should be valid");

        assert_eq!(config.resource_dir, PathBuf::from("pics"));
        assert_eq!(config.prefix, "storm");
    }

    #[test]
    fn blank_prefix_is_rejected() {
        assert!(ViewerConfig::default()
            .with_overrides(None, Some("  ".into()))
            .is_err());
    }
}
