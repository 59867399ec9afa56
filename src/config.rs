use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use campus_calendar_core::CategoryFilter;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "CAMPUS_CALENDAR";

fn default_preview_limit() -> usize {
    2
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Global configuration at ~/.config/campus-calendar/config.toml
///
/// Every key can be overridden with a `CAMPUS_CALENDAR_<KEY>` environment
/// variable, e.g. `CAMPUS_CALENDAR_PREVIEW_LIMIT=3`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Event feed (JSON) used when --events is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_file: Option<PathBuf>,

    /// Category taxonomy (JSON); the built-in one is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy_file: Option<PathBuf>,

    #[serde(default)]
    pub default_category: CategoryFilter,

    /// Events shown per grid cell before "+N more"
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            events_file: None,
            taxonomy_file: None,
            default_category: CategoryFilter::All,
            preview_limit: default_preview_limit(),
            log_level: default_log_level(),
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("campus-calendar");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location. A missing file means all defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config: GlobalConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .with_context(|| format!("Failed to read config file at {}", path.display()))?
            .try_deserialize()
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

        Ok(config)
    }

    /// Write the defaults to `path`, creating parent directories.
    pub fn create_default_config(path: &Path) -> Result<()> {
        let body = toml::to_string_pretty(&GlobalConfig::default())
            .context("Failed to serialize default config")?;
        let contents = format!(
            "\
# campus-calendar configuration

# Event feed to read when --events is not given:
# events_file = \"~/campus/events.json\"

# Category taxonomy (JSON list of {{value, name, color}}):
# taxonomy_file = \"~/campus/categories.json\"

{body}"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Could not create config directory at {}", parent.display())
            })?;
        }

        std::fs::write(path, contents)
            .with_context(|| format!("Could not write config file at {}", path.display()))?;

        Ok(())
    }

    pub fn events_path(&self) -> Option<PathBuf> {
        self.events_file.as_deref().map(expand_path)
    }

    pub fn taxonomy_path(&self) -> Option<PathBuf> {
        self.taxonomy_file.as_deref().map(expand_path)
    }
}

/// Expand a leading `~` to the home directory
pub fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_calendar_core::Category;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GlobalConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.default_category, CategoryFilter::All);
        assert_eq!(config.preview_limit, 2);
        assert!(config.events_file.is_none());
    }

    #[test]
    fn reads_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "events_file = \"/srv/events.json\"\ndefault_category = \"exam\"\npreview_limit = 4\n",
        )
        .unwrap();

        let config = GlobalConfig::load_from(&path).unwrap();
        assert_eq!(config.events_path(), Some(PathBuf::from("/srv/events.json")));
        assert_eq!(config.default_category, CategoryFilter::Only(Category::Exam));
        assert_eq!(config.preview_limit, 4);
    }

    #[test]
    fn rejects_unknown_default_category() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_category = \"party\"\n").unwrap();

        assert!(GlobalConfig::load_from(&path).is_err());
    }

    #[test]
    fn default_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        GlobalConfig::create_default_config(&path).unwrap();
        let config = GlobalConfig::load_from(&path).unwrap();

        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn expands_tilde() {
        let expanded = expand_path(Path::new("~/events.json"));
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert_eq!(expand_path(Path::new("/tmp/x.json")), PathBuf::from("/tmp/x.json"));
    }
}
