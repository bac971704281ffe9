//! User configuration at ~/.config/crewcheck/config.toml

use std::path::{Path, PathBuf};

use ::config::{Config, File};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::dataset::Dataset;
use crate::error::{CrewCheckError, CrewCheckResult};
use crate::sort::{CompanyFilter, SortKey};

fn is_default_sort(key: &SortKey) -> bool {
    *key == SortKey::default()
}

fn is_all_companies(filter: &CompanyFilter) -> bool {
    *filter == CompanyFilter::All
}

/// Global crewcheck configuration.
///
/// Without a `data_file` the bundled mock dataset is used.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CrewCheckConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "is_default_sort")]
    pub default_sort: SortKey,

    #[serde(default, skip_serializing_if = "is_all_companies")]
    pub default_company: CompanyFilter,
}

impl CrewCheckConfig {
    pub fn config_path() -> CrewCheckResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CrewCheckError::Config("Could not determine config directory".into()))?
            .join("crewcheck");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented template if
    /// the file doesn't exist yet.
    pub fn load() -> CrewCheckResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> CrewCheckResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| CrewCheckError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CrewCheckError::Config(e.to_string()))
    }

    /// Load from `path` without ever creating it. A missing file gives the
    /// defaults; an unreadable one is logged and also gives the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), "ignoring config file: {e}");
                Self::default()
            }
        }
    }

    /// `data_file` with `~` expanded.
    pub fn data_path(&self) -> Option<PathBuf> {
        self.data_file.as_ref().map(|p| {
            let expanded = shellexpand::tilde(&p.to_string_lossy()).into_owned();
            PathBuf::from(expanded)
        })
    }

    /// The configured dataset, or the bundled one.
    pub fn dataset(&self) -> CrewCheckResult<Dataset> {
        match self.data_path() {
            Some(path) => Dataset::load(&path),
            None => Dataset::bundled(),
        }
    }

    pub fn save(&self, path: &Path) -> CrewCheckResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CrewCheckError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CrewCheckError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| CrewCheckError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CrewCheckResult<()> {
        let contents = "\
# crewcheck configuration

# Board dataset (.json or .toml). The bundled mock data is used when unset.
# data_file = \"~/crewcheck/events.json\"

# Initial card order: conflicts, time or name
# default_sort = \"conflicts\"

# Initial company filter (\"all\" or a company name)
# default_company = \"all\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CrewCheckError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CrewCheckError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        CrewCheckConfig::create_default_config(&path).unwrap();
        let config = CrewCheckConfig::load_from(&path).unwrap();

        assert!(config.data_file.is_none());
        assert_eq!(config.default_sort, SortKey::Conflicts);
        assert_eq!(config.default_company, CompanyFilter::All);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crewcheck").join("config.toml");

        let config = CrewCheckConfig {
            data_file: Some(PathBuf::from("/tmp/events.json")),
            default_sort: SortKey::Time,
            default_company: CompanyFilter::from("Retail Co"),
        };
        config.save(&path).unwrap();

        let reloaded = CrewCheckConfig::load_from(&path).unwrap();
        assert_eq!(reloaded.data_file, Some(PathBuf::from("/tmp/events.json")));
        assert_eq!(reloaded.default_sort, SortKey::Time);
        assert_eq!(
            reloaded.default_company,
            CompanyFilter::Only("Retail Co".to_string())
        );
    }

    #[test]
    fn test_load_or_default_tolerates_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_sort = [unclosed\n").unwrap();

        assert!(CrewCheckConfig::load_from(&path).is_err());
        let config = CrewCheckConfig::load_or_default(&path);
        assert_eq!(config.default_sort, SortKey::Conflicts);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_load_or_default_never_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crewcheck").join("config.toml");

        let config = CrewCheckConfig::load_or_default(&path);
        assert_eq!(config.default_company, CompanyFilter::All);
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_data_file_uses_bundled_dataset() {
        let config = CrewCheckConfig::default();
        assert!(config.data_path().is_none());
        assert!(!config.dataset().unwrap().events.is_empty());
    }
}
