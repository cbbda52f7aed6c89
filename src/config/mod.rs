//! Configuration management for `civic`.
//!
//! Configuration is loaded from YAML files with support for:
//! - User config (~/.config/civiclens/config.yaml)
//! - Project config (.civiclens/config.yaml)
//! - An explicit `--config` file
//! - Environment variable overrides (`CIVICLENS_*`)
//! - CLI overrides
//!
//! Later layers win.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use civiclens_core::{FilterComposition, SortKey, ViewTag};

use crate::error::{CliError, Result};
use crate::map::MapFormat;

/// Project-level directory holding config and the session file.
pub const PROJECT_DIR: &str = ".civiclens";
pub const CONFIG_FILE_NAME: &str = "config.yaml";
pub const SESSION_FILE_NAME: &str = "session.json";

/// One configuration layer as written in YAML. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub data_file: Option<PathBuf>,
    pub session_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub default_sort: Option<String>,
    pub default_view: Option<String>,
    pub filter_composition: Option<String>,
    pub map_format: Option<String>,
}

impl ConfigFile {
    /// Overlay `other` on top of `self`.
    pub fn merge(&mut self, other: Self) {
        if other.data_file.is_some() {
            self.data_file = other.data_file;
        }
        if other.session_file.is_some() {
            self.session_file = other.session_file;
        }
        if other.log_file.is_some() {
            self.log_file = other.log_file;
        }
        if other.default_sort.is_some() {
            self.default_sort = other.default_sort;
        }
        if other.default_view.is_some() {
            self.default_view = other.default_view;
        }
        if other.filter_composition.is_some() {
            self.filter_composition = other.filter_composition;
        }
        if other.map_format.is_some() {
            self.map_format = other.map_format;
        }
    }

    /// Parse a YAML config file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read or `Yaml` if it is malformed.
    pub fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&text).map_err(|source| CliError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    fn read_if_exists(path: &Path) -> Result<Option<Self>> {
        if path.is_file() {
            debug!(path = %path.display(), "loading config layer");
            Self::read(path).map(Some)
        } else {
            Ok(None)
        }
    }

    fn from_env<F>(env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let composition = match env("CIVICLENS_COMPOSE") {
            None => None,
            Some(value) => Some(match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => "compose".to_string(),
                "0" | "false" | "no" | "off" => "search_supersedes".to_string(),
                _ => value,
            }),
        };

        Self {
            data_file: env("CIVICLENS_DATA").map(PathBuf::from),
            session_file: env("CIVICLENS_SESSION_FILE").map(PathBuf::from),
            log_file: env("CIVICLENS_LOG_FILE").map(PathBuf::from),
            default_sort: env("CIVICLENS_SORT"),
            default_view: env("CIVICLENS_VIEW"),
            filter_composition: composition,
            map_format: env("CIVICLENS_MAP_FORMAT"),
        }
    }
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config: Option<PathBuf>,
    pub data: Option<PathBuf>,
    pub session_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl CliOverrides {
    fn as_layer(&self) -> ConfigFile {
        ConfigFile {
            data_file: self.data.clone(),
            session_file: self.session_file.clone(),
            log_file: self.log_file.clone(),
            ..ConfigFile::default()
        }
    }
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSONL issue feed; `None` uses the built-in sample issues.
    pub data_file: Option<PathBuf>,
    pub session_file: PathBuf,
    pub log_file: Option<PathBuf>,
    pub default_sort: SortKey,
    pub default_view: ViewTag,
    pub filter_composition: FilterComposition,
    pub map_format: MapFormat,
}

impl Config {
    /// Defaults rooted at `cwd`.
    #[must_use]
    pub fn defaults(cwd: &Path) -> Self {
        Self {
            data_file: None,
            session_file: cwd.join(PROJECT_DIR).join(SESSION_FILE_NAME),
            log_file: None,
            default_sort: SortKey::default(),
            default_view: ViewTag::default(),
            filter_composition: FilterComposition::default(),
            map_format: MapFormat::default(),
        }
    }

    fn apply(mut self, layer: ConfigFile) -> Result<Self> {
        if let Some(path) = layer.data_file {
            self.data_file = Some(path);
        }
        if let Some(path) = layer.session_file {
            self.session_file = path;
        }
        if let Some(path) = layer.log_file {
            self.log_file = Some(path);
        }
        if let Some(sort) = layer.default_sort {
            self.default_sort = sort.parse().unwrap_or_default();
        }
        if let Some(view) = layer.default_view {
            self.default_view = view.parse().unwrap_or_default();
        }
        if let Some(mode) = layer.filter_composition {
            self.filter_composition = mode.parse()?;
        }
        if let Some(format) = layer.map_format {
            self.map_format = format.parse().map_err(CliError::Config)?;
        }
        Ok(self)
    }
}

/// Load configuration from the process environment and working directory.
///
/// # Errors
///
/// Returns an error if a config file is malformed or an explicit `--config`
/// file is missing.
pub fn load(cli: &CliOverrides) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    let home = std::env::var_os("HOME").map(PathBuf::from);
    load_with(cli, |key| std::env::var(key).ok(), &cwd, home.as_deref())
}

/// Load configuration with explicit environment, working directory and home.
///
/// # Errors
///
/// Same as [`load`].
pub fn load_with<F>(cli: &CliOverrides, env: F, cwd: &Path, home: Option<&Path>) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut merged = ConfigFile::default();

    if let Some(home) = home {
        let user_path = home.join(".config").join("civiclens").join(CONFIG_FILE_NAME);
        if let Some(layer) = ConfigFile::read_if_exists(&user_path)? {
            merged.merge(layer);
        }
    }

    let project_path = cwd.join(PROJECT_DIR).join(CONFIG_FILE_NAME);
    if let Some(layer) = ConfigFile::read_if_exists(&project_path)? {
        merged.merge(layer);
    }

    if let Some(explicit) = &cli.config {
        if !explicit.is_file() {
            return Err(CliError::Config(format!(
                "config file not found: {}",
                explicit.display()
            )));
        }
        merged.merge(ConfigFile::read(explicit)?);
    }

    merged.merge(ConfigFile::from_env(&env));
    merged.merge(cli.as_layer());

    Config::defaults(cwd).apply(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_with(&CliOverrides::default(), no_env, dir.path(), None).unwrap();
        assert_eq!(config, Config::defaults(dir.path()));
        assert_eq!(config.default_sort, SortKey::ReportedAt);
        assert_eq!(config.filter_composition, FilterComposition::SearchSupersedes);
        assert!(config.session_file.ends_with(".civiclens/session.json"));
    }

    #[test]
    fn test_project_overrides_user() {
        let home = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();
        write(
            &home.path().join(".config/civiclens/config.yaml"),
            "default_sort: title\ndefault_view: resolved\n",
        );
        write(
            &cwd.path().join(".civiclens/config.yaml"),
            "default_sort: priority\n",
        );

        let config =
            load_with(&CliOverrides::default(), no_env, cwd.path(), Some(home.path())).unwrap();
        assert_eq!(config.default_sort, SortKey::Priority);
        assert_eq!(config.default_view, ViewTag::Resolved);
    }

    #[test]
    fn test_env_and_cli_precedence() {
        let cwd = tempfile::tempdir().unwrap();
        write(
            &cwd.path().join(".civiclens/config.yaml"),
            "data_file: from-project.jsonl\nfilter_composition: search_supersedes\n",
        );
        let env: HashMap<&str, &str> = HashMap::from([
            ("CIVICLENS_DATA", "from-env.jsonl"),
            ("CIVICLENS_COMPOSE", "true"),
            ("CIVICLENS_MAP_FORMAT", "geojson"),
        ]);
        let lookup = |key: &str| env.get(key).map(|v| (*v).to_string());

        let config = load_with(&CliOverrides::default(), lookup, cwd.path(), None).unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("from-env.jsonl")));
        assert_eq!(config.filter_composition, FilterComposition::Compose);
        assert_eq!(config.map_format, MapFormat::GeoJson);

        let cli = CliOverrides {
            data: Some(PathBuf::from("from-cli.jsonl")),
            ..CliOverrides::default()
        };
        let config = load_with(&cli, lookup, cwd.path(), None).unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("from-cli.jsonl")));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let cwd = tempfile::tempdir().unwrap();
        write(&cwd.path().join(".civiclens/config.yaml"), "colour: blue\n");
        let err = load_with(&CliOverrides::default(), no_env, cwd.path(), None).unwrap_err();
        assert!(matches!(err, CliError::Yaml { .. }));
    }

    #[test]
    fn test_bad_composition_rejected() {
        let cwd = tempfile::tempdir().unwrap();
        write(
            &cwd.path().join(".civiclens/config.yaml"),
            "filter_composition: sometimes\n",
        );
        let err = load_with(&CliOverrides::default(), no_env, cwd.path(), None).unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
    }

    #[test]
    fn test_missing_explicit_config() {
        let cwd = tempfile::tempdir().unwrap();
        let cli = CliOverrides {
            config: Some(cwd.path().join("nope.yaml")),
            ..CliOverrides::default()
        };
        let err = load_with(&cli, no_env, cwd.path(), None).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_empty_file_is_default_layer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.yaml");
        fs::write(&path, "\n").unwrap();
        assert_eq!(ConfigFile::read(&path).unwrap(), ConfigFile::default());
    }
}
