//! Project configuration (teamart.yaml) parsing.
//!
//! The config supplies defaults for the command line: where PNGs go, the
//! output resolution, the default variant and an optional extra team table.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ArtError, Result};
use crate::pattern::Variant;
use crate::render::{DEFAULT_DPI, MAX_DPI};
use crate::teams::TeamTable;

/// Config filename looked up in the working directory.
pub const CONFIG_FILENAME: &str = "teamart.yaml";

/// Configuration loaded from teamart.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output directory for rendered PNGs.
    pub output: PathBuf,

    /// Output resolution in dots per inch.
    pub dpi: u32,

    /// Variant used when none is given on the command line.
    pub variant: Variant,

    /// Extra team table merged over the builtin one. Relative paths are
    /// resolved against the config file's directory.
    pub teams: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from("dist"),
            dpi: DEFAULT_DPI,
            variant: Variant::default(),
            teams: None,
        }
    }
}

impl Config {
    /// Load config from a teamart.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ArtError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        let mut config = Self::parse(&content)?;
        if let (Some(teams), Some(base)) = (&config.teams, path.parent()) {
            if teams.is_relative() {
                config.teams = Some(base.join(teams));
            }
        }
        Ok(config)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content).map_err(|e| ArtError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;

        if !(1..=MAX_DPI).contains(&config.dpi) {
            return Err(ArtError::Parse {
                message: format!("Invalid config: dpi {} is out of range", config.dpi),
                help: Some(format!("Use a dpi between 1 and {}", MAX_DPI)),
            });
        }
        Ok(config)
    }

    /// Load an explicit config file, or `teamart.yaml` from `dir` when it
    /// exists, or the defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// The builtin team table with any configured extra teams merged in.
    pub fn team_table(&self) -> Result<TeamTable> {
        let builtin = TeamTable::builtin()?;
        match &self.teams {
            Some(path) => Ok(builtin.merged(&TeamTable::load(path)?)),
            None => Ok(builtin.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_full() {
        let config = Config::parse(
            "output: art\ndpi: 150\nvariant: jersey-alt\nteams: extra.yaml\n",
        )
        .unwrap();

        assert_eq!(
            config,
            Config {
                output: PathBuf::from("art"),
                dpi: 150,
                variant: Variant::JerseyAlt,
                teams: Some(PathBuf::from("extra.yaml")),
            }
        );
    }

    #[test]
    fn test_parse_partial_uses_defaults() {
        let config = Config::parse("dpi: 72\n").unwrap();
        assert_eq!(config.dpi, 72);
        assert_eq!(config.output, PathBuf::from("dist"));
        assert_eq!(config.variant, Variant::Abstract);
    }

    #[test]
    fn test_parse_rejects_dpi_out_of_range() {
        for yaml in ["dpi: 0\n", "dpi: 9000\n"] {
            let err = Config::parse(yaml).unwrap_err();
            assert!(matches!(err, ArtError::Parse { .. }), "{}", yaml);
        }
        assert_eq!(Config::parse("dpi: 1200\n").unwrap().dpi, MAX_DPI);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_unknown_field() {
        let err = Config::parse("colour: red\n").unwrap_err();
        assert!(matches!(err, ArtError::Parse { .. }));
    }

    #[test]
    fn test_discover_defaults_without_file() {
        let dir = tempdir().unwrap();
        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_discover_resolves_team_path() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "teams: clubs.yaml\n").unwrap();
        fs::write(
            dir.path().join("clubs.yaml"),
            "- { name: Sunday Club, colours: [\"#111111\", \"#222222\", \"#333333\"] }\n",
        )
        .unwrap();

        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config.teams, Some(dir.path().join("clubs.yaml")));

        let table = config.team_table().unwrap();
        assert!(table.get("Sunday Club").is_ok());
        assert!(table.get("Arsenal FC").is_ok());
    }
}
