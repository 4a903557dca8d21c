//! Team colour table.
//!
//! The builtin table ships as `data/teams.yaml` and is parsed once on first
//! use. A user file in the same format can be merged over it.
//!
//! # Example
//!
//! ```yaml
//! - { name: Arsenal FC, league: premier-league, colours: ["#EF0107", "#00366E", "#FFFFFF"] }
//! ```

mod league;

use std::path::Path;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::{ArtError, Result};
use crate::types::Palette;

pub use league::League;

const BUILTIN_TEAMS: &str = include_str!("../../data/teams.yaml");

static BUILTIN: Lazy<std::result::Result<TeamTable, String>> =
    Lazy::new(|| TeamTable::parse(BUILTIN_TEAMS).map_err(|e| e.to_string()));

/// A team and its palette.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub name: String,
    pub league: League,
    pub palette: Palette,
}

#[derive(Debug, Deserialize)]
struct TeamRecord {
    name: String,
    #[serde(default)]
    league: League,
    colours: Vec<String>,
}

/// Teams sorted by name.
#[derive(Debug, Clone, Default)]
pub struct TeamTable {
    teams: Vec<Team>,
}

impl TeamTable {
    /// The builtin table.
    pub fn builtin() -> Result<&'static TeamTable> {
        BUILTIN.as_ref().map_err(|message| ArtError::Parse {
            message: format!("Builtin team table is invalid: {}", message),
            help: None,
        })
    }

    /// Parse a table from YAML.
    pub fn parse(content: &str) -> Result<Self> {
        let records: Vec<TeamRecord> =
            serde_yaml::from_str(content).map_err(|e| ArtError::Parse {
                message: format!("Invalid team table: {}", e),
                help: Some("Each entry needs a name and three colours".to_string()),
            })?;

        let mut teams = records
            .into_iter()
            .map(|record| {
                let palette = Palette::from_hex(record.colours.as_slice())?;
                Ok(Team {
                    name: record.name,
                    league: record.league,
                    palette,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        teams.sort_by(|a, b| a.name.cmp(&b.name));
        teams.dedup_by(|later, earlier| later.name == earlier.name);

        Ok(Self { teams })
    }

    /// Load a table from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ArtError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read team table: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Return a copy of this table with `other`'s entries added, replacing
    /// any team of the same name.
    pub fn merged(&self, other: &TeamTable) -> TeamTable {
        let mut teams: Vec<Team> = self
            .teams
            .iter()
            .filter(|t| !other.teams.iter().any(|o| o.name == t.name))
            .cloned()
            .collect();
        teams.extend(other.teams.iter().cloned());
        teams.sort_by(|a, b| a.name.cmp(&b.name));
        TeamTable { teams }
    }

    /// Look up a team by exact name, falling back to a case-insensitive match.
    pub fn get(&self, name: &str) -> Result<&Team> {
        let name = name.trim();
        self.teams
            .iter()
            .find(|t| t.name == name)
            .or_else(|| self.teams.iter().find(|t| t.name.eq_ignore_ascii_case(name)))
            .ok_or_else(|| ArtError::UnknownTeam {
                name: name.to_string(),
                help: self.suggest(name),
            })
    }

    /// League for a team, `Other` when the team is unknown.
    pub fn league(&self, name: &str) -> League {
        self.get(name).map(|t| t.league).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    fn suggest(&self, query: &str) -> Option<String> {
        let query = query.to_lowercase();
        let words: Vec<&str> = query.split_whitespace().filter(|w| w.len() > 2).collect();

        let matches: Vec<&str> = self
            .teams
            .iter()
            .filter(|t| {
                let name = t.name.to_lowercase();
                (!query.is_empty() && name.contains(&query))
                    || words.iter().any(|w| name.contains(w))
            })
            .take(3)
            .map(|t| t.name.as_str())
            .collect();

        if matches.is_empty() {
            Some("Run `teamart teams` to list known teams".to_string())
        } else {
            Some(format!("Did you mean: {}?", matches.join(", ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_table_loads() {
        let table = TeamTable::builtin().unwrap();
        assert_eq!(table.len(), 39);
    }

    #[test]
    fn test_builtin_sorted() {
        let table = TeamTable::builtin().unwrap();
        let names: Vec<&str> = table.iter().map(|t| t.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_get_exact_and_case_insensitive() {
        let table = TeamTable::builtin().unwrap();
        let arsenal = table.get("Arsenal FC").unwrap();
        assert_eq!(arsenal.palette.primary, Colour::rgb(0xEF, 0x01, 0x07));
        assert_eq!(arsenal.league, League::PremierLeague);

        assert_eq!(table.get("fc seoul").unwrap().name, "FC Seoul");
    }

    #[test]
    fn test_liverpool_secondary_is_plain_colour() {
        let table = TeamTable::builtin().unwrap();
        let liverpool = table.get("Liverpool FC").unwrap();
        assert_eq!(liverpool.palette.secondary, Colour::rgb(0x00, 0xA3, 0x89));
    }

    #[test]
    fn test_unknown_team_suggests() {
        let table = TeamTable::builtin().unwrap();
        let err = table.get("Madrid").unwrap_err();
        match err {
            ArtError::UnknownTeam { help: Some(help), .. } => {
                assert!(help.contains("Real Madrid"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_league_classification() {
        let table = TeamTable::builtin().unwrap();
        assert_eq!(table.league("Napoli"), League::SerieA);
        assert_eq!(table.league("RB Leipzig"), League::Bundesliga);
        assert_eq!(table.league("Lille OSC"), League::Ligue1);
        assert_eq!(table.league("Real Betis"), League::LaLiga);
        assert_eq!(table.league("FC Seoul"), League::KLeague1);
        assert_eq!(table.league("Nowhere Rovers"), League::Other);
    }

    #[test]
    fn test_parse_defaults_league() {
        let table = TeamTable::parse(
            "- { name: Sunday Club, colours: [\"#111111\", \"#222222\", \"#333333\"] }",
        )
        .unwrap();
        assert_eq!(table.get("Sunday Club").unwrap().league, League::Other);
    }

    #[test]
    fn test_parse_rejects_two_colour_palette() {
        let err = TeamTable::parse("- { name: Short, colours: [\"#111111\", \"#222222\"] }")
            .unwrap_err();
        assert!(matches!(err, ArtError::InvalidPalette { count: 2 }));
    }

    #[test]
    fn test_merged_overrides_by_name() {
        let builtin = TeamTable::builtin().unwrap();
        let extra = TeamTable::parse(
            "- { name: Arsenal FC, league: premier-league, colours: [\"#000000\", \"#111111\", \"#222222\"] }\n\
             - { name: Sunday Club, colours: [\"#111111\", \"#222222\", \"#333333\"] }",
        )
        .unwrap();

        let merged = builtin.merged(&extra);
        assert_eq!(merged.len(), builtin.len() + 1);
        assert_eq!(merged.get("Arsenal FC").unwrap().palette.primary, Colour::BLACK);
        assert!(merged.get("Sunday Club").is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = TeamTable::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ArtError::Io { .. }));
    }
}
