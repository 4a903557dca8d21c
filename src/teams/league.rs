//! League classification, used for display labels only.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum League {
    #[serde(rename = "premier-league")]
    #[value(name = "premier-league")]
    PremierLeague,
    #[serde(rename = "la-liga")]
    #[value(name = "la-liga")]
    LaLiga,
    #[serde(rename = "bundesliga")]
    #[value(name = "bundesliga")]
    Bundesliga,
    #[serde(rename = "ligue-1")]
    #[value(name = "ligue-1")]
    Ligue1,
    #[serde(rename = "serie-a")]
    #[value(name = "serie-a")]
    SerieA,
    #[serde(rename = "k-league-1")]
    #[value(name = "k-league-1")]
    KLeague1,
    #[default]
    #[serde(rename = "other")]
    #[value(name = "other")]
    Other,
}

impl League {
    pub fn display_name(self) -> &'static str {
        match self {
            League::PremierLeague => "Premier League",
            League::LaLiga => "La Liga",
            League::Bundesliga => "Bundesliga",
            League::Ligue1 => "Ligue 1",
            League::SerieA => "Serie A",
            League::KLeague1 => "K League 1",
            League::Other => "Other",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_names() {
        let league: League = serde_yaml::from_str("ligue-1").unwrap();
        assert_eq!(league, League::Ligue1);
        let league: League = serde_yaml::from_str("k-league-1").unwrap();
        assert_eq!(league, League::KLeague1);
    }

    #[test]
    fn test_display() {
        assert_eq!(League::PremierLeague.to_string(), "Premier League");
        assert_eq!(League::default().to_string(), "Other");
    }
}
