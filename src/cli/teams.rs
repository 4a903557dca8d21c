use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::teams::{League, Team};

/// List known teams with their league and colours
#[derive(Args, Debug)]
pub struct TeamsArgs {
    /// Only list teams from this league
    #[arg(long, value_enum)]
    pub league: Option<League>,
}

pub fn run(args: TeamsArgs, config: &Config, printer: &Printer) -> Result<()> {
    let table = config.team_table()?;
    let teams: Vec<&Team> = table
        .iter()
        .filter(|t| args.league.map_or(true, |league| t.league == league))
        .collect();

    // Team lines go to stdout
    for team in &teams {
        println!("{}", team_line(team));
    }

    match args.league {
        Some(league) if teams.is_empty() => {
            printer.warning("Empty", &format!("no teams in {}", league))
        }
        _ => printer.status("Listed", &plural(teams.len(), "team", "teams")),
    }
    Ok(())
}

/// Tab-separated `name, league, primary, secondary, tertiary`.
fn team_line(team: &Team) -> String {
    let [primary, secondary, tertiary] = team.palette.colours();
    format!(
        "{}\t{}\t{}\t{}\t{}",
        team.name, team.league, primary, secondary, tertiary
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teams::TeamTable;

    #[test]
    fn test_team_line() {
        let table = TeamTable::builtin().unwrap();
        let line = team_line(table.get("Arsenal FC").unwrap());
        assert_eq!(line, "Arsenal FC\tPremier League\t#EF0107\t#00366E\t#FFFFFF");
    }

    #[test]
    fn test_run_with_league_filter() {
        let args = TeamsArgs {
            league: Some(League::SerieA),
        };
        run(args, &Config::default(), &Printer::plain()).unwrap();
    }
}
