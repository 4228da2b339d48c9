//! The six fixed dataset schemas scraped from the two public NBA APIs.

use serde::{Deserialize, Serialize};

use super::rules::{ColumnRule, ConsistencyCheck, DatasetRules};
use super::types::ColumnFormat;

/// The datasets this pipeline knows how to clean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    /// All 30 NBA franchises.
    Teams,
    /// Every player in league history.
    AllPlayers,
    /// Currently rostered players with physical attributes.
    ActivePlayers,
    /// One player's career rows, one season per row.
    PlayerCareer,
    /// Advanced team stats (ratings, win/loss).
    TeamAdvanced,
    /// League standings with clinch indicators.
    LeagueStandings,
}

impl DatasetKind {
    /// All dataset kinds, in the order the batch cleaner processes them.
    pub const ALL: [DatasetKind; 6] = [
        DatasetKind::Teams,
        DatasetKind::AllPlayers,
        DatasetKind::ActivePlayers,
        DatasetKind::PlayerCareer,
        DatasetKind::TeamAdvanced,
        DatasetKind::LeagueStandings,
    ];

    /// Conventional raw file name for this dataset.
    pub fn conventional_file(&self) -> &'static str {
        match self {
            DatasetKind::Teams => "nba_teams.csv",
            DatasetKind::AllPlayers => "all_players.csv",
            DatasetKind::ActivePlayers => "ACTIVE_PLAYERS.csv",
            DatasetKind::PlayerCareer => "Nikola_Jokic_Info.csv",
            DatasetKind::TeamAdvanced => "advanced_team_stats.csv",
            DatasetKind::LeagueStandings => "league_standings.csv",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            DatasetKind::Teams => "NBA Teams",
            DatasetKind::AllPlayers => "All Players",
            DatasetKind::ActivePlayers => "Active Players",
            DatasetKind::PlayerCareer => "Player Career",
            DatasetKind::TeamAdvanced => "Advanced Team Stats",
            DatasetKind::LeagueStandings => "League Standings",
        }
    }

    /// Default metric columns for the correlation matrix.
    pub fn default_metrics(&self) -> Vec<&'static str> {
        match self {
            DatasetKind::ActivePlayers => vec!["height", "weight"],
            DatasetKind::TeamAdvanced => {
                vec!["W", "OFF_RATING", "DEF_RATING", "NET_RATING", "WIN_PCT"]
            }
            DatasetKind::LeagueStandings => vec!["WINS", "LOSSES", "WinPCT", "PointsPG"],
            DatasetKind::PlayerCareer => vec!["MIN", "PTS", "REB", "AST"],
            _ => Vec::new(),
        }
    }

    /// Default numeric columns for descriptive statistics.
    pub fn default_stat_columns(&self) -> Vec<&'static str> {
        match self {
            DatasetKind::Teams => vec!["year_founded"],
            DatasetKind::AllPlayers => Vec::new(),
            DatasetKind::ActivePlayers => vec!["height", "weight"],
            DatasetKind::PlayerCareer => vec![
                "GP", "GS", "MIN", "FGM", "FGA", "FG_PCT", "FG3M", "FG3A", "FG3_PCT", "FTM",
                "FTA", "FT_PCT", "REB", "AST", "STL", "BLK", "TOV", "PF", "PTS",
            ],
            DatasetKind::TeamAdvanced => {
                vec!["GP", "W", "L", "OFF_RATING", "DEF_RATING", "NET_RATING"]
            }
            DatasetKind::LeagueStandings => vec!["WINS", "LOSSES", "WinPCT", "PointsPG"],
        }
    }

    /// Cleaning rules for this dataset.
    pub fn rules(&self) -> DatasetRules {
        match self {
            DatasetKind::Teams => DatasetRules::new(
                self.label(),
                vec![
                    ColumnRule::numeric("id"),
                    ColumnRule::critical("full_name"),
                    ColumnRule::categorical("abbreviation").upper_case(),
                    ColumnRule::categorical("nickname"),
                    ColumnRule::categorical("city"),
                    ColumnRule::categorical("state"),
                    ColumnRule::numeric("year_founded"),
                ],
            ),

            DatasetKind::AllPlayers => DatasetRules::new(
                self.label(),
                vec![
                    ColumnRule::numeric("id"),
                    ColumnRule::categorical("full_name"),
                    ColumnRule::critical("first_name"),
                    ColumnRule::critical("last_name"),
                    ColumnRule::categorical("is_active"),
                ],
            ),

            DatasetKind::ActivePlayers => DatasetRules::new(
                self.label(),
                vec![
                    ColumnRule::numeric("id"),
                    ColumnRule::critical("first_name"),
                    ColumnRule::critical("last_name"),
                    ColumnRule::categorical("position").upper_case(),
                    ColumnRule::numeric("height")
                        .with_format(ColumnFormat::FeetDashInches)
                        .with_outlier_filter(),
                    ColumnRule::numeric("weight").with_outlier_filter(),
                    ColumnRule::numeric("jersey_number"),
                    ColumnRule::categorical("college"),
                    ColumnRule::categorical("country"),
                    ColumnRule::numeric("draft_year"),
                    ColumnRule::numeric("draft_round"),
                    ColumnRule::numeric("draft_number"),
                    ColumnRule::categorical("team.full_name"),
                ],
            ),

            DatasetKind::PlayerCareer => {
                let mut columns = vec![
                    ColumnRule::numeric("PLAYER_ID"),
                    ColumnRule::numeric("SEASON_ID").with_format(ColumnFormat::SeasonYear),
                    ColumnRule::numeric("TEAM_ID"),
                    ColumnRule::categorical("TEAM_ABBREVIATION").upper_case(),
                    ColumnRule::numeric("PLAYER_AGE"),
                ];
                for stat in [
                    "GP", "GS", "MIN", "FGM", "FGA", "FG_PCT", "FG3M", "FG3A", "FG3_PCT", "FTM",
                    "FTA", "FT_PCT", "OREB", "DREB", "REB", "AST", "STL", "BLK", "TOV", "PF",
                    "PTS",
                ] {
                    columns.push(ColumnRule::numeric(stat));
                }
                DatasetRules::new(self.label(), columns)
            }

            DatasetKind::TeamAdvanced => DatasetRules::new(
                self.label(),
                vec![
                    ColumnRule::critical("TEAM_NAME"),
                    ColumnRule::numeric("GP").with_range(Some(1.0), None),
                    ColumnRule::numeric("W"),
                    ColumnRule::numeric("L"),
                    ColumnRule::numeric("OFF_RATING"),
                    ColumnRule::numeric("DEF_RATING"),
                    ColumnRule::numeric("NET_RATING"),
                    ColumnRule::numeric("W_RANK"),
                    ColumnRule::numeric("L_RANK"),
                    ColumnRule::derived_ratio("WIN_PCT", "W", "GP"),
                ],
            )
            .with_check(ConsistencyCheck::WinsPlusLossesEqualGames {
                wins: "W".to_string(),
                losses: "L".to_string(),
                games: "GP".to_string(),
            }),

            DatasetKind::LeagueStandings => DatasetRules::new(
                self.label(),
                vec![
                    ColumnRule::categorical("TeamCity"),
                    ColumnRule::critical("TeamName"),
                    ColumnRule::categorical("Conference").upper_case(),
                    ColumnRule::categorical("Division"),
                    ColumnRule::numeric("WINS"),
                    ColumnRule::numeric("LOSSES"),
                    ColumnRule::numeric("WinPCT").with_range(Some(0.0), Some(1.0)),
                    ColumnRule::numeric("GamesBack"),
                    ColumnRule::numeric("PointsPG").with_range(Some(60.0), Some(160.0)),
                    ColumnRule::numeric("OppPointsPG"),
                    ColumnRule::clinch("ClinchIndicator"),
                    ColumnRule::clinch("ClinchedConferenceTitle"),
                    ColumnRule::clinch("ClinchedDivisionTitle"),
                    ColumnRule::clinch("ClinchedPlayoffBirth"),
                ],
            ),
        }
    }
}
