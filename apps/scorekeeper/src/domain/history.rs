//! Flat per-(round, player) records for exporters and dashboards.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::game::Game;
use crate::domain::standings::{rank_of, standings_from_points};
use crate::domain::wind::{Wind, WindTable};
use crate::errors::domain::DomainError;

/// One row per player per round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round_number: u32,
    pub round_wind: Wind,
    pub winner_wind: Wind,
    pub player_name: String,
    pub player_wind: Wind,
    pub gross_points: i64,
    pub doublings: u32,
    pub calculated_points: i64,
    pub net_points: i64,
    /// Cumulative net points through this round.
    pub running_sum: i64,
    /// Rank among the running sums of this round.
    pub rank: usize,
    /// End of the previous round, or the session start for round 1.
    #[serde(with = "time::serde::rfc3339::option")]
    pub started_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub ended_at: Option<OffsetDateTime>,
}

/// Final table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRecord {
    pub player_wind: Wind,
    pub player_name: String,
    pub running_sum: i64,
    pub rank: usize,
}

/// Every settled round expanded to one record per seat, in round then wind order.
///
/// `started_at` is the start of the first round; later rounds start when
/// their predecessor ended.
pub fn round_history_table(
    game: &Game,
    started_at: Option<OffsetDateTime>,
) -> Result<Vec<RoundRecord>, DomainError> {
    let roster = game.require_players("round_history_table")?;
    let mut running = WindTable::<i64>::default();
    let mut records = Vec::with_capacity(game.rounds().len() * Wind::ALL.len());
    let mut round_start = started_at;

    for round in game.rounds() {
        let net = round.net_points()?;
        for wind in Wind::ALL {
            running[wind] = running[wind].checked_add(net[wind]).ok_or_else(|| {
                DomainError::overflow(format!("Running sum for {wind} out of range"))
            })?;
        }
        let points: Vec<(Wind, i64)> = running.iter().map(|(w, p)| (w, *p)).collect();
        let standings = standings_from_points(&points);

        for (wind, score) in round.scores().iter() {
            records.push(RoundRecord {
                round_number: round.number(),
                round_wind: round.round_wind(),
                winner_wind: round.winner(),
                player_name: roster[wind].name.clone(),
                player_wind: wind,
                gross_points: score.gross_points(),
                doublings: score.doublings(),
                calculated_points: score.calculated_points(),
                net_points: net[wind],
                running_sum: running[wind],
                rank: rank_of(&standings, &wind).unwrap_or(standings.len()),
                started_at: round_start,
                ended_at: round.ended_at(),
            });
        }
        round_start = round.ended_at();
    }
    Ok(records)
}

/// Standings after the last round, best first.
pub fn final_standings_table(game: &Game) -> Result<Vec<StandingRecord>, DomainError> {
    let roster = game.require_players("final_standings_table")?;
    Ok(game
        .standings()?
        .into_iter()
        .map(|s| StandingRecord {
            player_wind: s.key,
            player_name: roster[s.key].name.clone(),
            running_sum: s.points,
            rank: s.rank,
        })
        .collect())
}

/// Running sum of one seat after every round, for timeline displays.
pub fn running_points_by_round(records: &[RoundRecord], wind: Wind) -> Vec<(u32, i64)> {
    records
        .iter()
        .filter(|r| r.player_wind == wind)
        .map(|r| (r.round_number, r.running_sum))
        .collect()
}
