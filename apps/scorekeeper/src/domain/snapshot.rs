//! Read model for a scoreboard display.

use serde::Serialize;

use crate::domain::game::{Game, GamePhase};
use crate::domain::player::format_points;
use crate::domain::standings::rank_of;
use crate::domain::wind::Wind;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerLine {
    pub wind: Wind,
    pub name: String,
    pub points: i64,
    pub points_text: String,
    pub rank: usize,
    /// This seat currently holds the round wind.
    pub holds_round_wind: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub round_number: u32,
    pub round_wind: Wind,
    /// Players in seating order.
    pub players: Vec<PlayerLine>,
}

impl GameSnapshot {
    pub fn from_game(game: &Game) -> Result<Self, DomainError> {
        let roster = game.require_players("snapshot")?;
        let standings = game.standings()?;
        let players = roster
            .iter()
            .map(|(wind, player)| PlayerLine {
                wind,
                name: player.name.clone(),
                points: player.points,
                points_text: format_points(player.points),
                rank: rank_of(&standings, &wind).unwrap_or(standings.len()),
                holds_round_wind: wind == game.round_wind(),
            })
            .collect();
        Ok(Self {
            phase: game.phase(),
            round_number: game.current_round_number(),
            round_wind: game.round_wind(),
            players,
        })
    }
}
