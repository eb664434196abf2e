//! Session service: drives one [`Game`] from player entry to the final table
//! and keeps the wall-clock metadata exporters need.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::config::SettlementLimits;
use crate::domain::{
    final_standings_table, round_history_table, Game, GameSnapshot, NetPoints, RoundInput,
    RoundRecord, RoundTransition, StandingRecord, Wind,
};
use crate::errors::domain::DomainError;

/// Result of one submitted round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub round_number: u32,
    pub round_wind: Wind,
    pub winner: Wind,
    pub net_points: NetPoints,
    /// `None` once the game is over.
    pub next_round_wind: Option<Wind>,
    pub game_over: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMetadata {
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub ended_at: Option<OffsetDateTime>,
    pub duration_seconds: Option<i64>,
    /// `"{h}h {m}m {s}s"`
    pub duration_text: Option<String>,
}

/// Owned copy of everything an exporter needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionExport {
    pub metadata: SessionMetadata,
    pub rounds: Vec<RoundRecord>,
    pub standings: Vec<StandingRecord>,
}

#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    started_at: OffsetDateTime,
    ended_at: Option<OffsetDateTime>,
}

impl Session {
    pub fn start<S: AsRef<str>>(
        names: &[S],
        limits: SettlementLimits,
        started_at: OffsetDateTime,
    ) -> Result<Self, DomainError> {
        let mut game = Game::new(limits);
        game.set_players(names)?;
        let players: Vec<&str> = names.iter().map(|n| n.as_ref()).collect();
        info!(?players, "Session started");
        Ok(Self {
            game,
            started_at,
            ended_at: None,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn is_finished(&self) -> bool {
        self.ended_at.is_some()
    }

    pub fn snapshot(&self) -> Result<GameSnapshot, DomainError> {
        GameSnapshot::from_game(&self.game)
    }

    /// Settle and commit one round, then finish the game or move the round wind.
    pub fn submit_round(
        &mut self,
        input: &RoundInput,
        at: OffsetDateTime,
    ) -> Result<RoundOutcome, DomainError> {
        let round = self.game.process_round_input(input)?;
        let round_number = round.number();
        let round_wind = round.round_wind();
        let net_points = round.net_points()?;
        self.game.record_round_end(at)?;
        info!(
            round = round_number,
            round_wind = %round_wind,
            winner = %input.winner,
            net = ?net_points.values().collect::<Vec<_>>(),
            "Round committed"
        );

        let next_round_wind = match self.game.conclude_round(input.winner)? {
            RoundTransition::GameOver => {
                self.ended_at = Some(at);
                info!(rounds_played = round_number, "Game finished");
                None
            }
            RoundTransition::NextRound { round_wind: next } => {
                debug!(
                    round = round_number,
                    from = %round_wind,
                    to = %next,
                    "Round wind transition"
                );
                Some(next)
            }
        };

        Ok(RoundOutcome {
            round_number,
            round_wind,
            winner: input.winner,
            net_points,
            next_round_wind,
            game_over: next_round_wind.is_none(),
        })
    }

    /// Start over with a fresh game under the same limits.
    pub fn reset<S: AsRef<str>>(
        &mut self,
        names: &[S],
        at: OffsetDateTime,
    ) -> Result<(), DomainError> {
        let mut game = Game::new(*self.game.limits());
        game.set_players(names)?;
        info!(previous_rounds = self.game.rounds().len(), "Session reset");
        self.game = game;
        self.started_at = at;
        self.ended_at = None;
        Ok(())
    }

    pub fn metadata(&self) -> SessionMetadata {
        let duration_seconds = self
            .ended_at
            .map(|end| (end - self.started_at).whole_seconds());
        SessionMetadata {
            started_at: self.started_at,
            ended_at: self.ended_at,
            duration_seconds,
            duration_text: duration_seconds.map(duration_text),
        }
    }

    pub fn export(&self) -> Result<SessionExport, DomainError> {
        Ok(SessionExport {
            metadata: self.metadata(),
            rounds: round_history_table(&self.game, Some(self.started_at))?,
            standings: final_standings_table(&self.game)?,
        })
    }
}

/// `3725` → `"1h 2m 5s"`. Negative spans are clamped to zero.
pub fn duration_text(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let (h, rem) = (seconds / 3600, seconds % 3600);
    format!("{h}h {}m {}s", rem / 60, rem % 60)
}
