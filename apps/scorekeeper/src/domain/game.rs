//! Game state and standings tracker.
//!
//! Lifecycle: `AwaitingPlayers → InProgress → Finished`.
//! After each [`Game::process_round_input`] the caller either finishes the
//! game or advances the round wind; [`Game::conclude_round`] does both checks
//! in the required order.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::config::SettlementLimits;
use crate::domain::player::{roster_from_names, Roster};
use crate::domain::round::Round;
use crate::domain::rules::{is_game_over, next_round_wind};
use crate::domain::score::Score;
use crate::domain::settlement::RoundInput;
use crate::domain::standings::{standings_from_points, Standing};
use crate::domain::wind::{Wind, WindTable};
use crate::errors::domain::{DomainError, StateKind};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No players bound yet.
    AwaitingPlayers,
    /// Rounds are being played.
    InProgress,
    /// Round wind was lost by North; read-only from here on.
    Finished,
}

/// What happened after a round was concluded.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RoundTransition {
    /// Play continues with this round wind.
    NextRound { round_wind: Wind },
    /// The game is over.
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Game {
    phase: GamePhase,
    roster: Option<Roster>,
    rounds: Vec<Round>,
    round_wind: Wind,
    limits: SettlementLimits,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(SettlementLimits::default())
    }
}

impl Game {
    pub fn new(limits: SettlementLimits) -> Self {
        Self {
            phase: GamePhase::AwaitingPlayers,
            roster: None,
            rounds: Vec::new(),
            round_wind: Wind::East,
            limits,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn limits(&self) -> &SettlementLimits {
        &self.limits
    }

    /// Wind currently holding the doubling bonus.
    pub fn round_wind(&self) -> Wind {
        self.round_wind
    }

    /// 1-based number of the round about to be played.
    pub fn current_round_number(&self) -> u32 {
        self.rounds.len() as u32 + 1
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn players(&self) -> Option<&Roster> {
        self.roster.as_ref()
    }

    pub fn require_players(&self, ctx: &'static str) -> Result<&Roster, DomainError> {
        self.roster.as_ref().ok_or_else(|| {
            DomainError::state(
                StateKind::PlayersNotSet,
                format!("Players must be set ({ctx})"),
            )
        })
    }

    /// Bind four names to East..North. Replaces an earlier set of names as
    /// long as no round has been played.
    pub fn set_players<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), DomainError> {
        if !self.rounds.is_empty() || self.phase == GamePhase::Finished {
            return Err(DomainError::state(
                StateKind::PlayersLocked,
                "Players cannot change after the first round",
            ));
        }
        let roster = roster_from_names(names)?;
        self.roster = Some(roster);
        self.round_wind = Wind::East;
        self.phase = GamePhase::InProgress;
        Ok(())
    }

    /// Validate, settle and commit one round.
    ///
    /// Either the whole round is applied (scores settled, player totals
    /// updated, round appended) or nothing changes.
    pub fn process_round_input(&mut self, input: &RoundInput) -> Result<&Round, DomainError> {
        self.require_in_progress("process_round_input")?;
        // The roster has a player on every wind, so any winner wind is seated.
        let roster = self.require_players("process_round_input")?;
        let scores = WindTable::try_from_fn(|wind| {
            Score::from_input(wind, input.scores[wind], &self.limits)
        })?;

        let (round, net) = Round::settle(
            self.current_round_number(),
            self.round_wind,
            input.winner,
            scores,
        )?;

        let mut totals = WindTable::from_fn(|wind| roster[wind].points);
        for wind in Wind::ALL {
            totals[wind] = totals[wind].checked_add(net[wind]).ok_or_else(|| {
                DomainError::overflow(format!("Total points for {wind} out of range"))
            })?;
        }

        // Commit
        if let Some(roster) = self.roster.as_mut() {
            for wind in Wind::ALL {
                roster[wind].points = totals[wind];
            }
        }
        self.rounds.push(round);
        Ok(&self.rounds[self.rounds.len() - 1])
    }

    /// Whether a win by `winner` in the current round wind ends the game.
    /// Must be asked before [`Game::start_new_round`] for the same result.
    pub fn is_game_over(&self, winner: Wind) -> bool {
        is_game_over(self.round_wind, winner)
    }

    /// Apply the round-wind-advance rule for a round won by `winner`.
    pub fn start_new_round(&mut self, winner: Wind) -> Result<Wind, DomainError> {
        self.require_in_progress("start_new_round")?;
        self.round_wind = next_round_wind(self.round_wind, winner)?;
        Ok(self.round_wind)
    }

    /// Finish the game or advance the round wind after a round won by `winner`.
    pub fn conclude_round(&mut self, winner: Wind) -> Result<RoundTransition, DomainError> {
        self.require_in_progress("conclude_round")?;
        if self.is_game_over(winner) {
            self.phase = GamePhase::Finished;
            return Ok(RoundTransition::GameOver);
        }
        let round_wind = self.start_new_round(winner)?;
        Ok(RoundTransition::NextRound { round_wind })
    }

    /// Stamp the end time of the most recent round.
    pub fn record_round_end(&mut self, at: OffsetDateTime) -> Result<(), DomainError> {
        let round = self.rounds.last_mut().ok_or_else(|| {
            DomainError::validation_other("No round has been played yet")
        })?;
        round.record_end(at)
    }

    /// Current cumulative points per seat.
    pub fn totals(&self) -> Result<WindTable<i64>, DomainError> {
        let roster = self.require_players("totals")?;
        Ok(roster.map(|_, player| player.points))
    }

    /// Current ranking of all seats.
    pub fn standings(&self) -> Result<Vec<Standing<Wind>>, DomainError> {
        let totals = self.totals()?;
        let points: Vec<(Wind, i64)> = totals.iter().map(|(w, p)| (w, *p)).collect();
        Ok(standings_from_points(&points))
    }

    fn require_in_progress(&self, ctx: &'static str) -> Result<(), DomainError> {
        match self.phase {
            GamePhase::InProgress => Ok(()),
            GamePhase::AwaitingPlayers => Err(DomainError::state(
                StateKind::PlayersNotSet,
                format!("Players must be set ({ctx})"),
            )),
            GamePhase::Finished => Err(DomainError::state(
                StateKind::GameFinished,
                format!("Game is finished ({ctx})"),
            )),
        }
    }
}
