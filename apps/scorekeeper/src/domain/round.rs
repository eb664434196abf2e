use time::OffsetDateTime;

use crate::domain::settlement::{settle, NetPoints};
use crate::domain::score::Score;
use crate::domain::wind::{Wind, WindTable};
use crate::errors::domain::{DomainError, StateKind};

/// A settled round. Scores reference seats by wind; player records live in
/// the game's roster.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    number: u32,
    round_wind: Wind,
    winner: Wind,
    scores: WindTable<Score>,
    ended_at: Option<OffsetDateTime>,
}

impl Round {
    /// Settle `scores` and build the immutable round record.
    pub fn settle(
        number: u32,
        round_wind: Wind,
        winner: Wind,
        mut scores: WindTable<Score>,
    ) -> Result<(Self, NetPoints), DomainError> {
        let net = settle(round_wind, winner, &scores)?;
        for wind in Wind::ALL {
            scores[wind].record_net_points(net[wind]);
        }
        let round = Self {
            number,
            round_wind,
            winner,
            scores,
            ended_at: None,
        };
        Ok((round, net))
    }

    /// 1-based position in the game.
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn round_wind(&self) -> Wind {
        self.round_wind
    }

    pub fn winner(&self) -> Wind {
        self.winner
    }

    pub fn scores(&self) -> &WindTable<Score> {
        &self.scores
    }

    pub fn score(&self, wind: Wind) -> &Score {
        &self.scores[wind]
    }

    /// Net points of every seat.
    pub fn net_points(&self) -> Result<NetPoints, DomainError> {
        let mut net = NetPoints::default();
        for (wind, score) in self.scores.iter() {
            net[wind] = score.net_points()?;
        }
        Ok(net)
    }

    pub fn ended_at(&self) -> Option<OffsetDateTime> {
        self.ended_at
    }

    /// Stamp the end time. Only the first stamp is accepted.
    pub fn record_end(&mut self, at: OffsetDateTime) -> Result<(), DomainError> {
        if self.ended_at.is_some() {
            return Err(DomainError::state(
                StateKind::RoundAlreadyEnded,
                format!("Round {} already has an end time", self.number),
            ));
        }
        self.ended_at = Some(at);
        Ok(())
    }
}
