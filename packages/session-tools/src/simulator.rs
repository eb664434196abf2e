//! Random sessions for exercising exporters and the evaluation pipeline.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use scorekeeper::{RoundInput, ScoreInput, Session, SettlementLimits, Wind, WindTable};
use time::{Duration, OffsetDateTime};
use tracing::debug;

use crate::error::ToolError;

const NAME_POOL: [&str; 8] = ["Ana", "Bo", "Cleo", "Dag", "Eli", "Fen", "Gus", "Hana"];

#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    /// Sessions still running after this many rounds are left unfinished.
    pub max_rounds: u32,
    pub max_gross: i64,
    pub max_doublings: i64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_rounds: 200,
            max_gross: 120,
            max_doublings: 4,
        }
    }
}

pub struct Simulator {
    rng: StdRng,
    limits: SettlementLimits,
    config: SimulationConfig,
}

impl Simulator {
    /// Deterministic when `seed` is given.
    pub fn new(seed: Option<u64>, limits: SettlementLimits, config: SimulationConfig) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self {
            rng,
            limits,
            config,
        }
    }

    /// Play one session from a random table of four until the game is over
    /// or the round cap is hit.
    pub fn simulate_session(&mut self, started_at: OffsetDateTime) -> Result<Session, ToolError> {
        let mut pool = NAME_POOL;
        pool.shuffle(&mut self.rng);
        let mut session = Session::start(&pool[..4], self.limits, started_at)?;

        let mut at = started_at;
        for _ in 0..self.config.max_rounds {
            at += Duration::minutes(self.rng.random_range(3..=20));
            let input = self.random_round();
            let outcome = session.submit_round(&input, at)?;
            if outcome.game_over {
                break;
            }
        }
        debug!(
            rounds = session.game().rounds().len(),
            finished = session.is_finished(),
            "Simulated session"
        );
        Ok(session)
    }

    /// Random scores that always fit the settlement limits.
    fn random_round(&mut self) -> RoundInput {
        let winner = Wind::ALL[self.rng.random_range(0..Wind::ALL.len())];
        let max_points = self.limits.max_calculated_points.max(1);
        // Keep 2^doublings within the cap so even a gross of 1 settles
        let max_doublings = self
            .config
            .max_doublings
            .min(i64::from(self.limits.max_doublings))
            .min(i64::from(max_points.ilog2()))
            .max(0);
        let scores = WindTable::from_fn(|wind| {
            let doublings = self.rng.random_range(0..=max_doublings);
            let max_gross = self.config.max_gross.min(max_points >> doublings).max(1);
            let gross = if wind == winner {
                self.rng.random_range(1..=max_gross)
            } else {
                self.rng.random_range(0..=max_gross / 2)
            };
            ScoreInput::new(gross, doublings)
        });
        RoundInput::new(scores, winner)
    }
}
