//! Worked settlement scenarios.

use crate::config::SettlementLimits;
use crate::domain::rules::{is_game_over, next_round_wind};
use crate::domain::{settle, Score, ScoreInput, Wind, WindTable};
use crate::errors::domain::{DomainError, StateKind};

fn scores(values: [(i64, i64); 4]) -> WindTable<Score> {
    let limits = SettlementLimits::default();
    WindTable::from_fn(|wind| {
        let (gross, doublings) = values[wind.index()];
        Score::from_input(wind, ScoreInput::new(gross, doublings), &limits).unwrap()
    })
}

/// East 10/0, South 5/0, West 5/0, North 0/0.
fn fixture() -> WindTable<Score> {
    scores([(10, 0), (5, 0), (5, 0), (0, 0)])
}

#[test]
fn winner_holding_round_wind_collects_double_from_everyone() {
    let net = settle(Wind::East, Wind::East, &fixture()).unwrap();

    // Each loser pays 2 × 10 to East; S-W cancel; N pays S and W 5 each
    assert_eq!(net[Wind::East], 60);
    assert_eq!(net[Wind::South], -15);
    assert_eq!(net[Wind::West], -15);
    assert_eq!(net[Wind::North], -30);
    assert_eq!(net.values().sum::<i64>(), 0);
}

#[test]
fn round_wind_moves_the_doubling_to_other_pairs() {
    let net = settle(Wind::South, Wind::East, &fixture()).unwrap();

    // E-S doubled (20), E-W and E-N single (10 each); S-N doubled (10), W-N single (5)
    assert_eq!(net[Wind::East], 40);
    assert_eq!(net[Wind::South], -20 + 10);
    assert_eq!(net[Wind::West], -10 + 5);
    assert_eq!(net[Wind::North], -10 - 10 - 5);
    assert_eq!(net.values().sum::<i64>(), 0);
}

#[test]
fn winner_with_zero_points_collects_nothing() {
    let net = settle(Wind::West, Wind::North, &fixture()).unwrap();

    assert_eq!(net[Wind::North], 0);
    // E-S: S pays 5; E-W: ×2, W pays 10; S-W: ×2, even
    assert_eq!(net[Wind::East], 5 + 10);
    assert_eq!(net[Wind::South], -5);
    assert_eq!(net[Wind::West], -10);
}

#[test]
fn doublings_scale_the_winner_payment() {
    // North wins 3 doubled three times = 24, round wind West
    let s = scores([(0, 0), (0, 0), (0, 0), (3, 3)]);
    let net = settle(Wind::West, Wind::North, &s).unwrap();
    assert_eq!(net.into_array(), [-24, -24, -48, 96]);
}

#[test]
fn settlement_leaves_scores_unsettled() {
    let s = fixture();
    settle(Wind::East, Wind::East, &s).unwrap();
    assert!(s.values().all(|score| !score.is_settled()));
}

#[test]
fn round_wind_advance_cases() {
    assert_eq!(next_round_wind(Wind::East, Wind::East).unwrap(), Wind::East);
    assert_eq!(next_round_wind(Wind::East, Wind::South).unwrap(), Wind::South);
    assert_eq!(next_round_wind(Wind::South, Wind::East).unwrap(), Wind::West);
    assert_eq!(next_round_wind(Wind::West, Wind::South).unwrap(), Wind::North);
    assert_eq!(next_round_wind(Wind::North, Wind::North).unwrap(), Wind::North);
    assert!(matches!(
        next_round_wind(Wind::North, Wind::East),
        Err(DomainError::State(StateKind::RoundWindExhausted, _))
    ));
}

#[test]
fn game_over_cases() {
    assert!(is_game_over(Wind::North, Wind::South));
    assert!(!is_game_over(Wind::North, Wind::North));
    assert!(!is_game_over(Wind::East, Wind::North));
}
