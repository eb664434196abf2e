//! Property tests for pairwise settlement (pure domain).
//!
//! Properties tested:
//! - Net points always sum to zero
//! - The result does not depend on seat or pair order
//! - Every pair touching the round-wind seat is doubled
//! - The winner never loses points
//! - One extra doubling on every seat doubles every net value

use proptest::prelude::*;

use crate::config::SettlementLimits;
use crate::domain::rules::PAIRS;
use crate::domain::settlement::RoundInput;
use crate::domain::{settle, test_prelude, NetPoints, Score, ScoreInput, Wind, WindTable};

fn build(scores: &WindTable<ScoreInput>) -> WindTable<Score> {
    let limits = SettlementLimits::default();
    WindTable::from_fn(|wind| Score::from_input(wind, scores[wind], &limits).unwrap())
}

/// Independent reference: walks the pairs back to front with a caller-chosen rate.
fn oracle(calculated: [i64; 4], winner: Wind, rate: impl Fn(Wind, Wind) -> i64) -> [i64; 4] {
    let mut net = [0i64; 4];
    for &(a, b) in PAIRS.iter().rev() {
        let (ia, ib) = (a.index(), b.index());
        let m = rate(a, b);
        if a == winner {
            net[ia] += m * calculated[ia];
            net[ib] -= m * calculated[ia];
        } else if b == winner {
            net[ib] += m * calculated[ib];
            net[ia] -= m * calculated[ib];
        } else {
            let diff = m * (calculated[ia] - calculated[ib]);
            net[ia] += diff;
            net[ib] -= diff;
        }
    }
    net
}

fn calculated(scores: &WindTable<Score>) -> [i64; 4] {
    scores.map(|_, s| s.calculated_points()).into_array()
}

fn settle_input(round_wind: Wind, input: &RoundInput) -> NetPoints {
    settle(round_wind, input.winner, &build(&input.scores)).unwrap()
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: points are only transferred, never created
    #[test]
    fn prop_net_points_sum_to_zero(
        input in crate::domain::test_gens::round_input(),
        round_wind in crate::domain::test_gens::wind(),
    ) {
        let net = settle_input(round_wind, &input);
        prop_assert_eq!(net.values().sum::<i64>(), 0);
    }

    /// Property: matches a reference walking the pairs in reverse
    #[test]
    fn prop_matches_reverse_order_reference(
        input in crate::domain::test_gens::round_input(),
        round_wind in crate::domain::test_gens::wind(),
    ) {
        let scores = build(&input.scores);
        let net = settle(round_wind, input.winner, &scores).unwrap();
        let expected = oracle(calculated(&scores), input.winner, |a, b| {
            crate::domain::settlement::pair_multiplier(round_wind, a, b)
        });
        prop_assert_eq!(net.into_array(), expected);
    }

    /// Property: entry order in the submitted round does not matter
    #[test]
    fn prop_entry_order_is_irrelevant(
        (scores, entries) in crate::domain::test_gens::shuffled_entries(),
        winner in crate::domain::test_gens::wind(),
        round_wind in crate::domain::test_gens::wind(),
    ) {
        let input = RoundInput::try_from_entries(entries, Some(winner)).unwrap();
        prop_assert_eq!(&input.scores, &scores);

        let direct = settle_input(round_wind, &RoundInput::new(scores, winner));
        prop_assert_eq!(settle_input(round_wind, &input), direct);
    }

    /// Property: the round-wind seat settles every one of its pairs at double rate
    #[test]
    fn prop_round_wind_seat_is_doubled(
        input in crate::domain::test_gens::round_input(),
        round_wind in crate::domain::test_gens::wind(),
    ) {
        let scores = build(&input.scores);
        let net = settle(round_wind, input.winner, &scores).unwrap();
        let single = oracle(calculated(&scores), input.winner, |_, _| 1);

        prop_assert_eq!(net[round_wind], 2 * single[round_wind.index()]);
    }

    /// Property: the winner only receives
    #[test]
    fn prop_winner_never_loses(
        input in crate::domain::test_gens::round_input(),
        round_wind in crate::domain::test_gens::wind(),
    ) {
        let net = settle_input(round_wind, &input);
        prop_assert!(net[input.winner] >= 0);
    }

    /// Property: settlement is linear in calculated points
    #[test]
    fn prop_extra_doubling_doubles_net(
        input in crate::domain::test_gens::round_input(),
        round_wind in crate::domain::test_gens::wind(),
    ) {
        let bumped = input
            .scores
            .map(|_, s| ScoreInput::new(s.gross_points, s.doublings + 1));
        let base = settle_input(round_wind, &input);
        let doubled = settle_input(round_wind, &RoundInput::new(bumped, input.winner));

        for wind in Wind::ALL {
            prop_assert_eq!(doubled[wind], 2 * base[wind]);
        }
    }
}
