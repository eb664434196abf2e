use time::macros::datetime;

use crate::domain::history::running_points_by_round;
use crate::domain::{
    final_standings_table, round_history_table, Game, RoundInput, ScoreInput, Wind, WindTable,
};

fn input(values: [(i64, i64); 4], winner: Wind) -> RoundInput {
    RoundInput::new(
        WindTable::from_fn(|wind| {
            let (gross, doublings) = values[wind.index()];
            ScoreInput::new(gross, doublings)
        }),
        winner,
    )
}

fn two_round_game() -> Game {
    let mut game = Game::default();
    game.set_players(&["Ann", "Ben", "Cid", "Dee"]).unwrap();
    for round in [
        input([(10, 0), (5, 0), (5, 0), (0, 0)], Wind::East),
        input([(0, 0), (6, 1), (0, 0), (0, 0)], Wind::South),
    ] {
        game.process_round_input(&round).unwrap();
        game.conclude_round(round.winner).unwrap();
    }
    game
}

#[test]
fn one_row_per_player_per_round() {
    let records = round_history_table(&two_round_game(), None).unwrap();
    assert_eq!(records.len(), 8);

    let first = &records[0];
    assert_eq!(first.round_number, 1);
    assert_eq!(first.round_wind, Wind::East);
    assert_eq!(first.winner_wind, Wind::East);
    assert_eq!(first.player_name, "Ann");
    assert_eq!(first.player_wind, Wind::East);
    assert_eq!(first.gross_points, 10);
    assert_eq!(first.calculated_points, 10);
    assert_eq!(first.net_points, 60);
    assert_eq!(first.running_sum, 60);
    assert_eq!(first.rank, 1);

    let ben_round_two = &records[5];
    assert_eq!(ben_round_two.round_number, 2);
    assert_eq!(ben_round_two.player_name, "Ben");
    assert_eq!(ben_round_two.doublings, 1);
    assert_eq!(ben_round_two.calculated_points, 12);
    assert_eq!(ben_round_two.net_points, 48);
    assert_eq!(ben_round_two.running_sum, 33);
}

#[test]
fn ranks_follow_running_sums() {
    let records = round_history_table(&two_round_game(), None).unwrap();
    let round_one: Vec<usize> = records[..4].iter().map(|r| r.rank).collect();
    let round_two: Vec<usize> = records[4..].iter().map(|r| r.rank).collect();
    assert_eq!(round_one, vec![1, 2, 2, 4]);
    assert_eq!(round_two, vec![1, 2, 3, 4]);

    for round in records.chunks(4) {
        assert_eq!(round.iter().map(|r| r.running_sum).sum::<i64>(), 0);
    }
}

#[test]
fn final_table_matches_last_running_sums() {
    let game = two_round_game();
    let records = round_history_table(&game, None).unwrap();
    let table = final_standings_table(&game).unwrap();

    assert_eq!(table.len(), 4);
    assert_eq!(table[0].player_name, "Ann");
    assert_eq!(table[0].running_sum, 36);
    assert_eq!(table[3].player_wind, Wind::North);
    assert_eq!(table[3].running_sum, -42);

    for row in &table {
        let last = records
            .iter()
            .rev()
            .find(|r| r.player_wind == row.player_wind)
            .unwrap();
        assert_eq!(last.running_sum, row.running_sum);
        assert_eq!(last.rank, row.rank);
    }
}

#[test]
fn timeline_for_one_seat() {
    let records = round_history_table(&two_round_game(), None).unwrap();
    assert_eq!(
        running_points_by_round(&records, Wind::West),
        vec![(1, -15), (2, -27)]
    );
}

#[test]
fn empty_history() {
    let mut game = Game::default();
    assert!(round_history_table(&game, None).is_err());
    game.set_players(&["Ann", "Ben", "Cid", "Dee"]).unwrap();
    assert!(round_history_table(&game, None).unwrap().is_empty());
    assert!(final_standings_table(&game)
        .unwrap()
        .iter()
        .all(|row| row.rank == 1));
}

#[test]
fn rounds_start_when_the_previous_one_ended() {
    let start = datetime!(2024-06-01 18:00 UTC);
    let mut game = Game::default();
    game.set_players(&["Ann", "Ben", "Cid", "Dee"]).unwrap();
    let rounds = [
        (
            input([(10, 0), (5, 0), (5, 0), (0, 0)], Wind::East),
            datetime!(2024-06-01 18:20 UTC),
        ),
        (
            input([(0, 0), (6, 1), (0, 0), (0, 0)], Wind::South),
            datetime!(2024-06-01 18:45 UTC),
        ),
    ];
    for (round, ended) in &rounds {
        game.process_round_input(round).unwrap();
        game.record_round_end(*ended).unwrap();
        game.conclude_round(round.winner).unwrap();
    }

    let records = round_history_table(&game, Some(start)).unwrap();
    assert!(records[..4].iter().all(|r| r.started_at == Some(start)));
    assert!(records[..4].iter().all(|r| r.ended_at == Some(rounds[0].1)));
    assert!(records[4..].iter().all(|r| r.started_at == Some(rounds[0].1)));
    assert!(records[4..].iter().all(|r| r.ended_at == Some(rounds[1].1)));
}

#[test]
fn unstamped_rounds_have_no_times() {
    let records = round_history_table(&two_round_game(), None).unwrap();
    assert!(records
        .iter()
        .all(|r| r.started_at.is_none() && r.ended_at.is_none()));
}
