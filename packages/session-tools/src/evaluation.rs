//! Cross-session tables for dashboards.
//!
//! Sessions are identified by the first eight hex digits of the xxh3 hash of
//! their directory name, which stays stable when the same exports are
//! evaluated again.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use scorekeeper::domain::{standings_from_points, winner_points_for_rank};
use scorekeeper::{AppError, DomainError, SessionExport, Wind, WindTable};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{info, warn};
use xxhash_rust::xxh3::xxh3_64;

use crate::error::ToolError;
use crate::output::{read_session, write_csv};

pub const SESSIONS_FILE: &str = "sessions.csv";
pub const GAMES_FILE: &str = "games.csv";
pub const POINTS_FILE: &str = "points.csv";
pub const LEADERBOARD_FILE: &str = "leaderboard.csv";

#[derive(Debug, Clone)]
pub struct LoadedSession {
    pub id: String,
    pub name: String,
    pub export: SessionExport,
}

pub fn session_id(name: &str) -> String {
    let digest = hex::encode(xxh3_64(name.as_bytes()).to_be_bytes());
    digest[..8].to_string()
}

/// Load every session directory under `input_dir`, sorted by name.
///
/// Directories that cannot be read are returned separately instead of
/// failing the whole run.
pub fn load_sessions(
    input_dir: &Path,
) -> Result<(Vec<LoadedSession>, Vec<(PathBuf, ToolError)>), ToolError> {
    let mut dirs: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();

    let mut loaded = Vec::new();
    let mut skipped = Vec::new();
    for dir in dirs {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match read_session(&dir) {
            Ok(export) => loaded.push(LoadedSession {
                id: session_id(&name),
                name,
                export,
            }),
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "Skipping unreadable session");
                skipped.push((dir, e));
            }
        }
    }
    Ok((loaded, skipped))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRow {
    pub session_id: String,
    pub session_name: String,
    pub started_at: String,
    pub ended_at: Option<String>,
    pub duration_seconds: Option<i64>,
    pub rounds: usize,
    pub east_player: String,
    pub south_player: String,
    pub west_player: String,
    pub north_player: String,
    pub east_winner_points: u32,
    pub south_winner_points: u32,
    pub west_winner_points: u32,
    pub north_winner_points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRow {
    pub session_id: String,
    pub round_number: u32,
    pub round_wind: Wind,
    pub winner_wind: Wind,
    pub started_at: Option<String>,
    pub ended_at: Option<String>,
    pub duration_seconds: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsRow {
    pub session_id: String,
    pub round_number: u32,
    pub player_name: String,
    pub player_wind: Wind,
    pub gross_points: i64,
    pub doublings: u32,
    pub calculated_points: i64,
    pub net_points: i64,
    pub running_sum: i64,
    pub rank: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub player_name: String,
    pub sessions: u32,
    pub winner_points: u32,
    pub net_points: i64,
    pub first_places: u32,
}

#[derive(Debug, Clone, Default)]
pub struct EvaluationTables {
    pub sessions: Vec<SessionRow>,
    pub games: Vec<GameRow>,
    pub points: Vec<PointsRow>,
    pub leaderboard: Vec<LeaderboardRow>,
}

#[derive(Default)]
struct PlayerTally {
    sessions: u32,
    winner_points: u32,
    net_points: i64,
    first_places: u32,
}

pub fn build_tables(sessions: &[LoadedSession]) -> Result<EvaluationTables, ToolError> {
    let mut tables = EvaluationTables::default();
    let mut tallies: BTreeMap<String, PlayerTally> = BTreeMap::new();

    for session in sessions {
        let export = &session.export;
        let mut players: WindTable<String> = WindTable::default();
        let mut winner_points: WindTable<u32> = WindTable::default();

        for row in &export.standings {
            let awarded = winner_points_for_rank(row.rank);
            players[row.player_wind] = row.player_name.clone();
            winner_points[row.player_wind] = awarded;

            let tally = tallies.entry(row.player_name.clone()).or_default();
            tally.sessions += 1;
            tally.winner_points += awarded;
            tally.net_points = tally
                .net_points
                .checked_add(row.running_sum)
                .ok_or_else(|| {
                    DomainError::overflow(format!(
                        "Net points of {} out of range",
                        row.player_name
                    ))
                })?;
            if row.rank == 1 {
                tally.first_places += 1;
            }
        }

        let [east_player, south_player, west_player, north_player] = players.into_array();
        let [east_wp, south_wp, west_wp, north_wp] = winner_points.into_array();
        tables.sessions.push(SessionRow {
            session_id: session.id.clone(),
            session_name: session.name.clone(),
            started_at: format_time(export.metadata.started_at)?,
            ended_at: export.metadata.ended_at.map(format_time).transpose()?,
            duration_seconds: export.metadata.duration_seconds,
            rounds: export.rounds.len() / Wind::ALL.len(),
            east_player,
            south_player,
            west_player,
            north_player,
            east_winner_points: east_wp,
            south_winner_points: south_wp,
            west_winner_points: west_wp,
            north_winner_points: north_wp,
        });

        for record in &export.rounds {
            if record.player_wind == Wind::East {
                tables.games.push(GameRow {
                    session_id: session.id.clone(),
                    round_number: record.round_number,
                    round_wind: record.round_wind,
                    winner_wind: record.winner_wind,
                    started_at: record.started_at.map(format_time).transpose()?,
                    ended_at: record.ended_at.map(format_time).transpose()?,
                    duration_seconds: record
                        .started_at
                        .zip(record.ended_at)
                        .map(|(start, end)| (end - start).whole_seconds()),
                });
            }
            tables.points.push(PointsRow {
                session_id: session.id.clone(),
                round_number: record.round_number,
                player_name: record.player_name.clone(),
                player_wind: record.player_wind,
                gross_points: record.gross_points,
                doublings: record.doublings,
                calculated_points: record.calculated_points,
                net_points: record.net_points,
                running_sum: record.running_sum,
                rank: record.rank,
            });
        }
    }

    // Rank by winner points; net points break ties, then name order
    let mut ordered: Vec<(String, PlayerTally)> = tallies.into_iter().collect();
    ordered.sort_by(|a, b| {
        b.1.winner_points
            .cmp(&a.1.winner_points)
            .then(b.1.net_points.cmp(&a.1.net_points))
    });
    let keyed: Vec<(usize, i64)> = ordered
        .iter()
        .enumerate()
        .map(|(idx, (_, t))| (idx, i64::from(t.winner_points)))
        .collect();
    for standing in standings_from_points(&keyed) {
        let (name, tally) = &ordered[standing.key];
        tables.leaderboard.push(LeaderboardRow {
            rank: standing.rank,
            player_name: name.clone(),
            sessions: tally.sessions,
            winner_points: tally.winner_points,
            net_points: tally.net_points,
            first_places: tally.first_places,
        });
    }

    Ok(tables)
}

/// Write the four tables into `output_dir`.
pub fn write_tables(
    output_dir: &Path,
    tables: &EvaluationTables,
) -> Result<Vec<PathBuf>, ToolError> {
    fs::create_dir_all(output_dir)?;
    let paths = vec![
        write_csv(&output_dir.join(SESSIONS_FILE), &tables.sessions, false)?,
        write_csv(&output_dir.join(GAMES_FILE), &tables.games, false)?,
        write_csv(&output_dir.join(POINTS_FILE), &tables.points, false)?,
        write_csv(&output_dir.join(LEADERBOARD_FILE), &tables.leaderboard, false)?,
    ];
    info!(
        sessions = tables.sessions.len(),
        players = tables.leaderboard.len(),
        "Evaluation tables written"
    );
    Ok(paths)
}

fn format_time(at: OffsetDateTime) -> Result<String, ToolError> {
    at.format(&Rfc3339).map_err(|e| ToolError::App(AppError::from(e)))
}
