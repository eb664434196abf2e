//! JSON Lines round scripts.
//!
//! The first non-blank line names the players, every following line is one
//! round:
//!
//! ```text
//! {"players": ["Ann", "Ben", "Cid", "Dee"], "started_at": "2024-06-01T18:00:00Z"}
//! {"scores": [{"wind": "EAST", "gross_points": 10}, ...], "winner": "EAST"}
//! ```
//!
//! Lines starting with `#` are comments.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use scorekeeper::{AppError, RoundEntry, RoundInput, Session, SettlementLimits, Wind};
use serde::Deserialize;
use time::OffsetDateTime;
use tracing::debug;

use crate::error::ToolError;

#[derive(Debug, Deserialize)]
struct ScriptHeader {
    players: Vec<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    started_at: Option<OffsetDateTime>,
}

#[derive(Debug, Deserialize)]
struct ScriptRound {
    scores: Vec<RoundEntry>,
    winner: Option<Wind>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    ended_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    /// 1-based line in the source file.
    pub line: usize,
    pub input: RoundInput,
    pub ended_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    pub players: Vec<String>,
    pub started_at: Option<OffsetDateTime>,
    pub rounds: Vec<ScriptLine>,
}

pub fn load_script<P: AsRef<Path>>(path: P) -> Result<Script, ToolError> {
    let file = File::open(path)?;
    parse_script(BufReader::new(file))
}

pub fn parse_script<R: BufRead>(reader: R) -> Result<Script, ToolError> {
    let mut header: Option<ScriptHeader> = None;
    let mut rounds = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        if header.is_none() {
            let parsed: ScriptHeader = serde_json::from_str(text)
                .map_err(|e| AppError::script(line_no, format!("Expected player header: {e}")))?;
            header = Some(parsed);
            continue;
        }

        let round: ScriptRound = serde_json::from_str(text)
            .map_err(|e| AppError::script(line_no, format!("Expected round: {e}")))?;
        let input = RoundInput::try_from_entries(round.scores, round.winner)
            .map_err(|e| AppError::script_rejected(line_no, e))?;
        rounds.push(ScriptLine {
            line: line_no,
            input,
            ended_at: round.ended_at,
        });
    }

    let header = header.ok_or_else(|| AppError::script(0, "Script has no player header"))?;
    Ok(Script {
        players: header.players,
        started_at: header.started_at,
        rounds,
    })
}

/// Replay every round of `script` into a fresh session.
///
/// Missing timestamps are taken from the clock. The first failing round
/// aborts the replay.
pub fn replay(script: &Script, limits: SettlementLimits) -> Result<Session, ToolError> {
    let started_at = script.started_at.unwrap_or_else(OffsetDateTime::now_utc);
    let mut session = Session::start(&script.players, limits, started_at)
        .map_err(|e| AppError::script_rejected(0, e))?;

    for round in &script.rounds {
        let at = round.ended_at.unwrap_or_else(OffsetDateTime::now_utc);
        let outcome = session
            .submit_round(&round.input, at)
            .map_err(|e| AppError::script_rejected(round.line, e))?;
        debug!(line = round.line, round = outcome.round_number, "Replayed round");
    }
    Ok(session)
}
