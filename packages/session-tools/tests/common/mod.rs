#![allow(dead_code)]

use scorekeeper::{Session, SettlementLimits};
use session_tools::script::{parse_script, replay};

#[ctor::ctor]
fn init_logging() {
    scorekeeper_test_support::logging::init();
}

/// Three rounds: East defends, South takes the wind, North wins under South.
pub const SCRIPT: &str = r#"{"players": ["Ann", "Ben", "Cid", "Dee"], "started_at": "2024-06-01T18:00:00Z"}
{"scores": [{"wind": "EAST", "gross_points": 10}, {"wind": "SOUTH", "gross_points": 5}, {"wind": "WEST", "gross_points": 5}, {"wind": "NORTH", "gross_points": 0}], "winner": "EAST", "ended_at": "2024-06-01T18:20:00Z"}
{"scores": [{"wind": "EAST", "gross_points": 0}, {"wind": "SOUTH", "gross_points": 6, "doublings": 1}, {"wind": "WEST", "gross_points": 0}, {"wind": "NORTH", "gross_points": 0}], "winner": "SOUTH", "ended_at": "2024-06-01T18:45:00Z"}
{"scores": [{"wind": "EAST", "gross_points": 4}, {"wind": "SOUTH", "gross_points": 0}, {"wind": "WEST", "gross_points": 2}, {"wind": "NORTH", "gross_points": 8}], "winner": "NORTH", "ended_at": "2024-06-01T19:10:00Z"}
"#;

pub fn scripted_session() -> Session {
    let script = parse_script(SCRIPT.as_bytes()).expect("valid script");
    replay(&script, SettlementLimits::default()).expect("replay succeeds")
}
