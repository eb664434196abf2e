pub mod session;

pub use session::{RoundOutcome, Session, SessionExport, SessionMetadata};
