pub mod settlement;

pub use settlement::SettlementLimits;
