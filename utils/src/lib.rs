//! Shared utilities for the tally ledger.

pub mod logging;
pub mod stats;

pub use logging::{init_test_tracing, init_tracing};
pub use stats::StatsCounter;
