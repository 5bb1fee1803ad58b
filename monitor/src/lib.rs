//! Tamper detection for the vote ledger.
//!
//! - **At-admission screening** of submissions (blank fields, duplicates)
//! - **Pattern scans** over the admitted history (rapid bursts, identical
//!   timestamps)
//! - **Integrity auditing** of the sealed chain plus digest and clock
//!   anomaly checks
//!
//! Heuristics, not cryptography: the monitor records what looks wrong and
//! leaves signature verification to an external collaborator.

pub mod activity;
pub mod integrity;
pub mod monitor;

pub use activity::{ActivityKind, Severity, SuspiciousActivity};
pub use integrity::{verify_integrity, IntegrityIssue, IntegrityReport};
pub use monitor::{SeverityCounts, TamperMonitor, TamperStats};
