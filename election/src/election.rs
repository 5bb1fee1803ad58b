//! The election engine. Wires the vote ledger and the tamper monitor
//! behind a single lock so admissions, seals, and audits are linearized.

use std::collections::BTreeMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use tally_ledger::{
    Admission, Block, ChainSummary, Ledger, LedgerConfig, LedgerError, Vote,
};
use tally_monitor::{IntegrityReport, SuspiciousActivity, TamperMonitor, TamperStats};
use tally_types::{CandidateId, Timestamp, VoterId};
use tally_utils::StatsCounter;

const VOTES_ADMITTED: &str = "votes_admitted";
const VOTES_REJECTED: &str = "votes_rejected";
const BLOCKS_SEALED: &str = "blocks_sealed";

/// Combined report for one election: chain shape, per-candidate tallies,
/// and tamper statistics in a single serializable value.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ElectionReport {
    pub chain: ChainSummary,
    pub results: BTreeMap<CandidateId, u64>,
    pub tamper: TamperStats,
}

/// Ledger and monitor live under one lock: the monitor's screen and
/// pattern scans read chain state, so the pair must move together.
struct Inner {
    ledger: Ledger,
    monitor: TamperMonitor,
}

/// A running election.
///
/// This is the embedder-facing entry point. All clock capture happens
/// here; the inner ledger and monitor take explicit timestamps so their
/// behavior stays deterministic under test.
pub struct Election {
    inner: RwLock<Inner>,
    counters: StatsCounter,
}

impl Election {
    /// Open a fresh election. Seals the genesis block before returning.
    pub fn new(config: LedgerConfig) -> Result<Self, LedgerError> {
        let ledger = Ledger::new(config, Timestamp::now())?;
        tracing::info!(
            difficulty = ledger.config().difficulty,
            max_votes_per_block = ledger.config().max_votes_per_block,
            "election opened"
        );
        Ok(Self {
            inner: RwLock::new(Inner {
                ledger,
                monitor: TamperMonitor::new(),
            }),
            counters: StatsCounter::new(&[VOTES_ADMITTED, VOTES_REJECTED, BLOCKS_SEALED]),
        })
    }

    /// Reopen an election from previously persisted blocks.
    ///
    /// The monitor's activity log is not persisted, so the restored
    /// election starts with an empty log. Run [`verify_chain`] or
    /// [`verify_integrity`] after restoring to audit the loaded chain.
    ///
    /// [`verify_chain`]: Election::verify_chain
    /// [`verify_integrity`]: Election::verify_integrity
    pub fn restore(config: LedgerConfig, blocks: Vec<Block>) -> Result<Self, LedgerError> {
        let ledger = Ledger::restore(config, blocks)?;
        tracing::info!(
            blocks = ledger.blocks().len(),
            "election restored from persisted chain"
        );
        Ok(Self {
            inner: RwLock::new(Inner {
                ledger,
                monitor: TamperMonitor::new(),
            }),
            counters: StatsCounter::new(&[VOTES_ADMITTED, VOTES_REJECTED, BLOCKS_SEALED]),
        })
    }

    /// Submit one vote: screen it, admit it, then scan for patterns.
    ///
    /// Screen rejections and ledger rejections both surface as
    /// [`Admission::Rejected`]; an `Err` means sealing itself failed and
    /// the vote was not admitted.
    pub fn submit_vote(&self, vote: Vote) -> Result<Admission, LedgerError> {
        let now = Timestamp::now();
        let mut inner = self.inner.write().unwrap();
        let Inner { ledger, monitor } = &mut *inner;

        if let Some(reason) = monitor.screen(ledger, &vote, now) {
            self.counters.increment(VOTES_REJECTED);
            return Ok(Admission::Rejected { reason });
        }

        let admission = ledger.admit_vote(vote.clone(), now)?;
        match &admission {
            Admission::Accepted { sealed, .. } => {
                self.counters.increment(VOTES_ADMITTED);
                if *sealed {
                    self.counters.increment(BLOCKS_SEALED);
                }
                monitor.scan_patterns(ledger, &vote, now);
            }
            Admission::Rejected { reason } => {
                self.counters.increment(VOTES_REJECTED);
                monitor.observe_rejection(&vote, reason, now);
            }
        }
        Ok(admission)
    }

    /// Seal the pending batch even if it is not full. Returns the new
    /// block's index, or `None` when there was nothing pending.
    pub fn force_seal(&self) -> Result<Option<u64>, LedgerError> {
        let now = Timestamp::now();
        let mut inner = self.inner.write().unwrap();
        let sealed = inner.ledger.force_seal(now)?;
        if sealed.is_some() {
            self.counters.increment(BLOCKS_SEALED);
        }
        Ok(sealed)
    }

    /// Look up the vote a voter has on record, sealed or pending.
    pub fn find_vote_by_voter(&self, voter: &VoterId) -> Option<Vote> {
        self.inner.read().unwrap().ledger.find_vote_by_voter(voter).cloned()
    }

    /// All sealed votes in chain order.
    pub fn all_votes(&self) -> Vec<Vote> {
        self.inner.read().unwrap().ledger.all_votes()
    }

    /// A snapshot of the full chain, genesis included.
    pub fn blocks(&self) -> Vec<Block> {
        self.inner.read().unwrap().ledger.blocks().to_vec()
    }

    /// Number of admitted votes not yet sealed into a block.
    pub fn pending_count(&self) -> usize {
        self.inner.read().unwrap().ledger.pending_count()
    }

    /// Re-derive every block hash and check the chain links up.
    pub fn verify_chain(&self) -> bool {
        self.inner.read().unwrap().ledger.verify_chain()
    }

    /// Chain shape statistics.
    pub fn chain_summary(&self) -> ChainSummary {
        self.inner.read().unwrap().ledger.chain_summary()
    }

    /// Sealed vote tallies per candidate.
    pub fn results(&self) -> BTreeMap<CandidateId, u64> {
        self.inner.read().unwrap().ledger.vote_counts()
    }

    /// Full integrity audit: chain violations, digest collisions, and
    /// future-dated votes.
    pub fn verify_integrity(&self) -> IntegrityReport {
        let now = Timestamp::now();
        let inner = self.inner.read().unwrap();
        inner.monitor.verify_integrity(&inner.ledger, now)
    }

    /// A snapshot of the recorded suspicious activities.
    pub fn activities(&self) -> Vec<SuspiciousActivity> {
        self.inner.read().unwrap().monitor.activities().to_vec()
    }

    /// Activity totals, severity breakdown, and last-hour count.
    pub fn tamper_stats(&self) -> TamperStats {
        let now = Timestamp::now();
        self.inner.read().unwrap().monitor.stats(now)
    }

    /// Drop recorded activities older than `hours`.
    pub fn prune_activities(&self, hours: u64) {
        let now = Timestamp::now();
        self.inner.write().unwrap().monitor.prune_older_than(hours, now);
    }

    /// Facade counters in registration order.
    pub fn counters(&self) -> Vec<(&'static str, u64)> {
        self.counters.snapshot()
    }

    /// Everything an operator dashboard needs in one call.
    pub fn election_report(&self) -> ElectionReport {
        let now = Timestamp::now();
        let inner = self.inner.read().unwrap();
        ElectionReport {
            chain: inner.ledger.chain_summary(),
            results: inner.ledger.vote_counts(),
            tamper: inner.monitor.stats(now),
        }
    }
}
