//! The append-only vote ledger: pending batch, sealed chain, voter index.
//!
//! Single-writer by construction: every mutation takes `&mut self`, so one
//! exclusive borrow serializes admissions, and no reader can observe a
//! block mid-seal. Embedders that share the ledger across threads wrap it
//! in their own lock domain.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tally_digest::compute_root;
use tally_seal::{find_seal, meets_difficulty, seal_digest, SealHeader};
use tally_types::{CandidateId, Digest, Timestamp, VoterId};

use crate::block::Block;
use crate::config::LedgerConfig;
use crate::error::{ChainViolation, LedgerError};
use crate::genesis::create_genesis_block;
use crate::verifier::{verify_vote, RejectReason};
use crate::vote::Vote;

/// Where the vote of a given voter currently lives.
#[derive(Clone, Copy, Debug)]
enum VoteLocation {
    Pending(usize),
    Sealed { block: usize, slot: usize },
}

/// The outcome of an admission attempt.
///
/// Rejection is a structured value, not an error: `Err` is reserved for
/// fatal conditions such as nonce-space exhaustion during sealing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Admission {
    Accepted {
        /// The block index the vote was sealed into, or will seal into
        /// once the batch fills.
        block_hint: u64,
        /// Whether this admission triggered a seal.
        sealed: bool,
    },
    Rejected {
        reason: RejectReason,
    },
}

/// Summary statistics for the chain.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChainSummary {
    pub chain_length: u64,
    pub total_sealed_votes: u64,
    pub pending_vote_count: u64,
    pub last_block_hash: Digest,
}

/// An append-only chain of sealed vote blocks plus the not-yet-sealed
/// pending batch.
///
/// Construction seals genesis, so the chain is never empty. The voter
/// index mirrors chain + pending exactly and replaces the linear scans
/// the duplicate check would otherwise need.
pub struct Ledger {
    config: LedgerConfig,
    chain: Vec<Block>,
    pending: Vec<Vote>,
    voter_index: HashMap<VoterId, VoteLocation>,
}

impl Ledger {
    /// Create a ledger with a freshly sealed genesis block.
    pub fn new(config: LedgerConfig, now: Timestamp) -> Result<Self, LedgerError> {
        let genesis = create_genesis_block(config.difficulty, now)?;
        tracing::info!(
            hash = %genesis.hash,
            difficulty = config.difficulty,
            "genesis sealed"
        );
        Ok(Self {
            config,
            chain: vec![genesis],
            pending: Vec::new(),
            voter_index: HashMap::new(),
        })
    }

    /// Rebuild a ledger from persisted sealed blocks.
    ///
    /// The voter index is reconstructed and pending starts empty. Only
    /// structural shape is checked here; hash-level auditing stays with
    /// `verify_chain`, so a tampered persisted chain restores fine and
    /// then fails verification, which is exactly what an audit wants.
    pub fn restore(config: LedgerConfig, blocks: Vec<Block>) -> Result<Self, LedgerError> {
        match blocks.first() {
            None => return Err(LedgerError::Restore("no genesis block".into())),
            Some(first) if !first.is_genesis() => {
                return Err(LedgerError::Restore("first block is not genesis".into()));
            }
            Some(_) => {}
        }
        for (i, block) in blocks.iter().enumerate() {
            if block.index != i as u64 {
                return Err(LedgerError::Restore(format!(
                    "block at position {i} has index {}",
                    block.index
                )));
            }
        }

        let mut voter_index = HashMap::new();
        for (b, block) in blocks.iter().enumerate() {
            for (slot, vote) in block.votes.iter().enumerate() {
                voter_index.insert(vote.voter.clone(), VoteLocation::Sealed { block: b, slot });
            }
        }
        Ok(Self {
            config,
            chain: blocks,
            pending: Vec::new(),
            voter_index,
        })
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Validate and admit a vote into the pending batch.
    ///
    /// A full batch seals immediately, so the caller learns in one call
    /// whether its vote is already durable in the chain. The clock is
    /// passed in and stamps the sealed block, if any.
    pub fn admit_vote(&mut self, vote: Vote, now: Timestamp) -> Result<Admission, LedgerError> {
        if let Err(reason) = verify_vote(self, &vote) {
            tracing::debug!(voter = %vote.voter, %reason, "vote rejected");
            return Ok(Admission::Rejected { reason });
        }

        self.voter_index
            .insert(vote.voter.clone(), VoteLocation::Pending(self.pending.len()));
        self.pending.push(vote);

        if self.pending.len() >= self.config.max_votes_per_block {
            let index = self.seal_pending(now)?;
            return Ok(Admission::Accepted {
                block_hint: index,
                sealed: true,
            });
        }
        Ok(Admission::Accepted {
            block_hint: self.chain.len() as u64,
            sealed: false,
        })
    }

    /// Seal whatever is pending, regardless of batch size.
    ///
    /// Returns the new block's index, or `None` when there was nothing to
    /// seal. End-of-period finalization uses this to flush a partial batch.
    pub fn force_seal(&mut self, now: Timestamp) -> Result<Option<u64>, LedgerError> {
        if self.pending.is_empty() {
            return Ok(None);
        }
        self.seal_pending(now).map(Some)
    }

    /// Seal the pending batch into the next block.
    ///
    /// Pending state is only consumed after the nonce search succeeds, so
    /// a sealing failure leaves admitted votes in place.
    fn seal_pending(&mut self, now: Timestamp) -> Result<u64, LedgerError> {
        let index = self.chain.len() as u64;
        let digests: Vec<Digest> = self
            .pending
            .iter()
            .map(|v| v.content_digest.clone())
            .collect();
        let merkle_root = compute_root(&digests);
        let previous_hash = self
            .chain
            .last()
            .map(|b| b.hash.clone())
            .unwrap_or_else(Digest::zero);

        let header = SealHeader {
            index,
            created_at: now,
            previous_hash: previous_hash.clone(),
            merkle_root: merkle_root.clone(),
        };
        let seal = find_seal(&header, self.config.difficulty)?;

        let mut votes = std::mem::take(&mut self.pending);
        for (slot, vote) in votes.iter_mut().enumerate() {
            vote.sealed_in = Some(index);
            self.voter_index.insert(
                vote.voter.clone(),
                VoteLocation::Sealed {
                    block: index as usize,
                    slot,
                },
            );
        }

        tracing::info!(
            index,
            votes = votes.len(),
            nonce = seal.nonce,
            hash = %seal.digest,
            "block sealed"
        );
        self.chain.push(Block {
            index,
            created_at: now,
            votes,
            previous_hash,
            merkle_root,
            nonce: seal.nonce,
            hash: seal.digest,
        });
        Ok(index)
    }

    // ── Reads ──────────────────────────────────────────────────────────

    pub fn has_voted(&self, voter: &VoterId) -> bool {
        self.voter_index.contains_key(voter)
    }

    /// Look up a voter's vote across sealed blocks and the pending batch.
    pub fn find_vote_by_voter(&self, voter: &VoterId) -> Option<&Vote> {
        match self.voter_index.get(voter)? {
            VoteLocation::Pending(i) => self.pending.get(*i),
            VoteLocation::Sealed { block, slot } => self.chain.get(*block)?.votes.get(*slot),
        }
    }

    /// All sealed votes in block order. Pending votes are excluded: they
    /// are not durable yet and are not exposed as final data.
    pub fn all_votes(&self) -> Vec<Vote> {
        self.chain
            .iter()
            .flat_map(|b| b.votes.iter().cloned())
            .collect()
    }

    /// Every admitted vote in admission order, sealed first then pending.
    /// This is the view duplicate and pattern scans run over.
    pub fn history_votes(&self) -> impl Iterator<Item = &Vote> {
        self.chain
            .iter()
            .flat_map(|b| b.votes.iter())
            .chain(self.pending.iter())
    }

    /// The full sealed chain, genesis included, for external persistence.
    pub fn blocks(&self) -> &[Block] {
        &self.chain
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Sealed votes naming the given candidate.
    pub fn votes_for_candidate(&self, candidate: &CandidateId) -> Vec<Vote> {
        self.chain
            .iter()
            .flat_map(|b| b.votes.iter())
            .filter(|v| &v.candidate == candidate)
            .cloned()
            .collect()
    }

    /// Sealed vote totals per candidate.
    pub fn vote_counts(&self) -> BTreeMap<CandidateId, u64> {
        let mut counts = BTreeMap::new();
        for vote in self.chain.iter().flat_map(|b| b.votes.iter()) {
            *counts.entry(vote.candidate.clone()).or_insert(0) += 1;
        }
        counts
    }

    pub fn chain_summary(&self) -> ChainSummary {
        ChainSummary {
            chain_length: self.chain.len() as u64,
            total_sealed_votes: self.chain.iter().map(|b| b.votes.len() as u64).sum(),
            pending_vote_count: self.pending.len() as u64,
            last_block_hash: self
                .chain
                .last()
                .map(|b| b.hash.clone())
                .unwrap_or_else(Digest::zero),
        }
    }

    // ── Verification ───────────────────────────────────────────────────

    /// Whether the stored chain still re-derives cleanly end to end.
    pub fn verify_chain(&self) -> bool {
        self.verify_chain_report().is_empty()
    }

    /// Audit every block and report all violations found.
    ///
    /// Four independent checks per block: linkage to the prior block's
    /// hash, Merkle root re-derivation from the stored votes, seal digest
    /// re-derivation from the stored header fields and nonce, and the
    /// difficulty predicate on the stored hash.
    pub fn verify_chain_report(&self) -> Vec<ChainViolation> {
        let mut violations = Vec::new();
        for (i, block) in self.chain.iter().enumerate() {
            if i > 0 && block.previous_hash != self.chain[i - 1].hash {
                violations.push(ChainViolation::LinkageMismatch { index: block.index });
            }
            if compute_root(&block.vote_digests()) != block.merkle_root {
                violations.push(ChainViolation::MerkleMismatch { index: block.index });
            }
            if seal_digest(&block.seal_header(), block.nonce) != block.hash {
                violations.push(ChainViolation::SealMismatch { index: block.index });
            }
            if !meets_difficulty(&block.hash, self.config.difficulty) {
                violations.push(ChainViolation::DifficultyShortfall {
                    index: block.index,
                    found: block.hash.leading_zeros(),
                    required: self.config.difficulty,
                });
            }
        }
        violations
    }
}
