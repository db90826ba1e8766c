//! Shared data types for the election contracts

use soroban_sdk::{contracttype, Address, Map, String, Vec};

use crate::errors::ElectionError;

/// Which aggregation an election runs
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ElectionKind {
    /// Full rankings, Borda-style positional scoring
    Ranked,
    /// One choice per ballot, highest count wins
    Plurality,
}

impl ElectionKind {
    /// Whether a ballot has the shape this election expects
    pub fn accepts(&self, ballot: &CastBallot) -> bool {
        matches!(
            (self, ballot),
            (ElectionKind::Ranked, CastBallot::Ranked(_))
                | (ElectionKind::Plurality, CastBallot::Choice(_))
        )
    }
}

/// Lifecycle phase, derived from the ledger clock on every call
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ElectionPhase {
    /// Accepting proposals, none submitted yet
    Created,
    /// Accepting proposals
    ProposingOpen,
    /// Proposals closed (deadline passed or registry sealed), ballots accepted
    VotingOpen,
    /// Voting deadline passed; only result queries remain
    Final,
}

/// A candidate submitted during the proposal window
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u32,
    pub label: String,
    pub proposer: Address,
}

/// A voter's preference
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CastBallot {
    /// Every proposal id exactly once, most preferred first
    Ranked(Vec<u32>),
    /// A single proposal id
    Choice(u32),
}

/// A ballot as recorded by the ballot store
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BallotRecord {
    pub voter: Address,
    pub ballot: CastBallot,
    pub cast_at: u64,
}

/// Election time windows (ledger timestamps, seconds)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ElectionWindow {
    pub created_at: u64,
    pub proposal_deadline: u64,
    pub voting_deadline: u64,
}

impl ElectionWindow {
    /// Lay out both windows back to back starting at `created_at`
    pub fn from_lifetimes(
        created_at: u64,
        proposal_lifetime: u64,
        voting_lifetime: u64,
    ) -> Result<Self, ElectionError> {
        let proposal_deadline = created_at
            .checked_add(proposal_lifetime)
            .ok_or(ElectionError::Overflow)?;
        let voting_deadline = proposal_deadline
            .checked_add(voting_lifetime)
            .ok_or(ElectionError::Overflow)?;

        Ok(Self {
            created_at,
            proposal_deadline,
            voting_deadline,
        })
    }

    pub fn proposals_open(&self, now: u64) -> bool {
        now <= self.proposal_deadline
    }

    pub fn voting_open(&self, now: u64) -> bool {
        now <= self.voting_deadline
    }

    pub fn is_final(&self, now: u64) -> bool {
        now > self.voting_deadline
    }
}

/// Parameters fixed at election creation
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ElectionConfig {
    pub kind: ElectionKind,
    pub proposal_count_limit: u32,
    pub manager_count: u32,
    pub window: ElectionWindow,
}

/// Outcome of a tally. Recomputed on every query, never stored.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TallyResult {
    /// Highest-scoring proposal; ties go to the lowest id
    pub winner: Option<u32>,
    /// Aggregate score per proposal id
    pub scores: Map<u32, u64>,
    pub ballots_counted: u32,
    /// True once the voting deadline has passed
    pub is_final: bool,
}
