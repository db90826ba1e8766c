//! Contract events emitted by the election engine
//!
//! Events are the only log an election leaves for indexers. A rejected call
//! is rolled back by the host together with anything it published.

use soroban_sdk::{contractevent, Address, Env, String};

use crate::types::{ElectionConfig, ElectionKind, Proposal};

/// Published once, from the constructor.
#[contractevent(topics = ["created"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ElectionCreated {
    pub kind: ElectionKind,
    pub manager_count: u32,
    pub proposal_count_limit: u32,
    pub proposal_deadline: u64,
    pub voting_deadline: u64,
}

#[contractevent(topics = ["proposed"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalSubmitted {
    #[topic]
    pub id: u32,
    pub proposer: Address,
    pub label: String,
}

/// `ballots_cast` includes the ballot being announced.
#[contractevent(topics = ["voted"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BallotCast {
    #[topic]
    pub voter: Address,
    pub ballots_cast: u32,
    pub timestamp: u64,
}

pub fn election_created(env: &Env, config: &ElectionConfig) {
    ElectionCreated {
        kind: config.kind,
        manager_count: config.manager_count,
        proposal_count_limit: config.proposal_count_limit,
        proposal_deadline: config.window.proposal_deadline,
        voting_deadline: config.window.voting_deadline,
    }
    .publish(env);
}

pub fn proposal_submitted(env: &Env, proposal: &Proposal) {
    ProposalSubmitted {
        id: proposal.id,
        proposer: proposal.proposer.clone(),
        label: proposal.label.clone(),
    }
    .publish(env);
}

pub fn ballot_cast(env: &Env, voter: &Address, ballots_cast: u32, timestamp: u64) {
    BallotCast {
        voter: voter.clone(),
        ballots_cast,
        timestamp,
    }
    .publish(env);
}
