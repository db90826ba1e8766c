use soroban_sdk::{Address, Env, String, Vec};

use crate::errors::ElectionError;
use crate::events;
use crate::storage;
use crate::types::{ElectionConfig, Proposal};
use crate::validation::validate_label;

/// Sequentially numbered, append-only proposal store.
pub struct ProposalRegistry;

impl ProposalRegistry {
    /// Append a proposal and return its id.
    ///
    /// `sealed` is true once any ballot has been accepted; the registry is
    /// then closed even if the proposal deadline has not passed.
    pub fn submit(
        env: &Env,
        config: &ElectionConfig,
        now: u64,
        sealed: bool,
        proposer: &Address,
        label: String,
    ) -> Result<u32, ElectionError> {
        if sealed || !config.window.proposals_open(now) {
            return Err(ElectionError::WindowClosed);
        }

        let count = storage::get_proposal_count(env);
        if count >= config.proposal_count_limit {
            return Err(ElectionError::CapacityExceeded);
        }

        validate_label(&label)?;

        let id = count.checked_add(1).ok_or(ElectionError::Overflow)?;
        let proposal = Proposal {
            id,
            label,
            proposer: proposer.clone(),
        };

        storage::save_proposal(env, &proposal);
        storage::set_proposal_count(env, id);

        events::proposal_submitted(env, &proposal);

        Ok(id)
    }

    pub fn count(env: &Env) -> u32 {
        storage::get_proposal_count(env)
    }

    pub fn get(env: &Env, id: u32) -> Result<Proposal, ElectionError> {
        storage::get_proposal(env, id).ok_or(ElectionError::ProposalNotFound)
    }

    /// All proposals in id order
    pub fn all(env: &Env) -> Vec<Proposal> {
        let mut proposals = Vec::new(env);
        for id in 1..=Self::count(env) {
            if let Some(proposal) = storage::get_proposal(env, id) {
                proposals.push_back(proposal);
            }
        }
        proposals
    }
}
