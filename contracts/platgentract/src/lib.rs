#![no_std]
//! Platgentract: proposal submission and a ranked election among a fixed set
//! of managers. Each manager submits one full ranking of the proposals; the
//! result is a Borda count.

use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String, Vec};

use shared::{
    BallotRecord, BallotStore, Election, ElectionConfig, ElectionError, ElectionKind,
    ElectionParams, ElectionPhase, ManagerRoster, Proposal, ProposalRegistry, TallyResult,
};

#[contract]
pub struct Platgentract;

#[contractimpl]
impl Platgentract {
    // ── Construction ─────────────────────────────────────────────────────────

    /// Create the election. Aborts deployment with `InvalidConfig` when a
    /// parameter is out of bounds.
    ///
    /// # Arguments
    /// * `managers`             – Addresses allowed to vote; duplicates collapse
    /// * `proposal_count_limit` – Maximum number of proposals
    /// * `proposal_lifetime`    – Seconds until proposals close
    /// * `voting_lifetime`      – Seconds after that until voting closes
    pub fn __constructor(
        env: Env,
        managers: Vec<Address>,
        proposal_count_limit: u32,
        proposal_lifetime: u64,
        voting_lifetime: u64,
    ) {
        let params = ElectionParams {
            managers,
            proposal_count_limit,
            proposal_lifetime,
            voting_lifetime,
        };
        if let Err(err) = Election::create(&env, ElectionKind::Ranked, &params) {
            panic_with_error!(&env, err);
        }
    }

    // ── Mutations ────────────────────────────────────────────────────────────

    /// Submit a proposal; returns its id (1-based, in submission order).
    pub fn propose(env: Env, proposer: Address, label: String) -> Result<u32, ElectionError> {
        proposer.require_auth();
        Election::load(&env)?.propose(&proposer, label)
    }

    /// Cast a ranking of every proposal id, most preferred first.
    pub fn vote(env: Env, voter: Address, ranking: Vec<u32>) -> Result<(), ElectionError> {
        voter.require_auth();
        Election::load(&env)?.vote_ranked(&voter, ranking)
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// Borda tally over all ballots cast so far.
    pub fn election_result(env: Env) -> Result<TallyResult, ElectionError> {
        Ok(Election::load(&env)?.result())
    }

    pub fn phase(env: Env) -> Result<ElectionPhase, ElectionError> {
        Ok(Election::load(&env)?.phase())
    }

    pub fn get_config(env: Env) -> Result<ElectionConfig, ElectionError> {
        Ok(Election::load(&env)?.config().clone())
    }

    pub fn get_proposal(env: Env, proposal_id: u32) -> Result<Proposal, ElectionError> {
        ProposalRegistry::get(&env, proposal_id)
    }

    pub fn proposals(env: Env) -> Vec<Proposal> {
        ProposalRegistry::all(&env)
    }

    pub fn proposal_count(env: Env) -> u32 {
        ProposalRegistry::count(&env)
    }

    pub fn is_manager(env: Env, address: Address) -> bool {
        ManagerRoster::is_manager(&env, &address)
    }

    pub fn managers(env: Env) -> Vec<Address> {
        ManagerRoster::members(&env)
    }

    pub fn manager_count(env: Env) -> u32 {
        ManagerRoster::members(&env).len()
    }

    pub fn get_ballot(env: Env, voter: Address) -> Result<BallotRecord, ElectionError> {
        BallotStore::get(&env, &voter)
    }

    pub fn has_voted(env: Env, voter: Address) -> bool {
        BallotStore::has_voted(&env, &voter)
    }
}
