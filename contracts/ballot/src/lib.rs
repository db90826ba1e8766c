#![no_std]
//! Ballot: proposal submission and a single-choice vote. Each manager names
//! one proposal; the most named proposal wins.

use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String, Vec};

use shared::{
    BallotRecord, BallotStore, Election, ElectionConfig, ElectionError, ElectionKind,
    ElectionParams, ElectionPhase, ManagerRoster, Proposal, ProposalRegistry, TallyResult,
};

#[contract]
pub struct Ballot;

#[contractimpl]
impl Ballot {
    /// Create the election; same parameters and bounds as Platgentract.
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
        if let Err(err) = Election::create(&env, ElectionKind::Plurality, &params) {
            panic_with_error!(&env, err);
        }
    }

    pub fn propose(env: Env, proposer: Address, label: String) -> Result<u32, ElectionError> {
        proposer.require_auth();
        Election::load(&env)?.propose(&proposer, label)
    }

    /// Vote for a single proposal id.
    pub fn vote(env: Env, voter: Address, choice: u32) -> Result<(), ElectionError> {
        voter.require_auth();
        Election::load(&env)?.vote_choice(&voter, choice)
    }

    /// Plurality count over all ballots cast so far.
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
