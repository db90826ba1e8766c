use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::constants::{ELECTION_TTL_LEDGERS, ELECTION_TTL_THRESHOLD};
use crate::types::{BallotRecord, ElectionConfig, Proposal};

/// Storage keys. Config and counters live in instance storage, everything
/// keyed by id or address in persistent storage.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    ProposalCount,
    BallotCount,
    Proposal(u32),
    Managers,
    Manager(Address),
    Voters,
    Ballot(Address),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(ELECTION_TTL_THRESHOLD, ELECTION_TTL_LEDGERS);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, ELECTION_TTL_THRESHOLD, ELECTION_TTL_LEDGERS);
}

// ── Config ───────────────────────────────────────────────────────────────────

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &ElectionConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn get_config(env: &Env) -> Option<ElectionConfig> {
    env.storage().instance().get(&DataKey::Config)
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u32)
}

pub fn set_proposal_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::ProposalCount, &count);
    bump_instance(env);
}

pub fn save_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    bump_persistent(env, &key);
}

pub fn get_proposal(env: &Env, id: u32) -> Option<Proposal> {
    env.storage().persistent().get(&DataKey::Proposal(id))
}

// ── Managers ─────────────────────────────────────────────────────────────────

pub fn set_manager(env: &Env, manager: &Address) {
    let key = DataKey::Manager(manager.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}

pub fn is_manager(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .get::<DataKey, bool>(&DataKey::Manager(address.clone()))
        .unwrap_or(false)
}

pub fn set_managers(env: &Env, managers: &Vec<Address>) {
    env.storage().persistent().set(&DataKey::Managers, managers);
    bump_persistent(env, &DataKey::Managers);
}

pub fn get_managers(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Managers)
        .unwrap_or_else(|| Vec::new(env))
}

// ── Ballots ──────────────────────────────────────────────────────────────────

pub fn get_ballot_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::BallotCount)
        .unwrap_or(0u32)
}

pub fn has_ballot(env: &Env, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Ballot(voter.clone()))
}

pub fn get_ballot(env: &Env, voter: &Address) -> Option<BallotRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Ballot(voter.clone()))
}

/// Record a new ballot and append its voter to the tally index
pub fn save_ballot(env: &Env, record: &BallotRecord) {
    let key = DataKey::Ballot(record.voter.clone());
    env.storage().persistent().set(&key, record);
    bump_persistent(env, &key);

    let mut voters = get_voters(env);
    voters.push_back(record.voter.clone());
    env.storage().persistent().set(&DataKey::Voters, &voters);
    bump_persistent(env, &DataKey::Voters);

    env.storage()
        .instance()
        .set(&DataKey::BallotCount, &voters.len());
    bump_instance(env);
}

/// Voters in the order their ballots were accepted
pub fn get_voters(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Voters)
        .unwrap_or_else(|| Vec::new(env))
}
