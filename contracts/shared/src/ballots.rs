use soroban_sdk::{Address, Env, Vec};

use crate::errors::ElectionError;
use crate::events;
use crate::roster::ManagerRoster;
use crate::storage;
use crate::types::{BallotRecord, CastBallot, ElectionConfig};
use crate::validation::validate_ballot;

/// One ballot per manager, immutable once recorded.
pub struct BallotStore;

impl BallotStore {
    /// Record `ballot` for `voter`.
    ///
    /// Checks run in a fixed order: membership, then the window, then a
    /// repeat vote, then the ballot itself. Nothing is written unless every
    /// check passes.
    pub fn cast(
        env: &Env,
        config: &ElectionConfig,
        now: u64,
        voter: &Address,
        ballot: CastBallot,
        proposal_count: u32,
    ) -> Result<(), ElectionError> {
        if !ManagerRoster::is_manager(env, voter) {
            return Err(ElectionError::Unauthorized);
        }

        if !config.window.voting_open(now) {
            return Err(ElectionError::WindowClosed);
        }

        if storage::has_ballot(env, voter) {
            return Err(ElectionError::DuplicateVote);
        }

        validate_ballot(config.kind, &ballot, proposal_count)?;

        let record = BallotRecord {
            voter: voter.clone(),
            ballot,
            cast_at: now,
        };
        storage::save_ballot(env, &record);

        events::ballot_cast(env, voter, storage::get_ballot_count(env), now);

        Ok(())
    }

    pub fn cast_ranked(
        env: &Env,
        config: &ElectionConfig,
        now: u64,
        voter: &Address,
        ranking: Vec<u32>,
        proposal_count: u32,
    ) -> Result<(), ElectionError> {
        Self::cast(env, config, now, voter, CastBallot::Ranked(ranking), proposal_count)
    }

    pub fn cast_choice(
        env: &Env,
        config: &ElectionConfig,
        now: u64,
        voter: &Address,
        choice: u32,
        proposal_count: u32,
    ) -> Result<(), ElectionError> {
        Self::cast(env, config, now, voter, CastBallot::Choice(choice), proposal_count)
    }

    pub fn count(env: &Env) -> u32 {
        storage::get_ballot_count(env)
    }

    pub fn has_voted(env: &Env, voter: &Address) -> bool {
        storage::has_ballot(env, voter)
    }

    pub fn get(env: &Env, voter: &Address) -> Result<BallotRecord, ElectionError> {
        storage::get_ballot(env, voter).ok_or(ElectionError::BallotNotFound)
    }

    /// Every recorded ballot, in the order it was accepted
    pub fn ballots(env: &Env) -> Vec<CastBallot> {
        let mut ballots = Vec::new(env);
        for voter in storage::get_voters(env).iter() {
            if let Some(record) = storage::get_ballot(env, &voter) {
                ballots.push_back(record.ballot);
            }
        }
        ballots
    }
}
