//! Election controller
//!
//! Ties the registry, roster, ballot store and tally engine to the ledger
//! clock. There is no timer: every call compares the current ledger
//! timestamp with the stored deadlines.

use soroban_sdk::{Address, Env, String, Vec};

use crate::ballots::BallotStore;
use crate::errors::ElectionError;
use crate::events;
use crate::registry::ProposalRegistry;
use crate::roster::ManagerRoster;
use crate::storage;
use crate::tally::TallyEngine;
use crate::types::{ElectionConfig, ElectionKind, ElectionPhase, ElectionWindow, TallyResult};
use crate::validation::{validate_lifetime, validate_proposal_limit};

/// Creation parameters, as passed to a contract constructor
#[derive(Clone, Debug)]
pub struct ElectionParams {
    pub managers: Vec<Address>,
    pub proposal_count_limit: u32,
    /// Seconds from creation until proposals close
    pub proposal_lifetime: u64,
    /// Seconds from the proposal deadline until voting closes
    pub voting_lifetime: u64,
}

/// A loaded election: the host environment plus its fixed configuration.
pub struct Election {
    env: Env,
    config: ElectionConfig,
}

impl Election {
    /// Create the election state. Every parameter is validated before the
    /// first write.
    pub fn create(
        env: &Env,
        kind: ElectionKind,
        params: &ElectionParams,
    ) -> Result<Self, ElectionError> {
        if storage::has_config(env) {
            return Err(ElectionError::AlreadyInitialized);
        }

        validate_proposal_limit(params.proposal_count_limit)?;
        validate_lifetime(params.proposal_lifetime)?;
        validate_lifetime(params.voting_lifetime)?;

        let window = ElectionWindow::from_lifetimes(
            env.ledger().timestamp(),
            params.proposal_lifetime,
            params.voting_lifetime,
        )?;

        let manager_count = ManagerRoster::establish(env, &params.managers)?;

        let config = ElectionConfig {
            kind,
            proposal_count_limit: params.proposal_count_limit,
            manager_count,
            window,
        };
        storage::set_config(env, &config);

        events::election_created(env, &config);

        Ok(Self {
            env: env.clone(),
            config,
        })
    }

    pub fn load(env: &Env) -> Result<Self, ElectionError> {
        let config = storage::get_config(env).ok_or(ElectionError::NotInitialized)?;
        Ok(Self {
            env: env.clone(),
            config,
        })
    }

    pub fn config(&self) -> &ElectionConfig {
        &self.config
    }

    fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    /// The registry seals on the first accepted ballot.
    fn is_sealed(&self) -> bool {
        BallotStore::count(&self.env) > 0
    }

    pub fn phase(&self) -> ElectionPhase {
        let now = self.now();
        let window = &self.config.window;

        if window.is_final(now) {
            ElectionPhase::Final
        } else if !window.proposals_open(now) || self.is_sealed() {
            ElectionPhase::VotingOpen
        } else if ProposalRegistry::count(&self.env) == 0 {
            ElectionPhase::Created
        } else {
            ElectionPhase::ProposingOpen
        }
    }

    pub fn propose(&self, proposer: &Address, label: String) -> Result<u32, ElectionError> {
        ProposalRegistry::submit(
            &self.env,
            &self.config,
            self.now(),
            self.is_sealed(),
            proposer,
            label,
        )
    }

    /// Record a full ranking for a ranked election
    pub fn vote_ranked(&self, voter: &Address, ranking: Vec<u32>) -> Result<(), ElectionError> {
        BallotStore::cast_ranked(
            &self.env,
            &self.config,
            self.now(),
            voter,
            ranking,
            ProposalRegistry::count(&self.env),
        )
    }

    /// Record a single choice for a plurality election
    pub fn vote_choice(&self, voter: &Address, choice: u32) -> Result<(), ElectionError> {
        BallotStore::cast_choice(
            &self.env,
            &self.config,
            self.now(),
            voter,
            choice,
            ProposalRegistry::count(&self.env),
        )
    }

    /// Tally every recorded ballot. Advisory until the voting deadline has
    /// passed, final afterwards.
    pub fn result(&self) -> TallyResult {
        TallyEngine::compute(
            &self.env,
            self.config.kind,
            ProposalRegistry::count(&self.env),
            &BallotStore::ballots(&self.env),
            self.config.window.is_final(self.now()),
        )
    }
}
