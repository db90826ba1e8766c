//! Validation helpers for the election contracts
//!
//! Construction parameters are checked once; labels and ballots on every
//! call. All checks are pure so they run before any storage write.

use crate::constants::{MAX_LABEL_LEN, MAX_LIFETIME_SECONDS, MAX_MANAGERS, MAX_PROPOSALS};
use crate::errors::ElectionError;
use crate::types::{CastBallot, ElectionKind};
use soroban_sdk::{Address, String, Vec};

// ===== Configuration Validation =====

/// Validate the manager list supplied at creation
///
/// # Returns
/// `Ok(())` if the list is non-empty and within `MAX_MANAGERS`,
/// `Err(ElectionError::InvalidConfig)` otherwise
pub fn validate_managers(managers: &Vec<Address>) -> Result<(), ElectionError> {
    if managers.is_empty() || managers.len() > MAX_MANAGERS {
        return Err(ElectionError::InvalidConfig);
    }
    Ok(())
}

/// Validate the proposal capacity
pub fn validate_proposal_limit(limit: u32) -> Result<(), ElectionError> {
    if limit == 0 || limit > MAX_PROPOSALS {
        return Err(ElectionError::InvalidConfig);
    }
    Ok(())
}

/// Validate a proposal or voting lifetime in seconds
pub fn validate_lifetime(seconds: u64) -> Result<(), ElectionError> {
    if seconds == 0 || seconds > MAX_LIFETIME_SECONDS {
        return Err(ElectionError::InvalidConfig);
    }
    Ok(())
}

// ===== Proposal Validation =====

/// Validate a proposal label (1..=MAX_LABEL_LEN bytes)
pub fn validate_label(label: &String) -> Result<(), ElectionError> {
    let len = label.len();
    if len == 0 || len > MAX_LABEL_LEN {
        return Err(ElectionError::InvalidInput);
    }
    Ok(())
}

// ===== Ballot Validation =====

/// Validate that `ranking` is a permutation of `1..=proposal_count`
///
/// Rejects rankings that are short, long, repeat an id, or name an id
/// outside `[1, proposal_count]`.
pub fn validate_ranking(ranking: &Vec<u32>, proposal_count: u32) -> Result<(), ElectionError> {
    if proposal_count == 0 || proposal_count > MAX_PROPOSALS || ranking.len() != proposal_count {
        return Err(ElectionError::InvalidBallot);
    }

    let mut seen: u64 = 0;
    for id in ranking.iter() {
        if id == 0 || id > proposal_count {
            return Err(ElectionError::InvalidBallot);
        }
        let bit = 1u64 << (id - 1);
        if seen & bit != 0 {
            return Err(ElectionError::InvalidBallot);
        }
        seen |= bit;
    }
    Ok(())
}

/// Validate a single choice against `1..=proposal_count`
pub fn validate_choice(choice: u32, proposal_count: u32) -> Result<(), ElectionError> {
    if choice == 0 || choice > proposal_count {
        return Err(ElectionError::InvalidBallot);
    }
    Ok(())
}

/// Validate a ballot for an election of `kind` with `proposal_count` proposals
pub fn validate_ballot(
    kind: ElectionKind,
    ballot: &CastBallot,
    proposal_count: u32,
) -> Result<(), ElectionError> {
    if !kind.accepts(ballot) {
        return Err(ElectionError::InvalidBallot);
    }
    match ballot {
        CastBallot::Ranked(ranking) => validate_ranking(ranking, proposal_count),
        CastBallot::Choice(choice) => validate_choice(*choice, proposal_count),
    }
}
