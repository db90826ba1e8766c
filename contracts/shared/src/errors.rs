//! Error codes for the election contracts
//!
//! Both contracts return the same `ElectionError` so that a client (or the
//! benchmark driver) can tell expected rejections apart from accidental ones.

use soroban_sdk::contracterror;

/// Error type for election contracts
///
/// Error ranges are organized by category:
/// - 1-9: Lifecycle/configuration errors
/// - 10-19: Proposal errors
/// - 20-29: Ballot errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ElectionError {
    // ===== Lifecycle/Configuration Errors (1-9) =====
    /// Election state has not been created
    NotInitialized = 1,

    /// Election state already exists
    AlreadyInitialized = 2,

    /// Constructor parameters out of bounds
    InvalidConfig = 3,

    /// Invalid input provided
    InvalidInput = 4,

    /// Arithmetic overflow occurred
    Overflow = 5,

    // ===== Proposal Errors (10-19) =====
    /// The window for this kind of mutation has closed
    WindowClosed = 10,

    /// Proposal limit reached
    CapacityExceeded = 11,

    /// Proposal not found
    ProposalNotFound = 12,

    // ===== Ballot Errors (20-29) =====
    /// Caller is not an election manager
    Unauthorized = 20,

    /// Ballot is malformed for the current proposal set
    InvalidBallot = 21,

    /// Voter already has a recorded ballot
    DuplicateVote = 22,

    /// No ballot recorded for this voter
    BallotNotFound = 23,
}

impl ElectionError {
    /// Get a human-readable description of the error
    pub fn message(&self) -> &str {
        match self {
            ElectionError::NotInitialized => "Election not initialized",
            ElectionError::AlreadyInitialized => "Election already initialized",
            ElectionError::InvalidConfig => "Invalid election configuration",
            ElectionError::InvalidInput => "Invalid input provided",
            ElectionError::Overflow => "Arithmetic overflow",

            ElectionError::WindowClosed => "Window is closed",
            ElectionError::CapacityExceeded => "Proposal limit reached",
            ElectionError::ProposalNotFound => "Proposal not found",

            ElectionError::Unauthorized => "Caller is not a manager",
            ElectionError::InvalidBallot => "Invalid ballot",
            ElectionError::DuplicateVote => "Already voted",
            ElectionError::BallotNotFound => "Ballot not found",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ElectionError::WindowClosed as u32, 10);
        assert_eq!(ElectionError::CapacityExceeded as u32, 11);
        assert_eq!(ElectionError::Unauthorized as u32, 20);
        assert_eq!(ElectionError::InvalidBallot as u32, 21);
        assert_eq!(ElectionError::DuplicateVote as u32, 22);
    }

    #[test]
    fn test_messages() {
        assert_eq!(ElectionError::DuplicateVote.message(), "Already voted");
        assert_eq!(ElectionError::WindowClosed.message(), "Window is closed");
    }
}
