#![no_std]
//! # Shared Election Engine
//!
//! The proposal/ballot/tally engine behind the Platgentract (ranked) and
//! Ballot (plurality) contracts. Contracts stay thin: they authenticate the
//! caller and hand everything else to [`Election`].
//!
//! ## Modules
//!
//! - `errors` - `ElectionError`, the error codes every contract returns
//! - `types` - Proposals, ballots, windows, configuration and tally results
//! - `constants` - Election size caps and storage TTLs
//! - `validation` - Constructor parameter, label and ballot checks
//! - `storage` - Storage keys and typed accessors
//! - `events` - Contract events published on creation, proposals and votes
//! - `registry` - Proposal registry
//! - `roster` - Manager roster
//! - `ballots` - Ballot store
//! - `tally` - Borda and plurality aggregation
//! - `election` - The controller tying the above to the ledger clock
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::Election;
//!
//! let election = Election::load(&env)?;
//! election.vote_choice(&voter, 1)?;
//! let result = election.result();
//! ```

pub mod ballots;
pub mod constants;
pub mod election;
pub mod errors;
pub mod events;
pub mod registry;
pub mod roster;
pub mod storage;
pub mod tally;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use ballots::BallotStore;
pub use election::{Election, ElectionParams};
pub use errors::ElectionError;
pub use registry::ProposalRegistry;
pub use roster::ManagerRoster;
pub use tally::TallyEngine;
pub use types::{
    BallotRecord, CastBallot, ElectionConfig, ElectionKind, ElectionPhase, ElectionWindow,
    Proposal, TallyResult,
};
