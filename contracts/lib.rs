#![no_std]
//! Election contracts
//!
//! Umbrella crate for the two election contracts and the engine they share:
//!
//! - [`Platgentract`]: ranked ballots, Borda count
//! - [`Ballot`]: single-choice ballots, plurality count
//!
//! The gas benchmarks that drive both contracts through a full election live
//! here as well.

pub use ballot::{Ballot, BallotClient};
pub use platgentract::{Platgentract, PlatgentractClient};
pub use shared::{
    constants, BallotRecord, CastBallot, ElectionConfig, ElectionError, ElectionKind,
    ElectionPhase, ElectionWindow, Proposal, TallyResult,
};

#[cfg(test)]
mod gas_benchmarks;
