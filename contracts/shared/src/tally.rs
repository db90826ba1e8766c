//! Ballot aggregation
//!
//! A tally is a pure function of the proposal count and the recorded
//! ballots. It costs O(ballots x proposals); both are capped by
//! `MAX_MANAGERS` and `MAX_PROPOSALS`.

use soroban_sdk::{Env, Map, Vec};

use crate::constants::MAX_PROPOSALS;
use crate::types::{CastBallot, ElectionKind, TallyResult};

pub struct TallyEngine;

impl TallyEngine {
    /// Points for the proposal at 0-based `position` on a ranked ballot of
    /// `proposal_count` entries: first place earns `P - 1`, last earns 0.
    pub fn borda_points(position: u32, proposal_count: u32) -> u64 {
        proposal_count
            .saturating_sub(1)
            .saturating_sub(position) as u64
    }

    /// Aggregate `ballots` into per-proposal scores and pick the winner.
    ///
    /// Ties go to the lowest proposal id. There is no winner without
    /// proposals or without ballots.
    pub fn compute(
        env: &Env,
        kind: ElectionKind,
        proposal_count: u32,
        ballots: &Vec<CastBallot>,
        is_final: bool,
    ) -> TallyResult {
        let proposal_count = proposal_count.min(MAX_PROPOSALS);
        let mut totals = [0u64; MAX_PROPOSALS as usize];
        let mut counted: u32 = 0;

        for ballot in ballots.iter() {
            match (kind, ballot) {
                (ElectionKind::Ranked, CastBallot::Ranked(ranking)) => {
                    for (position, id) in ranking.iter().enumerate() {
                        if id >= 1 && id <= proposal_count {
                            totals[(id - 1) as usize] +=
                                Self::borda_points(position as u32, proposal_count);
                        }
                    }
                    counted += 1;
                }
                (ElectionKind::Plurality, CastBallot::Choice(choice)) => {
                    if choice >= 1 && choice <= proposal_count {
                        totals[(choice - 1) as usize] += 1;
                    }
                    counted += 1;
                }
                _ => debug_assert!(false, "ballot shape does not match election kind"),
            }
        }

        let mut scores = Map::new(env);
        let mut leader: Option<(u32, u64)> = None;
        for id in 1..=proposal_count {
            let score = totals[(id - 1) as usize];
            scores.set(id, score);
            match leader {
                Some((_, best)) if score <= best => {}
                _ => leader = Some((id, score)),
            }
        }

        let winner = if counted == 0 {
            None
        } else {
            leader.map(|(id, _)| id)
        };

        TallyResult {
            winner,
            scores,
            ballots_counted: counted,
            is_final,
        }
    }
}
