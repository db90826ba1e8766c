//! Gas benchmarks for bulk proposal submission and voting
//!
//! Drives each contract through a full election: `PCOUNT` proposals from
//! distinct accounts (default 20), one ballot from each of `MCOUNT` managers
//! (default 50), then a tally. Every invocation must fit inside the default
//! per-invocation budget. Run with `--nocapture` to see the cost report.
//!
//! Both sizes must stay within `MAX_PROPOSALS` / `MAX_MANAGERS`.

extern crate std;

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use soroban_sdk::{testutils::Address as _, Address, Env, String, Vec};
use std::{format, println};

use ballot::{Ballot, BallotClient};
use platgentract::{Platgentract, PlatgentractClient};
use shared::constants::ONE_DAY_SECONDS;

/// Benchmark configuration
const PROPOSAL_LIFETIME: u64 = 30 * ONE_DAY_SECONDS;
const VOTING_LIFETIME: u64 = 30 * ONE_DAY_SECONDS;
const DEFAULT_PROPOSAL_COUNT: u32 = 20;
const DEFAULT_MANAGER_COUNT: u32 = 50;

/// Default network limit on CPU instructions per invocation
const MAX_INVOCATION_CPU: u64 = 100_000_000;

fn benchmark_size(var: &str, default: u32) -> u32 {
    std::env::var(var)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn proposal_count() -> u32 {
    benchmark_size("PCOUNT", DEFAULT_PROPOSAL_COUNT)
}

fn manager_count() -> u32 {
    benchmark_size("MCOUNT", DEFAULT_MANAGER_COUNT)
}

/// Worst and total cost over a series of invocations
struct CostReport {
    operation: &'static str,
    calls: u32,
    max_cpu: u64,
    max_mem: u64,
    total_cpu: u64,
}

impl CostReport {
    fn new(operation: &'static str) -> Self {
        Self {
            operation,
            calls: 0,
            max_cpu: 0,
            max_mem: 0,
            total_cpu: 0,
        }
    }

    /// Run `call` on a fresh budget and record what it consumed
    fn measure<T>(&mut self, env: &Env, call: impl FnOnce() -> T) -> T {
        env.cost_estimate().budget().reset_default();
        let out = call();

        let budget = env.cost_estimate().budget();
        let cpu = budget.cpu_instruction_cost();
        let mem = budget.memory_bytes_cost();

        self.calls += 1;
        self.total_cpu += cpu;
        self.max_cpu = self.max_cpu.max(cpu);
        self.max_mem = self.max_mem.max(mem);
        out
    }

    fn print(&self) {
        let avg = if self.calls == 0 {
            0
        } else {
            self.total_cpu / self.calls as u64
        };
        println!(
            "  {:<16} calls: {:>4}  max cpu: {:>12}  avg cpu: {:>12}  max mem: {:>10}",
            self.operation, self.calls, self.max_cpu, avg, self.max_mem
        );
    }

    fn assert_within_budget(&self) {
        assert!(
            self.max_cpu <= MAX_INVOCATION_CPU,
            "{} used {} CPU instructions, limit {}",
            self.operation,
            self.max_cpu,
            MAX_INVOCATION_CPU
        );
    }
}

/// Test environment setup for benchmarks
fn setup_benchmark_env(account_count: u32) -> (Env, Vec<Address>) {
    let env = Env::default();
    env.mock_all_auths();

    let mut accounts = Vec::new(&env);
    for _ in 0..account_count {
        accounts.push_back(Address::generate(&env));
    }

    (env, accounts)
}

/// Fixed so benchmark runs are comparable
const BENCHMARK_SEED: u64 = 0x5EED_2024;

fn benchmark_rng() -> StdRng {
    StdRng::seed_from_u64(BENCHMARK_SEED)
}

/// Uniform permutation of `1..=count`
fn shuffled_ranking(env: &Env, count: u32, rng: &mut StdRng) -> Vec<u32> {
    let mut ids: std::vec::Vec<u32> = (1..=count).collect();
    ids.shuffle(rng);
    Vec::from_slice(env, &ids)
}

fn random_choice(count: u32, rng: &mut StdRng) -> u32 {
    rng.gen_range(1..=count)
}

fn label(env: &Env, index: u32) -> String {
    String::from_str(env, &format!("platform{}", index))
}

#[cfg(test)]
mod election_benchmarks {
    use super::*;

    #[test]
    fn benchmark_platgentract_election() {
        let proposals = proposal_count();
        let managers = manager_count();
        let (env, accounts) = setup_benchmark_env(proposals.max(managers));

        let contract_id = env.register(
            Platgentract,
            (
                accounts.slice(0..managers),
                proposals,
                PROPOSAL_LIFETIME,
                VOTING_LIFETIME,
            ),
        );
        let client = PlatgentractClient::new(&env, &contract_id);

        let mut propose_cost = CostReport::new("propose");
        for i in 0..proposals {
            let proposer = accounts.get(i).unwrap();
            let label = label(&env, i);
            let id = propose_cost.measure(&env, || client.propose(&proposer, &label));
            assert_eq!(id, i + 1);
        }

        let mut rng = benchmark_rng();
        let mut vote_cost = CostReport::new("vote");
        for i in 0..managers {
            let voter = accounts.get(i).unwrap();
            let ranking = shuffled_ranking(&env, proposals, &mut rng);
            vote_cost.measure(&env, || client.vote(&voter, &ranking));
        }

        let mut tally_cost = CostReport::new("election_result");
        let result = tally_cost.measure(&env, || client.election_result());

        println!("Platgentract ({} proposals, {} managers):", proposals, managers);
        for report in [&propose_cost, &vote_cost, &tally_cost] {
            report.print();
            report.assert_within_budget();
        }

        let p = proposals as u64;
        let total: u64 = result.scores.values().iter().sum();
        assert_eq!(result.ballots_counted, managers);
        assert_eq!(total, managers as u64 * p * (p - 1) / 2);
        assert!(result.winner.is_some());
    }

    #[test]
    fn benchmark_ballot_election() {
        let proposals = proposal_count();
        let managers = manager_count();
        let (env, accounts) = setup_benchmark_env(proposals.max(managers));

        let contract_id = env.register(
            Ballot,
            (
                accounts.slice(0..managers),
                proposals,
                PROPOSAL_LIFETIME,
                VOTING_LIFETIME,
            ),
        );
        let client = BallotClient::new(&env, &contract_id);

        let mut propose_cost = CostReport::new("propose");
        for i in 0..proposals {
            let proposer = accounts.get(i).unwrap();
            let label = label(&env, i);
            propose_cost.measure(&env, || client.propose(&proposer, &label));
        }

        let mut rng = benchmark_rng();
        let mut vote_cost = CostReport::new("vote");
        for i in 0..managers {
            let voter = accounts.get(i).unwrap();
            let choice = random_choice(proposals, &mut rng);
            vote_cost.measure(&env, || client.vote(&voter, &choice));
        }

        let mut tally_cost = CostReport::new("election_result");
        let result = tally_cost.measure(&env, || client.election_result());

        println!("Ballot ({} proposals, {} managers):", proposals, managers);
        for report in [&propose_cost, &vote_cost, &tally_cost] {
            report.print();
            report.assert_within_budget();
        }

        let total: u64 = result.scores.values().iter().sum();
        assert_eq!(result.ballots_counted, managers);
        assert_eq!(total, managers as u64);
        assert!(result.winner.is_some());
    }

    #[test]
    fn shuffled_rankings_are_permutations() {
        let env = Env::default();
        let mut rng = benchmark_rng();
        for _ in 0..10 {
            let ranking = shuffled_ranking(&env, 20, &mut rng);
            let mut seen = [false; 20];
            for id in ranking.iter() {
                assert!(!seen[(id - 1) as usize]);
                seen[(id - 1) as usize] = true;
            }
            assert_eq!(ranking.len(), 20);
        }
    }

    #[test]
    fn benchmark_inputs_are_reproducible() {
        let env = Env::default();
        let mut first = benchmark_rng();
        let mut second = benchmark_rng();
        assert_eq!(
            shuffled_ranking(&env, 20, &mut first),
            shuffled_ranking(&env, 20, &mut second)
        );

        for _ in 0..50 {
            let choice = random_choice(20, &mut first);
            assert_eq!(choice, random_choice(20, &mut second));
            assert!((1..=20).contains(&choice));
        }
    }
}
