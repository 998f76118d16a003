//! Exact subset-sum solver: the largest total weight of items that fits in
//! the capacity, plus one selection reaching it.
//!
//! # Description
//! Depth-first search over `(begin, rest)` states, taking item `begin` before
//! skipping it. States are memoized, and a state is pruned once the weight
//! already packed plus every remaining item cannot reach the best total seen
//! so far. When a state's "take" branch already fills all the room it could,
//! the "skip" branch is never visited.
//!
//! Items must be sorted by non-decreasing weight. Among equally heavy
//! selections the one taking lower indices wins.
mod config;
mod memo;
mod path;
mod solver;
mod suffix;

pub use config::{Config, MemoLayout, Strategy};
pub use memo::{DenseMemo, MemoRecord, MemoStore, SparseMemo};
pub use path::reconstruct;
pub use solver::{SearchStats, Solver};
pub use suffix::suffix_sums;

use crate::seeded_hasher;
use ahash::RandomState;
use anyhow::Result;
use log::{debug, warn};
use logging_timer::time;
use serde_json::{Map, Value};
use subsum_challenges::subset_sum::{Challenge, Solution};

pub fn solve_challenge(
    challenge: &Challenge,
    save_solution: &dyn Fn(&Solution) -> Result<()>,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<()> {
    let config = Config::from_hyperparameters(hyperparameters)?;
    let (total_weight, items) = solve(
        challenge.capacity,
        &challenge.weights,
        &config,
        seeded_hasher(&challenge.seed),
    );
    debug!(
        "selected {} of {} items, weight {} of capacity {}",
        items.len(),
        challenge.num_items(),
        total_weight,
        challenge.capacity
    );
    save_solution(&Solution { items })
}

/// Returns the optimal total weight and the ascending indices achieving it.
pub fn solve_optimal(capacity: u32, weights: &[u32]) -> (u32, Vec<usize>) {
    solve_optimal_with(capacity, weights, &Config::default())
}

pub fn solve_optimal_with(capacity: u32, weights: &[u32], config: &Config) -> (u32, Vec<usize>) {
    solve(capacity, weights, config, RandomState::new())
}

#[time]
fn solve(capacity: u32, weights: &[u32], config: &Config, hasher: RandomState) -> (u32, Vec<usize>) {
    if config.use_dense_memo(weights.len(), capacity) {
        match DenseMemo::try_new(weights.len(), capacity) {
            Ok(memo) => {
                debug!("dense memo for {} items x {} capacities", weights.len(), capacity as u64 + 1);
                return run(Solver::new(capacity, weights, memo), config.strategy);
            }
            Err(e) => warn!("{}, falling back to sparse memo", e),
        }
    }
    debug!("sparse memo for {} items", weights.len());
    run(
        Solver::new(capacity, weights, SparseMemo::with_hasher(weights.len(), hasher)),
        config.strategy,
    )
}

fn run<M: MemoStore>(mut solver: Solver<M>, strategy: Strategy) -> (u32, Vec<usize>) {
    let total_weight = solver.solve(strategy);
    let items = solver.reconstruct();
    debug!(
        "{:?} search: {:?}, {} memo records",
        strategy,
        solver.stats(),
        solver.memo().len()
    );
    (total_weight, items)
}

pub fn help() {
    println!("Memoized branch-and-bound for subset-sum (0/1 knapsack with value == weight).");
    println!("Requires weights sorted non-decreasing.");
    println!();
    println!("HYPERPARAMETERS (all optional):");
    println!("  strategy:          \"worklist\" (default) | \"recursive\"");
    println!("                     recursive uses one call frame per item and can overflow the stack");
    println!("  memo:              \"auto\" (default) | \"sparse\" | \"dense\"");
    println!("  dense_cell_limit:  largest items x (capacity + 1) table auto will allocate");
    println!("                     (default 4194304)");
}
