use anyhow::Result;
use serde_json::{Map, Value};
use subsum_challenges::subset_sum::{Challenge, Solution};

pub mod memo_branch_bound;
pub use memo_branch_bound as c001_a001;

pub type SolveChallengeFn = fn(
    &Challenge,
    &dyn Fn(&Solution) -> Result<()>,
    &Option<Map<String, Value>>,
) -> Result<()>;

/// Looks an algorithm up by its name or its `c001_aNNN` alias.
pub fn get_algorithm(id: &str) -> Option<SolveChallengeFn> {
    match id {
        "memo_branch_bound" | "c001_a001" => Some(memo_branch_bound::solve_challenge),
        _ => None,
    }
}

/// Hyperparameter help for an algorithm, looked up like [`get_algorithm`].
pub fn get_algorithm_help(id: &str) -> Option<fn()> {
    match id {
        "memo_branch_bound" | "c001_a001" => Some(memo_branch_bound::help),
        _ => None,
    }
}
