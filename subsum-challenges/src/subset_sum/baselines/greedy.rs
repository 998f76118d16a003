use crate::subset_sum::{Challenge, Solution};
use anyhow::Result;
use serde_json::{Map, Value};

/// Largest-first fill: walk the items from heaviest to lightest and take
/// every item that still fits.
pub fn solve_challenge(
    challenge: &Challenge,
    save_solution: &dyn Fn(&Solution) -> Result<()>,
    _hyperparameters: &Option<Map<String, Value>>,
) -> Result<()> {
    let mut rest = challenge.capacity;
    let mut items = Vec::new();
    for (i, &weight) in challenge.weights.iter().enumerate().rev() {
        if weight <= rest {
            rest -= weight;
            items.push(i);
        }
    }
    items.reverse();
    save_solution(&Solution { items })
}
