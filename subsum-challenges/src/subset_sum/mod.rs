mod baselines;
use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::{from_value, Map, Value};
use std::{cell::RefCell, collections::HashSet};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Difficulty {
    pub num_items: usize,
    pub max_item_weight: u32,
    /// Capacity as a percentage of the total item weight.
    pub fill_percent: u32,
}

impl TryFrom<Vec<i32>> for Difficulty {
    type Error = anyhow::Error;

    fn try_from(arr: Vec<i32>) -> Result<Self> {
        if arr.len() != 3 {
            return Err(anyhow!(
                "Expected difficulty [num_items, max_item_weight, fill_percent], got {:?}",
                arr
            ));
        }
        if arr.iter().any(|&x| x < 0) {
            return Err(anyhow!("Difficulty parameters must be non-negative: {:?}", arr));
        }
        Ok(Self {
            num_items: arr[0] as usize,
            max_item_weight: arr[1] as u32,
            fill_percent: arr[2] as u32,
        })
    }
}

impl From<Difficulty> for Vec<i32> {
    fn from(d: Difficulty) -> Self {
        vec![
            d.num_items as i32,
            d.max_item_weight as i32,
            d.fill_percent as i32,
        ]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Solution {
    pub items: Vec<usize>,
}

impl Solution {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl TryFrom<Map<String, Value>> for Solution {
    type Error = serde_json::Error;

    fn try_from(v: Map<String, Value>) -> Result<Self, Self::Error> {
        from_value(Value::Object(v))
    }
}

/// Items are identified by their position in `weights`, which is sorted
/// non-decreasing. Every solver in this workspace relies on that order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub difficulty: Difficulty,
    pub capacity: u32,
    pub weights: Vec<u32>,
}

impl Challenge {
    /// Wraps caller supplied data, rejecting weights that are not sorted
    /// non-decreasing.
    pub fn new(capacity: u32, weights: Vec<u32>) -> Result<Challenge> {
        if let Some(i) = weights.windows(2).position(|w| w[0] > w[1]) {
            return Err(anyhow!(
                "Weights must be sorted non-decreasing: weight {} ({}) is greater than weight {} ({})",
                i,
                weights[i],
                i + 1,
                weights[i + 1]
            ));
        }
        let total = weights.iter().map(|&w| w as u64).sum::<u64>();
        let fill_percent = if total == 0 {
            100
        } else {
            (capacity as u64 * 100 / total).min(100) as u32
        };
        Ok(Challenge {
            seed: [0; 32],
            difficulty: Difficulty {
                num_items: weights.len(),
                max_item_weight: weights.last().copied().unwrap_or(0),
                fill_percent,
            },
            capacity,
            weights,
        })
    }

    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Challenge> {
        if difficulty.num_items == 0 {
            return Err(anyhow!("num_items must be at least 1"));
        }
        if difficulty.max_item_weight == 0 {
            return Err(anyhow!("max_item_weight must be at least 1"));
        }
        if difficulty.fill_percent > 100 {
            return Err(anyhow!(
                "fill_percent ({}) must not exceed 100",
                difficulty.fill_percent
            ));
        }
        let mut rng = SmallRng::from_seed(seed.clone());

        let mut weights: Vec<u32> = (0..difficulty.num_items)
            .map(|_| rng.gen_range(1..=difficulty.max_item_weight))
            .collect();
        weights.sort_unstable();

        let total = weights.iter().map(|&w| w as u64).sum::<u64>();
        let capacity = u32::try_from(total * difficulty.fill_percent as u64 / 100)
            .map_err(|_| anyhow!("Capacity does not fit in 32 bits (total weight {})", total))?;

        Ok(Challenge {
            seed: seed.clone(),
            difficulty: difficulty.clone(),
            capacity,
            weights,
        })
    }

    pub fn num_items(&self) -> usize {
        self.weights.len()
    }

    pub fn evaluate_total_weight(&self, solution: &Solution) -> Result<u32> {
        let selected_items: HashSet<usize> = solution.items.iter().cloned().collect();
        if selected_items.len() != solution.items.len() {
            return Err(anyhow!("Duplicate items selected."));
        }

        let total_weight = solution
            .items
            .iter()
            .map(|&item| {
                self.weights
                    .get(item)
                    .map(|&w| w as u64)
                    .ok_or_else(|| anyhow!("Item ({}) is out of bounds", item))
            })
            .sum::<Result<u64>>()?;

        if total_weight > self.capacity as u64 {
            return Err(anyhow!(
                "Total weight ({}) exceeded capacity ({})",
                total_weight,
                self.capacity
            ));
        }
        Ok(total_weight as u32)
    }

    conditional_pub!(
        fn compute_greedy_baseline(&self) -> Result<Solution> {
            let solution = RefCell::new(Solution::new());
            let save_solution_fn = |s: &Solution| -> Result<()> {
                *solution.borrow_mut() = s.clone();
                Ok(())
            };
            baselines::greedy::solve_challenge(self, &save_solution_fn, &None)?;
            Ok(solution.into_inner())
        }
    );

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            if let Some(i) = solution.items.windows(2).position(|w| w[0] >= w[1]) {
                return Err(anyhow!(
                    "Items must be listed in strictly ascending order: {} is followed by {}",
                    solution.items[i],
                    solution.items[i + 1]
                ));
            }
            let total_weight = self.evaluate_total_weight(solution)?;
            let greedy_solution = self.compute_greedy_baseline()?;
            let greedy_total_weight = self.evaluate_total_weight(&greedy_solution)?;
            if total_weight < greedy_total_weight {
                return Err(anyhow!(
                    "Total weight ({}) is less than greedy baseline weight ({})",
                    total_weight,
                    greedy_total_weight
                ));
            }
            Ok(())
        }
    );
}
