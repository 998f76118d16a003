#![allow(dead_code)]

/// Exhaustive maximum subset sum of `weights[begin..]` not exceeding `rest`.
pub fn best_from(weights: &[u32], begin: usize, rest: u32) -> u32 {
    match weights.get(begin) {
        None => 0,
        Some(&weight) => {
            let skip = best_from(weights, begin + 1, rest);
            if weight <= rest {
                skip.max(weight + best_from(weights, begin + 1, rest - weight))
            } else {
                skip
            }
        }
    }
}

pub fn brute_force(capacity: u32, weights: &[u32]) -> u32 {
    best_from(weights, 0, capacity)
}

/// The optimal selection that takes the lowest indices it can: walk the
/// items in order and take each one if an optimum is still reachable.
pub fn preferred_selection(capacity: u32, weights: &[u32]) -> Vec<usize> {
    let mut items = Vec::new();
    let mut rest = capacity;
    let mut target = best_from(weights, 0, capacity);
    for (i, &weight) in weights.iter().enumerate() {
        if weight <= rest && weight + best_from(weights, i + 1, rest - weight) == target {
            items.push(i);
            rest -= weight;
            target -= weight;
        }
    }
    items
}

/// Reachable subset sums by table, for instances too large to enumerate.
pub fn table_optimum(capacity: u32, weights: &[u32]) -> u32 {
    let capacity = capacity as usize;
    let mut reachable = vec![false; capacity + 1];
    reachable[0] = true;
    for &weight in weights {
        let weight = weight as usize;
        if weight > capacity {
            continue;
        }
        for total in (weight..=capacity).rev() {
            if reachable[total - weight] {
                reachable[total] = true;
            }
        }
    }
    reachable.iter().rposition(|&r| r).unwrap_or(0) as u32
}

pub fn selection_weight(weights: &[u32], items: &[usize]) -> u32 {
    items.iter().map(|&i| weights[i]).sum()
}

pub fn assert_valid_selection(capacity: u32, weights: &[u32], total: u32, items: &[usize]) {
    assert!(
        items.windows(2).all(|w| w[0] < w[1]),
        "not strictly ascending: {:?}",
        items
    );
    assert!(items.iter().all(|&i| i < weights.len()));
    assert_eq!(selection_weight(weights, items), total);
    assert!(total <= capacity);
}
