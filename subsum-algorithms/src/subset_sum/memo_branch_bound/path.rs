use super::memo::MemoStore;

/// Walks the memo from the root state `(0, capacity)` and collects the
/// chosen items. Indices come out strictly ascending and their weights add up
/// to the root's `best_weight`.
pub fn reconstruct<M: MemoStore>(weights: &[u32], capacity: u32, memo: &M) -> Vec<usize> {
    let mut items = Vec::new();
    let mut rest = capacity;
    let mut next = next_choice(weights, memo, 0, rest);
    while let Some(current) = next {
        match weights.get(current) {
            Some(&weight) if weight <= rest => {
                items.push(current);
                rest -= weight;
                next = next_choice(weights, memo, current + 1, rest);
            }
            _ => break,
        }
    }
    items
}

fn next_choice<M: MemoStore>(weights: &[u32], memo: &M, begin: usize, rest: u32) -> Option<usize> {
    match weights.get(begin) {
        Some(&weight) if weight <= rest => memo.get(begin, rest).and_then(|r| r.chosen_from),
        _ => None,
    }
}
