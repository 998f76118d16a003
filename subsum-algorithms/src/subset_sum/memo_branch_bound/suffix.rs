/// `suffix[i]` is the total weight of items `i..`. Entries never increase
/// along the table; past the end the sum is 0.
pub fn suffix_sums(weights: &[u32]) -> Vec<u64> {
    let mut suffix = vec![0u64; weights.len()];
    let mut running = 0u64;
    for (i, &weight) in weights.iter().enumerate().rev() {
        running += weight as u64;
        suffix[i] = running;
    }
    suffix
}
