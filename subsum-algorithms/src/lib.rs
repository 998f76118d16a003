use ahash::RandomState;
use subsum_utils::u64s_from_seed;

pub fn seeded_hasher(seed: &[u8; 32]) -> RandomState {
    let [seed1, seed2, seed3, seed4] = u64s_from_seed(seed);
    RandomState::with_seeds(seed1, seed2, seed3, seed4)
}
pub(crate) type HashMap<K, V> = std::collections::HashMap<K, V, RandomState>;

pub mod subset_sum;
pub use subset_sum as c001;
