use crate::serializable_struct_with_getters;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use subsum_utils::{jsonify, u8s_from_str};

pub type Solution = Map<String, Value>;

serializable_struct_with_getters! {
    BenchmarkSettings {
        challenge_id: String,
        algorithm_id: String,
        difficulty: Vec<i32>,
        hyperparameters: Option<Map<String, Value>>,
    }
}

impl BenchmarkSettings {
    /// Seed for instance generation. Stable for identical settings, rand_hash and nonce.
    pub fn calc_seed(&self, rand_hash: &String, nonce: u64) -> [u8; 32] {
        u8s_from_str(&format!("{}_{}_{}", jsonify(&self), rand_hash, nonce))
    }
}

serializable_struct_with_getters! {
    OutputData {
        nonce: u64,
        total_weight: u32,
        solution: Solution,
    }
}
