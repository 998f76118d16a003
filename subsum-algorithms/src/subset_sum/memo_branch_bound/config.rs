use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Depth-first recursion, one call frame per item. Deep item lists can
    /// exhaust the thread stack.
    Recursive,
    /// Same traversal driven by an explicit stack; safe for very long item lists.
    Worklist,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MemoLayout {
    Auto,
    Sparse,
    Dense,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub strategy: Strategy,
    pub memo: MemoLayout,
    /// Largest `num_items * (capacity + 1)` table `MemoLayout::Auto` will allocate densely.
    pub dense_cell_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::Worklist,
            memo: MemoLayout::Auto,
            dense_cell_limit: 1 << 22,
        }
    }
}

impl Config {
    pub fn from_hyperparameters(hyperparameters: &Option<Map<String, Value>>) -> Result<Self> {
        match hyperparameters {
            Some(params) => serde_json::from_value(Value::Object(params.clone()))
                .map_err(|e| anyhow!("Invalid hyperparameters: {}", e)),
            None => Ok(Self::default()),
        }
    }

    pub fn use_dense_memo(&self, num_items: usize, capacity: u32) -> bool {
        match self.memo {
            MemoLayout::Sparse => false,
            MemoLayout::Dense => true,
            MemoLayout::Auto => num_items
                .checked_mul(capacity as usize + 1)
                .map_or(false, |cells| cells <= self.dense_cell_limit),
        }
    }
}
