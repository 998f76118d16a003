use crate::HashMap;
use ahash::RandomState;
use anyhow::{anyhow, Result};
use std::collections::hash_map::Entry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoRecord {
    /// Largest weight addable from items `begin..` without exceeding the remaining capacity.
    pub best_weight: u32,
    /// Next item to include on the way to `best_weight`, `None` once nothing more is taken.
    pub chosen_from: Option<usize>,
}

impl MemoRecord {
    pub const EMPTY: MemoRecord = MemoRecord {
        best_weight: 0,
        chosen_from: None,
    };
}

/// Cache of search states keyed by `(begin, rest)`.
///
/// A state's record never changes once written, so `insert` keeps the first
/// record it sees for a key.
pub trait MemoStore {
    fn get(&self, begin: usize, rest: u32) -> Option<MemoRecord>;
    fn insert(&mut self, begin: usize, rest: u32, record: MemoRecord);
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn clear(&mut self);
}

/// One hash map per item index, keyed by remaining capacity. Only the
/// reachable residues are stored.
pub struct SparseMemo {
    axes: Vec<HashMap<u32, MemoRecord>>,
    len: usize,
}

impl SparseMemo {
    pub fn new(num_items: usize) -> Self {
        Self::with_hasher(num_items, RandomState::new())
    }

    pub fn with_hasher(num_items: usize, hasher: RandomState) -> Self {
        Self {
            axes: (0..num_items)
                .map(|_| HashMap::with_hasher(hasher.clone()))
                .collect(),
            len: 0,
        }
    }
}

impl MemoStore for SparseMemo {
    fn get(&self, begin: usize, rest: u32) -> Option<MemoRecord> {
        self.axes.get(begin)?.get(&rest).copied()
    }

    fn insert(&mut self, begin: usize, rest: u32, record: MemoRecord) {
        if let Entry::Vacant(slot) = self.axes[begin].entry(rest) {
            slot.insert(record);
            self.len += 1;
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        for axis in self.axes.iter_mut() {
            axis.clear();
        }
        self.len = 0;
    }
}

/// Flat `num_items x (capacity + 1)` table. Constant time access at the cost
/// of allocating every cell up front.
pub struct DenseMemo {
    cells: Vec<Option<MemoRecord>>,
    width: usize,
    len: usize,
}

impl DenseMemo {
    /// Panics if the table cannot be allocated; see [`DenseMemo::try_new`].
    pub fn new(num_items: usize, capacity: u32) -> Self {
        Self::try_new(num_items, capacity).unwrap_or_else(|e| panic!("{}", e))
    }

    pub fn try_new(num_items: usize, capacity: u32) -> Result<Self> {
        let width = capacity as usize + 1;
        let size = num_items.checked_mul(width).ok_or_else(|| {
            anyhow!(
                "Dense memo of {} items x {} capacities overflows usize",
                num_items,
                width
            )
        })?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(size).map_err(|e| {
            anyhow!(
                "Failed to allocate dense memo of {} items x {} capacities: {}",
                num_items,
                width,
                e
            )
        })?;
        cells.resize(size, None);
        Ok(Self {
            cells,
            width,
            len: 0,
        })
    }

    fn index(&self, begin: usize, rest: u32) -> Option<usize> {
        let rest = rest as usize;
        if rest < self.width && begin < self.cells.len() / self.width {
            Some(begin * self.width + rest)
        } else {
            None
        }
    }
}

impl MemoStore for DenseMemo {
    fn get(&self, begin: usize, rest: u32) -> Option<MemoRecord> {
        self.index(begin, rest).and_then(|i| self.cells[i])
    }

    fn insert(&mut self, begin: usize, rest: u32, record: MemoRecord) {
        let i = self
            .index(begin, rest)
            .unwrap_or_else(|| panic!("State ({}, {}) is outside the memo table", begin, rest));
        if self.cells[i].is_none() {
            self.cells[i] = Some(record);
            self.len += 1;
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.cells.fill(None);
        self.len = 0;
    }
}
