use super::{
    config::Strategy,
    memo::{MemoRecord, MemoStore},
    path::reconstruct,
    suffix::suffix_sums,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub states_expanded: u64,
    pub cache_hits: u64,
    pub pruned: u64,
    pub terminals: u64,
}

enum Step {
    Expand,
    Include,
    Exclude { include: u32 },
}

struct Frame {
    begin: usize,
    rest: u32,
    step: Step,
}

/// Memoized branch-and-bound search over `(begin, rest)` states.
///
/// `weights` must be sorted non-decreasing. This is not checked in release
/// builds; unsorted input silently yields a wrong answer because the search
/// stops at the first item that does not fit.
///
/// The memo store and the bound survive between calls to [`Solver::solve`], so
/// solving again returns the cached root. Call [`Solver::reset`] before reusing
/// a solver for a fresh search.
///
/// [`Strategy::Recursive`] nests one call per item considered, so very long
/// item lists should use [`Strategy::Worklist`].
pub struct Solver<'a, M: MemoStore> {
    weights: &'a [u32],
    suffix: Vec<u64>,
    capacity: u32,
    memo: M,
    bound: u32,
    stats: SearchStats,
}

impl<'a, M: MemoStore> Solver<'a, M> {
    pub fn new(capacity: u32, weights: &'a [u32], memo: M) -> Self {
        debug_assert!(
            weights.windows(2).all(|w| w[0] <= w[1]),
            "weights must be sorted non-decreasing"
        );
        Self {
            weights,
            suffix: suffix_sums(weights),
            capacity,
            memo,
            bound: 0,
            stats: SearchStats::default(),
        }
    }

    /// Best total weight found by any search so far.
    pub fn bound(&self) -> u32 {
        self.bound
    }

    pub fn memo(&self) -> &M {
        &self.memo
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset(&mut self) {
        self.memo.clear();
        self.bound = 0;
        self.stats = SearchStats::default();
    }

    /// Largest total weight of items fitting in the capacity.
    pub fn solve(&mut self, strategy: Strategy) -> u32 {
        let root = match strategy {
            Strategy::Recursive => self.search(0, self.capacity),
            Strategy::Worklist => self.search_worklist(0, self.capacity),
        };
        root.best_weight
    }

    /// Ascending indices of the selection found by the last [`Solver::solve`].
    pub fn reconstruct(&self) -> Vec<usize> {
        reconstruct(self.weights, self.capacity, &self.memo)
    }

    /// Settles a state without expanding it, if possible.
    ///
    /// A cached record is returned before the bound is consulted: a state that
    /// holds a record stays consistent with it, and re-solving a populated
    /// memo reuses the root instead of pruning it against its own result.
    fn shortcut(&mut self, begin: usize, rest: u32) -> Option<MemoRecord> {
        match self.weights.get(begin) {
            // sorted weights: if this item does not fit, none of the rest do
            Some(&weight) if weight <= rest => {}
            _ => {
                self.stats.terminals += 1;
                return Some(MemoRecord::EMPTY);
            }
        }
        if let Some(record) = self.memo.get(begin, rest) {
            self.stats.cache_hits += 1;
            return Some(record);
        }
        // strict, so a branch able to tie the bound is still explored
        let consumed = (self.capacity - rest) as u64;
        if consumed + self.suffix[begin] < self.bound as u64 {
            self.stats.pruned += 1;
            return Some(MemoRecord::EMPTY);
        }
        None
    }

    /// Upper limit on what a state can add: the room left or everything remaining.
    fn ceiling(&self, begin: usize, rest: u32) -> u32 {
        self.suffix[begin].min(rest as u64) as u32
    }

    fn settle(
        &mut self,
        begin: usize,
        rest: u32,
        include: u32,
        exclude: Option<MemoRecord>,
    ) -> MemoRecord {
        let record = match exclude {
            Some(exclude) if exclude.best_weight > include => exclude,
            _ => MemoRecord {
                best_weight: include,
                chosen_from: Some(begin),
            },
        };
        self.bound = self.bound.max(self.capacity - rest + record.best_weight);
        self.memo.insert(begin, rest, record);
        record
    }

    fn search(&mut self, begin: usize, rest: u32) -> MemoRecord {
        if let Some(record) = self.shortcut(begin, rest) {
            return record;
        }
        self.stats.states_expanded += 1;

        let weight = self.weights[begin];
        let include = weight + self.search(begin + 1, rest - weight).best_weight;
        let exclude = if include == self.ceiling(begin, rest) {
            None
        } else {
            Some(self.search(begin + 1, rest))
        };
        self.settle(begin, rest, include, exclude)
    }

    /// [`Solver::search`] with an explicit stack. Visits states in the same
    /// order, so records, bound and statistics come out identical.
    fn search_worklist(&mut self, begin: usize, rest: u32) -> MemoRecord {
        let mut stack = vec![Frame {
            begin,
            rest,
            step: Step::Expand,
        }];
        let mut returned = MemoRecord::EMPTY;

        while let Some(Frame { begin, rest, step }) = stack.pop() {
            match step {
                Step::Expand => {
                    if let Some(record) = self.shortcut(begin, rest) {
                        returned = record;
                        continue;
                    }
                    self.stats.states_expanded += 1;
                    stack.push(Frame {
                        begin,
                        rest,
                        step: Step::Include,
                    });
                    stack.push(Frame {
                        begin: begin + 1,
                        rest: rest - self.weights[begin],
                        step: Step::Expand,
                    });
                }
                Step::Include => {
                    let include = self.weights[begin] + returned.best_weight;
                    if include == self.ceiling(begin, rest) {
                        returned = self.settle(begin, rest, include, None);
                    } else {
                        stack.push(Frame {
                            begin,
                            rest,
                            step: Step::Exclude { include },
                        });
                        stack.push(Frame {
                            begin: begin + 1,
                            rest,
                            step: Step::Expand,
                        });
                    }
                }
                Step::Exclude { include } => {
                    returned = self.settle(begin, rest, include, Some(returned));
                }
            }
        }
        returned
    }
}
