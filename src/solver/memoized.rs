//! This module contains the exact dynamic programming solvers. The
//! [MemoizedSolver] explores the same decision tree as the
//! [ExhaustiveSolver](crate::solver::ExhaustiveSolver), but remembers the
//! result of each subproblem in a [MemoTable]. The [TabulatedSolver] computes
//! the same values bottom-up without recursion.
//!
//! A subproblem is identified by the number of items that remain to be
//! decided (always a prefix of the item list) and the remaining capacity. The
//! value stored for it is the best value that can still be *added* from that
//! point on. The value collected by earlier decisions is not part of the key
//! and not part of the stored value, so all paths that reach the same
//! subproblem share its entry.

use crate::{Item, Knapsack};
use crate::solver::{Solution, Solver};
use crate::timing::Stopwatch;

use std::collections::HashMap;

/// The largest number of cells for which tables and rows are allocated in
/// full. Larger ones only store the cells that are actually visited.
const DENSE_CELL_LIMIT: usize = 1 << 24;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Cells {
    Dense(Vec<Option<u64>>),
    Sparse(HashMap<(usize, usize), u64>)
}

fn dense_len(items: usize, capacity: usize) -> Option<usize> {
    let columns = capacity.checked_add(1)?;
    items.checked_add(1)?
        .checked_mul(columns)
        .filter(|&len| len <= DENSE_CELL_LIMIT)
}

// Only valid for dense tables, whose size is known to fit.
fn dense_index(capacity: usize, items_remaining: usize,
        capacity_remaining: usize) -> usize {
    items_remaining * (capacity + 1) + capacity_remaining
}

/// A two-dimensional table of optional values, indexed by the number of
/// remaining items (`0..=n`) and the remaining capacity (`0..=capacity`).
/// Cells start empty and are written at most once.
///
/// Small tables are stored as one flat vector. If `(n + 1) * (capacity + 1)`
/// exceeds a fixed limit, only filled cells are stored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MemoTable {
    items: usize,
    capacity: usize,
    cells: Cells
}

impl MemoTable {

    /// Creates a new, empty table for a problem with the given number of
    /// items and capacity. It has `(items + 1) * (capacity + 1)` cells.
    pub fn new(items: usize, capacity: usize) -> MemoTable {
        let cells = match dense_len(items, capacity) {
            Some(len) => Cells::Dense(vec![None; len]),
            None => Cells::Sparse(HashMap::new())
        };

        MemoTable {
            items,
            capacity,
            cells
        }
    }

    fn contains(&self, items_remaining: usize, capacity_remaining: usize)
            -> bool {
        items_remaining <= self.items && capacity_remaining <= self.capacity
    }

    /// Indicates whether every cell of this table is allocated up front.
    pub fn is_dense(&self) -> bool {
        matches!(self.cells, Cells::Dense(_))
    }

    /// Gets the dimensions of this table in the form `(rows, columns)`, where
    /// rows correspond to remaining items and columns to remaining capacity.
    /// Dimensions beyond `usize::MAX` are reported as `usize::MAX`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.items.saturating_add(1), self.capacity.saturating_add(1))
    }

    /// Gets the stored value for the given subproblem, or `None` if it has
    /// not been computed yet or lies outside the table.
    pub fn get(&self, items_remaining: usize, capacity_remaining: usize)
            -> Option<u64> {
        if !self.contains(items_remaining, capacity_remaining) {
            return None;
        }

        match &self.cells {
            Cells::Dense(cells) => cells[dense_index(self.capacity,
                items_remaining, capacity_remaining)],
            Cells::Sparse(cells) =>
                cells.get(&(items_remaining, capacity_remaining)).copied()
        }
    }

    /// Stores the value for the given subproblem. Returns `false` if the
    /// subproblem lies outside the table, in which case nothing is stored.
    ///
    /// A cell must only ever be written with the optimal value of its
    /// subproblem, so writing a different value to a filled cell is a logic
    /// error.
    pub fn set(&mut self, items_remaining: usize, capacity_remaining: usize,
            value: u64) -> bool {
        if !self.contains(items_remaining, capacity_remaining) {
            return false;
        }

        let capacity = self.capacity;
        let old = match &mut self.cells {
            Cells::Dense(cells) => cells[dense_index(capacity,
                items_remaining, capacity_remaining)].replace(value),
            Cells::Sparse(cells) =>
                cells.insert((items_remaining, capacity_remaining), value)
        };

        debug_assert!(old.map_or(true, |old| old == value),
            "memo cell ({}, {}) overwritten with a different value",
            items_remaining, capacity_remaining);
        true
    }

    /// Counts the cells which hold a value.
    pub fn filled(&self) -> usize {
        match &self.cells {
            Cells::Dense(cells) => cells.iter().filter(|c| c.is_some()).count(),
            Cells::Sparse(cells) => cells.len()
        }
    }
}

/// A perfect [Solver] which uses memoized recursion. It makes the same
/// include/exclude decisions as the
/// [ExhaustiveSolver](crate::solver::ExhaustiveSolver), but each subproblem
/// is solved only once, bounding the runtime by `O(n * capacity)`. The memory
/// usage is of the same order.
///
/// The recursion depth equals the number of items. For very long item lists,
/// use the [TabulatedSolver] instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoizedSolver;

impl MemoizedSolver {
    fn solve_rec(capacity: usize, items: &[Item], memory: &mut MemoTable)
            -> u64 {
        if capacity == 0 {
            return 0;
        }

        let (item, rest) = match items.split_last() {
            Some(split) => split,
            None => return 0
        };

        if let Some(value) = memory.get(items.len(), capacity) {
            return value;
        }

        let best = if item.weight() > capacity {
            MemoizedSolver::solve_rec(capacity, rest, memory)
        }
        else {
            let with_item = item.value() + MemoizedSolver::solve_rec(
                capacity - item.weight(), rest, memory);
            let without_item =
                MemoizedSolver::solve_rec(capacity, rest, memory);
            with_item.max(without_item)
        };

        memory.set(items.len(), capacity, best);
        best
    }

    /// Solves the given problem like [Solver::solve], but also returns the
    /// table of subproblem values that was filled in the process. The table
    /// covers capacities up to [Knapsack::effective_capacity].
    pub fn solve_with_table(&self, knapsack: &Knapsack)
            -> (Solution, MemoTable) {
        let capacity = knapsack.effective_capacity();
        let stopwatch = Stopwatch::start();
        let mut memory = MemoTable::new(knapsack.len(), capacity);
        let (rows, columns) = memory.dimensions();
        log::trace!("allocated {} memo table {} x {} in {:?}",
            if memory.is_dense() { "dense" } else { "sparse" }, rows, columns,
            stopwatch.stop());

        let value =
            MemoizedSolver::solve_rec(capacity, knapsack.items(), &mut memory);
        log::trace!("memo table has {} of {} cells filled", memory.filled(),
            rows.saturating_mul(columns));
        (Solution::Optimal(value), memory)
    }
}

impl Solver for MemoizedSolver {
    fn solve(&self, knapsack: &Knapsack) -> Solution {
        log::debug!("memoized search over {} items with capacity {}",
            knapsack.len(), knapsack.capacity());
        self.solve_with_table(knapsack).0
    }
}

/// A perfect [Solver] which computes the same subproblem values as the
/// [MemoizedSolver], but iteratively and bottom-up. Since every subproblem
/// with `k` items only depends on subproblems with `k - 1` items, a single
/// row of `capacity + 1` values is kept and updated once per item.
///
/// If that row would be too large, the solver instead keeps the list of
/// reachable `(weight, value)` pairs which are not dominated by a lighter
/// pair of at least the same value.
#[derive(Clone, Copy, Debug, Default)]
pub struct TabulatedSolver;

impl TabulatedSolver {
    fn solve_dense(capacity: usize, items: &[Item]) -> u64 {
        let mut best = vec![0u64; capacity + 1];

        for item in items {
            let weight = item.weight();

            // Descending, so that best[c - weight] still excludes this item.
            for c in (weight..=capacity).rev() {
                best[c] = best[c].max(best[c - weight] + item.value());
            }
        }

        best[capacity]
    }

    fn solve_sparse(capacity: usize, items: &[Item]) -> u64 {
        // Sorted by weight, with strictly increasing values.
        let mut pairs = vec![(0usize, 0u64)];

        for item in items {
            let with_item = pairs.iter()
                .filter_map(|&(weight, value)|
                    weight.checked_add(item.weight())
                        .filter(|&weight| weight <= capacity)
                        .map(|weight| (weight, value + item.value())))
                .collect::<Vec<_>>();
            pairs.extend(with_item);
            pairs.sort_unstable_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

            let mut best: Option<u64> = None;
            pairs.retain(|&(_, value)| {
                if best.map_or(true, |best| value > best) {
                    best = Some(value);
                    true
                }
                else {
                    false
                }
            });
        }

        pairs.last().map_or(0, |&(_, value)| value)
    }
}

impl Solver for TabulatedSolver {
    fn solve(&self, knapsack: &Knapsack) -> Solution {
        log::debug!("tabulated search over {} items with capacity {}",
            knapsack.len(), knapsack.capacity());
        let capacity = knapsack.effective_capacity();
        let value = if dense_len(0, capacity).is_some() {
            TabulatedSolver::solve_dense(capacity, knapsack.items())
        }
        else {
            log::trace!("capacity {} too large for a dense row", capacity);
            TabulatedSolver::solve_sparse(capacity, knapsack.items())
        };

        Solution::Optimal(value)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::solver::ExhaustiveSolver;
    use crate::solver::tests::{knapsack, ratio_trap_knapsack, small_knapsack};

    #[test]
    fn table_starts_empty() {
        let table = MemoTable::new(3, 4);
        assert_eq!((4, 5), table.dimensions());
        assert_eq!(0, table.filled());
        assert_eq!(None, table.get(3, 4));
    }

    #[test]
    fn table_set_and_get() {
        let mut table = MemoTable::new(3, 4);
        assert!(table.set(2, 3, 17));
        assert_eq!(Some(17), table.get(2, 3));
        assert_eq!(None, table.get(3, 2));
        assert_eq!(1, table.filled());
    }

    #[test]
    fn table_out_of_range() {
        let mut table = MemoTable::new(3, 4);
        assert!(!table.set(4, 0, 1));
        assert!(!table.set(0, 5, 1));
        assert_eq!(None, table.get(4, 0));
        assert_eq!(None, table.get(0, 5));
        assert_eq!(0, table.filled());
    }

    #[test]
    fn table_rewriting_same_value() {
        let mut table = MemoTable::new(1, 1);
        assert!(table.set(1, 1, 5));
        assert!(table.set(1, 1, 5));
        assert_eq!(Some(5), table.get(1, 1));
    }

    #[test]
    fn table_without_room_is_sparse() {
        let mut table = MemoTable::new(3, usize::MAX);

        assert!(!table.is_dense());
        assert_eq!((4, usize::MAX), table.dimensions());
        assert!(table.set(3, usize::MAX, 9));
        assert!(!table.set(4, 0, 1));
        assert_eq!(Some(9), table.get(3, usize::MAX));
        assert_eq!(None, table.get(2, usize::MAX));
        assert_eq!(1, table.filled());
    }

    #[test]
    fn small_table_is_dense() {
        assert!(MemoTable::new(3, 4).is_dense());
    }

    #[test]
    fn memoized_small() {
        assert_eq!(Solution::Optimal(7),
            MemoizedSolver.solve(&small_knapsack()));
    }

    #[test]
    fn memoized_ratio_trap() {
        assert_eq!(Solution::Optimal(220),
            MemoizedSolver.solve(&ratio_trap_knapsack()));
    }

    #[test]
    fn memoized_zero_capacity() {
        let knapsack = knapsack(0, &[(1, 10), (2, 20)]);
        let (solution, table) = MemoizedSolver.solve_with_table(&knapsack);

        assert_eq!(Solution::Optimal(0), solution);
        assert_eq!(0, table.filled());
    }

    #[test]
    fn memoized_no_items() {
        let knapsack = knapsack(10, &[]);
        assert_eq!(Solution::Optimal(0), MemoizedSolver.solve(&knapsack));
    }

    #[test]
    fn memoized_single_item() {
        assert_eq!(Solution::Optimal(42),
            MemoizedSolver.solve(&knapsack(10, &[(10, 42)])));
        assert_eq!(Solution::Optimal(0),
            MemoizedSolver.solve(&knapsack(9, &[(10, 42)])));
    }

    #[test]
    fn memoized_huge_capacity() {
        let knapsack = knapsack(1 << 62, &[(1, 1), (2, 2), (3, 3)]);
        let (solution, table) = MemoizedSolver.solve_with_table(&knapsack);

        assert_eq!(Solution::Optimal(6), solution);
        assert!(table.is_dense());
        assert_eq!((4, 7), table.dimensions());
    }

    #[test]
    fn memoized_huge_weights() {
        let knapsack = knapsack(1 << 61,
            &[(1 << 60, 5), (1 << 60, 7), ((1 << 60) + 1, 20)]);
        let (solution, table) = MemoizedSolver.solve_with_table(&knapsack);

        assert_eq!(ExhaustiveSolver.solve(&knapsack), solution);
        assert_eq!(Solution::Optimal(20), solution);
        assert!(!table.is_dense());
    }

    #[test]
    fn memoized_shares_subproblems_across_totals() {
        // Taking only the last or only the middle item leads to the
        // subproblem (1 item left, capacity 3) with different collected
        // totals. A cache
        // that stored absolute totals would answer the second visit with the
        // total of the first.
        let knapsack = knapsack(5, &[(3, 4), (2, 1), (2, 10)]);
        let exhaustive = ExhaustiveSolver.solve(&knapsack);

        assert_eq!(Solution::Optimal(14), exhaustive);
        assert_eq!(exhaustive, MemoizedSolver.solve(&knapsack));
    }

    #[test]
    fn memoized_table_holds_incremental_values() {
        let knapsack = small_knapsack();
        let (_, table) = MemoizedSolver.solve_with_table(&knapsack);

        // With only the first item (2, 3) left and capacity 2, the best
        // addition is 3.
        assert_eq!(Some(3), table.get(1, 2));
        // The whole problem.
        assert_eq!(Some(7), table.get(4, 5));
    }

    #[test]
    fn memoized_table_bounded() {
        let knapsack = knapsack(20, &[(3, 4), (5, 7), (2, 3), (7, 9), (4, 4),
            (6, 8), (1, 1)]);
        let (_, table) = MemoizedSolver.solve_with_table(&knapsack);

        assert!(table.filled() <= knapsack.len() * knapsack.capacity());
        assert_eq!(Some(ExhaustiveSolver.solve(&knapsack).value()),
            table.get(knapsack.len(), knapsack.capacity()));
    }

    #[test]
    fn tabulated_small() {
        assert_eq!(Solution::Optimal(7),
            TabulatedSolver.solve(&small_knapsack()));
    }

    #[test]
    fn tabulated_ratio_trap() {
        assert_eq!(Solution::Optimal(220),
            TabulatedSolver.solve(&ratio_trap_knapsack()));
    }

    #[test]
    fn tabulated_boundaries() {
        assert_eq!(Solution::Optimal(0),
            TabulatedSolver.solve(&knapsack(0, &[(1, 10)])));
        assert_eq!(Solution::Optimal(0),
            TabulatedSolver.solve(&knapsack(10, &[])));
        assert_eq!(Solution::Optimal(42),
            TabulatedSolver.solve(&knapsack(10, &[(10, 42)])));
        assert_eq!(Solution::Optimal(0),
            TabulatedSolver.solve(&knapsack(9, &[(10, 42)])));
    }

    #[test]
    fn tabulated_huge_capacity() {
        let knapsack = knapsack(1 << 62, &[(1, 1), (2, 2), (3, 3)]);
        assert_eq!(Solution::Optimal(6), TabulatedSolver.solve(&knapsack));
    }

    #[test]
    fn tabulated_huge_weights() {
        let knapsack = knapsack(1 << 61,
            &[(1 << 60, 5), (1 << 60, 7), ((1 << 60) + 1, 20), (3, 1)]);

        // 20 + 1 beats 5 + 7 + 1.
        assert_eq!(Solution::Optimal(21), TabulatedSolver.solve(&knapsack));
        assert_eq!(ExhaustiveSolver.solve(&knapsack),
            TabulatedSolver.solve(&knapsack));
    }

    #[test]
    fn tabulated_handles_long_item_lists() {
        let items: Vec<(usize, u64)> = (0..100_000)
            .map(|i| (1 + i % 7, (i % 11) as u64))
            .collect();
        let knapsack = knapsack(50, &items);

        // 50 items of weight 1 and value 10 exist (i % 77 == 21), so that is
        // the best possible.
        assert_eq!(Solution::Optimal(500), TabulatedSolver.solve(&knapsack));
    }
}
