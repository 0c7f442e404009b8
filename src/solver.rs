//! This module contains the logic for solving knapsack problems.
//!
//! Most importantly, this module contains the definition of the
//! [Solver](trait.Solver.html) trait and the
//! [ExhaustiveSolver](struct.ExhaustiveSolver.html) as a baseline
//! implementation. The faster solvers can be found in the [greedy] and
//! [memoized] submodules.

pub mod greedy;
pub mod memoized;

use crate::{Item, Knapsack};

use std::fmt::{self, Display, Formatter};

/// An enumeration of the kinds of results a solver can provide. Exact solvers
/// always return `Solution::Optimal`, while heuristics that may miss the
/// optimum return `Solution::Approximate`, even if the value they found
/// happens to be optimal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the wrapped value is the maximum total value that can
    /// be achieved for the problem.
    Optimal(u64),

    /// Indicates that the wrapped value is the total value of some feasible
    /// selection of items, which is not necessarily optimal.
    Approximate(u64)
}

impl Solution {

    /// Gets the total value of the selected items, regardless of whether it
    /// is known to be optimal.
    pub fn value(&self) -> u64 {
        match self {
            Solution::Optimal(value) | Solution::Approximate(value) => *value
        }
    }

    /// Indicates whether this solution is known to be optimal.
    pub fn is_optimal(&self) -> bool {
        matches!(self, Solution::Optimal(_))
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A trait for structs which have the ability to solve knapsack problems.
/// Not all implementers must find an optimal solution, some solvers may trade
/// optimality for speed. Those shall mark their results as
/// `Solution::Approximate`.
pub trait Solver {

    /// Solves, or approximately solves, the provided knapsack problem. The
    /// problem is not modified.
    fn solve(&self, knapsack: &Knapsack) -> Solution;
}

/// A perfect [Solver](trait.Solver.html) which solves knapsack problems by
/// recursively trying both taking and leaving each item. This means two
/// things:
///
/// * Its runtime is exponential in the number of items, i.e. it becomes very
/// slow beyond a few dozen items.
/// * It always returns the optimal value.
///
/// Items are decided in reverse order, starting with the last one.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExhaustiveSolver;

impl ExhaustiveSolver {
    fn solve_rec(capacity: usize, items: &[Item], value: u64) -> u64 {
        if capacity == 0 {
            return value;
        }

        let (item, rest) = match items.split_last() {
            Some(split) => split,
            None => return value
        };

        if item.weight() > capacity {
            return ExhaustiveSolver::solve_rec(capacity, rest, value);
        }

        let with_item = ExhaustiveSolver::solve_rec(
            capacity - item.weight(), rest, value + item.value());
        let without_item = ExhaustiveSolver::solve_rec(capacity, rest, value);
        with_item.max(without_item)
    }
}

impl Solver for ExhaustiveSolver {
    fn solve(&self, knapsack: &Knapsack) -> Solution {
        log::debug!("exhaustive search over {} items with capacity {}",
            knapsack.len(), knapsack.capacity());
        Solution::Optimal(
            ExhaustiveSolver::solve_rec(knapsack.capacity(), knapsack.items(),
                0))
    }
}
