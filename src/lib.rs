// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements a small engine for the 0/1 knapsack problem: given a
//! weight capacity and a list of items, each with a weight and a value,
//! select a subset of the items with maximum total value whose total weight
//! does not exceed the capacity. It supports the following key features:
//!
//! * Validated construction of problem instances
//! * Solving by exhaustive search, by a greedy approximation, and by memoized
//! or tabulated dynamic programming
//! * Selecting a strategy by name, or running all of them with timing
//! * Loading problems from JSON configuration files
//! * Generating random problem instances
//!
//! # Creating problems
//!
//! A problem is represented by a [Knapsack], which holds the capacity and the
//! [Item]s to choose from. Items are identified by their position in the
//! list.
//!
//! ```
//! use knapsack_variants::{Item, Knapsack};
//!
//! let items = vec![
//!     Item::new(2, 3).unwrap(),
//!     Item::new(3, 4).unwrap(),
//!     Item::new(4, 5).unwrap(),
//!     Item::new(5, 6).unwrap()
//! ];
//! let knapsack = Knapsack::new(5, items);
//! assert_eq!(4, knapsack.len());
//! ```
//!
//! Items must have a positive weight, so `Item::new(0, 1)` is an error.
//!
//! # Solving problems
//!
//! This crate offers a [Solver](solver::Solver) trait for structs that can
//! solve a knapsack problem, either exactly or approximately. The
//! [Solution](solver::Solution) they return tells which one it is.
//!
//! ```
//! use knapsack_variants::{Item, Knapsack};
//! use knapsack_variants::solver::{ExhaustiveSolver, Solution, Solver};
//! use knapsack_variants::solver::greedy::GreedySolver;
//! use knapsack_variants::solver::memoized::MemoizedSolver;
//!
//! let knapsack = Knapsack::new(50, vec![
//!     Item::new(10, 60).unwrap(),
//!     Item::new(20, 100).unwrap(),
//!     Item::new(30, 120).unwrap()
//! ]);
//!
//! assert_eq!(Solution::Optimal(220), ExhaustiveSolver.solve(&knapsack));
//! assert_eq!(Solution::Optimal(220), MemoizedSolver.solve(&knapsack));
//!
//! // Greedy by value/weight ratio takes the first two items and then has no
//! // room for the third.
//! assert_eq!(Solution::Approximate(160), GreedySolver.solve(&knapsack));
//! ```
//!
//! # Selecting by name
//!
//! The [algorithm] module maps names to solvers. The special name `"all"`
//! runs every solver in turn.
//!
//! ```
//! use knapsack_variants::{Item, Knapsack};
//! use knapsack_variants::algorithm::{self, Algorithm};
//!
//! let knapsack = Knapsack::new(5, vec![
//!     Item::new(2, 3).unwrap(),
//!     Item::new(3, 4).unwrap()
//! ]);
//! let algorithm: Algorithm = "all".parse().unwrap();
//! let reports = algorithm::solve(&knapsack, algorithm);
//!
//! assert_eq!(3, reports.len());
//! assert!(reports.iter().all(|r| r.solution.value() == 7));
//! assert!("foo".parse::<Algorithm>().is_err());
//! ```
//!
//! # Note regarding performance
//!
//! The exhaustive solver explores all subsets of the items, so it is only
//! usable for a few dozen items. The memoized solver runs in time and memory
//! proportional to the number of items times the capacity, and recurses once
//! per item. Capacities above the total weight of all items are treated as
//! that total, so a huge capacity alone does not make it slow. For very long
//! item lists use the
//! [TabulatedSolver](solver::memoized::TabulatedSolver), which computes the
//! same values without recursion.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod generator;
pub mod solver;
pub mod timing;


use error::{KnapsackError, KnapsackResult};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// A single item that may be put into a knapsack. It has a weight, which
/// counts against the capacity of the knapsack, and a value, which is what is
/// maximized. Items are immutable once created.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Item {
    weight: usize,
    value: u64
}

impl Item {

    /// Creates a new item with the given weight and value.
    ///
    /// # Errors
    ///
    /// If `weight` is zero. In that case, `KnapsackError::MalformedItem` is
    /// returned.
    pub fn new(weight: usize, value: u64) -> KnapsackResult<Item> {
        if weight == 0 {
            return Err(KnapsackError::MalformedItem);
        }

        Ok(Item {
            weight,
            value
        })
    }

    /// Creates a new item from signed weight and value, as they may come from
    /// an external source.
    ///
    /// # Errors
    ///
    /// If `weight` is not positive or `value` is negative. In that case,
    /// `KnapsackError::MalformedItem` is returned.
    pub fn from_signed(weight: i64, value: i64) -> KnapsackResult<Item> {
        let weight = usize::try_from(weight)
            .map_err(|_| KnapsackError::MalformedItem)?;
        let value = u64::try_from(value)
            .map_err(|_| KnapsackError::MalformedItem)?;
        Item::new(weight, value)
    }

    /// Gets the weight of this item.
    pub fn weight(&self) -> usize {
        self.weight
    }

    /// Gets the value of this item.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Gets the value per unit of weight of this item. This is only used for
    /// ordering items in the greedy strategy.
    pub fn ratio(&self) -> f64 {
        self.value as f64 / self.weight as f64
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(weight: {}, value: {})", self.weight, self.value)
    }
}

/// A 0/1 knapsack problem, consisting of a weight capacity and an ordered
/// list of [Item]s. Every item may be taken at most once. A solution is a
/// subset of the items whose total weight does not exceed the capacity, and
/// an optimal solution is one with maximum total value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Knapsack {
    capacity: usize,
    items: Vec<Item>
}

impl Knapsack {

    /// Creates a new knapsack problem with the given capacity and items.
    pub fn new(capacity: usize, items: Vec<Item>) -> Knapsack {
        Knapsack {
            capacity,
            items
        }
    }

    /// Creates a new knapsack problem with the given capacity which only
    /// considers the first `n` of the given items.
    ///
    /// # Errors
    ///
    /// If `n` is greater than the number of items. In that case,
    /// `KnapsackError::ItemCountOutOfRange` is returned.
    pub fn with_count(capacity: usize, n: usize, mut items: Vec<Item>)
            -> KnapsackResult<Knapsack> {
        if n > items.len() {
            return Err(KnapsackError::ItemCountOutOfRange);
        }

        items.truncate(n);
        Ok(Knapsack::new(capacity, items))
    }

    /// Gets the maximum total weight of a solution to this problem.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Gets the items to choose from, in their original order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Gets the number of items to choose from.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Indicates whether there are no items to choose from.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Computes the total weight of all items. If it exceeds `usize::MAX`,
    /// `usize::MAX` is returned.
    pub fn total_weight(&self) -> usize {
        self.items.iter()
            .fold(0usize, |total, item| total.saturating_add(item.weight()))
    }

    /// Gets the capacity that actually limits a solution, which is the
    /// smaller of the capacity and the [Knapsack::total_weight]. Any capacity
    /// above the total weight leaves room for every item, so the optimum does
    /// not change when using this instead of [Knapsack::capacity].
    pub fn effective_capacity(&self) -> usize {
        self.capacity.min(self.total_weight())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn item_accessors() {
        let item = Item::new(4, 10).unwrap();
        assert_eq!(4, item.weight());
        assert_eq!(10, item.value());
        assert_eq!(2.5, item.ratio());
    }

    #[test]
    fn item_zero_weight() {
        assert_eq!(Err(KnapsackError::MalformedItem), Item::new(0, 5));
    }

    #[test]
    fn item_zero_value_is_fine() {
        let item = Item::new(3, 0).unwrap();
        assert_eq!(0.0, item.ratio());
    }

    #[test]
    fn item_from_signed_ok() {
        assert_eq!(Item::new(2, 3), Item::from_signed(2, 3));
    }

    #[test]
    fn item_from_signed_negative_weight() {
        assert_eq!(Err(KnapsackError::MalformedItem),
            Item::from_signed(-2, 3));
    }

    #[test]
    fn item_from_signed_negative_value() {
        assert_eq!(Err(KnapsackError::MalformedItem),
            Item::from_signed(2, -3));
    }

    #[test]
    fn with_count_truncates() {
        let items = vec![
            Item::new(1, 1).unwrap(),
            Item::new(2, 2).unwrap(),
            Item::new(3, 3).unwrap()
        ];
        let knapsack = Knapsack::with_count(10, 2, items.clone()).unwrap();

        assert_eq!(&items[..2], knapsack.items());
        assert_eq!(10, knapsack.capacity());
    }

    #[test]
    fn with_count_zero_is_empty() {
        let items = vec![Item::new(1, 1).unwrap()];
        let knapsack = Knapsack::with_count(10, 0, items).unwrap();
        assert!(knapsack.is_empty());
    }

    #[test]
    fn with_count_too_large() {
        let items = vec![Item::new(1, 1).unwrap()];
        assert_eq!(Err(KnapsackError::ItemCountOutOfRange),
            Knapsack::with_count(10, 2, items));
    }

    #[test]
    fn total_weight_of_all_items() {
        let knapsack = Knapsack::new(5, vec![
            Item::new(2, 3).unwrap(),
            Item::new(3, 4).unwrap(),
            Item::new(4, 5).unwrap()
        ]);

        assert_eq!(9, knapsack.total_weight());
        assert_eq!(0, Knapsack::new(5, Vec::new()).total_weight());
    }

    #[test]
    fn total_weight_saturates() {
        let knapsack = Knapsack::new(5, vec![
            Item::new(usize::MAX, 1).unwrap(),
            Item::new(2, 1).unwrap()
        ]);

        assert_eq!(usize::MAX, knapsack.total_weight());
    }

    #[test]
    fn effective_capacity_is_limited_by_items() {
        let items = vec![
            Item::new(2, 3).unwrap(),
            Item::new(3, 4).unwrap()
        ];

        assert_eq!(4, Knapsack::new(4, items.clone()).effective_capacity());
        assert_eq!(5, Knapsack::new(1 << 62, items).effective_capacity());
        assert_eq!(0,
            Knapsack::new(1 << 62, Vec::new()).effective_capacity());
    }
}
