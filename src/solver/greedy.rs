//! This module contains the [GreedySolver], which approximates knapsack
//! problems by taking items in order of decreasing value per weight.

use crate::{Item, Knapsack};
use crate::solver::{Solution, Solver};

use std::cmp::Ordering;

/// Sorts the given items by descending value/weight ratio. The sort is
/// stable, so items with equal ratio keep their relative order.
pub fn sort_by_ratio(items: &mut [Item]) {
    items.sort_by(|a, b|
        b.ratio().partial_cmp(&a.ratio()).unwrap_or(Ordering::Equal));
}

/// An imperfect [Solver] which sorts the items by value per unit of weight
/// and then takes every item that still fits, in that order. It never
/// reconsiders a decision, so it runs in `O(n log n)` but may miss the
/// optimum. Its results are therefore always `Solution::Approximate`.
///
/// The problem itself is not reordered, the solver sorts a copy of the items.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySolver;

impl GreedySolver {
    fn take_greedily(mut capacity: usize, sorted_items: &[Item]) -> u64 {
        let mut value = 0;

        for item in sorted_items {
            if capacity == 0 {
                break;
            }

            if item.weight() <= capacity {
                capacity -= item.weight();
                value += item.value();
            }
        }

        value
    }
}

impl Solver for GreedySolver {
    fn solve(&self, knapsack: &Knapsack) -> Solution {
        log::debug!("greedy selection over {} items with capacity {}",
            knapsack.len(), knapsack.capacity());
        let mut sorted_items = knapsack.items().to_vec();
        sort_by_ratio(&mut sorted_items);
        Solution::Approximate(
            GreedySolver::take_greedily(knapsack.capacity(), &sorted_items))
    }
}
