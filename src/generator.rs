//! This module contains logic for generating random knapsack problems, which
//! is mostly useful for testing and benchmarking solvers.

use crate::{Item, Knapsack};
use crate::error::KnapsackResult;

use rand::Rng;
use rand::rngs::ThreadRng;

use rand_distr::Normal;

/// The standard deviation of the capacity, relative to the total weight of
/// all items.
const CAPACITY_DEVIATION: f64 = 0.15;

/// A generator randomly generates [Knapsack] problems. It uses a random
/// number generator to decide the weights, values, and capacity. For most
/// cases, sensible defaults are provided by [Generator::new_default].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the random
    /// problems.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator to
    /// generate random problems.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    /// Generates a single random item with a weight in `1..=max_weight` and a
    /// value in `0..=max_value`. A `max_weight` of zero is treated as one.
    pub fn generate_item(&mut self, max_weight: usize, max_value: u64)
            -> KnapsackResult<Item> {
        let weight = self.rng.gen_range(1..=max_weight.max(1));
        let value = self.rng.gen_range(0..=max_value);
        Item::new(weight, value)
    }

    /// Generates a new random [Knapsack] problem with the given number of
    /// items. The capacity is normally distributed around half of the total
    /// weight of all items, so that usually some, but not all items fit.
    ///
    /// # Arguments
    ///
    /// * `len`: The number of items.
    /// * `max_weight`: The maximum weight of a single item. Weights are
    /// always at least one.
    /// * `max_value`: The maximum value of a single item.
    pub fn generate(&mut self, len: usize, max_weight: usize, max_value: u64)
            -> KnapsackResult<Knapsack> {
        let items = (0..len)
            .map(|_| self.generate_item(max_weight, max_value))
            .collect::<KnapsackResult<Vec<Item>>>()?;
        let total_weight: usize = items.iter().map(Item::weight).sum();
        let capacity = self.random_capacity(total_weight);
        Ok(Knapsack::new(capacity, items))
    }

    fn random_capacity(&mut self, total_weight: usize) -> usize {
        let total = total_weight as f64;
        let distr = Normal::new(total / 2.0, total * CAPACITY_DEVIATION);
        let capacity = match distr {
            Ok(distr) => self.rng.sample(distr),
            Err(_) => total / 2.0
        };

        capacity.round().max(0.0).min(total) as usize
    }
}
