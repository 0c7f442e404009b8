//! This module contains the [Config] record, which describes a problem to
//! solve and how to solve it, as read from a JSON file. An example is given
//! below.
//!
//! ```json
//! {
//!     "maxWeight": 5,
//!     "n": 4,
//!     "algorithm": "all",
//!     "measurePerf": true,
//!     "items": [
//!         { "weight": 2, "value": 3 },
//!         { "weight": 3, "value": 4 },
//!         { "weight": 4, "value": 5 },
//!         { "weight": 5, "value": 6 }
//!     ]
//! }
//! ```
//!
//! All numbers are read as signed integers, so that negative numbers are
//! reported as invalid problems rather than syntax errors.

use crate::{Item, Knapsack};
use crate::algorithm::Algorithm;
use crate::error::{ConfigError, ConfigResult, KnapsackError, KnapsackResult};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fs;
use std::path::Path;

/// The default path from which the binary reads its configuration.
pub const DEFAULT_PATH: &str = "config.json";

/// A single item as it appears in a [Config].
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ItemRecord {

    /// The weight of the item. Must be positive.
    pub weight: i64,

    /// The value of the item. Must not be negative.
    pub value: i64
}

impl ItemRecord {

    /// Converts this record into an [Item].
    ///
    /// # Errors
    ///
    /// If the weight is not positive or the value is negative. In that case,
    /// `KnapsackError::MalformedItem` is returned.
    pub fn to_item(&self) -> KnapsackResult<Item> {
        Item::from_signed(self.weight, self.value)
    }
}

fn to_signed<T>(number: T) -> ConfigResult<i64>
where
    i64: TryFrom<T>
{
    i64::try_from(number).map_err(|_| ConfigError::OutOfRange)
}

impl TryFrom<Item> for ItemRecord {
    type Error = ConfigError;

    fn try_from(item: Item) -> ConfigResult<ItemRecord> {
        Ok(ItemRecord {
            weight: to_signed(item.weight())?,
            value: to_signed(item.value())?
        })
    }
}

/// A problem together with the name of the algorithm that shall solve it and
/// whether its performance shall be measured.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {

    /// The capacity of the knapsack.
    pub max_weight: i64,

    /// The number of items, from the start of `items`, to consider.
    pub n: i64,

    /// The name of the algorithm, see [Algorithm].
    pub algorithm: String,

    /// Whether to measure and report the duration of each solver run.
    pub measure_perf: bool,

    /// The items to choose from.
    pub items: Vec<ItemRecord>
}

impl Config {

    /// Creates a configuration which describes the given problem in full.
    ///
    /// # Errors
    ///
    /// If the capacity, the number of items, or any weight or value exceeds
    /// `i64::MAX`. In that case, `ConfigError::OutOfRange` is returned.
    pub fn from_problem(knapsack: &Knapsack, algorithm: Algorithm,
            measure_perf: bool) -> ConfigResult<Config> {
        let items = knapsack.items().iter()
            .map(|&item| ItemRecord::try_from(item))
            .collect::<ConfigResult<Vec<ItemRecord>>>()?;

        Ok(Config {
            max_weight: to_signed(knapsack.capacity())?,
            n: to_signed(knapsack.len())?,
            algorithm: algorithm.to_string(),
            measure_perf,
            items
        })
    }

    /// Parses a configuration from a JSON string. The problem it describes is
    /// not validated, see [Config::to_problem] for that.
    ///
    /// # Errors
    ///
    /// If the string is not valid JSON or does not have the expected fields.
    /// In that case, `ConfigError::Json` is returned.
    pub fn parse(json: &str) -> ConfigResult<Config> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a configuration from the JSON file at the given path.
    ///
    /// # Errors
    ///
    /// * `ConfigError::Io` if the file cannot be read.
    /// * `ConfigError::Json` if its content cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Config> {
        let path = path.as_ref();
        log::debug!("loading configuration from {}", path.display());
        let json = fs::read_to_string(path)?;
        Config::parse(&json)
    }

    /// Converts this configuration into a JSON string.
    ///
    /// # Errors
    ///
    /// This only fails if serialization itself fails, in which case
    /// `ConfigError::Json` is returned.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses the algorithm name of this configuration.
    ///
    /// # Errors
    ///
    /// If the name is unknown. In that case,
    /// `KnapsackError::UnknownAlgorithm` is returned.
    pub fn algorithm(&self) -> KnapsackResult<Algorithm> {
        self.algorithm.parse()
    }

    /// Validates this configuration and builds the [Knapsack] it describes,
    /// which contains the first `n` items.
    ///
    /// # Errors
    ///
    /// * `KnapsackError::NegativeCapacity` if `max_weight` is negative.
    /// * `KnapsackError::ItemCountOutOfRange` if `n` is negative or greater
    /// than the number of items.
    /// * `KnapsackError::MalformedItem` if any item is malformed, including
    /// the ones after the first `n`.
    pub fn to_problem(&self) -> KnapsackResult<Knapsack> {
        let capacity = usize::try_from(self.max_weight)
            .map_err(|_| KnapsackError::NegativeCapacity)?;
        let n = usize::try_from(self.n)
            .map_err(|_| KnapsackError::ItemCountOutOfRange)?;
        let items = self.items.iter()
            .map(ItemRecord::to_item)
            .collect::<KnapsackResult<Vec<Item>>>()?;
        Knapsack::with_count(capacity, n, items)
    }
}
