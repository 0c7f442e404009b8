//! This module contains some error and result definitions used in this crate.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;

/// Miscellaneous errors that can occur when constructing or solving a
/// [Knapsack](crate::Knapsack). This does not exclude errors that occur when
/// loading a configuration, see [ConfigError] for that.
#[derive(Debug, Eq, PartialEq)]
pub enum KnapsackError {

    /// Indicates that an algorithm name did not match any of the names listed
    /// in [Algorithm](crate::algorithm::Algorithm). The offending name is
    /// wrapped in this instance.
    UnknownAlgorithm(String),

    /// Indicates that an item is invalid. This is the case if its weight or
    /// value is negative or its weight is zero.
    MalformedItem,

    /// Indicates that the number of items to consider is negative or greater
    /// than the number of items that were provided.
    ItemCountOutOfRange,

    /// Indicates that the capacity of the knapsack is negative.
    NegativeCapacity
}

impl Display for KnapsackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            KnapsackError::UnknownAlgorithm(name) =>
                write!(f, "unknown algorithm: \"{}\"", name),
            KnapsackError::MalformedItem =>
                write!(f, "malformed item (weight must be positive, value \
                    must not be negative)"),
            KnapsackError::ItemCountOutOfRange =>
                write!(f, "item count out of range"),
            KnapsackError::NegativeCapacity =>
                write!(f, "negative capacity")
        }
    }
}

impl Error for KnapsackError { }

/// Syntactic sugar for `Result<V, KnapsackError>`.
pub type KnapsackResult<V> = Result<V, KnapsackError>;

/// An enumeration of the errors that may occur when loading a
/// [Config](crate::config::Config).
#[derive(Debug, Eq, PartialEq)]
pub enum ConfigError {

    /// Indicates that the configuration file could not be read. The message
    /// of the underlying I/O error is wrapped in this instance.
    Io(String),

    /// Indicates that the configuration is not valid JSON or does not have
    /// the expected shape. The message of the underlying parser error is
    /// wrapped in this instance.
    Json(String),

    /// Indicates that the configuration was parsed successfully, but
    /// describes an invalid problem.
    Invalid(KnapsackError),

    /// Indicates that a problem could not be described by a configuration,
    /// because its capacity, item count, or one of its item weights or
    /// values exceeds `i64::MAX`.
    OutOfRange
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(message) =>
                write!(f, "could not read configuration: {}", message),
            ConfigError::Json(message) =>
                write!(f, "could not parse configuration: {}", message),
            ConfigError::Invalid(e) =>
                write!(f, "invalid configuration: {}", e),
            ConfigError::OutOfRange =>
                write!(f, "number too large for a configuration")
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Invalid(e) => Some(e),
            _ => None
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e.to_string())
    }
}

impl From<KnapsackError> for ConfigError {
    fn from(e: KnapsackError) -> Self {
        ConfigError::Invalid(e)
    }
}

/// Syntactic sugar for `Result<V, ConfigError>`.
pub type ConfigResult<V> = Result<V, ConfigError>;
