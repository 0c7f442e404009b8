//! This module maps algorithm names to [Solver]s and runs them, optionally
//! measuring how long each run takes.
//!
//! The names are `"exhaustive"`, `"greedy"`, `"memoized"`, and `"all"`, where
//! the latter runs the other three in that order. Names must match exactly.
//!
//! ```
//! use knapsack_variants::{Item, Knapsack};
//! use knapsack_variants::algorithm::{self, Algorithm};
//! use knapsack_variants::error::KnapsackError;
//!
//! let knapsack = Knapsack::new(50, vec![
//!     Item::new(10, 60).unwrap(),
//!     Item::new(20, 100).unwrap(),
//!     Item::new(30, 120).unwrap()
//! ]);
//!
//! let reports = algorithm::solve_by_name(&knapsack, "greedy", false).unwrap();
//! assert_eq!(160, reports[0].solution.value());
//! assert_eq!(None, reports[0].duration);
//!
//! assert_eq!(Err(KnapsackError::UnknownAlgorithm(String::from("Greedy"))),
//!     algorithm::solve_by_name(&knapsack, "Greedy", false));
//! ```

use crate::Knapsack;
use crate::error::{KnapsackError, KnapsackResult};
use crate::solver::{ExhaustiveSolver, Solution, Solver};
use crate::solver::greedy::GreedySolver;
use crate::solver::memoized::MemoizedSolver;
use crate::timing;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

/// An enumeration of the algorithms that can be selected by name.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub enum Algorithm {

    /// The [ExhaustiveSolver], named `"exhaustive"`.
    Exhaustive,

    /// The [GreedySolver], named `"greedy"`.
    Greedy,

    /// The [MemoizedSolver], named `"memoized"`.
    Memoized,

    /// Runs every other algorithm in turn, named `"all"`.
    All
}

impl Algorithm {

    /// All algorithms that correspond to a single solver, in the order in
    /// which `Algorithm::All` runs them.
    pub const STRATEGIES: [Algorithm; 3] =
        [Algorithm::Exhaustive, Algorithm::Greedy, Algorithm::Memoized];

    /// Gets the name by which this algorithm is selected.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Exhaustive => "exhaustive",
            Algorithm::Greedy => "greedy",
            Algorithm::Memoized => "memoized",
            Algorithm::All => "all"
        }
    }

    /// Gets the solver for this algorithm, or `None` for `Algorithm::All`,
    /// which does not correspond to a single solver.
    pub fn solver(self) -> Option<&'static dyn Solver> {
        let solver: &'static dyn Solver = match self {
            Algorithm::Exhaustive => &ExhaustiveSolver,
            Algorithm::Greedy => &GreedySolver,
            Algorithm::Memoized => &MemoizedSolver,
            Algorithm::All => return None
        };

        Some(solver)
    }

    /// Gets the single-solver algorithms that selecting this algorithm runs,
    /// in order. This is just the algorithm itself, except for
    /// `Algorithm::All`.
    pub fn strategies(self) -> Vec<Algorithm> {
        match self {
            Algorithm::All => Algorithm::STRATEGIES.to_vec(),
            strategy => vec![strategy]
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = KnapsackError;

    fn from_str(name: &str) -> KnapsackResult<Algorithm> {
        Algorithm::STRATEGIES.iter()
            .chain(Some(&Algorithm::All))
            .find(|algorithm| algorithm.name() == name)
            .copied()
            .ok_or_else(|| KnapsackError::UnknownAlgorithm(name.to_owned()))
    }
}

impl TryFrom<String> for Algorithm {
    type Error = KnapsackError;

    fn try_from(name: String) -> KnapsackResult<Algorithm> {
        name.parse()
    }
}

impl From<Algorithm> for String {
    fn from(algorithm: Algorithm) -> String {
        String::from(algorithm.name())
    }
}

/// The outcome of running one solver.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Report {

    /// The algorithm that was run. This is never `Algorithm::All`.
    pub algorithm: Algorithm,

    /// The solution that the algorithm found.
    pub solution: Solution,

    /// The time the run took, if performance was measured.
    pub duration: Option<Duration>
}

/// Runs the given algorithm on the given problem and calls `observer` with
/// the report of each run as soon as it finishes. For `Algorithm::All`, every
/// solver is run in the order of [Algorithm::STRATEGIES]. The reports are
/// also returned in that order.
///
/// # Arguments
///
/// * `knapsack`: The problem to solve.
/// * `algorithm`: The algorithm to run.
/// * `measure_perf`: Whether to measure the duration of each run. If
/// `false`, the reported durations are `None`.
/// * `observer`: Receives each report as soon as its run has finished.
pub fn solve_with_observer(knapsack: &Knapsack, algorithm: Algorithm,
        measure_perf: bool, mut observer: impl FnMut(&Report))
        -> Vec<Report> {
    let mut reports = Vec::new();

    for strategy in algorithm.strategies() {
        let solver = match strategy.solver() {
            Some(solver) => solver,
            None => continue
        };
        let report = if measure_perf {
            let (solution, duration) =
                timing::measure(|| solver.solve(knapsack));
            log::info!("{} finished in {}", strategy,
                timing::format_duration(duration));

            Report {
                algorithm: strategy,
                solution,
                duration: Some(duration)
            }
        }
        else {
            Report {
                algorithm: strategy,
                solution: solver.solve(knapsack),
                duration: None
            }
        };

        observer(&report);
        reports.push(report);
    }

    reports
}

/// Runs the given algorithm on the given problem, measuring durations if
/// `measure_perf` is `true`. See [solve_with_observer].
pub fn solve_measured(knapsack: &Knapsack, algorithm: Algorithm,
        measure_perf: bool) -> Vec<Report> {
    solve_with_observer(knapsack, algorithm, measure_perf, |_| { })
}

/// Runs the given algorithm on the given problem without measuring
/// durations. See [solve_with_observer].
pub fn solve(knapsack: &Knapsack, algorithm: Algorithm) -> Vec<Report> {
    solve_measured(knapsack, algorithm, false)
}

/// Runs the algorithm with the given name on the given problem. See
/// [solve_with_observer].
///
/// # Errors
///
/// If `name` is not the name of any [Algorithm]. In that case,
/// `KnapsackError::UnknownAlgorithm` is returned and nothing is run.
pub fn solve_by_name(knapsack: &Knapsack, name: &str, measure_perf: bool)
        -> KnapsackResult<Vec<Report>> {
    let algorithm = name.parse()?;
    Ok(solve_measured(knapsack, algorithm, measure_perf))
}
