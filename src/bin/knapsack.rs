use anyhow::{anyhow, Result};
use clap::{arg, ArgMatches, Command};

use knapsack_variants::algorithm::{self, Algorithm, Report};
use knapsack_variants::config::{self, Config};
use knapsack_variants::timing;

use std::path::PathBuf;

const SEPARATOR: &str = "-------------------------------------";

fn cli() -> Command {
    Command::new("knapsack")
        .about("Solves a 0/1 knapsack problem described by a JSON file")
        .arg(
            arg!([CONFIG] "Path to the configuration file (default: config.json)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--algorithm <NAME> "Overrides the algorithm: exhaustive, greedy, memoized or all")
                .value_parser(clap::value_parser!(String)),
        )
        .arg(arg!(--"measure-perf" "Reports the duration of each solver run"))
}

fn print_report(selected: Algorithm, report: &Report) {
    if selected == Algorithm::All {
        println!();
        println!("Solving by {}", report.algorithm);
    }

    if let Some(duration) = report.duration {
        println!("Duration of {}: {}", report.algorithm,
            timing::format_duration(duration));
        println!("{}", SEPARATOR);
    }

    let qualifier = if report.solution.is_optimal() { "" } else { " (approximate)" };

    if selected == Algorithm::All {
        println!("Result: {}{}", report.solution, qualifier);
    }
    else {
        println!("Knapsack result: {}{}", report.solution, qualifier);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<PathBuf>("CONFIG")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_PATH));
    let mut config = Config::load(&path)
        .map_err(|e| anyhow!("{}: {}", path.display(), e))?;

    if let Some(name) = matches.get_one::<String>("algorithm") {
        config.algorithm = name.clone();
    }

    if matches.get_flag("measure-perf") {
        config.measure_perf = true;
    }

    let algorithm = config.algorithm()?;
    let knapsack = config.to_problem()?;
    log::debug!("solving {} items with capacity {} using {}", knapsack.len(),
        knapsack.capacity(), algorithm);

    algorithm::solve_with_observer(&knapsack, algorithm, config.measure_perf,
        |report| print_report(algorithm, report));
    Ok(())
}

fn main() {
    if std::env::var("KNAPSACK_LOG").is_ok() {
        let env = env_logger::Env::new()
            .filter("KNAPSACK_LOG")
            .write_style("KNAPSACK_LOG_STYLE");
        env_logger::init_from_env(env);
    }

    let matches = cli().get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
