use criterion::{
    criterion_group,
    criterion_main,
    BenchmarkGroup,
    BenchmarkId,
    Criterion
};
use criterion::measurement::WallTime;

use knapsack_variants::Knapsack;
use knapsack_variants::generator::Generator;
use knapsack_variants::solver::{ExhaustiveSolver, Solver};
use knapsack_variants::solver::greedy::GreedySolver;
use knapsack_variants::solver::memoized::{MemoizedSolver, TabulatedSolver};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Explanation of benchmark classes:
//
// small: 20 items, where even the exhaustive solver finishes in reasonable
//        time. All solvers are compared.
// large: 500 items with a capacity in the thousands. The exhaustive solver is
//        left out.

const SEED: u64 = 1345;
const SMALL_LEN: usize = 20;
const LARGE_LEN: usize = 500;
const MAX_WEIGHT: usize = 20;
const MAX_VALUE: u64 = 100;
const PROBLEMS_PER_SAMPLE: usize = 10;

fn problems(len: usize) -> Vec<Knapsack> {
    let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(SEED));
    (0..PROBLEMS_PER_SAMPLE)
        .map(|_| generator.generate(len, MAX_WEIGHT, MAX_VALUE).unwrap())
        .collect()
}

fn solve_problems<S: Solver>(problems: &[Knapsack], solver: &S) -> u64 {
    problems.iter().map(|p| solver.solve(p).value()).sum()
}

fn benchmark_solver<S: Solver>(group: &mut BenchmarkGroup<WallTime>,
        name: &str, problems: &[Knapsack], solver: S) {
    group.bench_with_input(BenchmarkId::new(name, problems[0].len()),
        &problems, |b, problems| b.iter(|| solve_problems(problems, &solver)));
}

fn benchmark_small(c: &mut Criterion) {
    let problems = problems(SMALL_LEN);
    let mut group = c.benchmark_group("small");
    group.sample_size(10);

    benchmark_solver(&mut group, "exhaustive", &problems, ExhaustiveSolver);
    benchmark_solver(&mut group, "greedy", &problems, GreedySolver);
    benchmark_solver(&mut group, "memoized", &problems, MemoizedSolver);
    benchmark_solver(&mut group, "tabulated", &problems, TabulatedSolver);
}

fn benchmark_large(c: &mut Criterion) {
    let problems = problems(LARGE_LEN);
    let mut group = c.benchmark_group("large");

    benchmark_solver(&mut group, "greedy", &problems, GreedySolver);
    benchmark_solver(&mut group, "memoized", &problems, MemoizedSolver);
    benchmark_solver(&mut group, "tabulated", &problems, TabulatedSolver);
}

criterion_group!(all,
    benchmark_small,
    benchmark_large
);

criterion_main!(all);
