//! Criterion benchmarks for subset neighborhoods.
//!
//! Measures random move sampling and full move enumeration on half-selected
//! universes, plus a short trial-and-revert loop on a weighted-sum problem.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_subset::neigh::{Move, Neighborhood};
use u_subset::problem::Problem;
use u_subset::random::{create_rng, random_subset};
use u_subset::subset::neigh::{MultiSwapNeighborhood, SingleSwapNeighborhood};
use u_subset::subset::{SubsetProblem, SubsetSolution};

fn half_selected(n: usize) -> SubsetSolution {
    let mut rng = create_rng(42);
    let mut sol = SubsetSolution::new(0..n);
    let chosen = random_subset(sol.all_ids(), n / 2, &mut rng);
    sol.select_many(chosen).expect("IDs come from the universe");
    sol
}

// ===========================================================================
// Random moves
// ===========================================================================

fn bench_random_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_move");

    for &n in &[20usize, 200, 2000] {
        let sol = half_selected(n);
        let single = SingleSwapNeighborhood::new();
        let multi = MultiSwapNeighborhood::unbounded();
        let multi3 = MultiSwapNeighborhood::bounded(3).expect("valid swap limit");

        let mut rng = create_rng(7);
        group.bench_with_input(BenchmarkId::new("single_swap", n), &sol, |b, s| {
            b.iter(|| black_box(single.random_move(black_box(s), &mut rng)))
        });
        group.bench_with_input(BenchmarkId::new("multi_swap_3", n), &sol, |b, s| {
            b.iter(|| black_box(multi3.random_move(black_box(s), &mut rng)))
        });
        group.bench_with_input(BenchmarkId::new("multi_swap_unbounded", n), &sol, |b, s| {
            b.iter(|| black_box(multi.random_move(black_box(s), &mut rng)))
        });
    }
    group.finish();
}

// ===========================================================================
// Move enumeration
// ===========================================================================

fn bench_all_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_moves");
    group.sample_size(10);

    for &(n, k) in &[(20usize, 1usize), (20, 3), (40, 2)] {
        let sol = half_selected(n);
        let neigh = MultiSwapNeighborhood::bounded(k).expect("valid swap limit");
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_k{}", n, k), n),
            &sol,
            |b, s| b.iter(|| black_box(neigh.all_moves(black_box(s)))),
        );
    }
    group.finish();
}

// ===========================================================================
// Trial and revert
// ===========================================================================

fn bench_trial_and_revert(c: &mut Criterion) {
    let mut group = c.benchmark_group("trial_and_revert");
    group.sample_size(10);

    for &n in &[100usize, 1000] {
        let weights: Vec<f64> = (0..n).map(|i| ((i * 7919) % n) as f64).collect();
        let objective =
            move |sol: &SubsetSolution| sol.selected().iter().map(|&id| weights[id]).sum::<f64>();
        let problem = SubsetProblem::fixed_size(objective, 0..n, n / 10).expect("valid bounds");
        let neigh = MultiSwapNeighborhood::bounded(2).expect("valid swap limit");

        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                let mut rng = create_rng(1);
                let mut sol = problem.create_random_solution(&mut rng);
                let mut score = problem.evaluate(&sol);
                for _ in 0..1000 {
                    let Some(mv) = neigh.random_move(&sol, &mut rng) else {
                        break;
                    };
                    mv.apply(&mut sol).expect("move generated for this solution");
                    let candidate = problem.evaluate(&sol);
                    if problem.delta(score, candidate) > 0.0 {
                        score = candidate;
                    } else {
                        mv.undo(&mut sol).expect("move was just applied");
                    }
                }
                black_box(score)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_random_move, bench_all_moves, bench_trial_and_revert);
criterion_main!(benches);
