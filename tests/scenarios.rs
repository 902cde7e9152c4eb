//! End-to-end scenarios E1–E6 (spec.md §8).

use saga_core::algorithms::GeneticAlgorithmSpecBuilder;
use saga_core::config::GaConfig;
use saga_core::operators::{CentralityMutation, ElitistSurvival, OnePointCrossover, TournamentSelection};
use saga_core::solver::ReferenceSolver;

fn run(dimacs: &str, config: GaConfig) -> saga_core::Solution {
    let (formula, solver) = ReferenceSolver::from_dimacs_str(dimacs).expect("fixture parses");
    let mut ga = GeneticAlgorithmSpecBuilder::default()
        .formula(&formula)
        .db(&solver)
        .selector(TournamentSelection)
        .crossover(OnePointCrossover)
        .mutation(CentralityMutation)
        .survivor(ElitistSurvival)
        .config(config)
        .build()
        .expect("builder succeeds with all required fields set");
    ga.run().expect("GA run succeeds")
}

#[test]
fn e1_trivial_sat_satisfies_immediately() {
    let config = GaConfig {
        population_size: 4,
        max_iterations: 50,
        seed: Some(1),
        ..GaConfig::default()
    };
    let best = run("p cnf 1 1\n1 0\n", config);
    assert_eq!(best.fitness(), 0);
    assert!(best.bit(1));
}

#[test]
fn e2_pure_unsat_unit_pair_settles_at_fitness_one() {
    let config = GaConfig {
        population_size: 4,
        max_iterations: 20,
        seed: Some(2),
        ..GaConfig::default()
    };
    let best = run("p cnf 1 2\n1 0\n-1 0\n", config);
    assert_eq!(best.fitness(), 1);
}

#[test]
fn e3_two_sat_chain_reaches_zero_fitness_across_seeds() {
    for seed in 0..8u64 {
        let config = GaConfig {
            population_size: 20,
            max_iterations: 100,
            mutation_rate: 0.05,
            crossover_rate: 0.8,
            seed: Some(seed),
            ..GaConfig::default()
        };
        let best = run("p cnf 3 3\n1 2 0\n-2 3 0\n-1 3 0\n", config);
        assert_eq!(best.fitness(), 0, "seed {seed} failed to reach a satisfying assignment");
    }
}

#[test]
fn e4_fixed_bit_is_respected_in_the_final_population() {
    let config = GaConfig {
        population_size: 10,
        max_iterations: 50,
        mutation_rate: 0.05,
        crossover_rate: 0.8,
        seed: Some(4),
        ..GaConfig::default()
    };
    let (formula, solver) =
        ReferenceSolver::from_dimacs_str("p cnf 4 4\n1 0\n2 3 0\n-3 4 0\n-2 -4 0\n").unwrap();
    let mut ga = GeneticAlgorithmSpecBuilder::default()
        .formula(&formula)
        .db(&solver)
        .selector(TournamentSelection)
        .crossover(OnePointCrossover)
        .mutation(CentralityMutation)
        .survivor(ElitistSurvival)
        .config(config)
        .build()
        .unwrap();
    let best = ga.run().unwrap();
    assert!(best.fitness() <= 1);
    for member in ga.population().unwrap().members() {
        assert!(member.bit(1), "variable 1 must stay pinned to true");
    }
}

#[test]
fn e5_cache_capacity_does_not_change_the_result() {
    let base = GaConfig {
        population_size: 20,
        max_iterations: 100,
        mutation_rate: 0.05,
        crossover_rate: 0.8,
        seed: Some(5),
        ..GaConfig::default()
    };
    let dimacs = "p cnf 3 3\n1 2 0\n-2 3 0\n-1 3 0\n";

    let wide_cache = GaConfig { cache_capacity: 500, ..base.clone() };
    let narrow_cache = GaConfig { cache_capacity: 1, ..base };

    let best_wide = run(dimacs, wide_cache);
    let best_narrow = run(dimacs, narrow_cache);
    assert_eq!(best_wide.fitness(), best_narrow.fitness());
    assert_eq!(best_wide.bits(), best_narrow.bits());
}

#[test]
fn e6_fixed_seed_is_deterministic_across_runs() {
    let config = GaConfig {
        population_size: 20,
        max_iterations: 50,
        mutation_rate: 0.05,
        crossover_rate: 0.8,
        seed: Some(6),
        ..GaConfig::default()
    };
    let dimacs = "p cnf 3 3\n1 2 0\n-2 3 0\n-1 3 0\n";

    let (formula_a, solver_a) = ReferenceSolver::from_dimacs_str(dimacs).unwrap();
    let mut ga_a = GeneticAlgorithmSpecBuilder::default()
        .formula(&formula_a)
        .db(&solver_a)
        .selector(TournamentSelection)
        .crossover(OnePointCrossover)
        .mutation(CentralityMutation)
        .survivor(ElitistSurvival)
        .config(config.clone())
        .build()
        .unwrap();
    ga_a.run().unwrap();

    let (formula_b, solver_b) = ReferenceSolver::from_dimacs_str(dimacs).unwrap();
    let mut ga_b = GeneticAlgorithmSpecBuilder::default()
        .formula(&formula_b)
        .db(&solver_b)
        .selector(TournamentSelection)
        .crossover(OnePointCrossover)
        .mutation(CentralityMutation)
        .survivor(ElitistSurvival)
        .config(config)
        .build()
        .unwrap();
    ga_b.run().unwrap();

    let pop_a = ga_a.population().unwrap();
    let pop_b = ga_b.population().unwrap();
    assert_eq!(pop_a.len(), pop_b.len());
    for (a, b) in pop_a.members().iter().zip(pop_b.members().iter()) {
        assert_eq!(a.bits(), b.bits());
        assert_eq!(a.fitness(), b.fitness());
    }
}
