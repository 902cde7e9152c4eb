//! CLI entry point: read a DIMACS file, run the GA, print the polarity-seeded
//! best assignment, hand it off to the reference solver (spec.md §10.4).

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use saga_core::algorithms::{apply_polarity_handoff, GeneticAlgorithmSpecBuilder};
use saga_core::config::{CliArgs, CrossoverVariant, SelectionVariant, SurvivorVariant};
use saga_core::evaluator::ClauseDatabase;
use saga_core::operators::{
    CentralityMutation, ElitistSurvival, OnePointCrossover, PlainSurvival, RandomSelection,
    ThreePointCrossover, TournamentSelection, TwoPointCrossover,
};
use saga_core::solver::ReferenceSolver;

fn main() -> ExitCode {
    env_logger::init();
    let args = CliArgs::parse();

    let text = match fs::read_to_string(&args.cnf_path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("failed to read {}: {e}", args.cnf_path.display());
            return ExitCode::FAILURE;
        }
    };

    let (formula, mut solver) = match ReferenceSolver::from_dimacs_str(&text) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let config = args.to_config();
    info!(
        "loaded formula with {} variables, {} clauses",
        formula.num_variables(),
        formula.num_clauses()
    );

    let result = run_with_variants(&formula, &solver, config.clone());
    let best = match result {
        Ok(best) => best,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!("best assignment ({} unsatisfied clauses):", best.fitness());
    println!("{best}");

    apply_polarity_handoff(&best, &mut solver);
    info!("polarity handoff complete; ready for CDCL search");

    ExitCode::SUCCESS
}

/// Dispatches on the three independent variant enums (spec.md §10.4) since
/// each selects a distinct monomorphisation of `GeneticAlgorithm`.
fn run_with_variants(
    formula: &saga_core::Formula,
    db: &dyn ClauseDatabase,
    config: saga_core::config::GaConfig,
) -> Result<saga_core::Solution, saga_core::GaError> {
    macro_rules! build_and_run {
        ($selector:expr, $crossover:expr, $survivor:expr) => {{
            let mut ga = GeneticAlgorithmSpecBuilder::default()
                .formula(formula)
                .db(db)
                .selector($selector)
                .crossover($crossover)
                .mutation(CentralityMutation)
                .survivor($survivor)
                .config(config)
                .verbose(true)
                .build()?;
            ga.run()
        }};
    }

    match (
        config.selection_variant,
        config.crossover_variant,
        config.survivor_variant,
    ) {
        (SelectionVariant::Tournament, CrossoverVariant::OnePoint, SurvivorVariant::Elitist) => {
            build_and_run!(TournamentSelection, OnePointCrossover, ElitistSurvival)
        }
        (SelectionVariant::Tournament, CrossoverVariant::OnePoint, SurvivorVariant::Plain) => {
            build_and_run!(TournamentSelection, OnePointCrossover, PlainSurvival)
        }
        (SelectionVariant::Tournament, CrossoverVariant::TwoPoint, SurvivorVariant::Elitist) => {
            build_and_run!(TournamentSelection, TwoPointCrossover, ElitistSurvival)
        }
        (SelectionVariant::Tournament, CrossoverVariant::TwoPoint, SurvivorVariant::Plain) => {
            build_and_run!(TournamentSelection, TwoPointCrossover, PlainSurvival)
        }
        (SelectionVariant::Tournament, CrossoverVariant::ThreePoint, SurvivorVariant::Elitist) => {
            build_and_run!(TournamentSelection, ThreePointCrossover, ElitistSurvival)
        }
        (SelectionVariant::Tournament, CrossoverVariant::ThreePoint, SurvivorVariant::Plain) => {
            build_and_run!(TournamentSelection, ThreePointCrossover, PlainSurvival)
        }
        (SelectionVariant::Random, CrossoverVariant::OnePoint, SurvivorVariant::Elitist) => {
            build_and_run!(RandomSelection, OnePointCrossover, ElitistSurvival)
        }
        (SelectionVariant::Random, CrossoverVariant::OnePoint, SurvivorVariant::Plain) => {
            build_and_run!(RandomSelection, OnePointCrossover, PlainSurvival)
        }
        (SelectionVariant::Random, CrossoverVariant::TwoPoint, SurvivorVariant::Elitist) => {
            build_and_run!(RandomSelection, TwoPointCrossover, ElitistSurvival)
        }
        (SelectionVariant::Random, CrossoverVariant::TwoPoint, SurvivorVariant::Plain) => {
            build_and_run!(RandomSelection, TwoPointCrossover, PlainSurvival)
        }
        (SelectionVariant::Random, CrossoverVariant::ThreePoint, SurvivorVariant::Elitist) => {
            build_and_run!(RandomSelection, ThreePointCrossover, ElitistSurvival)
        }
        (SelectionVariant::Random, CrossoverVariant::ThreePoint, SurvivorVariant::Plain) => {
            build_and_run!(RandomSelection, ThreePointCrossover, PlainSurvival)
        }
    }
}
