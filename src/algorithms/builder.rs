//! Fluent construction of a [`GeneticAlgorithm`], continuing the teacher's
//! `derive_builder`-based `AlgorithmBuilder` pattern
//! (`moors::algorithms::builder::AlgorithmBuilder`).

use derive_builder::Builder;

use crate::config::GaConfig;
use crate::error::GeneticAlgorithmBuilderError;
use crate::evaluator::ClauseDatabase;
use crate::formula::Formula;
use crate::operators::{CrossoverOperator, MutationOperator, ParentSelector, SurvivorSelector};
use crate::random::GaRng;

use super::ga::GeneticAlgorithm;

/// Builds a [`GeneticAlgorithm`]. Every field below is required except
/// `verbose`, which defaults to `false`.
///
/// `population`, `evaluator`, and `rng` are not builder fields: they are
/// derived state constructed once in [`GeneticAlgorithmBuilder::build`] from
/// `config` (and, for `rng`, from `config.seed` — an explicit seed for
/// reproducible runs, OS entropy otherwise, per spec.md §5).
#[derive(Debug, Builder)]
#[builder(pattern = "owned", build_fn(skip))]
pub struct GeneticAlgorithmSpec<'a, Sel, Cross, Mut, Sur>
where
    Sel: ParentSelector,
    Cross: CrossoverOperator,
    Mut: MutationOperator,
    Sur: SurvivorSelector,
{
    formula: &'a Formula,
    db: &'a dyn ClauseDatabase,
    selector: Sel,
    crossover: Cross,
    mutation: Mut,
    survivor: Sur,
    config: GaConfig,
    #[builder(default)]
    verbose: bool,
}

impl<'a, Sel, Cross, Mut, Sur> GeneticAlgorithmSpecBuilder<'a, Sel, Cross, Mut, Sur>
where
    Sel: ParentSelector,
    Cross: CrossoverOperator,
    Mut: MutationOperator,
    Sur: SurvivorSelector,
{
    /// Validates `config` and assembles the runnable [`GeneticAlgorithm`].
    pub fn build(self) -> Result<GeneticAlgorithm<'a, Sel, Cross, Mut, Sur>, GeneticAlgorithmBuilderError> {
        let formula = self.formula.ok_or(GeneticAlgorithmBuilderError::UninitializedField("formula"))?;
        let db = self.db.ok_or(GeneticAlgorithmBuilderError::UninitializedField("db"))?;
        let selector = self
            .selector
            .ok_or(GeneticAlgorithmBuilderError::UninitializedField("selector"))?;
        let crossover = self
            .crossover
            .ok_or(GeneticAlgorithmBuilderError::UninitializedField("crossover"))?;
        let mutation = self
            .mutation
            .ok_or(GeneticAlgorithmBuilderError::UninitializedField("mutation"))?;
        let survivor = self
            .survivor
            .ok_or(GeneticAlgorithmBuilderError::UninitializedField("survivor"))?;
        let config = self.config.ok_or(GeneticAlgorithmBuilderError::UninitializedField("config"))?;
        config
            .validate()
            .map_err(|e| GeneticAlgorithmBuilderError::ValidationError(e.to_string()))?;

        let rng = match config.seed {
            Some(seed) => GaRng::from_seed(seed),
            None => GaRng::from_os_entropy(),
        };
        let verbose = self.verbose.unwrap_or(false);

        Ok(GeneticAlgorithm::from_parts(
            formula, db, selector, crossover, mutation, survivor, config, rng, verbose,
        ))
    }
}
