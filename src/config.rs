//! Run configuration (spec.md §4.9, §10.4) and its CLI surface.

use clap::{Parser, ValueEnum};

use crate::error::GaError;

/// Which [`crate::operators::CrossoverOperator`] a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CrossoverVariant {
    OnePoint,
    TwoPoint,
    ThreePoint,
}

/// Which [`crate::operators::ParentSelector`] a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SelectionVariant {
    Tournament,
    Random,
}

/// Which [`crate::operators::SurvivorSelector`] a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SurvivorVariant {
    Elitist,
    Plain,
}

/// All tunable parameters of a GA run (spec.md §4.9).
///
/// Built either by hand (`GaConfig { .. }`) or parsed from the command line
/// via [`CliArgs`]; [`GaConfig::validate`] is the single place both paths go
/// through before a [`crate::algorithms::ga::GeneticAlgorithm`] is built.
#[derive(Debug, Clone)]
pub struct GaConfig {
    pub population_size: usize,
    pub max_iterations: usize,
    pub mutation_rate: f64,
    pub crossover_rate: f64,
    pub cache_capacity: usize,
    pub crossover_variant: CrossoverVariant,
    pub selection_variant: SelectionVariant,
    pub survivor_variant: SurvivorVariant,
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_iterations: 1000,
            mutation_rate: 0.01,
            crossover_rate: 0.9,
            cache_capacity: 500,
            crossover_variant: CrossoverVariant::OnePoint,
            selection_variant: SelectionVariant::Tournament,
            survivor_variant: SurvivorVariant::Elitist,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Rejects out-of-range parameters before a run starts (spec.md §7,
    /// `ConfigOutOfRange`).
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size < 2 {
            return Err(GaError::ConfigOutOfRange(
                "population_size must be at least 2".into(),
            ));
        }
        if self.population_size % 2 != 0 {
            return Err(GaError::ConfigOutOfRange(
                "population_size must be even so parent/survivor halves split evenly".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::ConfigOutOfRange(
                "mutation_rate must be in [0.0, 1.0]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(GaError::ConfigOutOfRange(
                "crossover_rate must be in [0.0, 1.0]".into(),
            ));
        }
        if self.cache_capacity == 0 {
            return Err(GaError::ConfigOutOfRange(
                "cache_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Command-line surface for the `saga` binary (spec.md §10.4).
#[derive(Debug, Parser)]
#[command(name = "saga", about = "GA polarity-seed search for a CDCL SAT preprocessor")]
pub struct CliArgs {
    /// Path to a DIMACS CNF file.
    pub cnf_path: std::path::PathBuf,

    #[arg(long, default_value_t = 100)]
    pub population_size: usize,

    #[arg(long, default_value_t = 1000)]
    pub max_iterations: usize,

    #[arg(long, default_value_t = 0.01)]
    pub mutation_rate: f64,

    #[arg(long, default_value_t = 0.9)]
    pub crossover_rate: f64,

    #[arg(long, default_value_t = 500)]
    pub cache_capacity: usize,

    #[arg(long, value_enum, default_value_t = CrossoverVariantArg::OnePoint)]
    pub crossover: CrossoverVariantArg,

    #[arg(long, value_enum, default_value_t = SelectionVariantArg::Tournament)]
    pub selection: SelectionVariantArg,

    #[arg(long, value_enum, default_value_t = SurvivorVariantArg::Elitist)]
    pub survivor: SurvivorVariantArg,

    /// Fixes the RNG seed for a reproducible run (spec.md §8, scenario E6).
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CrossoverVariantArg {
    OnePoint,
    TwoPoint,
    ThreePoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SelectionVariantArg {
    Tournament,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SurvivorVariantArg {
    Elitist,
    Plain,
}

impl CliArgs {
    pub fn to_config(&self) -> GaConfig {
        GaConfig {
            population_size: self.population_size,
            max_iterations: self.max_iterations,
            mutation_rate: self.mutation_rate,
            crossover_rate: self.crossover_rate,
            cache_capacity: self.cache_capacity,
            crossover_variant: match self.crossover {
                CrossoverVariantArg::OnePoint => CrossoverVariant::OnePoint,
                CrossoverVariantArg::TwoPoint => CrossoverVariant::TwoPoint,
                CrossoverVariantArg::ThreePoint => CrossoverVariant::ThreePoint,
            },
            selection_variant: match self.selection {
                SelectionVariantArg::Tournament => SelectionVariant::Tournament,
                SelectionVariantArg::Random => SelectionVariant::Random,
            },
            survivor_variant: match self.survivor {
                SurvivorVariantArg::Elitist => SurvivorVariant::Elitist,
                SurvivorVariantArg::Plain => SurvivorVariant::Plain,
            },
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn odd_population_size_is_rejected() {
        let mut cfg = GaConfig::default();
        cfg.population_size = 101;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn mutation_rate_out_of_range_is_rejected() {
        let mut cfg = GaConfig::default();
        cfg.mutation_rate = 1.5;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_cache_capacity_is_rejected() {
        let mut cfg = GaConfig::default();
        cfg.cache_capacity = 0;
        assert!(cfg.validate().is_err());
    }
}
