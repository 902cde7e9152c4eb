//! Parent selection strategies (spec.md §4.5).

use crate::random::GaRng;
use crate::solution::{Population, Solution};

/// Chooses `population_size / 2` parents, cloned so offspring generation
/// never mutates the live population (spec.md §4.5).
pub trait ParentSelector {
    fn select(&self, population: &Population, rng: &mut GaRng) -> Vec<Solution>;
}

/// Default parent selector: repeatedly draws two indices uniformly and
/// keeps the fitter of the two (ties broken by keeping the first draw).
#[derive(Debug, Default, Clone, Copy)]
pub struct TournamentSelection;

impl ParentSelector for TournamentSelection {
    fn select(&self, population: &Population, rng: &mut GaRng) -> Vec<Solution> {
        let n = population.len();
        let count = n / 2;
        let mut parents = Vec::with_capacity(count);
        for _ in 0..count {
            let i = rng.gen_range(0, n);
            let j = rng.gen_range(0, n);
            let candidate_i = &population.members()[i];
            let candidate_j = &population.members()[j];
            let winner = if candidate_i.fitness() <= candidate_j.fitness() {
                candidate_i
            } else {
                candidate_j
            };
            parents.push(winner.clone());
        }
        parents
    }
}

/// Draws `population_size / 2` independent uniform indices, with no fitness
/// pressure (spec.md §4.5, "Uniform-random parents").
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSelection;

impl ParentSelector for RandomSelection {
    fn select(&self, population: &Population, rng: &mut GaRng) -> Vec<Solution> {
        let n = population.len();
        let count = n / 2;
        let mut parents = Vec::with_capacity(count);
        for _ in 0..count {
            let i = rng.gen_range(0, n);
            parents.push(population.members()[i].clone());
        }
        parents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn population_with_fitnesses(fitnesses: &[usize]) -> Population {
        let members: Vec<Solution> = fitnesses
            .iter()
            .map(|&f| {
                let mut s = Solution::new(2, 0);
                s.set_fitness(f);
                s
            })
            .collect();
        Population::new(members.len(), members)
    }

    #[test]
    fn tournament_selection_returns_half_population_size() {
        let population = population_with_fitnesses(&[5, 2, 8, 1, 9, 3]);
        let mut rng = GaRng::from_seed(1);
        let parents = TournamentSelection.select(&population, &mut rng);
        assert_eq!(parents.len(), 3);
    }

    #[test]
    fn tournament_selection_never_returns_worse_than_the_worse_candidate() {
        // With only two distinct fitnesses, every winner must be fitness 1.
        let population = population_with_fitnesses(&[1, 1, 1, 1]);
        let mut rng = GaRng::from_seed(2);
        let parents = TournamentSelection.select(&population, &mut rng);
        assert!(parents.iter().all(|p| p.fitness() == 1));
    }

    #[test]
    fn random_selection_returns_half_population_size() {
        let population = population_with_fitnesses(&[5, 2, 8, 1]);
        let mut rng = GaRng::from_seed(3);
        let parents = RandomSelection.select(&population, &mut rng);
        assert_eq!(parents.len(), 2);
    }
}
