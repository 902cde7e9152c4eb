//! Survivor selection: elitist (default) and plain (spec.md §4.8).

use crate::random::GaRng;
use crate::solution::{Population, Solution};

/// Combines the current population with offspring and selects the next
/// generation's members.
pub trait SurvivorSelector {
    fn select(&self, population: &Population, offspring: Vec<Solution>, rng: &mut GaRng) -> Vec<Solution>;
}

/// Removes adjacent duplicates from `pool`, capped at `max_removals` total
/// removals (spec.md §4.8: "only *adjacent* duplicates in pool order are
/// candidates — this is a bounded, order-dependent dedup, not a global
/// uniqueness pass"), mirroring the bounded-erasure `std::unique` call in
/// `examples/original_source/core/saga.cc`'s `select_survivors_ellitist`.
fn dedup_adjacent_bounded(pool: Vec<Solution>, max_removals: usize) -> Vec<Solution> {
    if max_removals == 0 || pool.is_empty() {
        return pool;
    }
    let mut result = Vec::with_capacity(pool.len());
    let mut removed = 0usize;
    let mut iter = pool.into_iter();
    result.push(iter.next().expect("checked non-empty above"));
    for item in iter {
        let is_duplicate_of_prev = result.last().expect("always has one element") == &item;
        if removed < max_removals && is_duplicate_of_prev {
            removed += 1;
            continue;
        }
        result.push(item);
    }
    result
}

fn combined_pool(population: &Population, offspring: Vec<Solution>) -> Vec<Solution> {
    let mut pool = population.members().to_vec();
    pool.extend(offspring);
    pool
}

/// Default survivor policy (spec.md §4.8): the best `population_size / 2`
/// survive unconditionally (elitism), the remaining half is drawn by
/// shuffling what's left of the deduplicated, sorted pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct ElitistSurvival;

impl SurvivorSelector for ElitistSurvival {
    fn select(&self, population: &Population, offspring: Vec<Solution>, rng: &mut GaRng) -> Vec<Solution> {
        let target = population.target_size();
        let pool = combined_pool(population, offspring);
        let max_removals = pool.len().saturating_sub(target);
        let mut pool = dedup_adjacent_bounded(pool, max_removals);
        pool.sort_by_key(Solution::fitness);

        let n_best = target / 2;
        let n_worst = target - n_best;

        let n_best = n_best.min(pool.len());
        let mut survivors: Vec<Solution> = pool[..n_best].to_vec();

        let remainder = &mut pool[n_best..];
        rng.shuffle(remainder);
        let take = n_worst.min(remainder.len());
        survivors.extend_from_slice(&remainder[..take]);

        // The shuffle above only decides *which* members fill the non-elite
        // half; storage order must still come out ascending by fitness
        // (spec.md §4.8, §8 invariant 2), so re-sort before returning.
        survivors.sort_by_key(Solution::fitness);
        survivors
    }
}

/// Non-elitist survivor policy (spec.md §4.8): dedup + ascending sort, take
/// the first `population_size`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainSurvival;

impl SurvivorSelector for PlainSurvival {
    fn select(&self, population: &Population, offspring: Vec<Solution>, _rng: &mut GaRng) -> Vec<Solution> {
        let target = population.target_size();
        let pool = combined_pool(population, offspring);
        let max_removals = pool.len().saturating_sub(target);
        let mut pool = dedup_adjacent_bounded(pool, max_removals);
        pool.sort_by_key(Solution::fitness);
        pool.truncate(target);
        pool
    }
}
