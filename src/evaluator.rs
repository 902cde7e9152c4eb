//! Fitness evaluation: counts the clauses a [`Solution`](crate::solution::Solution)
//! leaves unsatisfied, consulting and populating a [`FitnessCache`]
//! (spec.md §4.3).

use crate::cache::FitnessCache;
use crate::solution::Solution;

/// A single literal as the CDCL collaborator represents it: a 0-based
/// variable index and a sign bit, where `sign == false` is a positive
/// occurrence and `sign == true` is a negated occurrence (spec.md §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal {
    pub var0: usize,
    pub sign: bool,
}

impl Literal {
    pub fn new(var0: usize, sign: bool) -> Self {
        Self { var0, sign }
    }

    /// 1-indexed variable number, matching `Solution`'s bit layout.
    pub fn var1(self) -> usize {
        self.var0 + 1
    }
}

/// A read-only view over a single original clause, borrowed from the CDCL
/// collaborator. Deliberately minimal: the GA never needs anything beyond
/// literal iteration.
pub trait ClauseView {
    fn literals(&self) -> &[Literal];
}

impl ClauseView for [Literal] {
    fn literals(&self) -> &[Literal] {
        self
    }
}

impl ClauseView for Vec<Literal> {
    fn literals(&self) -> &[Literal] {
        self
    }
}

/// The CDCL collaborator's contract toward this crate (spec.md §6).
///
/// Implementing this trait is the only thing a concrete solver needs to do
/// to let the GA read its clause database. The dependency direction is
/// explicit and one-way: the GA borrows a `&dyn ClauseDatabase`, the solver
/// has no knowledge of the GA (spec.md §9, "Cycle-free ownership").
///
/// Requires `Debug` so that `&dyn ClauseDatabase` fields can participate in
/// `#[derive(Debug)]` on their holders (`GeneticAlgorithm`,
/// `GeneticAlgorithmSpec`) without a hand-written impl.
pub trait ClauseDatabase: std::fmt::Debug {
    fn num_variables(&self) -> usize;

    /// Iterates the *original* (non-learned) clauses only.
    fn iterate_original_clauses(&self) -> Box<dyn Iterator<Item = &dyn ClauseView> + '_>;

    /// Sets the solver's default decision polarity for a 0-based variable
    /// index (spec.md §4.10).
    fn set_polarity(&mut self, var0: usize, value: bool);
}

/// Counts unsatisfied clauses for a `Solution` under a `ClauseDatabase`,
/// memoising results in a [`FitnessCache`] (spec.md §4.3).
#[derive(Debug)]
pub struct FitnessEvaluator {
    cache: FitnessCache,
    hits: u64,
    misses: u64,
}

impl FitnessEvaluator {
    pub fn new(cache_capacity: usize) -> Self {
        Self {
            cache: FitnessCache::new(cache_capacity),
            hits: 0,
            misses: 0,
        }
    }

    pub fn cache_hits(&self) -> u64 {
        self.hits
    }

    pub fn cache_misses(&self) -> u64 {
        self.misses
    }

    /// Computes (or retrieves from cache) the number of clauses `solution`
    /// leaves unsatisfied under `db`.
    pub fn evaluate(&mut self, solution: &Solution, db: &dyn ClauseDatabase) -> usize {
        let key = solution.bits().to_vec();
        if let Some(&cached) = self.cache.get(&key) {
            self.hits += 1;
            return cached;
        }
        self.misses += 1;
        let fit = Self::recompute(solution, db);
        self.cache.put(key, fit);
        fit
    }

    /// Recomputes the UNSAT count from scratch, bypassing the cache. Used
    /// by property tests to check cached-vs-recomputed agreement (spec.md
    /// §8, invariant 3).
    pub fn recompute(solution: &Solution, db: &dyn ClauseDatabase) -> usize {
        let mut unsat = 0usize;
        for clause in db.iterate_original_clauses() {
            let mut satisfied = false;
            for lit in clause.literals() {
                if lit.sign != solution.bit(lit.var1()) {
                    satisfied = true;
                    break;
                }
            }
            if !satisfied {
                unsat += 1;
            }
        }
        unsat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FakeDb {
        n: usize,
        clauses: Vec<Vec<Literal>>,
    }

    impl ClauseDatabase for FakeDb {
        fn num_variables(&self) -> usize {
            self.n
        }
        fn iterate_original_clauses(&self) -> Box<dyn Iterator<Item = &dyn ClauseView> + '_> {
            Box::new(self.clauses.iter().map(|c| c as &dyn ClauseView))
        }
        fn set_polarity(&mut self, _var0: usize, _value: bool) {}
    }

    #[test]
    fn satisfying_assignment_has_zero_fitness() {
        // (1) AND (-2): var1=true, var2=false satisfies both.
        let db = FakeDb {
            n: 2,
            clauses: vec![
                vec![Literal::new(0, false)],
                vec![Literal::new(1, true)],
            ],
        };
        let mut sol = Solution::new(3, 2);
        sol.set_bit_unchecked(1, true);
        sol.set_bit_unchecked(2, false);
        let mut evaluator = FitnessEvaluator::new(16);
        assert_eq!(evaluator.evaluate(&sol, &db), 0);
    }

    #[test]
    fn cache_hit_agrees_with_recompute() {
        let db = FakeDb {
            n: 2,
            clauses: vec![vec![Literal::new(0, false), Literal::new(1, false)]],
        };
        let mut sol = Solution::new(3, 1);
        sol.set_bit_unchecked(1, false);
        sol.set_bit_unchecked(2, false);
        let mut evaluator = FitnessEvaluator::new(16);
        let first = evaluator.evaluate(&sol, &db);
        let second = evaluator.evaluate(&sol, &db);
        assert_eq!(first, second);
        assert_eq!(first, FitnessEvaluator::recompute(&sol, &db));
        assert_eq!(evaluator.cache_hits(), 1);
        assert_eq!(evaluator.cache_misses(), 1);
    }
}
