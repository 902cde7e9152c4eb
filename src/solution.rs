//! A candidate assignment (bit vector) with cached fitness, plus the
//! `Population` that holds a fixed-size collection of them (spec.md §3).

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::formula::Formula;

/// A candidate truth assignment. `bits[0]` is an unused sentinel so that
/// `bits[v]` addresses variable `v` directly for `1 <= v <= n` (spec.md §3).
///
/// Equality is structural over `(bits, fitness)`; hashing uses the bit
/// pattern alone, which is sound (equal values necessarily have equal bits)
/// and is what lets a `Solution`'s bits double as a [`crate::cache::FitnessCache`]
/// key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    bits: Vec<bool>,
    fitness: usize,
}

impl Solution {
    /// Sized constructor (spec.md §4.2a): `size` is `n + 1`, bits
    /// zero-initialised, fitness pessimistically seeded to `worst_fitness`
    /// (the formula's clause count — an unknown assignment is rated as if
    /// it satisfies nothing).
    pub fn new(size: usize, worst_fitness: usize) -> Self {
        Self {
            bits: vec![false; size],
            fitness: worst_fitness,
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn fitness(&self) -> usize {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: usize) {
        self.fitness = fitness;
    }

    /// `true` iff the assignment satisfies every clause (spec.md §3).
    pub fn is_satisfying(&self) -> bool {
        self.fitness == 0
    }

    pub fn bit(&self, var1: usize) -> bool {
        self.bits[var1]
    }

    /// Sets `bits[var1]` directly with no pin check — used by
    /// initialisation, where the caller has already resolved the fixed
    /// value itself, and by tests.
    pub fn set_bit_unchecked(&mut self, var1: usize, value: bool) {
        self.bits[var1] = value;
    }

    /// Sets `bits[var1]`, refusing (in debug builds) to flip a pinned
    /// variable away from its fixed value (spec.md §8, invariant 1). Callers
    /// — crossover and mutation — are expected to have already checked
    /// `formula.is_fixed(var1)` themselves and skip the call entirely for
    /// pinned positions; this is the backstop, not the primary guard.
    pub fn set_bit(&mut self, var1: usize, value: bool, formula: &Formula) {
        if let Some(fixed_value) = formula.fixed_value(var1) {
            debug_assert_eq!(
                value, fixed_value,
                "attempted to flip pinned variable {var1} away from its fixed value"
            );
            self.bits[var1] = fixed_value;
        } else {
            self.bits[var1] = value;
        }
    }

    /// Renders the assignment as a line of signed DIMACS literals, e.g.
    /// `"1 -2 3 "` (spec.md §4.2, §6), matching
    /// `examples/original_source/core/saga.h`'s `Solution::toString` format
    /// exactly (1-indexed, trailing space, index 0 skipped).
    pub fn to_dimacs_string(&self) -> String {
        let mut out = String::new();
        for (var1, &value) in self.bits.iter().enumerate().skip(1) {
            if !value {
                out.push('-');
            }
            out.push_str(&var1.to_string());
            out.push(' ');
        }
        out
    }
}

impl Hash for Solution {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dimacs_string())
    }
}

/// A fixed-size, fitness-ordered collection of [`Solution`]s (spec.md §3).
///
/// After every generation the population is sorted ascending by fitness, so
/// index 0 is always the current best (spec.md §8, invariant 2).
#[derive(Debug, Clone)]
pub struct Population {
    size: usize,
    members: Vec<Solution>,
}

impl Population {
    pub fn new(size: usize, members: Vec<Solution>) -> Self {
        debug_assert_eq!(
            members.len(),
            size,
            "Population constructed with {} members, expected {}",
            members.len(),
            size
        );
        Self { size, members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn target_size(&self) -> usize {
        self.size
    }

    pub fn members(&self) -> &[Solution] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut [Solution] {
        &mut self.members
    }

    /// Sorts ascending by fitness so `members()[0]` is the best (spec.md §3,
    /// §8 invariant 2).
    pub fn sort_by_fitness(&mut self) {
        self.members.sort_by_key(Solution::fitness);
    }

    pub fn best(&self) -> &Solution {
        &self.members[0]
    }

    pub fn worst(&self) -> &Solution {
        &self.members[self.members.len() - 1]
    }

    /// Replaces the population wholesale, enforcing the population-stability
    /// invariant (spec.md §8, invariant 2): the new member count must equal
    /// the original target size.
    pub fn replace(&mut self, members: Vec<Solution>) {
        debug_assert_eq!(
            members.len(),
            self.size,
            "survivor selection produced {} members, expected {}",
            members.len(),
            self.size
        );
        self.members = members;
    }

    /// Debug-style dump matching the original's `Population::toString`:
    /// one line per member, `"<dimacs>\t fitness = <n>"`.
    pub fn to_dimacs_string(&self) -> String {
        let mut out = String::new();
        for sol in &self.members {
            out.push_str(&sol.to_dimacs_string());
            out.push_str("\t fitness = ");
            out.push_str(&sol.fitness().to_string());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::Formula;

    #[test]
    fn new_solution_is_zeroed_with_worst_fitness() {
        let sol = Solution::new(4, 10);
        assert_eq!(sol.len(), 4);
        assert_eq!(sol.fitness(), 10);
        assert!(!sol.is_satisfying());
        for v in 1..4 {
            assert!(!sol.bit(v));
        }
    }

    #[test]
    fn is_satisfying_iff_zero_fitness() {
        let mut sol = Solution::new(2, 3);
        assert!(!sol.is_satisfying());
        sol.set_fitness(0);
        assert!(sol.is_satisfying());
    }

    #[test]
    fn dimacs_rendering_matches_expected_format() {
        let mut sol = Solution::new(4, 0);
        sol.set_bit_unchecked(1, true);
        sol.set_bit_unchecked(2, false);
        sol.set_bit_unchecked(3, true);
        assert_eq!(sol.to_dimacs_string(), "1 -2 3 ");
    }

    #[test]
    fn set_bit_respects_pin() {
        let dimacs = "p cnf 2 1\n1 0\n";
        let formula = Formula::from_dimacs_str(dimacs).unwrap();
        let mut sol = Solution::new(3, 1);
        sol.set_bit(1, true, &formula);
        assert!(sol.bit(1));
    }

    #[test]
    fn population_sorts_ascending_by_fitness() {
        let mut s1 = Solution::new(2, 0);
        s1.set_fitness(5);
        let mut s2 = Solution::new(2, 0);
        s2.set_fitness(1);
        let mut s3 = Solution::new(2, 0);
        s3.set_fitness(3);
        let mut pop = Population::new(3, vec![s1, s2, s3]);
        pop.sort_by_fitness();
        assert_eq!(pop.best().fitness(), 1);
        assert_eq!(pop.worst().fitness(), 5);
    }
}
