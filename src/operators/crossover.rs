//! One-, two-, and three-point crossover (spec.md §4.6).
//!
//! All three share the same skeleton: with probability `crossover_rate`,
//! exchange bits between the two children at the variant's point set;
//! positions pinned by the formula (`formula.is_fixed(j)`) are never
//! touched, regardless of whether they fall inside a swapped range.

use crate::formula::Formula;
use crate::random::GaRng;
use crate::solution::Solution;

/// Produces two children from two parents. `crossover_rate` gates whether
/// any swap happens at all; on a miss the children are straight copies.
pub trait CrossoverOperator {
    fn cross(
        &self,
        parent1: &Solution,
        parent2: &Solution,
        formula: &Formula,
        crossover_rate: f64,
        rng: &mut GaRng,
    ) -> (Solution, Solution);
}

/// Draws a single point in `[1, n-1]`. Returns `None` when `n < 2`, in which
/// case no valid point exists and the variant should skip the swap
/// (spec.md §10.6 "Degenerate crossover/mutation point ranges").
fn draw_point(n: usize, rng: &mut GaRng) -> Option<usize> {
    if n < 2 {
        None
    } else {
        Some(rng.gen_range(1, n))
    }
}

fn swap_range(child1: &mut Solution, child2: &mut Solution, parent1: &Solution, parent2: &Solution, formula: &Formula, range: impl Iterator<Item = usize>) {
    for j in range {
        if !formula.is_fixed(j) {
            child1.set_bit_unchecked(j, parent2.bit(j));
            child2.set_bit_unchecked(j, parent1.bit(j));
        }
    }
}

/// Exchange bits in `[1, k]` for a single uniformly-drawn point `k`
/// (spec.md §4.6).
#[derive(Debug, Default, Clone, Copy)]
pub struct OnePointCrossover;

impl CrossoverOperator for OnePointCrossover {
    fn cross(
        &self,
        parent1: &Solution,
        parent2: &Solution,
        formula: &Formula,
        crossover_rate: f64,
        rng: &mut GaRng,
    ) -> (Solution, Solution) {
        let mut child1 = parent1.clone();
        let mut child2 = parent2.clone();
        let n = formula.num_variables();
        if rng.gen_unit() < crossover_rate {
            if let Some(k) = draw_point(n, rng) {
                swap_range(&mut child1, &mut child2, parent1, parent2, formula, 1..=k);
            }
        }
        (child1, child2)
    }
}

/// Exchange bits in `[1, k1] ∪ [k2, n]` for two points `k1 <= k2`
/// (spec.md §4.6).
#[derive(Debug, Default, Clone, Copy)]
pub struct TwoPointCrossover;

impl CrossoverOperator for TwoPointCrossover {
    fn cross(
        &self,
        parent1: &Solution,
        parent2: &Solution,
        formula: &Formula,
        crossover_rate: f64,
        rng: &mut GaRng,
    ) -> (Solution, Solution) {
        let mut child1 = parent1.clone();
        let mut child2 = parent2.clone();
        let n = formula.num_variables();
        if rng.gen_unit() < crossover_rate {
            if let (Some(mut k1), Some(mut k2)) = (draw_point(n, rng), draw_point(n, rng)) {
                if k1 > k2 {
                    std::mem::swap(&mut k1, &mut k2);
                }
                swap_range(&mut child1, &mut child2, parent1, parent2, formula, 1..=k1);
                swap_range(&mut child1, &mut child2, parent1, parent2, formula, k2..=n);
            }
        }
        (child1, child2)
    }
}

/// Exchange bits in `[1, k1] ∪ [k2, k3]` for three points `k1 <= k2 <= k3`
/// (spec.md §4.6).
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreePointCrossover;

impl CrossoverOperator for ThreePointCrossover {
    fn cross(
        &self,
        parent1: &Solution,
        parent2: &Solution,
        formula: &Formula,
        crossover_rate: f64,
        rng: &mut GaRng,
    ) -> (Solution, Solution) {
        let mut child1 = parent1.clone();
        let mut child2 = parent2.clone();
        let n = formula.num_variables();
        if rng.gen_unit() < crossover_rate {
            if let (Some(k1), Some(k2), Some(k3)) =
                (draw_point(n, rng), draw_point(n, rng), draw_point(n, rng))
            {
                let mut points = [k1, k2, k3];
                points.sort_unstable();
                let [k1, k2, k3] = points;
                swap_range(&mut child1, &mut child2, parent1, parent2, formula, 1..=k1);
                swap_range(&mut child1, &mut child2, parent1, parent2, formula, k2..=k3);
            }
        }
        (child1, child2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formula_no_fixed(n: usize) -> Formula {
        let dimacs = format!("p cnf {n} 1\n1 0\n");
        // first var forced true by the unit clause; fine for exercising the
        // "pinned positions never swap" behaviour in the same test.
        Formula::from_dimacs_str(&dimacs).unwrap()
    }

    fn all_true(n: usize) -> Solution {
        let mut s = Solution::new(n + 1, 0);
        for v in 1..=n {
            s.set_bit_unchecked(v, true);
        }
        s
    }

    fn all_false(n: usize) -> Solution {
        Solution::new(n + 1, 0)
    }

    #[test]
    fn one_point_crossover_never_touches_fixed_bit() {
        let formula = formula_no_fixed(6);
        // Both parents respect the pin on variable 1; bit 1 must survive
        // crossover in both children regardless of where the swap point falls.
        let mut p1 = all_true(6);
        let mut p2 = all_false(6);
        p1.set_bit_unchecked(1, true);
        p2.set_bit_unchecked(1, true);
        let mut rng = GaRng::from_seed(9);
        for _ in 0..50 {
            let (c1, c2) = OnePointCrossover.cross(&p1, &p2, &formula, 1.0, &mut rng);
            assert!(c1.bit(1));
            assert!(c2.bit(1));
        }
    }

    #[test]
    fn crossover_rate_zero_yields_straight_copies() {
        let formula = formula_no_fixed(6);
        let p1 = all_true(6);
        let p2 = all_false(6);
        let mut rng = GaRng::from_seed(11);
        let (c1, c2) = OnePointCrossover.cross(&p1, &p2, &formula, 0.0, &mut rng);
        assert_eq!(c1, p1);
        assert_eq!(c2, p2);
    }

    #[test]
    fn children_bits_stay_boolean_and_in_range() {
        let formula = formula_no_fixed(8);
        let p1 = all_true(8);
        let p2 = all_false(8);
        let mut rng = GaRng::from_seed(13);
        let (c1, c2) = ThreePointCrossover.cross(&p1, &p2, &formula, 1.0, &mut rng);
        assert_eq!(c1.len(), 9);
        assert_eq!(c2.len(), 9);
    }

    #[test]
    fn single_variable_formula_skips_point_crossover() {
        let dimacs = "p cnf 1 1\n1 0\n";
        let formula = Formula::from_dimacs_str(dimacs).unwrap();
        let p1 = all_true(1);
        let p2 = all_true(1);
        let mut rng = GaRng::from_seed(4);
        let (c1, c2) = TwoPointCrossover.cross(&p1, &p2, &formula, 1.0, &mut rng);
        assert_eq!(c1, p1);
        assert_eq!(c2, p2);
    }
}
