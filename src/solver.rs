//! A minimal CDCL collaborator stand-in (spec.md §6, §9 "Cycle-free
//! ownership"; SPEC_FULL.md §10.6).
//!
//! `saga.cc` in `examples/original_source/core` links directly against
//! MiniSat to get a real clause database and polarity sink; this crate has
//! no such dependency available, so [`ReferenceSolver`] plays that role with
//! a unit-propagation-only DPLL. It is deliberately not a competitive CDCL
//! implementation (spec.md §1 Non-goals) — just enough to make the GA's
//! external interface (spec.md §6) and the polarity handoff (spec.md §4.10)
//! exercisable end-to-end.

use crate::error::GaError;
use crate::evaluator::{ClauseDatabase, ClauseView, Literal};
use crate::formula::parse_dimacs;

/// Outcome of [`ReferenceSolver::solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Sat(Vec<bool>),
    Unsat,
}

/// Holds the original clause database and the decision polarities set by a
/// GA run (spec.md §4.10).
#[derive(Debug, Clone)]
pub struct ReferenceSolver {
    num_variables: usize,
    clauses: Vec<Vec<Literal>>,
    polarity: Vec<bool>,
}

impl ReferenceSolver {
    pub fn new(num_variables: usize, clauses: Vec<Vec<Literal>>) -> Self {
        Self {
            num_variables,
            polarity: vec![false; num_variables],
            clauses,
        }
    }

    /// Parses a DIMACS file and builds both the [`crate::formula::Formula`]
    /// view and the collaborator in one step.
    pub fn from_dimacs_str(text: &str) -> Result<(crate::formula::Formula, Self), GaError> {
        let (formula, clauses) = parse_dimacs(text)?;
        let solver = Self::new(formula.num_variables(), clauses);
        Ok((formula, solver))
    }

    /// The polarity set for 0-based variable `var0` by the last
    /// [`ClauseDatabase::set_polarity`] call, `false` until then.
    pub fn polarity(&self, var0: usize) -> bool {
        self.polarity[var0]
    }

    /// Unit-propagation-only DPLL, seeded by the GA's polarity hints as the
    /// branching order and default value: decisions try the GA's preferred
    /// polarity first, falling back on conflict (spec.md §4.10's stated
    /// purpose — a good seed cuts the solver's branching work).
    pub fn solve(&self) -> SolveOutcome {
        let mut assignment: Vec<Option<bool>> = vec![None; self.num_variables];
        if self.dpll(&mut assignment) {
            SolveOutcome::Sat(assignment.iter().map(|v| v.unwrap_or(false)).collect())
        } else {
            SolveOutcome::Unsat
        }
    }

    fn dpll(&self, assignment: &mut Vec<Option<bool>>) -> bool {
        match self.unit_propagate(assignment) {
            PropagationResult::Conflict => return false,
            PropagationResult::Ok => {}
        }

        let Some(var0) = assignment.iter().position(Option::is_none) else {
            return self.all_clauses_satisfied(assignment);
        };

        let preferred = self.polarity[var0];
        for &value in &[preferred, !preferred] {
            let mut trial = assignment.clone();
            trial[var0] = Some(value);
            if self.dpll(&mut trial) {
                *assignment = trial;
                return true;
            }
        }
        false
    }

    fn unit_propagate(&self, assignment: &mut Vec<Option<bool>>) -> PropagationResult {
        loop {
            let mut propagated_any = false;
            for clause in &self.clauses {
                let mut unassigned: Option<Literal> = None;
                let mut satisfied = false;
                let mut unassigned_count = 0;
                for &lit in clause {
                    match assignment[lit.var0] {
                        Some(value) if value == !lit.sign => {
                            satisfied = true;
                            break;
                        }
                        Some(_) => {}
                        None => {
                            unassigned_count += 1;
                            unassigned = Some(lit);
                        }
                    }
                }
                if satisfied {
                    continue;
                }
                if unassigned_count == 0 {
                    return PropagationResult::Conflict;
                }
                if unassigned_count == 1 {
                    let lit = unassigned.expect("unassigned_count == 1");
                    assignment[lit.var0] = Some(!lit.sign);
                    propagated_any = true;
                }
            }
            if !propagated_any {
                return PropagationResult::Ok;
            }
        }
    }

    fn all_clauses_satisfied(&self, assignment: &[Option<bool>]) -> bool {
        self.clauses.iter().all(|clause| {
            clause
                .iter()
                .any(|lit| assignment[lit.var0] == Some(!lit.sign))
        })
    }
}

enum PropagationResult {
    Ok,
    Conflict,
}

impl ClauseDatabase for ReferenceSolver {
    fn num_variables(&self) -> usize {
        self.num_variables
    }

    fn iterate_original_clauses(&self) -> Box<dyn Iterator<Item = &dyn ClauseView> + '_> {
        Box::new(self.clauses.iter().map(|c| c as &dyn ClauseView))
    }

    fn set_polarity(&mut self, var0: usize, value: bool) {
        self.polarity[var0] = value;
    }
}
