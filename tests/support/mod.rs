#![allow(dead_code)]

use std::{cell::Cell, collections::BTreeSet};

use otter_prime::{
    reports::Report,
    solver::IncrementalSolver,
    structures::{
        atom::Atom,
        clause::IntClause,
        formula::{max_atom, Formula},
        literal::{IntLiteral, Literal},
    },
    types::err::ErrorKind,
};
use rand::{rngs::StdRng, Rng};

thread_local! {
    static LIVE: Cell<usize> = const { Cell::new(0) };
}

/// A count of reference solvers initialised and not yet released, on this thread.
pub fn live_solvers() -> usize {
    LIVE.with(|live| live.get())
}

/// Initialises a logger, with output captured by the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Polls of the terminate callback are made every `POLL` steps of a search.
const POLL: usize = 64;

enum Outcome {
    Sat,
    Unsat,
    Stop,
}

/// A small DPLL solver, with unit propagation and true-first decisions.
///
/// With `PARTIAL` the search stops as soon as every clause is satisfied, and any atom without a value is reported as `0`.
/// Otherwise, any such atom is reported as true.
pub struct ReferenceSolver<const PARTIAL: bool> {
    clauses: Vec<IntClause>,
    clause: IntClause,
    assumptions: Vec<IntLiteral>,
    values: Vec<i8>,
    terminate: Option<fn() -> bool>,
    steps: usize,
}

pub type CompleteSolver = ReferenceSolver<false>;
pub type PartialSolver = ReferenceSolver<true>;

fn value_of(values: &[i8], literal: IntLiteral) -> i8 {
    let value = values.get(literal.atom() as usize).copied().unwrap_or(0);
    match literal.polarity() {
        true => value,
        false => -value,
    }
}

fn set(values: &mut [i8], literal: IntLiteral) {
    values[literal.atom() as usize] = match literal.polarity() {
        true => 1,
        false => -1,
    };
}

impl<const PARTIAL: bool> ReferenceSolver<PARTIAL> {
    /// Propagates units, returning `None` on a conflict, and otherwise whether every clause is satisfied.
    fn propagate(&self, values: &mut [i8]) -> Option<bool> {
        loop {
            let mut changed = false;
            let mut all_satisfied = true;

            for clause in &self.clauses {
                let mut satisfied = false;
                let mut open = 0;
                let mut last_open = 0;
                for &literal in clause {
                    match value_of(values, literal) {
                        1 => {
                            satisfied = true;
                            break;
                        }
                        0 => {
                            open += 1;
                            last_open = literal;
                        }
                        _ => {}
                    }
                }

                if satisfied {
                    continue;
                }
                all_satisfied = false;
                match open {
                    0 => return None,
                    1 => {
                        set(values, last_open);
                        changed = true;
                    }
                    _ => {}
                }
            }

            if all_satisfied {
                return Some(true);
            }
            if !changed {
                return Some(false);
            }
        }
    }

    fn search(&mut self, values: &mut Vec<i8>) -> Outcome {
        self.steps += 1;
        if self.steps % POLL == 0 {
            if let Some(terminate) = self.terminate {
                if terminate() {
                    return Outcome::Stop;
                }
            }
        }

        match self.propagate(values) {
            None => return Outcome::Unsat,
            Some(true) => return Outcome::Sat,
            Some(false) => {}
        }

        let decision = self
            .clauses
            .iter()
            .find(|clause| !clause.iter().any(|&literal| value_of(values, literal) == 1))
            .and_then(|clause| {
                clause
                    .iter()
                    .find(|&&literal| value_of(values, literal) == 0)
            })
            .map(|literal| literal.atom());

        let Some(atom) = decision else {
            return Outcome::Unsat;
        };

        for polarity in [true, false] {
            let mut trial = values.clone();
            set(&mut trial, IntLiteral::new(atom, polarity));
            match self.search(&mut trial) {
                Outcome::Sat => {
                    *values = trial;
                    return Outcome::Sat;
                }
                Outcome::Stop => return Outcome::Stop,
                Outcome::Unsat => {}
            }
        }
        Outcome::Unsat
    }
}

impl<const PARTIAL: bool> IncrementalSolver for ReferenceSolver<PARTIAL> {
    fn init() -> Result<Self, ErrorKind> {
        LIVE.with(|live| live.set(live.get() + 1));
        Ok(ReferenceSolver {
            clauses: Vec::default(),
            clause: Vec::default(),
            assumptions: Vec::default(),
            values: Vec::default(),
            terminate: None,
            steps: 0,
        })
    }

    fn add(&mut self, literal_or_zero: IntLiteral) {
        match literal_or_zero {
            0 => self.clauses.push(std::mem::take(&mut self.clause)),
            literal => self.clause.push(literal),
        }
    }

    fn assume(&mut self, literal: IntLiteral) {
        self.assumptions.push(literal);
    }

    fn solve(&mut self) -> Report {
        let assumptions = std::mem::take(&mut self.assumptions);
        let atoms = max_atom(&self.clauses).max(max_atom(&[assumptions.clone()]));

        let mut values = vec![0_i8; atoms as usize + 1];
        for &assumption in &assumptions {
            if value_of(&values, assumption) == -1 {
                return Report::Unsatisfiable;
            }
            set(&mut values, assumption);
        }

        match self.search(&mut values) {
            Outcome::Sat => {
                if !PARTIAL {
                    for value in values.iter_mut().skip(1) {
                        if *value == 0 {
                            *value = 1;
                        }
                    }
                }
                self.values = values;
                Report::Satisfiable
            }
            Outcome::Unsat => Report::Unsatisfiable,
            Outcome::Stop => Report::Interrupted,
        }
    }

    fn val(&self, atom: Atom) -> IntLiteral {
        match self.values.get(atom as usize) {
            Some(1) => IntLiteral::new(atom, true),
            Some(-1) => IntLiteral::new(atom, false),
            _ => 0,
        }
    }

    fn set_terminate(&mut self, callback: Option<fn() -> bool>) {
        self.terminate = callback;
    }
}

impl<const PARTIAL: bool> Drop for ReferenceSolver<PARTIAL> {
    fn drop(&mut self) {
        LIVE.with(|live| live.set(live.get() - 1));
    }
}

/// The distinct atoms of the formula, in order.
pub fn atoms_of(formula: &[IntClause]) -> Vec<Atom> {
    formula
        .iter()
        .flatten()
        .map(|literal| literal.atom())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Every assignment to the atoms `1..=max_atom` satisfying the formula, indexed by atom.
pub fn brute_force_models(formula: &[IntClause]) -> Vec<Vec<bool>> {
    let atoms = max_atom(formula) as usize;
    assert!(atoms <= 16, "Too many atoms to brute force");

    let mut models = Vec::new();
    for bits in 0..(1_u32 << atoms) {
        let assignment = (0..=atoms)
            .map(|atom| atom > 0 && bits & (1 << (atom - 1)) != 0)
            .collect::<Vec<_>>();

        let satisfied = formula.iter().all(|clause| {
            clause
                .iter()
                .any(|literal| assignment[literal.atom() as usize] == literal.polarity())
        });
        if satisfied {
            models.push(assignment);
        }
    }
    models
}

/// Whether every assignment to the atoms `1..=max_atom` which agrees with the literals satisfies the formula.
pub fn is_implicant(formula: &[IntClause], literals: &[IntLiteral]) -> bool {
    let atoms = max_atom(formula).max(max_atom(&[literals.to_vec()])) as usize;
    assert!(atoms <= 16, "Too many atoms to brute force");

    (0..(1_u32 << atoms)).all(|bits| {
        let value = |literal: IntLiteral| (bits & (1 << (literal.atom() - 1)) != 0) == literal.polarity();
        !literals.iter().all(|&literal| value(literal))
            || formula.iter().all(|clause| clause.iter().any(|&literal| value(literal)))
    })
}

/// The models of the formula, projected onto the given atoms.
pub fn projected_models(formula: &[IntClause], projection: &[Atom]) -> BTreeSet<Vec<IntLiteral>> {
    brute_force_models(formula)
        .into_iter()
        .map(|model| {
            projection
                .iter()
                .map(|&atom| IntLiteral::new(atom, model[atom as usize]))
                .collect()
        })
        .collect()
}

/// The minimal (by inclusion) sets of inputs true on some model of the formula, each as sorted positive literals.
pub fn minimal_true_sets(formula: &[IntClause], inputs: &[Atom]) -> BTreeSet<Vec<IntLiteral>> {
    let true_sets = brute_force_models(formula)
        .into_iter()
        .map(|model| {
            inputs
                .iter()
                .filter(|&&atom| model[atom as usize])
                .map(|&atom| IntLiteral::new(atom, true))
                .collect::<BTreeSet<_>>()
        })
        .collect::<BTreeSet<_>>();

    true_sets
        .iter()
        .filter(|set| {
            !true_sets
                .iter()
                .any(|other| other != *set && other.is_subset(set))
        })
        .map(|set| set.iter().copied().collect())
        .collect()
}

/// Sorts the literals of each set, and then the sets.
pub fn sorted(mut sets: Vec<Vec<IntLiteral>>) -> Vec<Vec<IntLiteral>> {
    for set in sets.iter_mut() {
        set.sort_unstable();
    }
    sets.sort();
    sets
}

/// A random formula over the atoms `1..=atoms`, with clauses of between one and `width` literals.
pub fn random_formula(
    rng: &mut StdRng,
    atoms: Atom,
    clauses: usize,
    width: usize,
    monotone: bool,
) -> Formula {
    (0..clauses)
        .map(|_| {
            let length = rng.random_range(1..=width);
            (0..length)
                .map(|_| {
                    let atom = rng.random_range(1..=atoms);
                    IntLiteral::new(atom, monotone || rng.random_bool(0.5))
                })
                .collect()
        })
        .collect()
}

/// The pigeonhole formula: each pigeon in some hole, and no two pigeons in the same hole.
///
/// Unsatisfiable when there are more pigeons than holes, and hard for a solver without clause learning.
pub fn pigeonhole(pigeons: u32, holes: u32) -> Formula {
    let atom = |pigeon: u32, hole: u32| (pigeon * holes + hole + 1) as IntLiteral;
    let mut formula = Formula::new();

    for pigeon in 0..pigeons {
        formula.push((0..holes).map(|hole| atom(pigeon, hole)).collect());
    }
    for hole in 0..holes {
        for first in 0..pigeons {
            for second in (first + 1)..pigeons {
                formula.push(vec![-atom(first, hole), -atom(second, hole)]);
            }
        }
    }
    formula
}
