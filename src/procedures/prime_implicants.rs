//! Prime implicants of a formula with respect to some input atoms, with a single solver.
//!
//! # Overview
//!
//! A model of the formula is found, and then shrunk until it can be shrunk no further.
//!
//! To shrink a model, the input atoms are partitioned into:
//! - The *minim*, those atoms true on the model.
//! - The *facts*, those atoms false on the model.
//!
//! The negation of the minim is added as a clause, and the solver is asked for a model on which every fact remains false.
//! Any such model is true on a strict subset of the minim, and so is shrunk in turn.
//! Otherwise, the minim is a prime implicant: the minim true, and every other input false, satisfies the formula, while no strict subset of the minim does.
//!
//! Then, a fresh model is found, and the process repeats until the solver reports unsatisfiable.
//! Every clause added while shrinking is kept, so no model found later is true on every atom of some prime implicant already found.
//!
//! Each prime implicant is given as the (positive) literals of the minim.
//! So, for example, on the formula `x1 ∨ x2 ∨ x3`, with each atom an input, the prime implicants are `[1]`, `[2]`, and `[3]`.
//!
//! ```rust,ignore
//! loop {
//!     if !satisfiable(solver)? { break }
//!
//!     loop {
//!         let (minim, facts) = partition(inputs);
//!         solver.add_clause(¬minim);
//!         solver.assume(¬facts);
//!         if !satisfiable(solver)? { implicants.push(minim); break }
//!     }
//! }
//! ```
//!
//! # Notes
//!
//! The solver is narrowed by each clause added, and so is of no use after the call.
//! For a variant which keeps a solver for the formula unchanged, except to block implicants found, see [prime_implicants_dual](crate::procedures::prime_implicants_dual).

use crate::{
    config::ValueConvention,
    context::Context,
    misc::log::targets::{self},
    procedures::{load, satisfiable},
    solver::IncrementalSolver,
    structures::{
        atom::Atom,
        clause::IntClause,
        formula::validate,
        literal::{IntLiteral, Literal},
        PrimeImplicant,
    },
    types::err::ErrorKind,
};

/// How the facts of a shrink are given to a solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Facts {
    /// As assumptions, for the next solve only.
    Assumed,

    /// As unit clauses.
    Added,
}

/// Shrinks the model of the last (satisfiable) solve to a prime implicant, given as the atoms of the minim.
pub(crate) fn shrink<S: IncrementalSolver>(
    solver: &mut S,
    inputs: &[Atom],
    convention: ValueConvention,
    facts: Facts,
) -> Result<Vec<Atom>, ErrorKind> {
    loop {
        let (minim, rest): (Vec<Atom>, Vec<Atom>) = inputs
            .iter()
            .partition(|atom| convention.holds(solver.val(**atom)));

        log::trace!(target: targets::MINIMISATION, "Minim of {} atoms", minim.len());

        solver.add_clause(minim.iter().map(|&atom| IntLiteral::new(atom, false)));
        for fact in rest.into_iter().map(|atom| IntLiteral::new(atom, false)) {
            match facts {
                Facts::Assumed => solver.assume(fact),
                Facts::Added => solver.add_clause([fact]),
            }
        }

        if !satisfiable(solver)? {
            return Ok(minim);
        }
    }
}

impl Context {
    /// The prime implicants of the formula with respect to the given input atoms, in the order found.
    pub fn prime_implicants<S: IncrementalSolver>(
        &self,
        formula: &[IntClause],
        inputs: &[Atom],
    ) -> Result<Vec<PrimeImplicant>, ErrorKind> {
        validate(formula, inputs)?;
        let convention = self.config.value_convention.value;

        self.governed(|| {
            let mut solver = load::<S>(formula)?;
            let mut implicants = Vec::new();

            while satisfiable(&mut solver)? {
                let minim = shrink(&mut solver, inputs, convention, Facts::Assumed)?;
                let implicant: PrimeImplicant = minim
                    .into_iter()
                    .map(|atom| IntLiteral::new(atom, true))
                    .collect();

                log::debug!(target: targets::MINIMISATION, "Prime implicant: {implicant:?}");
                implicants.push(implicant);
            }

            log::info!(target: targets::MINIMISATION, "Found {} prime implicants", implicants.len());
            Ok(implicants)
        })
    }
}
