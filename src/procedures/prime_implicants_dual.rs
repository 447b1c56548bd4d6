//! Prime implicants of a formula with respect to some input atoms, with a pair of solvers.
//!
//! # Overview
//!
//! An *enumerator* is given the formula, and is used only to find models and to block prime implicants once found.
//!
//! For each model of the enumerator, a fresh *minimiser* is built over the same atoms, where an atom being true means "keep the value of this atom on the model":
//! - For each clause of the formula, the minimiser has the clause of the atoms of each literal true on the model.
//! - For each input atom which occurs in no such clause, the minimiser has the atom as a negative unit clause.
//!
//! The minimiser is then shrunk, as [prime_implicants](crate::procedures::prime_implicants), though with facts added as unit clauses rather than assumed.
//! The minim found is read back through the model of the enumerator: an atom true on the model is given as a positive literal, and otherwise as a negative literal.
//! The result is a prime implicant, which is recorded and blocked in the enumerator.
//!
//! As the minimiser is discarded after each model, the enumerator is never narrowed by the shrinking of some model.
//!
//! # Notes
//!
//! The model of the enumerator is copied to a [valuation](crate::structures::valuation) before the minimiser is built.
//! The model is only read from the copy.

use std::collections::BTreeSet;

use crate::{
    config::ValueConvention,
    context::Context,
    misc::log::targets::{self},
    procedures::{
        load,
        prime_implicants::{shrink, Facts},
        satisfiable,
    },
    solver::IncrementalSolver,
    structures::{
        atom::Atom,
        clause::{Clause, IntClause},
        formula::validate,
        literal::{IntLiteral, Literal},
        valuation::{SparseValuation, Valuation},
        PrimeImplicant,
    },
    types::err::ErrorKind,
};

/// A copy of the model of the solver, over the atoms of the formula.
fn snapshot<S: IncrementalSolver>(
    solver: &S,
    formula: &[IntClause],
    convention: ValueConvention,
) -> SparseValuation {
    formula
        .iter()
        .flat_map(|clause| clause.atoms())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|atom| (atom, convention.holds(solver.val(atom))))
        .collect()
}

/// A fresh minimiser for the formula, on the given model.
fn minimiser<S: IncrementalSolver>(
    formula: &[IntClause],
    inputs: &[Atom],
    model: &SparseValuation,
) -> Result<S, ErrorKind> {
    let mut minimiser = load::<S>(&[])?;
    let mut kept = BTreeSet::new();

    for clause in formula {
        let satisfied = clause
            .iter()
            .filter(|literal| model.satisfies(**literal))
            .map(|literal| literal.atom())
            .collect::<Vec<_>>();

        kept.extend(satisfied.iter().copied());
        minimiser.add_clause(satisfied.into_iter().map(|atom| IntLiteral::new(atom, true)));
    }

    for &atom in inputs {
        if !kept.contains(&atom) {
            minimiser.add_clause([IntLiteral::new(atom, false)]);
        }
    }

    Ok(minimiser)
}

impl Context {
    /// The prime implicants of the formula with respect to the given input atoms, in the order found, with a pair of solvers.
    pub fn prime_implicants_dual<S: IncrementalSolver>(
        &self,
        formula: &[IntClause],
        inputs: &[Atom],
    ) -> Result<Vec<PrimeImplicant>, ErrorKind> {
        validate(formula, inputs)?;
        let convention = self.config.value_convention.value;

        self.governed(|| {
            let mut enumerator = load::<S>(formula)?;
            let mut implicants = Vec::new();

            while satisfiable(&mut enumerator)? {
                let model = snapshot(&enumerator, formula, convention);

                let minim = {
                    let mut minimiser = minimiser::<S>(formula, inputs, &model)?;
                    if !satisfiable(&mut minimiser)? {
                        log::error!(target: targets::MINIMISATION, "The minimiser has no model");
                        return Err(ErrorKind::InvalidState);
                    }
                    shrink(&mut minimiser, inputs, convention, Facts::Added)?
                };

                let implicant: PrimeImplicant = minim
                    .into_iter()
                    .map(|atom| IntLiteral::new(atom, model.satisfies(IntLiteral::new(atom, true))))
                    .collect();

                log::debug!(target: targets::MINIMISATION, "Prime implicant: {implicant:?}");
                enumerator.add_clause(implicant.negation());
                implicants.push(implicant);
            }

            log::info!(target: targets::MINIMISATION, "Found {} prime implicants", implicants.len());
            Ok(implicants)
        })
    }
}
