//! Procedures over a formula, each driving some incremental solver.
//!
//! For the most part these are methods accessed via a [context](crate::context), and primarily placed here for documentation.
//!
//! - [enumerate] the models of a formula, projected onto some atoms.
//! - Find the [prime implicants](prime_implicants) of a formula with respect to some input atoms, with a single solver.
//! - Find the prime implicants with a [pair of solvers](prime_implicants_dual).
//!
//! Each solver made by a procedure polls the [governor](crate::governor) while solving, and each solve is followed by a [checkpoint](crate::governor::checkpoint).
//! So, a breach of some limit stops a procedure at the latest at the end of the solve during which the breach occurred.

pub mod enumerate;
pub mod prime_implicants;
pub mod prime_implicants_dual;

use crate::{
    governor,
    misc::log::targets::{self},
    reports::Report,
    solver::IncrementalSolver,
    structures::clause::IntClause,
    types::err::{ErrorKind, SolverError},
};

/// A fresh solver, with the clauses of the formula and the terminate callback of the governor.
pub(crate) fn load<S: IncrementalSolver>(formula: &[IntClause]) -> Result<S, ErrorKind> {
    let mut solver = S::init()?;
    solver.add_formula(formula);
    solver.set_terminate(Some(governor::terminate_requested));
    log::trace!(target: targets::SOLVER, "Loaded {} clauses", formula.len());
    Ok(solver)
}

/// Solves, returning whether the solve was satisfiable.
///
/// A breach of some limit takes precedence over the report of the solve.
pub(crate) fn satisfiable<S: IncrementalSolver>(solver: &mut S) -> Result<bool, ErrorKind> {
    let report = solver.solve();
    governor::checkpoint()?;

    log::trace!(target: targets::SOLVER, "Solve: {report}");
    match report {
        Report::Satisfiable => Ok(true),
        Report::Unsatisfiable => Ok(false),
        Report::Interrupted => Err(ErrorKind::from(SolverError::Interrupted)),
    }
}
