/*!
The capability of an incremental solver, as used by the [procedures](crate::procedures).

The capability follows the [IPASIR](https://github.com/biotomas/ipasir) protocol:
- A solver is made fresh with [init](IncrementalSolver::init), and released when dropped.
- Clauses are added a literal at a time with [add](IncrementalSolver::add), and closed by adding `0`.
  Added clauses are kept for the lifetime of the solver.
- An [assumption](IncrementalSolver::assume) holds for the next call to [solve](IncrementalSolver::solve) only.
- After a satisfiable solve, the [value](IncrementalSolver::val) of an atom is the atom as a literal with the polarity of the atom on the model found, or `0` if the atom has no value on the model.
- A [terminate](IncrementalSolver::set_terminate) callback may be polled during a solve, and the solve is interrupted if the callback returns true.

A binding to any library implementing the protocol is given by [IpasirSolver](ipasir::IpasirSolver), with the `ipasir` feature.
*/

#[cfg(feature = "ipasir")]
pub mod ipasir;

#[cfg(test)]
pub(crate) mod scripted;

use crate::{
    reports::Report,
    structures::{atom::Atom, clause::IntClause, literal::IntLiteral},
    types::err::ErrorKind,
};

/// An incremental solver.
pub trait IncrementalSolver: Sized {
    /// A fresh solver, with no clauses.
    fn init() -> Result<Self, ErrorKind>;

    /// Extends the clause being added with the literal, or closes the clause if the literal is `0`.
    fn add(&mut self, literal_or_zero: IntLiteral);

    /// Assumes the literal for the next solve.
    fn assume(&mut self, literal: IntLiteral);

    /// Solves the clauses added, under the assumptions made since the last solve.
    fn solve(&mut self) -> Report;

    /// The value of an atom on the model found by the last solve.
    ///
    /// Only meaningful if the last solve was satisfiable.
    fn val(&self, atom: Atom) -> IntLiteral;

    /// Sets (or clears) the callback polled during a solve.
    fn set_terminate(&mut self, callback: Option<fn() -> bool>);

    /// Adds each literal of the clause, and closes the clause.
    fn add_clause<I: IntoIterator<Item = IntLiteral>>(&mut self, clause: I) {
        for literal in clause {
            self.add(literal);
        }
        self.add(0);
    }

    /// Adds each clause of the formula.
    fn add_formula(&mut self, formula: &[IntClause]) {
        for clause in formula {
            self.add_clause(clause.iter().copied());
        }
    }
}
