//! Key structures, such as literals, clauses, and formulas.
//!
//! All structures follow the integer representation used by the IPASIR protocol (and DIMACS):
//! - An [atom] is a positive integer.
//! - A [literal] is a non-zero integer, whose absolute value is an atom and whose sign is the polarity of the literal.
//! - A [clause] is a vector of literals, interpreted as the disjunction of those literals.
//! - A [formula] is a vector of clauses, interpreted as the conjunction of those clauses.
//!
//! The integer `0` is never a literal.
//! At the solver boundary `0` is used only to close the clause being added.
//!
//! ## Results
//!
//! Results of a procedure are vectors of literals, with one literal for each atom of interest:
//! - A [Model] holds a literal for every atom of a projection, with the polarity of the atom on some satisfying valuation.
//! - A [PrimeImplicant] holds a literal for every input atom which cannot be dropped.

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
pub mod valuation;

use literal::IntLiteral;

/// A satisfying valuation, restricted to the atoms of some projection.
pub type Model = Vec<IntLiteral>;

/// A minimal collection of input literals, see [prime_implicants](crate::procedures::prime_implicants).
pub type PrimeImplicant = Vec<IntLiteral>;
