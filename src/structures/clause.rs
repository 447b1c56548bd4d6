//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of integer literals, in the order the literals were given.
//!
//! ```rust
//! # use otter_prime::structures::clause::Clause;
//! let clause = vec![23, -41, -3];
//!
//! assert_eq!(clause.as_dimacs(true), "23 -41 -3 0");
//! assert_eq!(clause.negation(), vec![-23, 41, 3]);
//! ```
//!
//! - The empty clause is always false (never true).

use crate::structures::{
    atom::Atom,
    literal::{IntLiteral, Literal},
};

/// The implementation of a clause as a vector of integers.
pub type IntClause = Vec<IntLiteral>;

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all atoms in the clause, in the order of the literals.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The clause made of the negation of each literal.
    ///
    /// When the clause is read as a conjunction (a model, or an implicant) the negation is the clause which blocks it.
    fn negation(&self) -> IntClause;
}

impl Clause for [IntLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = self
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if zero {
            if !the_string.is_empty() {
                the_string.push(' ');
            }
            the_string.push('0');
        }
        the_string
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn negation(&self) -> IntClause {
        self.iter().map(|literal| literal.negate()).collect()
    }
}
