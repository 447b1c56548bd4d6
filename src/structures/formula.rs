/*!
A formula, aka. a collection of clauses, interpreted as the conjunction of those clauses.

Formulas are given by the caller and are never modified.
Before any solver is created, a formula is checked against the variable subset of the call:

```rust
# use otter_prime::structures::formula::validate;
# use otter_prime::types::err::FormulaError;
let formula = vec![vec![1, 2], vec![-1, -2]];

assert!(validate(&formula, &[1, 2]).is_ok());
assert_eq!(validate(&formula, &[1, 3]), Err(FormulaError::UnknownAtom(3)));
assert_eq!(validate(&formula, &[1, 1]), Err(FormulaError::DuplicateAtom(1)));
```
*/

use std::collections::BTreeSet;

use crate::{
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{Clause, IntClause},
    },
    types::err::FormulaError,
};

/// The implementation of a formula as a vector of clauses.
pub type Formula = Vec<IntClause>;

/// The greatest atom occurring in the formula, or `0` if the formula contains no literals.
pub fn max_atom(formula: &[IntClause]) -> Atom {
    formula
        .iter()
        .flat_map(|clause| clause.atoms())
        .max()
        .unwrap_or(0)
}

/// Checks the contract between a formula and the atoms of interest for some call.
///
/// In order:
/// - No clause contains `0`, or `i32::MIN`.
/// - No atom of interest is `0`, or too large to be a literal.
/// - Every atom of interest occurs in the formula.
/// - No atom of interest is repeated.
///
/// Atoms are collected as sets, so the check does not depend on the magnitude of any atom.
pub fn validate(formula: &[IntClause], atoms: &[Atom]) -> Result<(), FormulaError> {
    for (index, clause) in formula.iter().enumerate() {
        if clause.contains(&0) {
            return Err(FormulaError::ZeroLiteral { clause: index });
        }
        if clause.contains(&i32::MIN) {
            return Err(FormulaError::LiteralOutOfRange { clause: index });
        }
    }

    let occurs = formula
        .iter()
        .flat_map(|clause| clause.atoms())
        .collect::<BTreeSet<_>>();

    let mut seen = BTreeSet::new();
    for &atom in atoms {
        if atom == 0 || atom > ATOM_MAX {
            return Err(FormulaError::ZeroAtom);
        }
        if !occurs.contains(&atom) {
            return Err(FormulaError::UnknownAtom(atom));
        }
        if !seen.insert(atom) {
            return Err(FormulaError::DuplicateAtom(atom));
        }
    }

    Ok(())
}
