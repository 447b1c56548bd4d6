/*!
A (partial) function from atoms to truth values.

The canonical representation of a valuation is a vector of optional booleans, where:
- The zero index (first) element is true, interpreted as some arbitrary tautology.
- Each non-zero index of the vector is interpreted as an atom.

In other words, for a valuation *v*:
-  *v*\[a\] = Some(true) *if any only if* a is true.
-  *v*\[a\] = Some(false) *if any only if* a is false.
-  *v*\[a\] = None *if any only if* a has no value.

Valuations are used to snapshot the model of a solver, so the model may be consulted after the solver has been given further clauses.

```rust
# use otter_prime::structures::valuation::{CValuation, Valuation};
let valuation: CValuation = vec![Some(true), Some(true), None, Some(false)];

assert_eq!(valuation.value_of(1), Some(Some(true)));
assert_eq!(valuation.value_of(2), Some(None));
assert_eq!(valuation.value_of(9), None);

assert!(valuation.satisfies(-3));
assert!(!valuation.satisfies(2));
```

Where the atoms of interest are few and may be large, a [SparseValuation] stores only the atoms with some value.
*/

use std::collections::BTreeMap;

use crate::structures::{
    atom::Atom,
    literal::{IntLiteral, Literal},
};

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of an atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// Some value of an atom under the valuation, or otherwise nothing if the atom is not part of the valuation.
    fn value_of(&self, atom: Atom) -> Option<Option<bool>>;

    /// Whether the literal is true on the valuation.
    fn satisfies(&self, literal: IntLiteral) -> bool {
        matches!(self.value_of(literal.atom()), Some(Some(value)) if value == literal.polarity())
    }
}

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<Option<bool>> {
        self.get(atom as usize).copied()
    }
}

/// A valuation of some atoms, stored by atom.
///
/// Any atom without a value is not part of the valuation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseValuation {
    values: BTreeMap<Atom, bool>,
}

impl Valuation for SparseValuation {
    fn value_of(&self, atom: Atom) -> Option<Option<bool>> {
        self.values.get(&atom).map(|value| Some(*value))
    }
}

impl FromIterator<(Atom, bool)> for SparseValuation {
    fn from_iter<I: IntoIterator<Item = (Atom, bool)>>(iter: I) -> Self {
        SparseValuation {
            values: iter.into_iter().collect(),
        }
    }
}
