/*!
Literals are atoms paired with a (boolean) polarity.

Literals are represented as non-zero integers, with the absolute value of the integer the atom of the literal and the sign of the integer the polarity of the literal.

```rust
# use otter_prime::structures::literal::{IntLiteral, Literal};
let literal = IntLiteral::new(79, false);

assert_eq!(literal, -79);
assert_eq!(literal.atom(), 79);
assert!(!literal.polarity());
assert!(literal.negate().polarity());
```

The [Literal] trait is kept small, as every interaction with a solver is through the integer representation.
*/

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity.
pub trait Literal {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;
}

/// The representation of a literal as a signed integer.
pub type IntLiteral = i32;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }
}
