/*!
An atom (aka. a 'variable').

Atoms are positive integers, as in the IPASIR protocol.
Though, as negative integers are used for literals, the maximum atom is the maximum (positive) `i32`.

```rust
# use otter_prime::structures::atom::{Atom, ATOM_MAX};
let atoms = (1..=3).collect::<Vec<Atom>>();
assert!(atoms.iter().all(|atom| *atom <= ATOM_MAX));
```

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
- The value `0` is not an atom.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
