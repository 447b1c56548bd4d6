/*!
Reports from a solver.

A solve call reports one of three outcomes, which follow the integer codes of the IPASIR protocol:

```rust
# use otter_prime::reports::Report;
assert_eq!(Report::from(10), Report::Satisfiable);
assert_eq!(Report::from(20), Report::Unsatisfiable);
assert_eq!(Report::from(0), Report::Interrupted);
```
*/

/// The result of a call to solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula, together with the assumptions of the solve, is satisfiable.
    Satisfiable,

    /// The formula, together with the assumptions of the solve, is unsatisfiable.
    Unsatisfiable,

    /// The solve was interrupted before satisfiability was decided.
    Interrupted,
}

impl From<std::ffi::c_int> for Report {
    fn from(value: std::ffi::c_int) -> Self {
        match value {
            10 => Self::Satisfiable,
            20 => Self::Unsatisfiable,
            _ => Self::Interrupted,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Interrupted => write!(f, "Interrupted"),
        }
    }
}
