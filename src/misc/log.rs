/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for following a call and for diagnosing the cause of a limit breach.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [model enumeration](crate::procedures::enumerate)
    pub const ENUMERATION: &str = "enumeration";

    /// Logs related to the shrinking of models to [prime implicants](crate::procedures::prime_implicants)
    pub const MINIMISATION: &str = "minimisation";

    /// Logs related to the [resource governor](crate::governor)
    pub const GOVERNOR: &str = "governor";

    /// Logs related to the lifecycle of a [solver](crate::solver)
    pub const SOLVER: &str = "solver";
}
