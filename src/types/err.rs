//! Error types used in the library.
//!
//! - Limit errors are expected, and are the way a breach of some resource limit is reported.
//!   A limit error is returned only after every solver created by the call has been released.
//! - Formula errors are violations of the contract between a caller and a call, and are returned before any solver is created.
//! - Solver and state errors are unexpected.
//!
//! Each concern has its own enum, and each enum converts to an [ErrorKind] so `?` may be used throughout.

use crate::structures::atom::Atom;

/// The kinds of error which may be returned by a call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A resource limit was breached, or the limits could not be governed.
    Limit(LimitError),

    /// The formula or variable subset of a call did not meet the contract of the call.
    Formula(FormulaError),

    /// The solver failed, without any breach of a limit.
    Solver(SolverError),

    /// Some configuration option could not be set.
    Config(ConfigError),

    /// Some solver gave a result which contradicts an earlier result.
    InvalidState,
}

/// Noted breaches of limits, and failures to govern limits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LimitError {
    /// Some soft limit was exceeded, without any breach being recorded.
    ResourceLimitExceeded,

    /// The CPU time limit was exceeded.
    TimeLimitExceeded,

    /// The memory (address space) limit was exceeded.
    MemoryLimitExceeded,

    /// The file size limit was exceeded.
    FileSizeLimitExceeded,

    /// Limits were requested on a platform without resource limits.
    ResourceLimitsUnsupported,

    /// Some other governor with limits is already armed.
    GovernorArmed,
}

impl From<LimitError> for ErrorKind {
    fn from(e: LimitError) -> Self {
        ErrorKind::Limit(e)
    }
}

/// Violations of the contract between a formula and the variable subset of a call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormulaError {
    /// The clause at the given index contains `0`.
    ZeroLiteral { clause: usize },

    /// The clause at the given index contains a literal without a negation, i.e. `i32::MIN`.
    LiteralOutOfRange { clause: usize },

    /// The atom `0` (or an atom too large to be a literal) was given as an atom of interest.
    ZeroAtom,

    /// The atom is of interest, but does not occur in the formula.
    UnknownAtom(Atom),

    /// The atom is given twice as an atom of interest.
    DuplicateAtom(Atom),
}

impl From<FormulaError> for ErrorKind {
    fn from(e: FormulaError) -> Self {
        ErrorKind::Formula(e)
    }
}

/// Errors from a solver.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolverError {
    /// A fresh solver could not be made.
    Initialisation,

    /// The solver stopped without a result, and no breach of a limit was noted.
    Interrupted,
}

impl From<SolverError> for ErrorKind {
    fn from(e: SolverError) -> Self {
        ErrorKind::Solver(e)
    }
}

/// Errors when configuring.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The value is outside the bounds of the named option.
    OutOfBounds { option: &'static str },

    /// The value could not be read.
    UnknownValue,
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

impl std::fmt::Display for LimitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResourceLimitExceeded => write!(f, "resource limit exceeded"),
            Self::TimeLimitExceeded => write!(f, "time limit exceeded"),
            Self::MemoryLimitExceeded => write!(f, "memory limit exceeded"),
            Self::FileSizeLimitExceeded => write!(f, "file size limit exceeded"),
            Self::ResourceLimitsUnsupported => {
                write!(f, "resource limits are not supported on this platform")
            }
            Self::GovernorArmed => write!(f, "another resource governor is armed"),
        }
    }
}

impl std::fmt::Display for FormulaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroLiteral { clause } => write!(f, "clause {clause} contains 0"),
            Self::LiteralOutOfRange { clause } => {
                write!(f, "clause {clause} contains a literal out of range")
            }
            Self::ZeroAtom => write!(f, "atoms must be positive literals"),
            Self::UnknownAtom(atom) => write!(f, "atom {atom} does not occur in the formula"),
            Self::DuplicateAtom(atom) => write!(f, "atom {atom} is given more than once"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Limit(e) => write!(f, "{e}"),
            Self::Formula(e) => write!(f, "{e}"),
            Self::Solver(SolverError::Initialisation) => write!(f, "failed to initialise solver"),
            Self::Solver(SolverError::Interrupted) => write!(f, "solver interrupted"),
            Self::Config(ConfigError::OutOfBounds { option }) => {
                write!(f, "value out of bounds for {option}")
            }
            Self::Config(ConfigError::UnknownValue) => write!(f, "unknown configuration value"),
            Self::InvalidState => write!(f, "solver reached an invalid state"),
        }
    }
}

impl std::error::Error for ErrorKind {}
