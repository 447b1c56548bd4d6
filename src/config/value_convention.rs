use std::str::FromStr;

use crate::{structures::literal::IntLiteral, types::err::ConfigError};

/// How the value of an atom reported by a solver is read.
///
/// A solver may leave an atom without a value when the value of the atom does not matter to the model found, in which case the solver reports `0` for the atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValueConvention {
    /// An atom is true unless the solver reports the atom as false.
    DontCareAsTrue = 0,

    /// An atom is true only if the solver reports the atom as true.
    StrictlyTrue,
}

impl ValueConvention {
    /// The minimum ValueConvention type.
    pub const MIN: ValueConvention = ValueConvention::DontCareAsTrue;

    /// The maximum ValueConvention type.
    pub const MAX: ValueConvention = ValueConvention::StrictlyTrue;

    /// Whether an atom is read as true, given the value reported by some solver.
    pub fn holds(&self, value: IntLiteral) -> bool {
        match self {
            Self::DontCareAsTrue => value >= 0,
            Self::StrictlyTrue => value > 0,
        }
    }
}

impl std::fmt::Display for ValueConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DontCareAsTrue => write!(f, "DontCareAsTrue"),
            Self::StrictlyTrue => write!(f, "StrictlyTrue"),
        }
    }
}

impl FromStr for ValueConvention {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DontCareAsTrue" => Ok(Self::DontCareAsTrue),

            "StrictlyTrue" => Ok(Self::StrictlyTrue),

            _unkown_string => Err(ConfigError::UnknownValue),
        }
    }
}
