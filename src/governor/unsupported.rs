//! Platforms without resource limits.
//!
//! No limit can be installed, though a governor without limits may still be armed.

use crate::{governor::Limits, types::err::LimitError};

pub struct Installed;

pub fn install(_limits: &Limits, _baseline: f64) -> Result<Installed, LimitError> {
    Err(LimitError::ResourceLimitsUnsupported)
}

pub fn restore(_installed: Installed) {}

pub fn relax_memory() {}
