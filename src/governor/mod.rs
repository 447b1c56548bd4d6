/*!
A governor of resources, which converts a breach of some limit into an error.

A [ResourceGovernor] is armed with [Limits] on CPU time, memory, and the size of written files.
While armed, on unix:
- Each non-zero limit is installed as the soft resource limit (`RLIMIT_CPU`, `RLIMIT_AS`, and `RLIMIT_FSIZE`), capped at the hard limit.
- `SIGXCPU` and `SIGXFSZ` are handled by relaxing the soft limit and noting a breach, rather than ending the process.
- Allocation failure, through [GovernedAlloc], is noted as a breach of the memory limit.

A breach is never acted on where it is noted.
Instead, the breach is observed either by [terminate_requested], which is given to a solver as a terminate callback, or at a [checkpoint].
In either case, the breach is returned as a [LimitError] and propagated through `?`, and anything owned (e.g. solvers) is released on the way out.

When the governor is dropped the limits and signal handlers as they were before arming are restored, and any breach is cleared.

```rust,no_run
# use otter_prime::governor::{checkpoint, Limits, ResourceGovernor};
let limits = Limits { time: 2, memory: 0, file_size: 0 };

let governor = ResourceGovernor::arm(limits).expect("armed");
while checkpoint().is_ok() {
    // work
}
assert!(!governor.within_time_limit());
```

# Soft limits

Besides the installed limits, the CPU time limit and the memory limit are checked when polled.
As `RLIMIT_CPU` has a granularity of seconds, the polled check is usually the first to observe a breach of the time limit.
The memory limit is checked against current resident memory, so memory used and released before arming is not counted.

# Memory of a solver

[GovernedAlloc] sees only allocations made through the Rust global allocator.
A solver behind a foreign interface, e.g. an IPASIR library, allocates through its own allocator, and an allocation failure there under `RLIMIT_AS` is not recoverable from Rust.
So, [terminate_requested] interrupts a solve once the address space of the process reaches [MEMORY_HEADROOM] percent of the memory limit, before the address space limit is met.
This is a best effort: a solver which allocates a large block between polls of the callback may still exhaust the address space.

# Process-wide state

Resource limits and signal handlers belong to the process.
So, at most one governor with some non-zero limit may be armed at a time, and an attempt to arm another returns [GovernorArmed](LimitError::GovernorArmed).
A governor without limits touches no process-wide state, and any number may be armed.
*/

mod allocator;
pub use allocator::GovernedAlloc;

mod state;
pub mod usage;

#[cfg(unix)]
mod unix;
#[cfg(unix)]
use unix as sys;

#[cfg(not(unix))]
mod unsupported;
#[cfg(not(unix))]
use unsupported as sys;

use std::sync::atomic::Ordering;

use crate::{
    config::Config,
    misc::log::targets::{self},
    types::err::LimitError,
};

/// The terminate callback checks the soft limits on every `POLL_INTERVAL`th poll.
const POLL_INTERVAL: u32 = 32;

/// The percent of the memory limit at which [terminate_requested] interrupts a solve.
pub const MEMORY_HEADROOM: u64 = 90;

/// Limits on resources, with `0` for no limit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    /// Seconds of CPU time.
    pub time: u32,

    /// Megabytes of address space.
    pub memory: u32,

    /// Megabytes of written file.
    pub file_size: u32,
}

impl Limits {
    pub fn from_config(config: &Config) -> Self {
        Limits {
            time: config.time_limit.value,
            memory: config.memory_limit.value,
            file_size: config.file_size_limit.value,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.time == 0 && self.memory == 0 && self.file_size == 0
    }
}

/// An armed governor.
///
/// See the [module](crate::governor) documentation for details.
pub struct ResourceGovernor {
    limits: Limits,

    /// CPU time at arming, in seconds.
    baseline: f64,

    /// Limits and handlers to restore, if any were installed.
    installed: Option<sys::Installed>,
}

impl ResourceGovernor {
    /// Arms a governor with the given limits.
    pub fn arm(limits: Limits) -> Result<Self, LimitError> {
        let baseline = usage::cpu_time();

        if limits.is_unbounded() {
            return Ok(ResourceGovernor {
                limits,
                baseline,
                installed: None,
            });
        }

        if state::ARMED
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            log::warn!(target: targets::GOVERNOR, "Refused to arm, as some governor is armed");
            return Err(LimitError::GovernorArmed);
        }

        state::reset();
        let installed = match sys::install(&limits, baseline) {
            Ok(installed) => installed,
            Err(e) => {
                state::ARMED.store(false, Ordering::SeqCst);
                return Err(e);
            }
        };

        let cpu_deadline_ms = match limits.time {
            0 => 0,
            time => ((baseline + time as f64) * 1000.0) as u64,
        };
        state::set_soft_limits(cpu_deadline_ms, limits.memory as u64);

        log::info!(target: targets::GOVERNOR,
            "Armed with limits: time {}s, memory {}MB, file size {}MB",
            limits.time, limits.memory, limits.file_size);

        Ok(ResourceGovernor {
            limits,
            baseline,
            installed: Some(installed),
        })
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// CPU time since arming, in seconds.
    pub fn runtime(&self) -> f64 {
        usage::cpu_time() - self.baseline
    }

    /// Current resident memory, in megabytes.
    pub fn memory(&self) -> u64 {
        usage::current_memory()
    }

    pub fn within_time_limit(&self) -> bool {
        self.limits.time == 0 || self.runtime() < self.limits.time as f64
    }

    pub fn within_memory_limit(&self) -> bool {
        self.limits.memory == 0 || self.memory() < self.limits.memory as u64
    }

    pub fn within_limits(&self) -> bool {
        self.within_time_limit() && self.within_memory_limit()
    }

    /// Returns a generic error if some limit has been exceeded.
    pub fn within_limits_or_fail(&self) -> Result<(), LimitError> {
        match self.within_limits() {
            true => Ok(()),
            false => Err(LimitError::ResourceLimitExceeded),
        }
    }
}

impl Drop for ResourceGovernor {
    fn drop(&mut self) {
        if let Some(installed) = self.installed.take() {
            sys::restore(installed);
            state::reset();
            state::ARMED.store(false, Ordering::SeqCst);
            log::debug!(target: targets::GOVERNOR, "Disarmed after {:.3}s", self.runtime());
        }
    }
}

/// Whether `used` megabytes reach `percent` percent of `ceiling` megabytes, with `0` for no ceiling.
fn reaches(used: u64, ceiling: u64, percent: u64) -> bool {
    ceiling != 0 && used >= ceiling * percent / 100
}

/// How memory is measured against the memory limit.
#[derive(Clone, Copy)]
enum Measure {
    /// Current resident memory, against the limit.
    Resident,

    /// Current address space, against [MEMORY_HEADROOM] percent of the limit.
    Headroom,
}

/// The soft limit breached, if any.
fn soft_breach(measure: Measure) -> Option<state::Breach> {
    let (cpu_deadline_ms, memory_ceiling_mb) = state::soft_limits();

    if cpu_deadline_ms != 0 && (usage::cpu_time() * 1000.0) as u64 >= cpu_deadline_ms {
        return Some(state::Breach::Time);
    }

    let memory_breached = match measure {
        Measure::Resident => reaches(usage::current_memory(), memory_ceiling_mb, 100),
        Measure::Headroom => reaches(usage::address_space(), memory_ceiling_mb, MEMORY_HEADROOM),
    };
    match memory_breached {
        true => Some(state::Breach::Memory),
        false => None,
    }
}

/// Returns the breach noted since arming, if any, after checking the soft limits.
pub fn checkpoint() -> Result<(), LimitError> {
    if state::pending().is_none() {
        if let Some(breach) = soft_breach(Measure::Resident) {
            state::note(breach);
        }
    }

    match state::pending() {
        Some(breach) => {
            log::info!(target: targets::GOVERNOR, "Breach of limit: {breach:?}");
            Err(LimitError::from(breach))
        }
        None => Ok(()),
    }
}

/// Whether a solve should be interrupted, as some limit has been breached.
///
/// Intended as a terminate callback, and so the soft limits are checked only on some polls.
/// The memory limit is checked against the address space with [MEMORY_HEADROOM], to leave room for the allocations of the solver.
pub fn terminate_requested() -> bool {
    if state::pending().is_some() {
        return true;
    }
    if state::poll(POLL_INTERVAL) {
        if let Some(breach) = soft_breach(Measure::Headroom) {
            state::note(breach);
            return true;
        }
    }
    false
}
