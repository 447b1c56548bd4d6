//! Process-wide state of the governor.
//!
//! Everything here is read and written from signal handlers and the allocator, so everything here is an atomic.

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, AtomicU8, Ordering};

use crate::types::err::LimitError;

/// Whether some governor with limits is armed.
pub static ARMED: AtomicBool = AtomicBool::new(false);

/// Whether the allocator should note exhaustion as a breach of the memory limit.
pub static MEMORY_HOOK: AtomicBool = AtomicBool::new(false);

/// The first breach noted since arming, as a [Breach], or `0`.
static BREACH: AtomicU8 = AtomicU8::new(0);

/// CPU time, in milliseconds, at which the time limit is breached, or `0`.
static CPU_DEADLINE: AtomicU64 = AtomicU64::new(0);

/// The memory limit, in megabytes, or `0`.
static MEMORY_CEILING: AtomicU64 = AtomicU64::new(0);

/// A count of polls of the terminate callback.
static POLLS: AtomicU32 = AtomicU32::new(0);

/// A breach of some limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Breach {
    Time = 1,
    Memory = 2,
    FileSize = 3,
}

impl From<Breach> for LimitError {
    fn from(value: Breach) -> Self {
        match value {
            Breach::Time => LimitError::TimeLimitExceeded,
            Breach::Memory => LimitError::MemoryLimitExceeded,
            Breach::FileSize => LimitError::FileSizeLimitExceeded,
        }
    }
}

/// Notes a breach, unless some other breach has already been noted.
pub fn note(breach: Breach) {
    let _ = BREACH.compare_exchange(0, breach as u8, Ordering::SeqCst, Ordering::SeqCst);
}

/// The breach noted since arming, if any.
pub fn pending() -> Option<Breach> {
    match BREACH.load(Ordering::SeqCst) {
        1 => Some(Breach::Time),
        2 => Some(Breach::Memory),
        3 => Some(Breach::FileSize),
        _ => None,
    }
}

/// Sets the soft limits checked when polled, with `0` for no limit.
pub fn set_soft_limits(cpu_deadline_ms: u64, memory_ceiling_mb: u64) {
    CPU_DEADLINE.store(cpu_deadline_ms, Ordering::SeqCst);
    MEMORY_CEILING.store(memory_ceiling_mb, Ordering::SeqCst);
    POLLS.store(0, Ordering::SeqCst);
}

/// The soft limits, as set by [set_soft_limits].
pub fn soft_limits() -> (u64, u64) {
    (
        CPU_DEADLINE.load(Ordering::Relaxed),
        MEMORY_CEILING.load(Ordering::Relaxed),
    )
}

/// Counts a poll, and returns true for every `interval`th poll.
pub fn poll(interval: u32) -> bool {
    POLLS.fetch_add(1, Ordering::Relaxed) % interval == 0
}

/// Clears any breach and soft limit.
pub fn reset() {
    BREACH.store(0, Ordering::SeqCst);
    set_soft_limits(0, 0);
}
