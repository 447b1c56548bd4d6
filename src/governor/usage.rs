//! Usage of resources by the process.
//!
//! CPU time is the sum of user and system time.
//! Memory is in whole megabytes.

#[cfg(unix)]
fn rusage() -> Option<libc::rusage> {
    let mut usage = std::mem::MaybeUninit::<libc::rusage>::zeroed();
    match unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) } {
        0 => Some(unsafe { usage.assume_init() }),
        _ => None,
    }
}

#[cfg(unix)]
fn seconds(time: libc::timeval) -> f64 {
    time.tv_sec as f64 + (time.tv_usec as f64 / 1_000_000.0)
}

/// CPU time used by the process, in seconds.
#[cfg(unix)]
pub fn cpu_time() -> f64 {
    match rusage() {
        Some(usage) => seconds(usage.ru_utime) + seconds(usage.ru_stime),
        None => 0.0,
    }
}

/// CPU time used by the process, in seconds.
///
/// Without `getrusage`, this is time elapsed since the first call.
#[cfg(not(unix))]
pub fn cpu_time() -> f64 {
    static START: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();
    START
        .get_or_init(std::time::Instant::now)
        .elapsed()
        .as_secs_f64()
}

/// Peak resident memory of the process, in megabytes.
#[cfg(unix)]
pub fn peak_memory() -> u64 {
    let max_rss = match rusage() {
        Some(usage) => usage.ru_maxrss.max(0) as u64,
        None => return 0,
    };

    // Kilobytes on Linux, bytes on macOS.
    if cfg!(target_vendor = "apple") {
        max_rss >> 20
    } else {
        max_rss >> 10
    }
}

#[cfg(not(unix))]
pub fn peak_memory() -> u64 {
    0
}

/// The field of `/proc/self/statm` at `index`, in megabytes.
#[cfg(target_os = "linux")]
fn statm(index: usize) -> Option<u64> {
    let pages = std::fs::read_to_string("/proc/self/statm")
        .ok()?
        .split_whitespace()
        .nth(index)?
        .parse::<u64>()
        .ok()?;
    let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) }.max(0) as u64;
    Some((pages * page_size) >> 20)
}

/// Current resident memory of the process, in megabytes.
///
/// Where the current resident memory is not available the peak resident memory is used.
#[cfg(target_os = "linux")]
pub fn current_memory() -> u64 {
    statm(1).unwrap_or_else(peak_memory)
}

#[cfg(not(target_os = "linux"))]
pub fn current_memory() -> u64 {
    peak_memory()
}

/// Current address space (virtual memory) of the process, in megabytes.
///
/// Where the address space is not available the current resident memory is used.
#[cfg(target_os = "linux")]
pub fn address_space() -> u64 {
    statm(0).unwrap_or_else(current_memory)
}

#[cfg(not(target_os = "linux"))]
pub fn address_space() -> u64 {
    current_memory()
}

/// Wall-clock time, in seconds since the unix epoch.
pub fn wallclock() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or(0.0)
}
