//! Limits, through `setrlimit`, and signal handlers, through `sigaction`.
//!
//! Handlers do nothing but relax the soft limit to the hard limit and note a breach.
//! Relaxing the limit first ensures the process has room to unwind, and is not sent the signal again.

use std::ffi::c_int;

use crate::{
    governor::{
        state::{self, Breach},
        Limits,
    },
    misc::log::targets::{self},
    types::err::LimitError,
};

#[cfg(all(target_os = "linux", any(target_env = "gnu", target_env = "uclibc")))]
type Resource = libc::__rlimit_resource_t;

#[cfg(not(all(target_os = "linux", any(target_env = "gnu", target_env = "uclibc"))))]
type Resource = c_int;

type Handler = extern "C" fn(c_int);

/// A limit, and perhaps a signal handler, as they were before arming.
struct Saved {
    resource: Resource,
    limit: libc::rlimit,
    action: Option<(c_int, libc::sigaction)>,
}

/// Everything installed when arming, to be restored when disarming.
pub struct Installed {
    saved: Vec<Saved>,
}

fn get_limit(resource: Resource) -> Option<libc::rlimit> {
    let mut limit = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    match unsafe { libc::getrlimit(resource, &mut limit) } {
        0 => Some(limit),
        _ => None,
    }
}

fn set_limit(resource: Resource, limit: &libc::rlimit) -> bool {
    unsafe { libc::setrlimit(resource, limit) == 0 }
}

/// Raises the soft limit of the resource to the hard limit.
fn relax(resource: Resource) {
    if let Some(mut limit) = get_limit(resource) {
        limit.rlim_cur = limit.rlim_max;
        set_limit(resource, &limit);
    }
}

/// Relaxes the address space limit, to allow an allocation to be retried.
pub fn relax_memory() {
    relax(libc::RLIMIT_AS);
}

extern "C" fn on_cpu_exceeded(_signal: c_int) {
    relax(libc::RLIMIT_CPU);
    state::note(Breach::Time);
}

extern "C" fn on_file_size_exceeded(_signal: c_int) {
    relax(libc::RLIMIT_FSIZE);
    state::note(Breach::FileSize);
}

/// Installs the handler for the signal, returning the previous action.
fn install_handler(signal: c_int, handler: Handler) -> Option<libc::sigaction> {
    unsafe {
        let mut action: libc::sigaction = std::mem::zeroed();
        action.sa_sigaction = handler as libc::sighandler_t;
        action.sa_flags = libc::SA_RESTART;
        libc::sigemptyset(&mut action.sa_mask);

        let mut previous: libc::sigaction = std::mem::zeroed();
        match libc::sigaction(signal, &action, &mut previous) {
            0 => Some(previous),
            _ => None,
        }
    }
}

/// Lowers the soft limit of the resource to `ceiling`, capped at the hard limit.
///
/// A limit which cannot be read cannot be restored, and so is unsupported.
/// Failure to set the limit is logged, and the limit is left as it was.
fn lower(
    resource: Resource,
    name: &str,
    ceiling: libc::rlim_t,
    signal: Option<(c_int, Handler)>,
) -> Result<Saved, LimitError> {
    let Some(previous) = get_limit(resource) else {
        log::warn!(target: targets::GOVERNOR, "Failed to read the {name} limit");
        return Err(LimitError::ResourceLimitsUnsupported);
    };

    let limit = libc::rlimit {
        rlim_cur: ceiling.min(previous.rlim_max),
        rlim_max: previous.rlim_max,
    };

    let action = match signal {
        Some((signal, handler)) => match install_handler(signal, handler) {
            Some(previous_action) => Some((signal, previous_action)),
            None => {
                log::warn!(target: targets::GOVERNOR, "Failed to handle the signal for the {name} limit");
                return Err(LimitError::ResourceLimitsUnsupported);
            }
        },
        None => None,
    };

    if !set_limit(resource, &limit) {
        log::warn!(target: targets::GOVERNOR, "Failed to set the {name} limit to {}", limit.rlim_cur);
    }
    log::trace!(target: targets::GOVERNOR, "The {name} limit is {}", limit.rlim_cur);

    Ok(Saved {
        resource,
        limit: previous,
        action,
    })
}

/// Installs a limit for each non-zero limit.
///
/// The CPU limit is relative to `baseline`, the CPU time (in seconds) used before arming.
pub fn install(limits: &Limits, baseline: f64) -> Result<Installed, LimitError> {
    let mut installed = Installed { saved: Vec::new() };

    let requests: [(Resource, &str, u32, libc::rlim_t, Option<(c_int, Handler)>); 3] = [
        (
            libc::RLIMIT_CPU,
            "CPU",
            limits.time,
            (baseline + limits.time as f64).ceil() as libc::rlim_t,
            Some((libc::SIGXCPU, on_cpu_exceeded as Handler)),
        ),
        (
            libc::RLIMIT_AS,
            "address space",
            limits.memory,
            (limits.memory as libc::rlim_t) << 20,
            None,
        ),
        (
            libc::RLIMIT_FSIZE,
            "file size",
            limits.file_size,
            (limits.file_size as libc::rlim_t) << 20,
            Some((libc::SIGXFSZ, on_file_size_exceeded as Handler)),
        ),
    ];

    for (resource, name, requested, ceiling, signal) in requests {
        if requested == 0 {
            continue;
        }
        match lower(resource, name, ceiling, signal) {
            Ok(saved) => installed.saved.push(saved),
            Err(e) => {
                restore(installed);
                return Err(e);
            }
        }
    }

    if limits.memory != 0 {
        state::MEMORY_HOOK.store(true, std::sync::atomic::Ordering::SeqCst);
    }

    Ok(installed)
}

/// Restores each limit and signal action to the state before arming.
pub fn restore(installed: Installed) {
    state::MEMORY_HOOK.store(false, std::sync::atomic::Ordering::SeqCst);

    for saved in installed.saved.into_iter().rev() {
        if !set_limit(saved.resource, &saved.limit) {
            log::warn!(target: targets::GOVERNOR, "Failed to restore a limit");
        }
        if let Some((signal, action)) = saved.action {
            unsafe { libc::sigaction(signal, &action, std::ptr::null_mut()) };
        }
    }
}
