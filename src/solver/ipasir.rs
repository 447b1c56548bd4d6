//! A binding to a library implementing the IPASIR API.
//!
//! The library is linked by name, as `ipasir`.
//! For example, when building against CaDiCaL, the static library `libcadical.a` may be copied (or linked) to `libipasir.a` and placed on the library search path.
//!
//! Information about the API may be found at <https://github.com/biotomas/ipasir>.

use std::{
    ffi::{c_char, c_int, c_void, CStr},
    ptr::NonNull,
};

use crate::{
    misc::log::targets::{self},
    reports::Report,
    solver::IncrementalSolver,
    structures::{atom::Atom, literal::IntLiteral},
    types::err::{ErrorKind, SolverError},
};

#[link(name = "ipasir")]
extern "C" {
    fn ipasir_signature() -> *const c_char;
    fn ipasir_init() -> *mut c_void;
    fn ipasir_release(solver: *mut c_void);
    fn ipasir_add(solver: *mut c_void, lit_or_zero: i32);
    fn ipasir_assume(solver: *mut c_void, lit: i32);
    fn ipasir_solve(solver: *mut c_void) -> c_int;
    fn ipasir_val(solver: *mut c_void, lit: i32) -> i32;
    fn ipasir_set_terminate(
        solver: *mut c_void,
        data: *mut c_void,
        terminate: Option<extern "C" fn(data: *mut c_void) -> c_int>,
    );
}

/// The signature of the linked library.
pub fn signature() -> String {
    // Safety: the API requires a null terminated string.
    unsafe {
        let signature = ipasir_signature();
        match signature.is_null() {
            true => String::new(),
            false => CStr::from_ptr(signature).to_string_lossy().into_owned(),
        }
    }
}

/// An instance of a solver from the linked library.
///
/// The instance is released when dropped.
pub struct IpasirSolver {
    handle: NonNull<c_void>,
}

/// Calls the callback passed as data.
///
/// The data of the callback is always a `fn() -> bool`, as set by [set_terminate](IncrementalSolver::set_terminate).
extern "C" fn terminate_trampoline(data: *mut c_void) -> c_int {
    let callback: fn() -> bool = unsafe { std::mem::transmute::<*mut c_void, fn() -> bool>(data) };
    callback() as c_int
}

impl IncrementalSolver for IpasirSolver {
    fn init() -> Result<Self, ErrorKind> {
        let handle = unsafe { ipasir_init() };
        match NonNull::new(handle) {
            Some(handle) => {
                log::trace!(target: targets::SOLVER, "Initialised {}", signature());
                Ok(IpasirSolver { handle })
            }
            None => Err(ErrorKind::from(SolverError::Initialisation)),
        }
    }

    fn add(&mut self, literal_or_zero: IntLiteral) {
        unsafe { ipasir_add(self.handle.as_ptr(), literal_or_zero) }
    }

    fn assume(&mut self, literal: IntLiteral) {
        unsafe { ipasir_assume(self.handle.as_ptr(), literal) }
    }

    fn solve(&mut self) -> Report {
        Report::from(unsafe { ipasir_solve(self.handle.as_ptr()) })
    }

    fn val(&self, atom: Atom) -> IntLiteral {
        unsafe { ipasir_val(self.handle.as_ptr(), atom as IntLiteral) }
    }

    fn set_terminate(&mut self, callback: Option<fn() -> bool>) {
        unsafe {
            match callback {
                Some(callback) => ipasir_set_terminate(
                    self.handle.as_ptr(),
                    callback as *mut c_void,
                    Some(terminate_trampoline),
                ),
                None => ipasir_set_terminate(self.handle.as_ptr(), std::ptr::null_mut(), None),
            }
        }
    }
}

impl Drop for IpasirSolver {
    fn drop(&mut self) {
        unsafe { ipasir_release(self.handle.as_ptr()) };
        log::trace!(target: targets::SOLVER, "Released");
    }
}
