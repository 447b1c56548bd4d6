//! An allocator which notes exhaustion of the address space as a breach of the memory limit.
//!
//! Installed as the global allocator of a program, for example:
//!
//! ```rust
//! use otter_prime::governor::GovernedAlloc;
//!
//! #[global_allocator]
//! static ALLOCATOR: GovernedAlloc<std::alloc::System> = GovernedAlloc::new(std::alloc::System);
//! # fn main() {}
//! ```
//!
//! When a governor with a memory limit is armed and an allocation fails, the address space limit is relaxed, the breach is noted, and the allocation is retried once.
//! The breach is then returned at the next [checkpoint](crate::governor::checkpoint).
//!
//! Otherwise, allocation is passed through to the wrapped allocator.

use std::{
    alloc::{GlobalAlloc, Layout},
    sync::atomic::Ordering,
};

use crate::governor::{
    state::{self, Breach},
    sys,
};

/// A wrapper around some allocator.
pub struct GovernedAlloc<A> {
    inner: A,
}

impl<A> GovernedAlloc<A> {
    pub const fn new(inner: A) -> Self {
        GovernedAlloc { inner }
    }
}

/// Notes exhaustion, and returns whether the allocation should be retried.
fn exhausted() -> bool {
    if !state::MEMORY_HOOK.load(Ordering::SeqCst) {
        return false;
    }
    sys::relax_memory();
    state::note(Breach::Memory);
    true
}

unsafe impl<A: GlobalAlloc> GlobalAlloc for GovernedAlloc<A> {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = self.inner.alloc(layout);
        if ptr.is_null() && exhausted() {
            return self.inner.alloc(layout);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = self.inner.alloc_zeroed(layout);
        if ptr.is_null() && exhausted() {
            return self.inner.alloc_zeroed(layout);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        self.inner.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = self.inner.realloc(ptr, layout, new_size);
        if new_ptr.is_null() && exhausted() {
            return self.inner.realloc(ptr, layout, new_size);
        }
        new_ptr
    }
}
