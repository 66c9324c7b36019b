//! Stack growth guard for recursive descent.
//!
//! The declaration grammar nests pointer types without bound
//! (`ptr ptr ptr ... integer`), and each level is one native call frame in
//! the symbol-table builder. Wrapping the recursive step in
//! [`ensure_sufficient_stack`] keeps arbitrarily long chains from
//! overflowing the thread's stack.
//!
//! On native targets the stack is grown with `stacker`; on `wasm32` the
//! closure runs directly.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the red zone.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
