//! Tabula IR - shared vocabulary types.
//!
//! This crate contains the data structures every phase agrees on:
//! - Spans and row/column positions for source locations
//! - Token kinds, their fieldless tags, and tokens
//!
//! Scanner, predictive parser and symbol-table builder depend on this crate
//! but never on each other's internals.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::{Position, Span};
pub use token::{Token, TokenKind, TokenTag};
