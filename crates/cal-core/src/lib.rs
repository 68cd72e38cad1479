//! # cal-core
//!
//! Core type aliases and error definitions for calendario.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace: the error hierarchy, the `ensure!` macro, and
//! the primitive aliases used in date arithmetic.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A proleptic-Gregorian calendar year (astronomical numbering, so year 0
/// exists and precedes year 1).
pub type Year = i32;

/// A signed count of calendar days.
pub type Days = i64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
