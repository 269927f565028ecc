//! PrimeFactor version information.
//!
//! The version is a single constant so the CLI banner and any other reporting path agree on the same value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time and is read-only for the
//!   lifetime of the process.
//! - Prefer this constant over repeating `env!("CARGO_PKG_VERSION")` in multiple places.

/// The PrimeFactor version string (for example, `0.3.0`).
pub const PRIMEFACTOR_VERSION: &str = env!("CARGO_PKG_VERSION");
