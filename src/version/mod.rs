//! Version comparison helpers for import/export compatibility
//!
//! All functions here are pure and lenient: malformed input never raises, it
//! either degrades to zero-valued segments or reports `None`.
//!
//! # Modules
//!
//! - [`compare`]: lightweight ≥ comparison over dotted version strings
//! - [`semver`]: coercion of loose version strings and the compatibility gate

pub mod compare;
pub mod semver;

pub use compare::version_ge;
pub use semver::{coerce_version, is_compatible, normalize_version};
