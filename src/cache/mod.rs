//! Connection freshness cache
//!
//! A process-wide mapping from a resource identifier to a cached connection
//! handle plus the timestamp at which it was cached. A handle is served only
//! while the underlying resource has not been modified since the entry was
//! created; otherwise the lookup reports a miss.
//!
//! # Modules
//!
//! - [`clock`]: time source abstraction so tests can pin the clock
//! - [`connection`]: the cache itself

pub mod clock;
pub mod connection;

pub use clock::{Clock, SystemClock};
pub use connection::ConnectionCache;
