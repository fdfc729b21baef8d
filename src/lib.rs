//! Backend support crate for connection freshness tracking and
//! export-version compatibility.
//!
//! Two independent components live here:
//!
//! - [`cache`]: a process-wide cache of data-source connection handles,
//!   keyed by resource identifier, with staleness decided against the
//!   resource's last-modified timestamp.
//! - [`version`]: pure comparison helpers for dotted version strings,
//!   used to gate importing documents exported by another edition of
//!   the application.
//!
//! The [`manifest`] module ties the version helpers to the header of an
//! exported document; [`config`] and [`logging`] carry the constants and
//! tracing setup used by the binary.

pub mod cache;
pub mod config;
pub mod logging;
pub mod manifest;
pub mod version;
