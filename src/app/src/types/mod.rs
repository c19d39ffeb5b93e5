//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - scan: scan snapshot and station status types
//! - connect: station connect request and attempt state
//! - ap: access point configuration types
//! - common: action lifecycle, status messages and API failures

pub mod ap;
pub mod common;
pub mod connect;
pub mod scan;

pub use ap::*;
pub use common::*;
pub use connect::*;
pub use scan::*;
