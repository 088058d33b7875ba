//! Store types for UI state management
//!
//! Plain state structs owned by the application controller and passed to
//! the pure views as immutable snapshots. Only the controller mutates them.

pub mod gallery;
pub mod importer;

pub use gallery::*;
pub use importer::*;
