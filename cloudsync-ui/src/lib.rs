//! cloudsync-ui - Shared UI types and components for CloudSync
//!
//! Contains display types, stores, and pure view components used by the
//! web front end. Nothing in this crate performs network I/O; views receive
//! state snapshots and report intents through callbacks.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
