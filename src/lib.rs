//! ONTAP configuration modules
//!
//! Idempotent modules for an automation engine that manage the cluster
//! configuration backup destination and the cluster-wide LLDP option
//! through the ONTAP management API.

pub mod api;
pub mod error;
pub mod modules;
pub mod params;
pub mod reconcilers;

pub use error::{Error, Result};
