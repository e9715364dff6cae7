//! Access Bridge Gateway Module
//!
//! Bridges the membership engine and the download engine: answers the
//! download engine's access-control hook from membership state, and wires
//! the download post type into the membership engine's restriction metabox.
//!
//! ## Architecture
//!
//! - **SDK**: [`AccessPolicy`] and engine client traits, models, errors
//! - **Gateway**: evaluation-mode strategy, domain service, composition root
//!
//! ## Evaluation modes
//!
//! Selected once at init from the membership engine's declared version:
//! engines from 2.7.0 on delegate fully to the engine's own capability
//! query, older engines fall back to coarse status flags.
//!
//! ## Startup gate
//!
//! [`AccessBridgeModule::init`] returns `None` unless both engine clients
//! are present, so a missing engine leaves the integration completely inert
//! rather than partially wired.

// Re-export SDK types
pub use access_bridge_sdk::*;

pub mod config;
#[doc(hidden)]
pub mod domain;
pub mod module;

// Re-export module for registration
pub use module::AccessBridgeModule;
