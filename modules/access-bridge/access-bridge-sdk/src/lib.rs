//! Access Bridge SDK
//!
//! This crate provides the public API for the `access_bridge` module:
//!
//! - [`AccessPolicy`] - The policy trait the host wires into its hook points
//! - [`MembershipClient`] - Membership engine client trait for implementations
//! - [`DownloadsClient`] - Download engine client trait for implementations
//! - Domain models for principals, downloads, and membership status
//! - [`AccessBridgeError`] - Error types
//!
//! ## Usage
//!
//! The host constructs the bridge through the gateway module and holds the
//! returned policy by reference:
//!
//! ```ignore
//! use access_bridge_sdk::AccessPolicy;
//!
//! // Obtained from AccessBridgeModule::init(...) when both engines are present
//! let policy: Arc<dyn AccessPolicy> = bridge;
//!
//! // Download pipeline, once per download attempt
//! let allowed = policy.can_download(&principal, allowed, &download, None).await;
//!
//! // Admin metabox wiring
//! let post_types = policy.eligible_post_types(post_types);
//! let show = policy.show_additional_options(show, &post_type);
//! ```
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;
pub mod plugin_downloads;
pub mod plugin_membership;

// Re-export main types at crate root
pub use api::AccessPolicy;
pub use error::AccessBridgeError;
pub use models::{
    ContentId, DOWNLOAD_POST_TYPE, Download, DownloadVersion, MemberId, MembershipStatus,
    PostTypeSet, Principal,
};
pub use plugin_downloads::DownloadsClient;
pub use plugin_membership::MembershipClient;
