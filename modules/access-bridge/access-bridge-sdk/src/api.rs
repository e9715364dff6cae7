//! Public policy trait for the access bridge.
//!
//! This trait defines the three operations the host wires into its hook
//! points. The gateway implementation answers them from membership state
//! queried through the engine client traits.

use async_trait::async_trait;

use crate::models::{Download, DownloadVersion, PostTypeSet, Principal};

/// Access policy the host invokes at its hook points.
///
/// The gateway module constructs a single implementation at startup and the
/// host holds it by reference; there is no dynamic lookup per call. Every
/// operation returns a plain value: failures inside the bridge are resolved
/// into a decision, never surfaced to the host.
#[async_trait]
pub trait AccessPolicy: Send + Sync {
    /// Decide whether a download may be served.
    ///
    /// Invoked by the download engine exactly once per download attempt,
    /// before streaming the file. The bridge only ever narrows access: it
    /// may flip `allowed` from `true` to `false`, never the reverse.
    ///
    /// # Arguments
    ///
    /// * `principal` - The requesting identity
    /// * `allowed` - The download engine's own prior decision
    /// * `download` - The download being requested
    /// * `version` - Concrete file version, when the engine resolved one
    ///
    /// # Returns
    ///
    /// `allowed` unchanged if the download is not members-only or the
    /// principal's membership satisfies it; `false` otherwise.
    async fn can_download(
        &self,
        principal: &Principal,
        allowed: bool,
        download: &Download,
        version: Option<&DownloadVersion>,
    ) -> bool;

    /// Add the download post type to the set eligible for the restriction
    /// metabox.
    ///
    /// Invoked by the membership engine while building its admin panel.
    /// Idempotent set union; existing entries are preserved.
    fn eligible_post_types(&self, post_types: PostTypeSet) -> PostTypeSet;

    /// Suppress the additional-options panel for download posts.
    ///
    /// Invoked by the membership engine while rendering the restriction
    /// metabox. Returns `false` when `post_type` is the download post type,
    /// otherwise passes `show` through unchanged.
    fn show_additional_options(&self, show: bool, post_type: &str) -> bool;
}
