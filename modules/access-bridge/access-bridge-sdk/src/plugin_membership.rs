//! Membership engine client trait.
//!
//! This trait is the bridge's only view of the membership engine. The host
//! provides an implementation backed by whatever the engine exposes; the
//! bridge treats the engine as the system of record and never caches its
//! answers.

use async_trait::async_trait;

use crate::error::AccessBridgeError;
use crate::models::{ContentId, MembershipStatus, Principal};

/// Client for the external membership engine.
///
/// Implementations must be cheap to query per request; the bridge performs
/// at most one call per access decision.
#[async_trait]
pub trait MembershipClient: Send + Sync {
    /// The engine's declared semantic version.
    ///
    /// Used once at startup to select the evaluation mode; must be
    /// deterministic and side-effect-free.
    fn engine_version(&self) -> semver::Version;

    /// Resolve the principal's current membership status.
    ///
    /// Anonymous principals resolve to [`MembershipStatus::None`].
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is unavailable or the member record
    /// cannot be read.
    async fn member_status(
        &self,
        principal: &Principal,
    ) -> Result<MembershipStatus, AccessBridgeError>;

    /// Ask the engine whether the principal may access the given content.
    ///
    /// This is the authoritative per-member/per-content check introduced in
    /// engine version 2.7.0; it covers tiers, grace periods, per-content
    /// overrides, and role exceptions. Engines must answer `true` for
    /// content they do not restrict.
    ///
    /// # Errors
    ///
    /// Returns [`AccessBridgeError::CapabilityUnsupported`] when the engine
    /// predates the capability API, or an engine error if the query fails.
    async fn can_access(
        &self,
        principal: &Principal,
        content: ContentId,
    ) -> Result<bool, AccessBridgeError>;
}
