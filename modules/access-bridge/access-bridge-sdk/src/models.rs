//! Domain models for the access bridge.
//!
//! All of these entities are owned and persisted by the external engines;
//! the bridge only reads snapshots of them at decision time.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a member account in the membership engine.
pub type MemberId = Uuid;

/// Unique identifier for a content item as known to both engines.
pub type ContentId = Uuid;

/// Post type under which the download engine stores its downloads.
pub const DOWNLOAD_POST_TYPE: &str = "dlm_download";

/// Set of post types eligible for the membership engine's restriction metabox.
pub type PostTypeSet = HashSet<String>;

/// The requesting identity.
///
/// A principal is created by the host's authentication layer and is read-only
/// to the bridge. Membership status is not stored here; it is resolved through
/// [`crate::MembershipClient`] at decision time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Member account, `None` for anonymous visitors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<MemberId>,
}

impl Principal {
    /// An unauthenticated visitor with no member account.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { member: None }
    }

    /// An authenticated principal bound to a member account.
    #[must_use]
    pub const fn member(id: MemberId) -> Self {
        Self { member: Some(id) }
    }

    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        self.member.is_none()
    }
}

/// Membership lifecycle status as classified by the membership engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    /// Paid membership in good standing.
    Active,
    /// Free-tier membership.
    Free,
    /// Signed up, payment not yet confirmed.
    Pending,
    /// Paid membership that has lapsed.
    Expired,
    /// Membership cancelled by the member or an admin.
    Cancelled,
    /// No membership record at all (includes anonymous visitors).
    #[default]
    None,
}

impl MembershipStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Free => "free",
            Self::Pending => "pending",
            Self::Expired => "expired",
            Self::Cancelled => "cancelled",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A downloadable file as presented to the guard hook.
///
/// `id` is `None` when the download engine could not resolve a stable
/// identifier for the underlying post; how the bridge treats that case is
/// governed by gateway configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Download {
    /// Stable content identifier, resolvable against the membership engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ContentId>,
    /// URL slug, for diagnostics only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Whether content authors flagged this download as members-only.
    pub members_only: bool,
}

impl Download {
    /// A resolvable download with the given restriction flag.
    #[must_use]
    pub fn new(id: ContentId, members_only: bool) -> Self {
        Self {
            id: Some(id),
            slug: None,
            members_only,
        }
    }
}

/// A concrete file version attached to a download.
///
/// Passed alongside the download in the guard hook; the decision never
/// depends on it, it only feeds diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadVersion {
    /// Version record identifier.
    pub id: ContentId,
    /// Human-readable version label, e.g. `"1.4.2"`.
    pub version: String,
}
