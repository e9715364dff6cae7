//! Domain service for the access bridge gateway.
//!
//! The service is a stateless predicate over engine snapshots: mode, post
//! type, and the unresolvable-download policy are fixed at construction,
//! and each decision performs at most one membership-engine query.

use std::sync::Arc;

use access_bridge_sdk::{
    Download, DownloadVersion, DownloadsClient, MembershipClient, MembershipStatus, PostTypeSet,
    Principal,
};
use tracing::warn;

use crate::config::{AccessBridgeConfig, UnresolvableDownloads};

use super::error::DomainError;
use super::strategy::EvaluationMode;

/// Access bridge service.
///
/// Answers the download guard hook and the two metabox filters.
pub struct Service {
    membership: Arc<dyn MembershipClient>,
    mode: EvaluationMode,
    download_post_type: String,
    unresolvable_downloads: UnresolvableDownloads,
}

impl Service {
    /// Creates a new service bound to the present engines.
    ///
    /// The evaluation mode is derived from the membership engine's declared
    /// version here, once, and holds for the life of the process.
    #[must_use]
    pub fn new(
        membership: Arc<dyn MembershipClient>,
        downloads: &dyn DownloadsClient,
        cfg: &AccessBridgeConfig,
    ) -> Self {
        let mode = EvaluationMode::for_engine_version(&membership.engine_version());
        let download_post_type = downloads.download_post_type().to_owned();
        Self {
            membership,
            mode,
            download_post_type,
            unresolvable_downloads: cfg.unresolvable_downloads,
        }
    }

    /// The evaluation mode selected at construction.
    #[must_use]
    pub fn mode(&self) -> EvaluationMode {
        self.mode
    }

    /// The download engine's post type.
    #[must_use]
    pub fn download_post_type(&self) -> &str {
        &self.download_post_type
    }

    /// Decide whether a download may be served.
    ///
    /// Narrowing only: `allowed` can flip `true -> false`, never back. Any
    /// evaluation failure on a restricted download resolves to a deny.
    #[tracing::instrument(skip_all, fields(
        download_id = ?download.id,
        version = version.map(|v| v.version.as_str())
    ))]
    pub async fn can_download(
        &self,
        principal: &Principal,
        allowed: bool,
        download: &Download,
        version: Option<&DownloadVersion>,
    ) -> bool {
        match self.evaluate(principal, allowed, download).await {
            Ok(decision) => decision,
            Err(error) => {
                warn!(
                    download_id = ?download.id,
                    slug = download.slug.as_deref(),
                    error = %error,
                    "Denying restricted download after evaluation failure"
                );
                false
            }
        }
    }

    async fn evaluate(
        &self,
        principal: &Principal,
        allowed: bool,
        download: &Download,
    ) -> Result<bool, DomainError> {
        if !download.members_only {
            return Ok(allowed);
        }

        match self.mode {
            EvaluationMode::StatusFlags => {
                let status = self.membership.member_status(principal).await?;
                match status {
                    MembershipStatus::Active | MembershipStatus::Free => Ok(allowed),
                    _ => Ok(false),
                }
            }
            EvaluationMode::Capability => {
                let Some(content) = download.id else {
                    return self.unresolvable(allowed, download);
                };
                if self.membership.can_access(principal, content).await? {
                    Ok(allowed)
                } else {
                    Ok(false)
                }
            }
        }
    }

    /// Applies the configured policy for downloads the membership engine
    /// cannot identify.
    fn unresolvable(&self, allowed: bool, download: &Download) -> Result<bool, DomainError> {
        match self.unresolvable_downloads {
            UnresolvableDownloads::Allow => {
                warn!(
                    slug = download.slug.as_deref(),
                    "Download has no resolvable identifier, passing prior decision through"
                );
                Ok(allowed)
            }
            UnresolvableDownloads::Deny => Err(DomainError::UnresolvableDownload),
        }
    }

    /// Adds the download post type to the metabox-eligible set.
    ///
    /// Idempotent union; existing entries are preserved.
    pub fn eligible_post_types(&self, mut post_types: PostTypeSet) -> PostTypeSet {
        post_types.insert(self.download_post_type.clone());
        post_types
    }

    /// Suppresses the additional-options panel for download posts.
    pub fn show_additional_options(&self, show: bool, post_type: &str) -> bool {
        if post_type == self.download_post_type {
            false
        } else {
            show
        }
    }
}
