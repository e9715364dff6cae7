//! Local client implementation of the policy API.

use std::sync::Arc;

use access_bridge_sdk::{AccessPolicy, Download, DownloadVersion, PostTypeSet, Principal};
use async_trait::async_trait;

use super::service::Service;

/// Local implementation of the access policy.
///
/// This adapter wraps the domain service and implements the SDK trait the
/// host holds by reference at its hook points.
pub struct LocalClient {
    service: Arc<Service>,
}

impl LocalClient {
    /// Create a new local client wrapping the service.
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl AccessPolicy for LocalClient {
    async fn can_download(
        &self,
        principal: &Principal,
        allowed: bool,
        download: &Download,
        version: Option<&DownloadVersion>,
    ) -> bool {
        self.service
            .can_download(principal, allowed, download, version)
            .await
    }

    fn eligible_post_types(&self, post_types: PostTypeSet) -> PostTypeSet {
        self.service.eligible_post_types(post_types)
    }

    fn show_additional_options(&self, show: bool, post_type: &str) -> bool {
        self.service.show_additional_options(show, post_type)
    }
}
