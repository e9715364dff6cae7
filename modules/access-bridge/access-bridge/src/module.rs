//! Access bridge composition root.

use std::sync::{Arc, OnceLock};

use access_bridge_sdk::{AccessPolicy, DownloadsClient, MembershipClient};
use tracing::info;

use crate::config::AccessBridgeConfig;
use crate::domain::{LocalClient, Service};

/// Access bridge module.
///
/// Holds the single process-wide service instance. [`Self::init`] performs
/// the startup gate: unless both engine clients are present, the bridge
/// does not come up at all and the host has nothing to wire into its hook
/// points.
#[derive(Default)]
pub struct AccessBridgeModule {
    service: OnceLock<Arc<Service>>,
}

impl AccessBridgeModule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize the bridge and return the policy for the host to wire.
    ///
    /// Returns `None` when either engine client is absent. Absence is
    /// silent and leaves the integration inert. Repeated calls are
    /// idempotent and reuse the service constructed first.
    pub fn init(
        &self,
        cfg: &AccessBridgeConfig,
        membership: Option<Arc<dyn MembershipClient>>,
        downloads: Option<Arc<dyn DownloadsClient>>,
    ) -> Option<Arc<dyn AccessPolicy>> {
        let membership = membership?;
        let downloads = downloads?;

        let service = self
            .service
            .get_or_init(|| {
                let service = Service::new(membership, downloads.as_ref(), cfg);
                info!(
                    mode = ?service.mode(),
                    post_type = %service.download_post_type(),
                    "Access bridge initialized"
                );
                Arc::new(service)
            })
            .clone();

        Some(Arc::new(LocalClient::new(service)))
    }
}
