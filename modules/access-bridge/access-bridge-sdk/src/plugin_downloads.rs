//! Download engine client trait.
//!
//! The download engine hands the bridge complete [`crate::Download`]
//! snapshots through the guard hook, so this client only exposes the static
//! facts the bridge needs for its admin-UI wiring. Its presence doubles as
//! the startup probe for the engine.

/// Client for the external download engine.
pub trait DownloadsClient: Send + Sync {
    /// Post type under which the engine stores its downloads.
    ///
    /// Stock engines return [`crate::DOWNLOAD_POST_TYPE`]; white-label
    /// builds may register a different one.
    fn download_post_type(&self) -> &str;
}
