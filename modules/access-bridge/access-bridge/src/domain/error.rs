//! Domain errors for the access bridge gateway.

use access_bridge_sdk::AccessBridgeError;
use thiserror::Error;

/// Domain-level errors raised while evaluating an access decision.
///
/// These never reach the host: the service resolves every failure into a
/// deny before answering the hook.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The download carries no identifier the membership engine could resolve
    #[error("Download has no resolvable identifier")]
    UnresolvableDownload,

    /// Engine query failed
    #[error(transparent)]
    Engine(#[from] AccessBridgeError),
}
