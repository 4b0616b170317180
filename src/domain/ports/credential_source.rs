//! Credential source port.

/// Supplies the upstream API credential.
///
/// Consulted on every cache miss; cache hits never read it.
pub trait CredentialSource: Send + Sync {
    /// The credential, or `None` when it is not configured.
    fn api_key(&self) -> Option<String>;
}
