use async_trait::async_trait;

/// The authenticated caller, as issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
}

impl Identity {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// Resolves the identity behind the current call, if any.
///
/// This is the seam to the external identity provider; the service only ever
/// asks "who is calling", never how they proved it.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn current_identity(&self) -> Option<Identity>;
}

/// Fixed-identity authenticator for the CLI and tests.
#[derive(Debug, Default)]
pub struct StaticAuthenticator {
    identity: Option<Identity>,
}

impl StaticAuthenticator {
    /// Authenticate every call as the given user.
    pub fn user(user_id: impl Into<String>) -> Self {
        Self {
            identity: Some(Identity::new(user_id)),
        }
    }

    /// Authenticate no calls.
    pub fn anonymous() -> Self {
        Self { identity: None }
    }
}

#[async_trait]
impl Authenticator for StaticAuthenticator {
    async fn current_identity(&self) -> Option<Identity> {
        self.identity.clone()
    }
}
