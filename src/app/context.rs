use crate::ports::IdentityClient;

/// Application context holding dependencies for command execution.
pub struct AppContext<C: IdentityClient> {
    identity: C,
}

impl<C: IdentityClient> AppContext<C> {
    /// Create a new application context.
    pub fn new(identity: C) -> Self {
        Self { identity }
    }

    /// Get a reference to the identity platform session.
    pub fn identity(&self) -> &C {
        &self.identity
    }
}
