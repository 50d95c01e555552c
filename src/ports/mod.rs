mod identity_client;

pub use identity_client::IdentityClient;
