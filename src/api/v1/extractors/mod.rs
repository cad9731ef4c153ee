mod credential;

pub use credential::{AdminCredential, AdminCredentialExtractor, RequireAdminToken};
