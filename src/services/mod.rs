pub mod credential_service;
pub use credential_service::{AuthError, CredentialService, LoginResult};

pub mod credential_service_impl;
pub use credential_service_impl::JwtCredentialService;

pub mod token;
pub use token::{Claims, TokenCodec};
