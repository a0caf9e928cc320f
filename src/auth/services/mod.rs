//! Orchestration services for authentication.

mod authentication;

pub use authentication::{
    AuthResult, AuthService, AuthServiceError, CredentialFailure, LoginRequest, RegisterRequest,
};
