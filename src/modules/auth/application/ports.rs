use async_trait::async_trait;
use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// Outgoing: token issuance / verification
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
    pub token_type: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("failed to issue token: {0}")]
    Issuance(String),

    #[error("invalid or expired token")]
    Invalid,
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<Claims, TokenError>;
    fn access_token_expiry(&self) -> i64;
}

//
// ──────────────────────────────────────────────────────────
// Outgoing: password comparison
// ──────────────────────────────────────────────────────────
//

pub trait PasswordVerifier: Send + Sync {
    /// Compares a plaintext candidate against a stored hash. A broken hash
    /// counts as a failed match, not an error surface of its own.
    fn verify(&self, candidate: &str, stored_hash: &str) -> bool;
}

//
// ──────────────────────────────────────────────────────────
// Incoming: login
// ──────────────────────────────────────────────────────────
//

/// The single admin identity, loaded from the environment at startup.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    pub token: String,
    pub expires_in: i64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("token issuance failed: {0}")]
    TokenFailure(String),
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<LoginResult, LoginError>;
}
