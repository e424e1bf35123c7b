use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::ports::{
    AdminCredentials, LoginCommand, LoginError, LoginResult, LoginUseCase, PasswordVerifier,
    TokenProvider,
};

pub struct LoginService {
    credentials: AdminCredentials,
    verifier: Arc<dyn PasswordVerifier>,
    tokens: Arc<dyn TokenProvider>,
}

impl LoginService {
    pub fn new(
        credentials: AdminCredentials,
        verifier: Arc<dyn PasswordVerifier>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            credentials,
            verifier,
            tokens,
        }
    }
}

#[async_trait]
impl LoginUseCase for LoginService {
    async fn execute(&self, command: LoginCommand) -> Result<LoginResult, LoginError> {
        // Identical failure for wrong email and wrong password.
        if !command
            .email
            .trim()
            .eq_ignore_ascii_case(&self.credentials.email)
        {
            return Err(LoginError::InvalidCredentials);
        }

        if !self
            .verifier
            .verify(&command.password, &self.credentials.password_hash)
        {
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .tokens
            .generate_access_token()
            .map_err(|e| LoginError::TokenFailure(e.to_string()))?;

        Ok(LoginResult {
            token,
            expires_in: self.tokens.access_token_expiry(),
        })
    }
}
