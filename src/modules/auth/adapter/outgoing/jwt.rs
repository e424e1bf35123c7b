use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::application::ports::{Claims, TokenError, TokenProvider};

const TOKEN_TYPE_ACCESS: &str = "access";
const ADMIN_SUBJECT: &str = "admin";

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub issuer: String,
    pub secret_key: String,
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let issuer =
            std::env::var("JWT_ISSUER").unwrap_or_else(|_| "portfolio-backend".to_string());
        let secret_key = std::env::var("JWT_SECRET_KEY").expect("JWT_SECRET_KEY not set");
        let access_token_expiry = std::env::var("ACCESS_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        Self {
            issuer,
            secret_key,
            access_token_expiry,
        }
    }
}

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: ADMIN_SUBJECT.to_string(),
            iss: self.config.issuer.clone(),
            iat: now,
            exp: now + self.config.access_token_expiry,
            token_type: TOKEN_TYPE_ACCESS.to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.secret_key.as_bytes()),
        )
        .map_err(|e| TokenError::Issuance(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret_key.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| TokenError::Invalid)
    }

    fn access_token_expiry(&self) -> i64 {
        self.config.access_token_expiry
    }
}
