use std::future::{ready, Ready};
use std::sync::Arc;

use actix_web::{dev::Payload, post, web, Error as ActixError, FromRequest, HttpRequest, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::application::ports::{LoginCommand, LoginError, LoginUseCase, TokenProvider};
use crate::shared::api::ApiResponse;

#[derive(Clone)]
pub struct AuthState {
    pub login: Arc<dyn LoginUseCase>,
}

//
// ──────────────────────────────────────────────────────────
// Extractor: the auth gate in front of every admin mutation
// ──────────────────────────────────────────────────────────
//

/// Proof that the request carried a valid admin access token.
#[derive(Debug, Clone)]
pub struct AdminUser;

fn auth_failure(response: actix_web::HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let tokens = match req.app_data::<web::Data<Arc<dyn TokenProvider>>>() {
            Some(provider) => provider,
            None => {
                error!("TokenProvider missing from app data");
                return ready(Err(auth_failure(ApiResponse::internal_error())));
            }
        };

        let token = match bearer_token(req) {
            Some(t) => t,
            None => {
                return ready(Err(auth_failure(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match tokens.verify_token(&token) {
            Ok(claims) if claims.token_type == "access" => ready(Ok(AdminUser)),
            Ok(_) => ready(Err(auth_failure(ApiResponse::unauthorized(
                "INVALID_TOKEN_TYPE",
                "Invalid token type",
            )))),
            Err(_) => ready(Err(auth_failure(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Login handler
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[post("/api/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequest>,
    state: web::Data<AuthState>,
) -> impl Responder {
    let req = req.into_inner();

    match state
        .login
        .execute(LoginCommand {
            email: req.email,
            password: req.password,
        })
        .await
    {
        Ok(result) => ApiResponse::success(result),

        Err(LoginError::InvalidCredentials) => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::TokenFailure(e)) => {
            error!("Failed to issue access token: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, App, HttpResponse};
    use serde_json::{json, Value};

    use crate::auth::adapter::outgoing::bcrypt_verifier::BcryptVerifier;
    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::auth::application::ports::AdminCredentials;
    use crate::auth::application::service::LoginService;

    fn jwt_service() -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            issuer: "portfolio-backend-test".to_string(),
            secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
            access_token_expiry: 3600,
        })
    }

    fn auth_state() -> AuthState {
        let credentials = AdminCredentials {
            email: "admin@example.com".to_string(),
            password_hash: bcrypt::hash("hunter2", 4).unwrap(),
        };
        AuthState {
            login: Arc::new(LoginService::new(
                credentials,
                Arc::new(BcryptVerifier),
                Arc::new(jwt_service()),
            )),
        }
    }

    #[get("/api/protected")]
    async fn protected_handler(_admin: AdminUser) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn login_returns_token_for_valid_credentials() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(auth_state()))
                .service(login_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "admin@example.com", "password": "hunter2"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert!(body["data"]["token"].as_str().unwrap().contains('.'));
        assert_eq!(body["data"]["expires_in"], 3600);
    }

    #[actix_web::test]
    async fn login_rejects_bad_password() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(auth_state()))
                .service(login_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "admin@example.com", "password": "wrong"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }

    #[actix_web::test]
    async fn extractor_accepts_issued_token() {
        let tokens: Arc<dyn TokenProvider> = Arc::new(jwt_service());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::clone(&tokens)))
                .service(protected_handler),
        )
        .await;

        let token = tokens.generate_access_token().unwrap();
        let req = test::TestRequest::get()
            .uri("/api/protected")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn extractor_rejects_missing_header() {
        let tokens: Arc<dyn TokenProvider> = Arc::new(jwt_service());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(tokens))
                .service(protected_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/protected").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn extractor_rejects_garbage_token() {
        let tokens: Arc<dyn TokenProvider> = Arc::new(jwt_service());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(tokens))
                .service(protected_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/protected")
            .insert_header(("Authorization", "Bearer not.a.jwt"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
