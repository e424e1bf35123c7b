use std::sync::Arc;

use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::auth::adapter::incoming::AdminUser;
use crate::contact::application::ports::{
    ContactMessageDraft, DeleteContactMessageUseCase, ListContactMessagesUseCase,
    SubmitContactMessageUseCase, ToggleContactReadUseCase,
};
use crate::shared::api::ApiResponse;

const ENTITY: &str = "ContactMessage";

#[derive(Clone)]
pub struct ContactState {
    pub submit: Arc<dyn SubmitContactMessageUseCase>,
    pub list: Arc<dyn ListContactMessagesUseCase>,
    pub delete: Arc<dyn DeleteContactMessageUseCase>,
    pub toggle_read: Arc<dyn ToggleContactReadUseCase>,
}

#[post("/api/contact")]
pub async fn submit_contact_message(
    state: web::Data<ContactState>,
    body: web::Json<ContactMessageDraft>,
) -> impl Responder {
    match state.submit.execute(body.into_inner()).await {
        Ok(record) => ApiResponse::created(record),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[get("/api/contact")]
pub async fn list_contact_messages(
    _admin: AdminUser,
    state: web::Data<ContactState>,
) -> impl Responder {
    match state.list.execute().await {
        Ok(records) => ApiResponse::success(records),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[delete("/api/contact/{id}")]
pub async fn delete_contact_message(
    _admin: AdminUser,
    state: web::Data<ContactState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.delete.execute(id.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[put("/api/contact/{id}/toggle-read")]
pub async fn toggle_contact_read(
    _admin: AdminUser,
    state: web::Data<ContactState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.toggle_read.execute(id.into_inner()).await {
        Ok(outcome) => ApiResponse::success(outcome),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(submit_contact_message)
        .service(list_contact_messages)
        .service(delete_contact_message)
        .service(toggle_contact_read);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::auth::application::ports::TokenProvider;
    use crate::contact::application::ports::{
        ContactMessageFields, ContactMessageRecord, ContactMessageRepository,
    };
    use crate::contact::application::service::ContactMessageService;
    use crate::email::application::ports::{ContactNotification, ContactNotifier};
    use crate::shared::content::error::RepoError;

    #[derive(Default)]
    struct InMemoryRepo {
        records: Mutex<Vec<ContactMessageRecord>>,
    }

    #[async_trait]
    impl ContactMessageRepository for InMemoryRepo {
        async fn insert(
            &self,
            fields: ContactMessageFields,
        ) -> Result<ContactMessageRecord, RepoError> {
            let record = ContactMessageRecord {
                id: Uuid::new_v4(),
                full_name: fields.full_name,
                email: fields.email,
                phone: fields.phone,
                reason: fields.reason,
                message: fields.message,
                is_read: fields.is_read,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            };
            self.records.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn find_all(&self) -> Result<Vec<ContactMessageRecord>, RepoError> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|r| r.id != id);
            if records.len() == before {
                return Err(RepoError::NotFound);
            }
            Ok(())
        }

        async fn toggle_read(&self, id: Uuid) -> Result<bool, RepoError> {
            let mut records = self.records.lock().unwrap();
            let slot = records
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or(RepoError::NotFound)?;
            slot.is_read = !slot.is_read;
            Ok(slot.is_read)
        }
    }

    #[derive(Default)]
    struct StubNotifier {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl ContactNotifier for StubNotifier {
        async fn notify(&self, _notification: ContactNotification) -> Result<(), String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err("smtp down".to_string());
            }
            Ok(())
        }
    }

    fn tokens() -> Arc<dyn TokenProvider> {
        Arc::new(JwtTokenService::new(JwtConfig {
            issuer: "portfolio-backend-test".to_string(),
            secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
            access_token_expiry: 3600,
        }))
    }

    fn state_with(notifier: Arc<StubNotifier>) -> ContactState {
        let service = Arc::new(ContactMessageService::new(InMemoryRepo::default(), notifier));
        ContactState {
            submit: service.clone(),
            list: service.clone(),
            delete: service.clone(),
            toggle_read: service,
        }
    }

    macro_rules! spawn_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .app_data(web::Data::new(tokens()))
                    .configure(init_routes),
            )
            .await
        };
    }

    fn valid_body() -> Value {
        json!({
            "fullName": "Ada Lovelace",
            "email": "ada@example.com",
            "message": "Let's build something."
        })
    }

    #[actix_web::test]
    async fn submission_succeeds_even_when_email_fails() {
        let notifier = Arc::new(StubNotifier {
            fail: true,
            ..Default::default()
        });
        let app = spawn_app!(state_with(notifier.clone()));

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/contact")
                .set_json(valid_body())
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(notifier.calls.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn missing_message_is_400() {
        let app = spawn_app!(state_with(Arc::new(StubNotifier::default())));

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/contact")
                .set_json(json!({"fullName": "Ada", "email": "ada@example.com"}))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn inbox_requires_token_and_lists_messages() {
        let app = spawn_app!(state_with(Arc::new(StubNotifier::default())));
        let token = tokens().generate_access_token().unwrap();

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/contact").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/contact")
                .set_json(valid_body())
                .to_request(),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/contact")
                .insert_header(("Authorization", format!("Bearer {token}")))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"][0]["isRead"], false);
    }
}
