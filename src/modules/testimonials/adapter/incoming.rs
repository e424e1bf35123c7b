use std::sync::Arc;

use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::assets::application::ports::{store_form_file, AssetStore};
use crate::auth::adapter::incoming::AdminUser;
use crate::shared::api::multipart::FormData;
use crate::shared::api::ApiResponse;
use crate::shared::content::error::ContentError;
use crate::testimonials::application::ports::{
    DeleteTestimonialUseCase, ListAllTestimonialsUseCase, ListApprovedTestimonialsUseCase,
    SubmitTestimonialUseCase, TestimonialDraft, ToggleTestimonialApprovalUseCase,
};

const ENTITY: &str = "Testimonial";

#[derive(Clone)]
pub struct TestimonialsState {
    pub submit: Arc<dyn SubmitTestimonialUseCase>,
    pub list_approved: Arc<dyn ListApprovedTestimonialsUseCase>,
    pub list_all: Arc<dyn ListAllTestimonialsUseCase>,
    pub delete: Arc<dyn DeleteTestimonialUseCase>,
    pub toggle_approval: Arc<dyn ToggleTestimonialApprovalUseCase>,
    pub assets: Arc<dyn AssetStore>,
}

async fn draft_from_form(
    form: &FormData,
    assets: &dyn AssetStore,
) -> Result<TestimonialDraft, ContentError> {
    let profile_image_url = store_form_file(assets, form.file("profileImage")).await?;

    Ok(TestimonialDraft {
        full_name: form.owned_text("fullName"),
        email: form.owned_text("email"),
        rating: form.int_field("rating")?,
        feedback: form.owned_text("feedback"),
        website_link: form.owned_text("websiteLink"),
        profile_image_url,
    })
}

#[get("/api/testimonials")]
pub async fn list_approved_testimonials(state: web::Data<TestimonialsState>) -> impl Responder {
    match state.list_approved.execute().await {
        Ok(records) => ApiResponse::success(records),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[get("/api/testimonials/all")]
pub async fn list_all_testimonials(
    _admin: AdminUser,
    state: web::Data<TestimonialsState>,
) -> impl Responder {
    match state.list_all.execute().await {
        Ok(records) => ApiResponse::success(records),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

/// Visitors submit without a token. The record stays hidden until an admin
/// approves it.
#[post("/api/testimonials")]
pub async fn submit_testimonial(
    state: web::Data<TestimonialsState>,
    payload: Multipart,
) -> impl Responder {
    let form = match FormData::read(payload).await {
        Ok(form) => form,
        Err(e) => return ApiResponse::content_error(ENTITY, e.into()),
    };

    let draft = match draft_from_form(&form, state.assets.as_ref()).await {
        Ok(draft) => draft,
        Err(e) => return ApiResponse::content_error(ENTITY, e),
    };

    match state.submit.execute(draft).await {
        Ok(record) => ApiResponse::created(record),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[delete("/api/testimonials/{id}")]
pub async fn delete_testimonial(
    _admin: AdminUser,
    state: web::Data<TestimonialsState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.delete.execute(id.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[put("/api/testimonials/{id}/toggle-approval")]
pub async fn toggle_testimonial_approval(
    _admin: AdminUser,
    state: web::Data<TestimonialsState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.toggle_approval.execute(id.into_inner()).await {
        Ok(outcome) => ApiResponse::success(outcome),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_approved_testimonials)
        .service(list_all_testimonials)
        .service(submit_testimonial)
        .service(delete_testimonial)
        .service(toggle_testimonial_approval);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::Value;
    use std::sync::Mutex;

    use crate::assets::application::ports::test_support::FakeAssetStore;
    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::auth::application::ports::TokenProvider;
    use crate::shared::content::error::RepoError;
    use crate::testimonials::application::ports::{
        TestimonialFields, TestimonialRecord, TestimonialRepository,
    };
    use crate::testimonials::application::service::TestimonialService;

    #[derive(Default)]
    struct InMemoryRepo {
        records: Mutex<Vec<TestimonialRecord>>,
    }

    #[async_trait]
    impl TestimonialRepository for InMemoryRepo {
        async fn insert(&self, fields: TestimonialFields) -> Result<TestimonialRecord, RepoError> {
            let record = TestimonialRecord {
                id: Uuid::new_v4(),
                full_name: fields.full_name,
                email: fields.email,
                rating: fields.rating,
                feedback: fields.feedback,
                website_link: fields.website_link,
                profile_image_url: fields.profile_image_url,
                is_approved: fields.is_approved,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            };
            self.records.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn find_all(&self) -> Result<Vec<TestimonialRecord>, RepoError> {
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

        async fn toggle_approval(&self, id: Uuid) -> Result<bool, RepoError> {
            let mut records = self.records.lock().unwrap();
            let slot = records
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or(RepoError::NotFound)?;
            slot.is_approved = !slot.is_approved;
            Ok(slot.is_approved)
        }
    }

    fn tokens() -> Arc<dyn TokenProvider> {
        Arc::new(JwtTokenService::new(JwtConfig {
            issuer: "portfolio-backend-test".to_string(),
            secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
            access_token_expiry: 3600,
        }))
    }

    fn state() -> TestimonialsState {
        let service = Arc::new(TestimonialService::new(InMemoryRepo::default()));
        TestimonialsState {
            submit: service.clone(),
            list_approved: service.clone(),
            list_all: service.clone(),
            delete: service.clone(),
            toggle_approval: service,
            assets: Arc::new(FakeAssetStore::default()),
        }
    }

    const BOUNDARY: &str = "----portfolio-test-boundary";

    fn form_body(texts: &[(&str, &str)]) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in texts {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn submit_form(body: Vec<u8>) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/testimonials")
            .insert_header((
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(body)
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

    fn valid_form() -> Vec<u8> {
        form_body(&[
            ("fullName", "Ada Lovelace"),
            ("email", "ada@example.com"),
            ("rating", "5"),
            ("feedback", "Great collaborator."),
        ])
    }

    #[actix_web::test]
    async fn anonymous_submission_is_created_unapproved() {
        let app = spawn_app!(state());

        let resp = test::call_service(&app, submit_form(valid_form()).to_request()).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["isApproved"], false);

        // Not visible publicly until approved.
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/testimonials")
                .to_request(),
        )
        .await;
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 0);
    }

    #[actix_web::test]
    async fn approval_toggle_exposes_entry_publicly() {
        let app = spawn_app!(state());
        let token = tokens().generate_access_token().unwrap();

        let resp = test::call_service(&app, submit_form(valid_form()).to_request()).await;
        let created: Value = test::read_body_json(resp).await;
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri(&format!("/api/testimonials/{id}/toggle-approval"))
                .insert_header(("Authorization", format!("Bearer {token}")))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/testimonials")
                .to_request(),
        )
        .await;
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn rating_above_five_is_400() {
        let app = spawn_app!(state());

        let body = form_body(&[
            ("fullName", "Ada Lovelace"),
            ("email", "ada@example.com"),
            ("rating", "9"),
            ("feedback", "Great collaborator."),
        ]);

        let resp = test::call_service(&app, submit_form(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn moderation_endpoints_require_token() {
        let app = spawn_app!(state());

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/testimonials/all")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/api/testimonials/{}", Uuid::new_v4()))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
