use std::sync::Arc;

use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::assets::application::ports::{store_form_file, AssetStore};
use crate::auth::adapter::incoming::AdminUser;
use crate::education::application::ports::{
    CreateEducationUseCase, DeleteEducationUseCase, EducationDraft, GetEducationUseCase,
    ListEducationUseCase, UpdateEducationUseCase,
};
use crate::shared::api::multipart::FormData;
use crate::shared::api::ApiResponse;
use crate::shared::content::error::ContentError;

const ENTITY: &str = "Education";

#[derive(Clone)]
pub struct EducationState {
    pub list: Arc<dyn ListEducationUseCase>,
    pub get: Arc<dyn GetEducationUseCase>,
    pub create: Arc<dyn CreateEducationUseCase>,
    pub update: Arc<dyn UpdateEducationUseCase>,
    pub delete: Arc<dyn DeleteEducationUseCase>,
    pub assets: Arc<dyn AssetStore>,
}

async fn draft_from_form(
    form: &FormData,
    assets: &dyn AssetStore,
) -> Result<EducationDraft, ContentError> {
    let logo_url = store_form_file(assets, form.file("logo")).await?;

    Ok(EducationDraft {
        degree: form.owned_text("degree"),
        specialization: form.owned_text("specialization"),
        institute_name: form.owned_text("instituteName"),
        location: form.owned_text("location"),
        status: form.owned_text("status"),
        completion_year: form.int_field("completionYear")?,
        expected_completion_year: form.int_field("expectedCompletionYear")?,
        grade: form.owned_text("grade"),
        logo_url,
    })
}

#[get("/api/education")]
pub async fn list_education(state: web::Data<EducationState>) -> impl Responder {
    match state.list.execute().await {
        Ok(records) => ApiResponse::success(records),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[get("/api/education/{id}")]
pub async fn get_education(
    state: web::Data<EducationState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.get.execute(id.into_inner()).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[post("/api/education")]
pub async fn create_education(
    _admin: AdminUser,
    state: web::Data<EducationState>,
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

    match state.create.execute(draft).await {
        Ok(record) => ApiResponse::created(record),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[put("/api/education/{id}")]
pub async fn update_education(
    _admin: AdminUser,
    state: web::Data<EducationState>,
    id: web::Path<Uuid>,
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

    match state.update.execute(id.into_inner(), draft).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[delete("/api/education/{id}")]
pub async fn delete_education(
    _admin: AdminUser,
    state: web::Data<EducationState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.delete.execute(id.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_education)
        .service(get_education)
        .service(create_education)
        .service(update_education)
        .service(delete_education);
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
    use crate::education::application::ports::{
        EducationFields, EducationRecord, EducationRepository,
    };
    use crate::education::application::service::EducationService;
    use crate::shared::content::error::RepoError;

    #[derive(Default)]
    struct InMemoryRepo {
        records: Mutex<Vec<EducationRecord>>,
    }

    fn record_from(id: Uuid, fields: EducationFields) -> EducationRecord {
        EducationRecord {
            id,
            degree: fields.degree,
            specialization: fields.specialization,
            institute_name: fields.institute_name,
            location: fields.location,
            status: fields.status,
            completion_year: fields.completion_year,
            expected_completion_year: fields.expected_completion_year,
            grade: fields.grade,
            logo_url: fields.logo_url,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[async_trait]
    impl EducationRepository for InMemoryRepo {
        async fn insert(&self, fields: EducationFields) -> Result<EducationRecord, RepoError> {
            let record = record_from(Uuid::new_v4(), fields);
            self.records.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn find_all(&self) -> Result<Vec<EducationRecord>, RepoError> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<EducationRecord, RepoError> {
            self.records
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .ok_or(RepoError::NotFound)
        }

        async fn update(
            &self,
            id: Uuid,
            fields: EducationFields,
        ) -> Result<EducationRecord, RepoError> {
            let mut records = self.records.lock().unwrap();
            let slot = records
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or(RepoError::NotFound)?;
            *slot = record_from(id, fields);
            Ok(slot.clone())
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
    }

    fn tokens() -> Arc<dyn TokenProvider> {
        Arc::new(JwtTokenService::new(JwtConfig {
            issuer: "portfolio-backend-test".to_string(),
            secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
            access_token_expiry: 3600,
        }))
    }

    fn state() -> EducationState {
        let service = Arc::new(EducationService::new(InMemoryRepo::default()));
        EducationState {
            list: service.clone(),
            get: service.clone(),
            create: service.clone(),
            update: service.clone(),
            delete: service,
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

    #[actix_web::test]
    async fn pursuing_entry_keeps_only_expected_year() {
        let app = spawn_app!(state());
        let token = tokens().generate_access_token().unwrap();

        let body = form_body(&[
            ("degree", "MSc"),
            ("instituteName", "State University"),
            ("status", "Pursuing"),
            ("completionYear", "2020"),
            ("expectedCompletionYear", "2027"),
        ]);

        let req = test::TestRequest::post()
            .uri("/api/education")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .insert_header((
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let json: Value = test::read_body_json(resp).await;
        assert!(json["data"]["completionYear"].is_null());
        assert_eq!(json["data"]["expectedCompletionYear"], 2027);
    }

    #[actix_web::test]
    async fn completed_without_year_is_400() {
        let app = spawn_app!(state());
        let token = tokens().generate_access_token().unwrap();

        let body = form_body(&[
            ("degree", "BSc"),
            ("instituteName", "State University"),
            ("status", "Completed"),
        ]);

        let req = test::TestRequest::post()
            .uri("/api/education")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .insert_header((
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn mutations_require_auth() {
        let app = spawn_app!(state());

        let req = test::TestRequest::delete()
            .uri(&format!("/api/education/{}", Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
