use std::sync::Arc;

use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::assets::application::ports::{store_form_file, AssetStore};
use crate::auth::adapter::incoming::AdminUser;
use crate::projects::application::ports::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectUseCase, ListProjectsUseCase,
    ProjectDraft, ProjectLink, ToggleProjectShowOnHomeUseCase, UpdateProjectUseCase,
};
use crate::shared::api::multipart::FormData;
use crate::shared::api::ApiResponse;
use crate::shared::content::error::ContentError;

const ENTITY: &str = "Project";

#[derive(Clone)]
pub struct ProjectsState {
    pub list: Arc<dyn ListProjectsUseCase>,
    pub get: Arc<dyn GetProjectUseCase>,
    pub create: Arc<dyn CreateProjectUseCase>,
    pub update: Arc<dyn UpdateProjectUseCase>,
    pub delete: Arc<dyn DeleteProjectUseCase>,
    pub toggle_show_on_home: Arc<dyn ToggleProjectShowOnHomeUseCase>,
    pub assets: Arc<dyn AssetStore>,
}

/// Reads a project form: scalar parts under their camelCase names, `skillIds`
/// and `links` as JSON-encoded parts, the screenshot as a binary `image` part.
async fn draft_from_form(
    form: &FormData,
    assets: &dyn AssetStore,
) -> Result<ProjectDraft, ContentError> {
    let image_url = store_form_file(assets, form.file("image")).await?;

    Ok(ProjectDraft {
        title: form.owned_text("title"),
        description: form.owned_text("description"),
        detailed_description: form.owned_text("detailedDescription"),
        status: form.owned_text("status"),
        completion_month: form.owned_text("completionMonth"),
        completion_year: form.int_field("completionYear")?,
        image_url,
        skill_ids: form.json_field::<Vec<Uuid>>("skillIds")?,
        links: form.json_field::<Vec<ProjectLink>>("links")?,
        show_on_home: form.bool_field("showOnHome")?,
    })
}

#[get("/api/projects")]
pub async fn list_projects(state: web::Data<ProjectsState>) -> impl Responder {
    match state.list.execute().await {
        Ok(records) => ApiResponse::success(records),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[get("/api/projects/{id}")]
pub async fn get_project(state: web::Data<ProjectsState>, id: web::Path<Uuid>) -> impl Responder {
    match state.get.execute(id.into_inner()).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[post("/api/projects")]
pub async fn create_project(
    _admin: AdminUser,
    state: web::Data<ProjectsState>,
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

#[put("/api/projects/{id}")]
pub async fn update_project(
    _admin: AdminUser,
    state: web::Data<ProjectsState>,
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

#[delete("/api/projects/{id}")]
pub async fn delete_project(
    _admin: AdminUser,
    state: web::Data<ProjectsState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.delete.execute(id.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[put("/api/projects/{id}/toggle-show-on-home")]
pub async fn toggle_project_show_on_home(
    _admin: AdminUser,
    state: web::Data<ProjectsState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.toggle_show_on_home.execute(id.into_inner()).await {
        Ok(outcome) => ApiResponse::success(outcome),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_projects)
        .service(get_project)
        .service(create_project)
        .service(update_project)
        .service(delete_project)
        .service(toggle_project_show_on_home);
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
    use crate::projects::application::ports::{
        ProjectFields, ProjectRecord, ProjectRepository, ProjectStatus,
    };
    use crate::projects::application::service::ProjectService;
    use crate::shared::content::error::RepoError;

    #[derive(Default)]
    struct InMemoryRepo {
        records: Mutex<Vec<ProjectRecord>>,
    }

    fn record_from(id: Uuid, fields: ProjectFields) -> ProjectRecord {
        ProjectRecord {
            id,
            title: fields.title,
            description: fields.description,
            detailed_description: fields.detailed_description,
            status: fields.status,
            completion_month: fields.completion_month,
            completion_year: fields.completion_year,
            image_url: fields.image_url,
            skill_ids: fields.skill_ids,
            links: fields.links,
            show_on_home: fields.show_on_home,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[async_trait]
    impl ProjectRepository for InMemoryRepo {
        async fn insert(&self, fields: ProjectFields) -> Result<ProjectRecord, RepoError> {
            let record = record_from(Uuid::new_v4(), fields);
            self.records.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn find_all(&self) -> Result<Vec<ProjectRecord>, RepoError> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<ProjectRecord, RepoError> {
            self.records
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .ok_or(RepoError::NotFound)
        }

        async fn update(&self, id: Uuid, fields: ProjectFields) -> Result<ProjectRecord, RepoError> {
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

        async fn toggle_show_on_home(&self, id: Uuid) -> Result<bool, RepoError> {
            let mut records = self.records.lock().unwrap();
            let slot = records
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or(RepoError::NotFound)?;
            slot.show_on_home = !slot.show_on_home;
            Ok(slot.show_on_home)
        }
    }

    fn tokens() -> Arc<dyn TokenProvider> {
        Arc::new(JwtTokenService::new(JwtConfig {
            issuer: "portfolio-backend-test".to_string(),
            secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
            access_token_expiry: 3600,
        }))
    }

    fn state() -> ProjectsState {
        let service = Arc::new(ProjectService::new(InMemoryRepo::default()));
        ProjectsState {
            list: service.clone(),
            get: service.clone(),
            create: service.clone(),
            update: service.clone(),
            delete: service.clone(),
            toggle_show_on_home: service,
            assets: Arc::new(FakeAssetStore::default()),
        }
    }

    const BOUNDARY: &str = "----portfolio-test-boundary";

    fn multipart_body(texts: &[(&str, &str)], image: Option<&str>) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in texts {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some(file_name) = image {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(&[0x89, 0x50, 0x4e, 0x47]);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn multipart_request(
        method: test::TestRequest,
        uri: &str,
        token: &str,
        body: Vec<u8>,
    ) -> test::TestRequest {
        method
            .uri(uri)
            .insert_header(("Authorization", format!("Bearer {token}")))
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

    #[actix_web::test]
    async fn create_ongoing_project_returns_201() {
        let app = spawn_app!(state());
        let token = tokens().generate_access_token().unwrap();

        let body = multipart_body(
            &[
                ("title", "Portfolio"),
                ("description", "My site"),
                ("status", "Ongoing"),
            ],
            Some("shot.png"),
        );
        let req = multipart_request(test::TestRequest::post(), "/api/projects", &token, body).to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["title"], "Portfolio");
        assert_eq!(json["data"]["status"], "Ongoing");
        assert_eq!(json["data"]["imageUrl"], "https://assets.test/shot.png");
        assert!(json["data"]["completionMonth"].is_null());
    }

    #[actix_web::test]
    async fn create_completed_without_month_is_400() {
        let app = spawn_app!(state());
        let token = tokens().generate_access_token().unwrap();

        let body = multipart_body(
            &[
                ("title", "Portfolio"),
                ("description", "My site"),
                ("status", "Completed"),
                ("completionYear", "2024"),
            ],
            Some("shot.png"),
        );
        let req = multipart_request(test::TestRequest::post(), "/api/projects", &token, body).to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json: Value = test::read_body_json(resp).await;
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("required"));
    }

    #[actix_web::test]
    async fn create_without_token_is_401() {
        let app = spawn_app!(state());

        let body = multipart_body(&[("title", "Portfolio")], None);
        let req = test::TestRequest::post()
            .uri("/api/projects")
            .insert_header((
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn public_list_is_open_and_returns_created_records() {
        let app = spawn_app!(state());
        let token = tokens().generate_access_token().unwrap();

        let body = multipart_body(
            &[
                ("title", "Portfolio"),
                ("description", "My site"),
                ("status", "Ongoing"),
            ],
            Some("shot.png"),
        );
        let req = multipart_request(test::TestRequest::post(), "/api/projects", &token, body).to_request();
        test::call_service(&app, req).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/projects").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn update_merges_over_existing_record() {
        let app = spawn_app!(state());
        let token = tokens().generate_access_token().unwrap();

        let body = multipart_body(
            &[
                ("title", "Portfolio"),
                ("description", "My site"),
                ("status", "Ongoing"),
            ],
            Some("shot.png"),
        );
        let req = multipart_request(test::TestRequest::post(), "/api/projects", &token, body).to_request();
        let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let body = multipart_body(&[("description", "Rewritten")], None);
        let req = multipart_request(
            test::TestRequest::put(),
            &format!("/api/projects/{id}"),
            &token,
            body,
        )
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["title"], "Portfolio");
        assert_eq!(json["data"]["description"], "Rewritten");
        assert_eq!(json["data"]["imageUrl"], "https://assets.test/shot.png");
    }

    #[actix_web::test]
    async fn delete_of_unknown_id_is_404() {
        let app = spawn_app!(state());
        let token = tokens().generate_access_token().unwrap();

        let req = test::TestRequest::delete()
            .uri(&format!("/api/projects/{}", Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn toggle_reports_new_flag_state() {
        let app = spawn_app!(state());
        let token = tokens().generate_access_token().unwrap();

        let body = multipart_body(
            &[
                ("title", "Portfolio"),
                ("description", "My site"),
                ("status", "Ongoing"),
            ],
            Some("shot.png"),
        );
        let req = multipart_request(test::TestRequest::post(), "/api/projects", &token, body).to_request();
        let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/api/projects/{id}/toggle-show-on-home"))
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["enabled"], true);
    }
}
