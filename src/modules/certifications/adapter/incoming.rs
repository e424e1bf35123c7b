use std::sync::Arc;

use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::assets::application::ports::{store_form_file, AssetStore};
use crate::auth::adapter::incoming::AdminUser;
use crate::certifications::application::ports::{
    CertificationDraft, CreateCertificationUseCase, DeleteCertificationUseCase,
    GetCertificationUseCase, ListCertificationsUseCase, ToggleCertificationPinnedUseCase,
    UpdateCertificationUseCase,
};
use crate::shared::api::multipart::FormData;
use crate::shared::api::ApiResponse;
use crate::shared::content::error::ContentError;

const ENTITY: &str = "Certification";

#[derive(Clone)]
pub struct CertificationsState {
    pub list: Arc<dyn ListCertificationsUseCase>,
    pub get: Arc<dyn GetCertificationUseCase>,
    pub create: Arc<dyn CreateCertificationUseCase>,
    pub update: Arc<dyn UpdateCertificationUseCase>,
    pub delete: Arc<dyn DeleteCertificationUseCase>,
    pub toggle_pinned: Arc<dyn ToggleCertificationPinnedUseCase>,
    pub assets: Arc<dyn AssetStore>,
}

async fn draft_from_form(
    form: &FormData,
    assets: &dyn AssetStore,
) -> Result<CertificationDraft, ContentError> {
    let certificate_url = store_form_file(assets, form.file("certificate")).await?;
    let image_url = store_form_file(assets, form.file("image")).await?;

    Ok(CertificationDraft {
        title: form.owned_text("title"),
        organization: form.owned_text("organization"),
        completion_month: form.owned_text("completionMonth"),
        completion_year: form.int_field("completionYear")?,
        credential_id: form.owned_text("credentialId"),
        credential_url: form.owned_text("credentialUrl"),
        description: form.owned_text("description"),
        skills: form.json_field::<Vec<String>>("skills")?,
        pinned: form.bool_field("pinned")?,
        certificate_url,
        image_url,
    })
}

#[get("/api/certifications")]
pub async fn list_certifications(state: web::Data<CertificationsState>) -> impl Responder {
    match state.list.execute().await {
        Ok(records) => ApiResponse::success(records),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[get("/api/certifications/{id}")]
pub async fn get_certification(
    state: web::Data<CertificationsState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.get.execute(id.into_inner()).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[post("/api/certifications")]
pub async fn create_certification(
    _admin: AdminUser,
    state: web::Data<CertificationsState>,
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

#[put("/api/certifications/{id}")]
pub async fn update_certification(
    _admin: AdminUser,
    state: web::Data<CertificationsState>,
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

#[delete("/api/certifications/{id}")]
pub async fn delete_certification(
    _admin: AdminUser,
    state: web::Data<CertificationsState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.delete.execute(id.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[put("/api/certifications/{id}/toggle-pinned")]
pub async fn toggle_certification_pinned(
    _admin: AdminUser,
    state: web::Data<CertificationsState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.toggle_pinned.execute(id.into_inner()).await {
        Ok(outcome) => ApiResponse::success(outcome),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_certifications)
        .service(get_certification)
        .service(create_certification)
        .service(update_certification)
        .service(delete_certification)
        .service(toggle_certification_pinned);
}
