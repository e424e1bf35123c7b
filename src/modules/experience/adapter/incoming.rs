use std::sync::Arc;

use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::assets::application::ports::{store_form_file, AssetStore};
use crate::auth::adapter::incoming::AdminUser;
use crate::experience::application::ports::{
    CreateExperienceUseCase, DeleteExperienceUseCase, ExperienceDraft, GetExperienceUseCase,
    ListExperiencesUseCase, UpdateExperienceUseCase,
};
use crate::shared::api::multipart::FormData;
use crate::shared::api::ApiResponse;
use crate::shared::content::error::ContentError;

const ENTITY: &str = "Experience";

#[derive(Clone)]
pub struct ExperienceState {
    pub list: Arc<dyn ListExperiencesUseCase>,
    pub get: Arc<dyn GetExperienceUseCase>,
    pub create: Arc<dyn CreateExperienceUseCase>,
    pub update: Arc<dyn UpdateExperienceUseCase>,
    pub delete: Arc<dyn DeleteExperienceUseCase>,
    pub assets: Arc<dyn AssetStore>,
}

/// An experience form can carry up to three files: `companyLogo`,
/// `offerLetter` and `completionCertificate`. Each is optional and each
/// replaces the stored URL only when submitted.
async fn draft_from_form(
    form: &FormData,
    assets: &dyn AssetStore,
) -> Result<ExperienceDraft, ContentError> {
    let company_logo_url = store_form_file(assets, form.file("companyLogo")).await?;
    let offer_letter_url = store_form_file(assets, form.file("offerLetter")).await?;
    let completion_certificate_url =
        store_form_file(assets, form.file("completionCertificate")).await?;

    Ok(ExperienceDraft {
        category: form.owned_text("category"),
        company_name: form.owned_text("companyName"),
        role: form.owned_text("role"),
        employment_type: form.owned_text("employmentType"),
        location: form.owned_text("location"),
        status: form.owned_text("status"),
        start_month: form.owned_text("startMonth"),
        start_year: form.int_field("startYear")?,
        end_month: form.owned_text("endMonth"),
        end_year: form.int_field("endYear")?,
        description: form.owned_text("description"),
        technology_ids: form.json_field::<Vec<Uuid>>("technologyIds")?,
        skill_tags: form.json_field::<Vec<String>>("skillTags")?,
        company_logo_url,
        offer_letter_url,
        completion_certificate_url,
    })
}

#[get("/api/experience")]
pub async fn list_experience(state: web::Data<ExperienceState>) -> impl Responder {
    match state.list.execute().await {
        Ok(records) => ApiResponse::success(records),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[get("/api/experience/{id}")]
pub async fn get_experience(
    state: web::Data<ExperienceState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.get.execute(id.into_inner()).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[post("/api/experience")]
pub async fn create_experience(
    _admin: AdminUser,
    state: web::Data<ExperienceState>,
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

#[put("/api/experience/{id}")]
pub async fn update_experience(
    _admin: AdminUser,
    state: web::Data<ExperienceState>,
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

#[delete("/api/experience/{id}")]
pub async fn delete_experience(
    _admin: AdminUser,
    state: web::Data<ExperienceState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.delete.execute(id.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_experience)
        .service(get_experience)
        .service(create_experience)
        .service(update_experience)
        .service(delete_experience);
}
