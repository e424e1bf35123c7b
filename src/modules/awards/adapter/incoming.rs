use std::sync::Arc;

use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::assets::application::ports::{store_form_file, AssetStore};
use crate::auth::adapter::incoming::AdminUser;
use crate::awards::application::ports::{
    AwardDraft, CreateAwardUseCase, DeleteAwardUseCase, GetAwardUseCase, ListAwardsUseCase,
    ToggleAwardFeaturedUseCase, UpdateAwardUseCase,
};
use crate::shared::api::multipart::FormData;
use crate::shared::api::ApiResponse;
use crate::shared::content::error::ContentError;
use crate::shared::content::links::SocialLink;

const ENTITY: &str = "Award";

#[derive(Clone)]
pub struct AwardsState {
    pub list: Arc<dyn ListAwardsUseCase>,
    pub get: Arc<dyn GetAwardUseCase>,
    pub create: Arc<dyn CreateAwardUseCase>,
    pub update: Arc<dyn UpdateAwardUseCase>,
    pub delete: Arc<dyn DeleteAwardUseCase>,
    pub toggle_featured: Arc<dyn ToggleAwardFeaturedUseCase>,
    pub assets: Arc<dyn AssetStore>,
}

/// The association arrives flattened as `associatedType` / `associatedId`
/// text parts.
async fn draft_from_form(
    form: &FormData,
    assets: &dyn AssetStore,
) -> Result<AwardDraft, ContentError> {
    let certificate_url = store_form_file(assets, form.file("certificate")).await?;
    let image_url = store_form_file(assets, form.file("image")).await?;

    let associated_id = match form.text("associatedId") {
        None => None,
        Some(raw) => Some(raw.parse::<Uuid>().map_err(|_| {
            ContentError::Validation(format!("associatedId '{}' is not a UUID", raw))
        })?),
    };

    Ok(AwardDraft {
        title: form.owned_text("title"),
        organization: form.owned_text("organization"),
        associated_type: form.owned_text("associatedType"),
        associated_id,
        description: form.owned_text("description"),
        issue_month: form.owned_text("issueMonth"),
        issue_year: form.int_field("issueYear")?,
        certificate_url,
        image_url,
        certificate_link: form.owned_text("certificateLink"),
        featured: form.bool_field("featured")?,
        social_links: form.json_field::<Vec<SocialLink>>("socialLinks")?,
    })
}

#[get("/api/awards")]
pub async fn list_awards(state: web::Data<AwardsState>) -> impl Responder {
    match state.list.execute().await {
        Ok(records) => ApiResponse::success(records),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[get("/api/awards/{id}")]
pub async fn get_award(state: web::Data<AwardsState>, id: web::Path<Uuid>) -> impl Responder {
    match state.get.execute(id.into_inner()).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[post("/api/awards")]
pub async fn create_award(
    _admin: AdminUser,
    state: web::Data<AwardsState>,
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

#[put("/api/awards/{id}")]
pub async fn update_award(
    _admin: AdminUser,
    state: web::Data<AwardsState>,
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

#[delete("/api/awards/{id}")]
pub async fn delete_award(
    _admin: AdminUser,
    state: web::Data<AwardsState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.delete.execute(id.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[put("/api/awards/{id}/toggle-featured")]
pub async fn toggle_award_featured(
    _admin: AdminUser,
    state: web::Data<AwardsState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.toggle_featured.execute(id.into_inner()).await {
        Ok(outcome) => ApiResponse::success(outcome),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_awards)
        .service(get_award)
        .service(create_award)
        .service(update_award)
        .service(delete_award)
        .service(toggle_award_featured);
}
