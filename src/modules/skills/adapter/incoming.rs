use std::sync::Arc;

use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::assets::application::ports::{store_form_file, AssetStore};
use crate::auth::adapter::incoming::AdminUser;
use crate::shared::api::multipart::FormData;
use crate::shared::api::ApiResponse;
use crate::shared::content::error::ContentError;
use crate::skills::application::ports::{
    CreateSkillCategoryUseCase, CreateSkillUseCase, DeleteSkillCategoryUseCase, DeleteSkillUseCase,
    ListSkillCatalogUseCase, SkillCategoryDraft, SkillDraft, UpdateSkillCategoryUseCase,
    UpdateSkillUseCase,
};

const CATEGORY: &str = "Skill category";
const SKILL: &str = "Skill";

#[derive(Clone)]
pub struct SkillsState {
    pub catalog: Arc<dyn ListSkillCatalogUseCase>,
    pub create_category: Arc<dyn CreateSkillCategoryUseCase>,
    pub update_category: Arc<dyn UpdateSkillCategoryUseCase>,
    pub delete_category: Arc<dyn DeleteSkillCategoryUseCase>,
    pub create_skill: Arc<dyn CreateSkillUseCase>,
    pub update_skill: Arc<dyn UpdateSkillUseCase>,
    pub delete_skill: Arc<dyn DeleteSkillUseCase>,
    pub assets: Arc<dyn AssetStore>,
}

async fn skill_draft_from_form(
    form: &FormData,
    assets: &dyn AssetStore,
) -> Result<SkillDraft, ContentError> {
    let image_url = store_form_file(assets, form.file("image")).await?;

    let category_id = match form.text("categoryId") {
        None => None,
        Some(raw) => Some(raw.parse::<Uuid>().map_err(|_| {
            ContentError::Validation(format!("categoryId '{}' is not a UUID", raw))
        })?),
    };

    Ok(SkillDraft {
        name: form.owned_text("name"),
        category_id,
        image_url,
    })
}

#[get("/api/skills")]
pub async fn list_skills(state: web::Data<SkillsState>) -> impl Responder {
    match state.catalog.execute().await {
        Ok(catalog) => ApiResponse::success(catalog),
        Err(e) => ApiResponse::content_error(SKILL, e),
    }
}

#[post("/api/skill-categories")]
pub async fn create_skill_category(
    _admin: AdminUser,
    state: web::Data<SkillsState>,
    body: web::Json<SkillCategoryDraft>,
) -> impl Responder {
    match state.create_category.execute(body.into_inner()).await {
        Ok(record) => ApiResponse::created(record),
        Err(e) => ApiResponse::content_error(CATEGORY, e),
    }
}

#[put("/api/skill-categories/{id}")]
pub async fn update_skill_category(
    _admin: AdminUser,
    state: web::Data<SkillsState>,
    id: web::Path<Uuid>,
    body: web::Json<SkillCategoryDraft>,
) -> impl Responder {
    match state
        .update_category
        .execute(id.into_inner(), body.into_inner())
        .await
    {
        Ok(record) => ApiResponse::success(record),
        Err(e) => ApiResponse::content_error(CATEGORY, e),
    }
}

#[delete("/api/skill-categories/{id}")]
pub async fn delete_skill_category(
    _admin: AdminUser,
    state: web::Data<SkillsState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.delete_category.execute(id.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => ApiResponse::content_error(CATEGORY, e),
    }
}

#[post("/api/skills")]
pub async fn create_skill(
    _admin: AdminUser,
    state: web::Data<SkillsState>,
    payload: Multipart,
) -> impl Responder {
    let form = match FormData::read(payload).await {
        Ok(form) => form,
        Err(e) => return ApiResponse::content_error(SKILL, e.into()),
    };

    let draft = match skill_draft_from_form(&form, state.assets.as_ref()).await {
        Ok(draft) => draft,
        Err(e) => return ApiResponse::content_error(SKILL, e),
    };

    match state.create_skill.execute(draft).await {
        Ok(record) => ApiResponse::created(record),
        Err(e) => ApiResponse::content_error(SKILL, e),
    }
}

#[put("/api/skills/{id}")]
pub async fn update_skill(
    _admin: AdminUser,
    state: web::Data<SkillsState>,
    id: web::Path<Uuid>,
    payload: Multipart,
) -> impl Responder {
    let form = match FormData::read(payload).await {
        Ok(form) => form,
        Err(e) => return ApiResponse::content_error(SKILL, e.into()),
    };

    let draft = match skill_draft_from_form(&form, state.assets.as_ref()).await {
        Ok(draft) => draft,
        Err(e) => return ApiResponse::content_error(SKILL, e),
    };

    match state.update_skill.execute(id.into_inner(), draft).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => ApiResponse::content_error(SKILL, e),
    }
}

#[delete("/api/skills/{id}")]
pub async fn delete_skill(
    _admin: AdminUser,
    state: web::Data<SkillsState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.delete_skill.execute(id.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => ApiResponse::content_error(SKILL, e),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_skills)
        .service(create_skill_category)
        .service(update_skill_category)
        .service(delete_skill_category)
        .service(create_skill)
        .service(update_skill)
        .service(delete_skill);
}
