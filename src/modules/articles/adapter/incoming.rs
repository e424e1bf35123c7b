use std::sync::Arc;

use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::articles::application::ports::{
    ArticleDraft, CreateArticleUseCase, DeleteArticleUseCase, GetArticleUseCase,
    ListAllArticlesUseCase, ListPublishedArticlesUseCase, ToggleArticleStatusUseCase,
    UpdateArticleUseCase,
};
use crate::assets::application::ports::{store_form_file, AssetStore};
use crate::auth::adapter::incoming::AdminUser;
use crate::shared::api::multipart::FormData;
use crate::shared::api::ApiResponse;
use crate::shared::content::error::ContentError;
use crate::shared::content::links::SocialLink;

const ENTITY: &str = "Article";

#[derive(Clone)]
pub struct ArticlesState {
    pub list_published: Arc<dyn ListPublishedArticlesUseCase>,
    pub list_all: Arc<dyn ListAllArticlesUseCase>,
    pub get: Arc<dyn GetArticleUseCase>,
    pub create: Arc<dyn CreateArticleUseCase>,
    pub update: Arc<dyn UpdateArticleUseCase>,
    pub delete: Arc<dyn DeleteArticleUseCase>,
    pub toggle_status: Arc<dyn ToggleArticleStatusUseCase>,
    pub assets: Arc<dyn AssetStore>,
}

async fn draft_from_form(
    form: &FormData,
    assets: &dyn AssetStore,
) -> Result<ArticleDraft, ContentError> {
    let thumbnail_url = store_form_file(assets, form.file("thumbnail")).await?;

    Ok(ArticleDraft {
        title: form.owned_text("title"),
        description: form.owned_text("description"),
        thumbnail_url,
        social_links: form.json_field::<Vec<SocialLink>>("socialLinks")?,
        status: form.owned_text("status"),
    })
}

#[get("/api/articles")]
pub async fn list_published_articles(state: web::Data<ArticlesState>) -> impl Responder {
    match state.list_published.execute().await {
        Ok(records) => ApiResponse::success(records),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[get("/api/articles/all")]
pub async fn list_all_articles(
    _admin: AdminUser,
    state: web::Data<ArticlesState>,
) -> impl Responder {
    match state.list_all.execute().await {
        Ok(records) => ApiResponse::success(records),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[get("/api/articles/{id}")]
pub async fn get_article(state: web::Data<ArticlesState>, id: web::Path<Uuid>) -> impl Responder {
    match state.get.execute(id.into_inner()).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[post("/api/articles")]
pub async fn create_article(
    _admin: AdminUser,
    state: web::Data<ArticlesState>,
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

#[put("/api/articles/{id}")]
pub async fn update_article(
    _admin: AdminUser,
    state: web::Data<ArticlesState>,
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

#[delete("/api/articles/{id}")]
pub async fn delete_article(
    _admin: AdminUser,
    state: web::Data<ArticlesState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.delete.execute(id.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[put("/api/articles/{id}/toggle-status")]
pub async fn toggle_article_status(
    _admin: AdminUser,
    state: web::Data<ArticlesState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.toggle_status.execute(id.into_inner()).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // `/all` before `/{id}` so it is not captured as an id.
    cfg.service(list_published_articles)
        .service(list_all_articles)
        .service(get_article)
        .service(create_article)
        .service(update_article)
        .service(delete_article)
        .service(toggle_article_status);
}
