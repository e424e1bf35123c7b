use std::sync::Arc;

use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::auth::adapter::incoming::AdminUser;
use crate::floating_message::application::ports::{
    CreateFloatingMessageUseCase, DeleteFloatingMessageUseCase, FloatingMessageDraft,
    GetActiveBannerUseCase, ListFloatingMessagesUseCase, ToggleFloatingMessageActiveUseCase,
    UpdateFloatingMessageUseCase,
};
use crate::shared::api::ApiResponse;

const ENTITY: &str = "FloatingMessage";

#[derive(Clone)]
pub struct FloatingMessageState {
    pub banner: Arc<dyn GetActiveBannerUseCase>,
    pub list: Arc<dyn ListFloatingMessagesUseCase>,
    pub create: Arc<dyn CreateFloatingMessageUseCase>,
    pub update: Arc<dyn UpdateFloatingMessageUseCase>,
    pub delete: Arc<dyn DeleteFloatingMessageUseCase>,
    pub toggle_active: Arc<dyn ToggleFloatingMessageActiveUseCase>,
}

#[get("/api/floating-message")]
pub async fn get_active_banner(state: web::Data<FloatingMessageState>) -> impl Responder {
    match state.banner.execute().await {
        Ok(view) => ApiResponse::success(view),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[get("/api/floating-messages")]
pub async fn list_floating_messages(
    _admin: AdminUser,
    state: web::Data<FloatingMessageState>,
) -> impl Responder {
    match state.list.execute().await {
        Ok(records) => ApiResponse::success(records),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[post("/api/floating-messages")]
pub async fn create_floating_message(
    _admin: AdminUser,
    state: web::Data<FloatingMessageState>,
    body: web::Json<FloatingMessageDraft>,
) -> impl Responder {
    match state.create.execute(body.into_inner()).await {
        Ok(record) => ApiResponse::created(record),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[put("/api/floating-messages/{id}")]
pub async fn update_floating_message(
    _admin: AdminUser,
    state: web::Data<FloatingMessageState>,
    id: web::Path<Uuid>,
    body: web::Json<FloatingMessageDraft>,
) -> impl Responder {
    match state.update.execute(id.into_inner(), body.into_inner()).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[delete("/api/floating-messages/{id}")]
pub async fn delete_floating_message(
    _admin: AdminUser,
    state: web::Data<FloatingMessageState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.delete.execute(id.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

#[put("/api/floating-messages/{id}/toggle-active")]
pub async fn toggle_floating_message_active(
    _admin: AdminUser,
    state: web::Data<FloatingMessageState>,
    id: web::Path<Uuid>,
) -> impl Responder {
    match state.toggle_active.execute(id.into_inner()).await {
        Ok(outcome) => ApiResponse::success(outcome),
        Err(e) => ApiResponse::content_error(ENTITY, e),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_active_banner)
        .service(list_floating_messages)
        .service(create_floating_message)
        .service(update_floating_message)
        .service(delete_floating_message)
        .service(toggle_floating_message_active);
}
