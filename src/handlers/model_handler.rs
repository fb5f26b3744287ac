use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::RequestContext,
    errors::AppError,
    models::dto::{request::CreateModelRequest, response::MessageResponse},
};

#[get("/api/models")]
pub async fn list_models(
    _ctx: RequestContext,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let models = state.model_service.list_models().await?;
    Ok(HttpResponse::Ok().json(models))
}

#[get("/api/models/teacher")]
pub async fn list_teacher_models(
    ctx: RequestContext,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    ctx.require_teacher()?;

    let models = state.model_service.list_owned_models(&ctx).await?;
    Ok(HttpResponse::Ok().json(models))
}

#[get("/api/models/{id}")]
pub async fn get_model(
    _ctx: RequestContext,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let model = state.model_service.get_model_view(&id).await?;
    Ok(HttpResponse::Ok().json(model))
}

#[post("/api/models")]
pub async fn create_model(
    ctx: RequestContext,
    state: web::Data<AppState>,
    request: web::Json<CreateModelRequest>,
) -> Result<HttpResponse, AppError> {
    ctx.require_teacher()?;

    let model = state
        .model_service
        .create_model(&ctx, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(model))
}

#[delete("/api/models/{id}")]
pub async fn delete_model(
    ctx: RequestContext,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    ctx.require_teacher()?;

    state.model_service.delete_model(&ctx, &id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Model deleted successfully")))
}
