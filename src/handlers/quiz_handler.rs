use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::RequestContext,
    errors::AppError,
    models::dto::{
        request::{CreateQuizRequest, SubmitQuizRequest},
        response::MessageResponse,
    },
};

#[get("/api/quizzes")]
pub async fn list_quizzes(
    _ctx: RequestContext,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let quizzes = state.quiz_service.list_quizzes().await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

#[get("/api/quizzes/teacher")]
pub async fn list_teacher_quizzes(
    ctx: RequestContext,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    ctx.require_teacher()?;

    let quizzes = state.quiz_service.list_owned_quizzes(&ctx).await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

#[get("/api/quizzes/{id}")]
pub async fn get_quiz(
    _ctx: RequestContext,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz_view(&id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/api/quizzes")]
pub async fn create_quiz(
    ctx: RequestContext,
    state: web::Data<AppState>,
    request: web::Json<CreateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    ctx.require_teacher()?;

    let quiz = state
        .quiz_service
        .create_quiz(&ctx, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(quiz))
}

#[post("/api/quizzes/{id}/submit")]
pub async fn submit_quiz(
    ctx: RequestContext,
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SubmitQuizRequest>,
) -> Result<HttpResponse, AppError> {
    ctx.require_student()?;

    let response = state
        .quiz_service
        .submit_quiz(&ctx, &id, &request.answers)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[delete("/api/quizzes/{id}")]
pub async fn delete_quiz(
    ctx: RequestContext,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    ctx.require_teacher()?;

    state.quiz_service.delete_quiz(&ctx, &id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Quiz deleted successfully")))
}
