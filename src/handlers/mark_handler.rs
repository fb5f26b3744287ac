use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, auth::RequestContext, errors::AppError};

#[get("/api/marks")]
pub async fn list_marks(
    ctx: RequestContext,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    ctx.require_student()?;

    let marks = state.mark_service.list_marks(&ctx).await?;
    Ok(HttpResponse::Ok().json(marks))
}
