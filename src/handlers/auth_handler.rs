use actix_web::{get, post, web, HttpResponse, HttpResponseBuilder};

use crate::{
    app_state::AppState,
    auth::RequestContext,
    errors::AppError,
    models::{
        domain::User,
        dto::{
            request::{LoginRequest, RegisterRequest},
            response::{AuthResponse, MessageResponse},
        },
    },
};

fn authenticated(
    state: &AppState,
    mut response: HttpResponseBuilder,
    user: User,
) -> Result<HttpResponse, AppError> {
    let cookie = state.sessions.session_cookie(&user)?;
    Ok(response.cookie(cookie).json(AuthResponse { user: user.into() }))
}

#[post("/api/auth/register")]
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.register(request.into_inner()).await?;
    authenticated(&state, HttpResponse::Created(), user)
}

#[post("/api/auth/login")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.login(request.into_inner()).await?;
    log::info!("User {} logged in", user.id);
    authenticated(&state, HttpResponse::Ok(), user)
}

#[post("/api/auth/logout")]
pub async fn logout(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .cookie(state.sessions.removal_cookie())
        .json(MessageResponse::new("Logged out successfully"))
}

#[get("/api/auth/me")]
pub async fn me(ctx: RequestContext, state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let user = state.user_service.get_current_user(&ctx).await?;
    Ok(HttpResponse::Ok().json(AuthResponse { user: user.into() }))
}
