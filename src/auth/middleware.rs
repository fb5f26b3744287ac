use std::future::{ready, Ready};

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};

use crate::{
    app_state::AppState,
    auth::{session::SESSION_COOKIE, SessionClaims},
    errors::{AppError, AppResult},
    models::domain::UserRole,
};

/// Identity of the caller, resolved from the session cookie once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    user_id: String,
    role: UserRole,
}

impl RequestContext {
    pub fn new(user_id: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn require_role(&self, required: UserRole) -> AppResult<()> {
        if self.role != required {
            let label = match required {
                UserRole::Teacher => "Teacher",
                UserRole::Student => "Student",
            };
            return Err(AppError::Forbidden(format!(
                "Forbidden: {} access required",
                label
            )));
        }
        Ok(())
    }

    pub fn require_teacher(&self) -> AppResult<()> {
        self.require_role(UserRole::Teacher)
    }

    pub fn require_student(&self) -> AppResult<()> {
        self.require_role(UserRole::Student)
    }
}

impl From<SessionClaims> for RequestContext {
    fn from(claims: SessionClaims) -> Self {
        Self::new(claims.sub, claims.role)
    }
}

impl FromRequest for RequestContext {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(resolve_context(req))
    }
}

fn resolve_context(req: &HttpRequest) -> AppResult<RequestContext> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::InternalError("Application state not configured".to_string()))?;

    let cookie = req
        .cookie(SESSION_COOKIE)
        .ok_or_else(|| AppError::Unauthorized("Unauthorized".to_string()))?;

    let claims = state
        .sessions
        .validate_token(cookie.value())
        .map_err(|e| {
            log::debug!("Rejected session cookie: {}", e);
            AppError::Unauthorized("Unauthorized".to_string())
        })?;

    Ok(claims.into())
}
