use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::{
        password::{hash_password, verify_password},
        RequestContext,
    },
    errors::{AppError, AppResult},
    models::{
        domain::{user::normalize_email, User, UserRole},
        dto::request::{LoginRequest, RegisterRequest},
    },
    repositories::UserRepository,
};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        if !request.has_all_fields() {
            return Err(AppError::ValidationError("All fields are required".to_string()));
        }
        request.validate()?;
        let role: UserRole = request.role.trim().parse()?;

        let email = normalize_email(&request.email);
        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(AppError::ValidationError("User already exists".to_string()));
        }

        let password_hash = hash_password(&request.password)?;
        let user = User::new(request.name.trim(), &email, &password_hash, role);
        let user = self.repository.create(user).await?;

        log::info!("Registered {} account {}", user.role, user.id);
        Ok(user)
    }

    /// Unknown email and wrong password produce the same error.
    pub async fn login(&self, request: LoginRequest) -> AppResult<User> {
        if request.email.trim().is_empty() || request.password.is_empty() {
            return Err(AppError::ValidationError(
                "Email and password are required".to_string(),
            ));
        }

        let invalid = || AppError::Unauthorized("Invalid credentials".to_string());

        let user = self
            .repository
            .find_by_email(&normalize_email(&request.email))
            .await?
            .ok_or_else(invalid)?;

        if !verify_password(&request.password, &user.password_hash)? {
            log::debug!("Failed login for account {}", user.id);
            return Err(invalid());
        }

        Ok(user)
    }

    pub async fn get_current_user(&self, ctx: &RequestContext) -> AppResult<User> {
        self.repository
            .find_by_id(ctx.user_id())
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
