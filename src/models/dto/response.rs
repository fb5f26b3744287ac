use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{AnatomyModel, Quiz, User, UserRole};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// Public identity of the teacher who owns a quiz or model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for OwnerSummary {
    fn from(user: User) -> Self {
        OwnerSummary {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// `owner` is `null` when the owning account no longer exists.
#[derive(Debug, Clone, Serialize)]
pub struct QuizView {
    #[serde(flatten)]
    pub quiz: Quiz,
    pub owner: Option<OwnerSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelView {
    #[serde(flatten)]
    pub model: AnatomyModel,
    pub owner: Option<OwnerSummary>,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizResponse {
    pub score: u32,
    pub total_questions: u32,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkDto {
    pub quiz_id: String,
    pub quiz_name: String,
    pub score: u32,
    pub total_questions: u32,
    pub percentage: u32,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
