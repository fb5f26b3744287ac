#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use anatomy_server::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{AnatomyModel, Quiz, QuizAttempt, User},
    repositories::{ModelRepository, QuizRepository, UserRepository},
};

#[derive(Default)]
pub struct InMemoryQuizRepository {
    quizzes: RwLock<Vec<Quiz>>,
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.iter().find(|q| q.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes
            .iter()
            .filter(|q| ids.contains(&q.id))
            .cloned()
            .collect())
    }

    async fn list_quizzes(&self) -> AppResult<Vec<Quiz>> {
        Ok(self.quizzes.read().await.clone())
    }

    async fn list_quizzes_by_owner(&self, owner_id: &str) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        let mut owned: Vec<Quiz> = quizzes
            .iter()
            .filter(|q| q.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.quizzes.write().await.push(quiz.clone());
        Ok(quiz)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut quizzes = self.quizzes.write().await;
        let before = quizzes.len();
        quizzes.retain(|q| q.id != id);

        if quizzes.len() == before {
            return Err(AppError::NotFound("Quiz not found".to_string()));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryModelRepository {
    models: RwLock<Vec<AnatomyModel>>,
}

#[async_trait]
impl ModelRepository for InMemoryModelRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<AnatomyModel>> {
        let models = self.models.read().await;
        Ok(models.iter().find(|m| m.id == id).cloned())
    }

    async fn list_models(&self) -> AppResult<Vec<AnatomyModel>> {
        Ok(self.models.read().await.clone())
    }

    async fn list_models_by_owner(&self, owner_id: &str) -> AppResult<Vec<AnatomyModel>> {
        let models = self.models.read().await;
        let mut owned: Vec<AnatomyModel> = models
            .iter()
            .filter(|m| m.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn create(&self, model: AnatomyModel) -> AppResult<AnatomyModel> {
        self.models.write().await.push(model.clone());
        Ok(model)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut models = self.models.write().await;
        let before = models.len();
        models.retain(|m| m.id != id);

        if models.len() == before {
            return Err(AppError::NotFound("Model not found".to_string()));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::ValidationError("User already exists".to_string()));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(ids.iter().filter_map(|id| users.get(id).cloned()).collect())
    }

    async fn push_attempt(&self, user_id: &str, attempt: QuizAttempt) -> AppResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(user_id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        user.attempts.push(attempt);
        Ok(())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

pub struct TestRepositories {
    pub quizzes: Arc<InMemoryQuizRepository>,
    pub models: Arc<InMemoryModelRepository>,
    pub users: Arc<InMemoryUserRepository>,
}

impl TestRepositories {
    pub fn new() -> Self {
        Self {
            quizzes: Arc::new(InMemoryQuizRepository::default()),
            models: Arc::new(InMemoryModelRepository::default()),
            users: Arc::new(InMemoryUserRepository::default()),
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState::from_repositories(
            Config::default(),
            self.quizzes.clone(),
            self.models.clone(),
            self.users.clone(),
        )
    }
}
