use std::sync::Arc;

use crate::{
    auth::SessionService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        ModelRepository, MongoModelRepository, MongoQuizRepository, MongoUserRepository,
        QuizRepository, UserRepository,
    },
    services::{
        mark_service::MarkService, model_service::ModelService, quiz_service::QuizService,
        user_service::UserService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub quiz_service: Arc<QuizService>,
    pub model_service: Arc<ModelService>,
    pub mark_service: Arc<MarkService>,
    pub sessions: Arc<SessionService>,
    pub config: Arc<Config>,
    /// `None` when the state is assembled over non-Mongo repositories.
    pub db: Option<Database>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let quiz_repository = MongoQuizRepository::new(&db);
        quiz_repository.ensure_indexes().await?;

        let model_repository = MongoModelRepository::new(&db);
        model_repository.ensure_indexes().await?;

        let user_repository = MongoUserRepository::new(&db);
        user_repository.ensure_indexes().await?;

        let mut state = Self::from_repositories(
            config,
            Arc::new(quiz_repository),
            Arc::new(model_repository),
            Arc::new(user_repository),
        );
        state.db = Some(db);
        Ok(state)
    }

    pub fn from_repositories(
        config: Config,
        quizzes: Arc<dyn QuizRepository>,
        models: Arc<dyn ModelRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            user_service: Arc::new(UserService::new(users.clone())),
            quiz_service: Arc::new(QuizService::new(quizzes.clone(), users.clone())),
            model_service: Arc::new(ModelService::new(models, users.clone())),
            mark_service: Arc::new(MarkService::new(users, quizzes)),
            sessions: Arc::new(SessionService::from_config(&config)),
            config: Arc::new(config),
            db: None,
        }
    }

    /// Readiness check; states without a database are always ready.
    pub async fn health_check(&self) -> AppResult<()> {
        match &self.db {
            Some(db) => db.ping().await,
            None => Ok(()),
        }
    }
}
