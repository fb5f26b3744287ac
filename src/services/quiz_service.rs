use std::sync::Arc;

use serde_json::Value;

use crate::{
    auth::RequestContext,
    errors::{AppError, AppResult},
    models::{
        domain::Quiz,
        dto::{
            request::CreateQuizRequest,
            response::{QuizView, SubmitQuizResponse},
        },
    },
    repositories::{QuizRepository, UserRepository},
    services::{owner_directory::OwnerDirectory, quiz_attempt_service::QuizAttemptService},
};

pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    users: Arc<dyn UserRepository>,
    owners: OwnerDirectory,
}

impl QuizService {
    pub fn new(quizzes: Arc<dyn QuizRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self {
            quizzes,
            owners: OwnerDirectory::new(users.clone()),
            users,
        }
    }

    /// All quizzes, each with its owner's public details.
    pub async fn list_quizzes(&self) -> AppResult<Vec<QuizView>> {
        let quizzes = self.quizzes.list_quizzes().await?;
        let owners = self
            .owners
            .resolve(quizzes.iter().map(|q| q.owner_id.as_str()))
            .await?;

        Ok(quizzes
            .into_iter()
            .map(|quiz| QuizView {
                owner: owners.get(&quiz.owner_id).cloned(),
                quiz,
            })
            .collect())
    }

    pub async fn get_quiz_view(&self, id: &str) -> AppResult<QuizView> {
        let quiz = self.get_quiz(id).await?;
        let mut owners = self.owners.resolve([quiz.owner_id.as_str()]).await?;

        Ok(QuizView {
            owner: owners.remove(&quiz.owner_id),
            quiz,
        })
    }

    pub async fn list_owned_quizzes(&self, ctx: &RequestContext) -> AppResult<Vec<Quiz>> {
        self.quizzes.list_quizzes_by_owner(ctx.user_id()).await
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        self.quizzes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))
    }

    pub async fn create_quiz(&self, ctx: &RequestContext, request: CreateQuizRequest) -> AppResult<Quiz> {
        let quiz = request.into_quiz(ctx.user_id())?;
        let quiz = self.quizzes.create(quiz).await?;

        log::info!(
            "Teacher {} created quiz {} ({} questions)",
            ctx.user_id(),
            quiz.id,
            quiz.question_count()
        );
        Ok(quiz)
    }

    pub async fn delete_quiz(&self, ctx: &RequestContext, id: &str) -> AppResult<()> {
        let quiz = self.get_quiz(id).await?;

        if !quiz.is_owned_by(ctx.user_id()) {
            return Err(AppError::Forbidden(
                "You can only delete your own quizzes".to_string(),
            ));
        }

        self.quizzes.delete(&quiz.id).await?;
        log::info!("Teacher {} deleted quiz {}", ctx.user_id(), quiz.id);
        Ok(())
    }

    /// Grades the answers and records the attempt on the caller's profile.
    ///
    /// Every valid submission appends a new attempt; retakes never replace
    /// earlier ones.
    pub async fn submit_quiz(
        &self,
        ctx: &RequestContext,
        id: &str,
        answers: &Value,
    ) -> AppResult<SubmitQuizResponse> {
        let quiz = self.get_quiz(id).await?;
        let result = QuizAttemptService::grade_attempt(&quiz, answers)?;

        let attempt = QuizAttemptService::create_attempt(&quiz, result);
        self.users.push_attempt(ctx.user_id(), attempt).await?;

        log::info!(
            "Student {} scored {}/{} on quiz {}",
            ctx.user_id(),
            result.score,
            result.total_questions,
            quiz.id
        );
        Ok(result.into())
    }
}
