use std::{collections::HashMap, sync::Arc};

use crate::{
    auth::RequestContext,
    errors::{AppError, AppResult},
    models::{
        domain::{quiz::DEFAULT_QUIZ_NAME, Quiz},
        dto::response::MarkDto,
    },
    repositories::{QuizRepository, UserRepository},
    services::quiz_attempt_service::QuizAttemptService,
};

pub struct MarkService {
    users: Arc<dyn UserRepository>,
    quizzes: Arc<dyn QuizRepository>,
}

impl MarkService {
    pub fn new(users: Arc<dyn UserRepository>, quizzes: Arc<dyn QuizRepository>) -> Self {
        Self { users, quizzes }
    }

    /// Lists the caller's attempts in the order they were recorded.
    ///
    /// Attempts whose quiz has since been deleted stay in the list under the
    /// default quiz name.
    pub async fn list_marks(&self, ctx: &RequestContext) -> AppResult<Vec<MarkDto>> {
        let user = self
            .users
            .find_by_id(ctx.user_id())
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let mut quiz_ids: Vec<String> = user.attempts.iter().map(|a| a.quiz_id.clone()).collect();
        quiz_ids.sort();
        quiz_ids.dedup();

        let quizzes: HashMap<String, Quiz> = self
            .quizzes
            .find_by_ids(&quiz_ids)
            .await?
            .into_iter()
            .map(|quiz| (quiz.id.clone(), quiz))
            .collect();

        let marks = user
            .attempts
            .into_iter()
            .map(|attempt| {
                let quiz_name = match quizzes.get(&attempt.quiz_id) {
                    Some(quiz) => quiz.display_name().to_string(),
                    None => {
                        log::warn!(
                            "Attempt by {} references missing quiz {}",
                            ctx.user_id(),
                            attempt.quiz_id
                        );
                        DEFAULT_QUIZ_NAME.to_string()
                    }
                };

                MarkDto {
                    percentage: QuizAttemptService::percentage(attempt.score, attempt.total_questions),
                    quiz_id: attempt.quiz_id,
                    quiz_name,
                    score: attempt.score,
                    total_questions: attempt.total_questions,
                    date: attempt.date,
                }
            })
            .collect();

        Ok(marks)
    }
}
