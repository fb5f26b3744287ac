use serde_json::Value;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{Question, Quiz, QuizAttempt};
use crate::models::dto::response::SubmitQuizResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeResult {
    pub score: u32,
    pub total_questions: u32,
}

impl GradeResult {
    pub fn percentage(&self) -> u32 {
        QuizAttemptService::percentage(self.score, self.total_questions)
    }
}

impl From<GradeResult> for SubmitQuizResponse {
    fn from(result: GradeResult) -> Self {
        SubmitQuizResponse {
            score: result.score,
            total_questions: result.total_questions,
            percentage: result.percentage(),
        }
    }
}

pub struct QuizAttemptService;

impl QuizAttemptService {
    /// Grade submitted answers against the quiz, index by index.
    ///
    /// `answers` must be a JSON array with one entry per question. Entries are
    /// not type-checked: anything other than a string equal to the correct
    /// answer counts as wrong.
    pub fn grade_attempt(quiz: &Quiz, answers: &Value) -> AppResult<GradeResult> {
        let answers = answers
            .as_array()
            .filter(|a| a.len() == quiz.question_count())
            .ok_or_else(|| AppError::ValidationError("Invalid answers format".to_string()))?;

        let score = quiz
            .questions
            .iter()
            .zip(answers)
            .filter(|(question, answer)| Self::grade_question(question, answer))
            .count();

        Ok(GradeResult {
            score: score as u32,
            total_questions: quiz.question_count() as u32,
        })
    }

    /// Exact, case-sensitive comparison with no trimming.
    fn grade_question(question: &Question, answer: &Value) -> bool {
        answer.as_str() == Some(question.correct_answer.as_str())
    }

    /// `round(score / total * 100)` with halves rounded up.
    pub fn percentage(score: u32, total_questions: u32) -> u32 {
        if total_questions == 0 {
            return 0;
        }
        let score = u64::from(score);
        let total = u64::from(total_questions);
        ((200 * score + total) / (2 * total)) as u32
    }

    pub fn create_attempt(quiz: &Quiz, result: GradeResult) -> QuizAttempt {
        QuizAttempt::new(&quiz.id, result.score, result.total_questions)
    }
}
