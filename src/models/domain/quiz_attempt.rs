use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One graded submission, embedded in the owning user's document.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    pub quiz_id: String,
    pub score: u32,
    pub total_questions: u32,
    pub date: DateTime<Utc>,
}

impl QuizAttempt {
    pub fn new(quiz_id: &str, score: u32, total_questions: u32) -> Self {
        QuizAttempt {
            quiz_id: quiz_id.to_string(),
            score,
            total_questions,
            date: Utc::now(),
        }
    }
}
