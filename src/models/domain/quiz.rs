use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Every question offers exactly this many choices.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Display name used when a quiz has no usable system label.
pub const DEFAULT_QUIZ_NAME: &str = "Quiz";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub system: String,
    pub questions: Vec<Question>,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "question", alias = "text")]
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Quiz {
    pub fn new(system: &str, questions: Vec<Question>, owner_id: &str) -> Self {
        let now = Utc::now();
        Quiz {
            id: Uuid::new_v4().to_string(),
            system: system.to_string(),
            questions,
            owner_id: owner_id.to_string(),
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn display_name(&self) -> &str {
        if self.system.trim().is_empty() {
            DEFAULT_QUIZ_NAME
        } else {
            &self.system
        }
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }
}

impl Question {
    pub fn new(text: &str, options: &[&str], correct_answer: &str) -> Self {
        Question {
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct_answer.to_string(),
        }
    }
}
