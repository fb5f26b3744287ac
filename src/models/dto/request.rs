use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::anatomy_model::MODEL_FILE_SUFFIX;
use crate::models::domain::quiz::OPTIONS_PER_QUESTION;
use crate::models::domain::{AnatomyModel, Question, Quiz};

/// Fields of the wrong JSON type read as absent, so the authoring rules below
/// report them instead of the body extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub system: Option<String>,
    #[serde(default, deserialize_with = "lenient_questions")]
    pub questions: Option<Vec<QuestionInput>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionInput {
    #[serde(default, alias = "text", deserialize_with = "lenient")]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub options: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub correct_answer: Option<String>,
}

impl CreateQuizRequest {
    /// Checks the authoring rules in order and reports the first one broken.
    pub fn into_quiz(self, owner_id: &str) -> AppResult<Quiz> {
        let system = non_blank(self.system);
        let questions = self.questions.filter(|q| !q.is_empty());

        let (Some(system), Some(questions)) = (system, questions) else {
            return Err(AppError::ValidationError(
                "System and questions array are required".to_string(),
            ));
        };

        let questions = questions
            .into_iter()
            .map(QuestionInput::into_question)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Quiz::new(&system, questions, owner_id))
    }
}

impl QuestionInput {
    fn into_question(self) -> AppResult<Question> {
        let text = non_blank(self.question);
        let options = self.options.filter(|o| o.len() == OPTIONS_PER_QUESTION);
        let correct_answer = self.correct_answer.filter(|a| !a.is_empty());

        let (Some(text), Some(options), Some(correct_answer)) = (text, options, correct_answer)
        else {
            return Err(AppError::ValidationError(
                "Each question must have question, 4 options, and correctAnswer".to_string(),
            ));
        };

        if !options.contains(&correct_answer) {
            return Err(AppError::ValidationError(
                "Correct answer must be one of the options".to_string(),
            ));
        }

        Ok(Question {
            text,
            options,
            correct_answer,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateModelRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub system: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub model_url: Option<String>,
}

impl CreateModelRequest {
    pub fn into_model(self, owner_id: &str) -> AppResult<AnatomyModel> {
        let (Some(name), Some(system), Some(model_url)) = (
            non_blank(self.name),
            non_blank(self.system),
            non_blank(self.model_url),
        ) else {
            return Err(AppError::ValidationError(
                "Name, system, and model URL are required".to_string(),
            ));
        };

        if !model_url.ends_with(MODEL_FILE_SUFFIX) {
            return Err(AppError::ValidationError(
                "Model URL must be a .glb file".to_string(),
            ));
        }

        let description = self.description.unwrap_or_default();

        Ok(AnatomyModel::new(
            &name,
            &system,
            description.trim(),
            &model_url,
            owner_id,
        ))
    }
}

/// Answers stay untyped JSON: elements that are not strings are graded as wrong.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitQuizRequest {
    #[serde(default)]
    pub answers: serde_json::Value,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[serde(default)]
    pub role: String,
}

impl RegisterRequest {
    pub fn has_all_fields(&self) -> bool {
        [&self.name, &self.email, &self.password, &self.role]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Any value that does not fit `T` (including `null`) becomes `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// A non-array reads as absent; a non-object entry becomes an empty question
/// so it fails the per-question rule rather than the whole list.
fn lenient_questions<'de, D>(deserializer: D) -> Result<Option<Vec<QuestionInput>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(entries) = value else {
        return Ok(None);
    };

    Ok(Some(
        entries
            .into_iter()
            .map(|entry| serde_json::from_value(entry).unwrap_or_default())
            .collect(),
    ))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
