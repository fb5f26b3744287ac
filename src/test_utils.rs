use std::sync::Arc;

use crate::{
    app_state::AppState,
    config::Config,
    models::domain::{Question, Quiz, User, UserRole},
    repositories::{MockModelRepository, MockQuizRepository, MockUserRepository},
};

pub mod fixtures {
    use super::*;

    /// State over mocks with no expectations; any repository call panics.
    pub fn empty_app_state() -> AppState {
        AppState::from_repositories(
            Config::default(),
            Arc::new(MockQuizRepository::new()),
            Arc::new(MockModelRepository::new()),
            Arc::new(MockUserRepository::new()),
        )
    }

    pub fn test_teacher() -> User {
        User::new("Tess Teacher", "tess@example.com", "hash", UserRole::Teacher)
    }

    pub fn test_student() -> User {
        User::new("Sam Student", "sam@example.com", "hash", UserRole::Student)
    }

    /// One-question Cardiovascular quiz whose correct answer is "4".
    pub fn cardiovascular_quiz(owner_id: &str) -> Quiz {
        Quiz::new(
            "Cardiovascular",
            vec![Question::new(
                "How many chambers does the human heart have?",
                &["2", "3", "4", "5"],
                "4",
            )],
            owner_id,
        )
    }
}

pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::UserRole;

    #[test]
    fn test_fixture_roles() {
        assert_eq!(test_teacher().role, UserRole::Teacher);
        assert_eq!(test_student().role, UserRole::Student);
        assert_ne!(test_teacher().id, test_student().id);
    }

    #[test]
    fn test_cardiovascular_quiz_fixture() {
        let quiz = cardiovascular_quiz("teacher-1");
        assert_eq!(quiz.question_count(), 1);
        assert_eq!(quiz.questions[0].correct_answer, "4");
        assert!(quiz.is_owned_by("teacher-1"));
    }
}
