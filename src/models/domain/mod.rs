pub mod anatomy_model;
pub mod quiz;
pub mod quiz_attempt;
pub mod user;
pub use anatomy_model::AnatomyModel;
pub use quiz::{Question, Quiz};
pub use quiz_attempt::QuizAttempt;
pub use user::{User, UserRole};
