pub mod model_repository;
pub mod quiz_repository;
pub mod user_repository;

pub use model_repository::{ModelRepository, MongoModelRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};
pub use user_repository::{MongoUserRepository, UserRepository};

#[cfg(test)]
pub use model_repository::MockModelRepository;
#[cfg(test)]
pub use quiz_repository::MockQuizRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
