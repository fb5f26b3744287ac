pub mod mark_service;
pub mod model_service;
pub mod owner_directory;
pub mod quiz_attempt_service;
pub mod quiz_service;
pub mod user_service;
