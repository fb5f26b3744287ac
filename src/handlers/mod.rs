pub mod auth_handler;
pub mod health_handler;
pub mod mark_handler;
pub mod model_handler;
pub mod quiz_handler;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::AppError;

/// Malformed or mistyped JSON bodies surface as validation errors with the
/// usual `{message}` envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        log::debug!("Rejected request body: {}", err);
        AppError::ValidationError(format!("Invalid request body: {}", err)).into()
    })
}

/// Registers every route. Fixed `/teacher` paths are registered ahead of the
/// `{id}` patterns that would otherwise capture them.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(health_handler::health_check)
        .service(health_handler::health_check_ready)
        .service(auth_handler::register)
        .service(auth_handler::login)
        .service(auth_handler::logout)
        .service(auth_handler::me)
        .service(quiz_handler::list_quizzes)
        .service(quiz_handler::list_teacher_quizzes)
        .service(quiz_handler::create_quiz)
        .service(quiz_handler::submit_quiz)
        .service(quiz_handler::get_quiz)
        .service(quiz_handler::delete_quiz)
        .service(model_handler::list_models)
        .service(model_handler::list_teacher_models)
        .service(model_handler::create_model)
        .service(model_handler::get_model)
        .service(model_handler::delete_model)
        .service(mark_handler::list_marks);
}
