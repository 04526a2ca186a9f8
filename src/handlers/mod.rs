pub mod evaluation_handler;
pub mod health_handler;

use actix_web::web;

pub use evaluation_handler::{evaluate_answer, evaluate_upload, get_shell, preview_answer};
pub use health_handler::health_check;

/// Registers every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(get_shell)
        .service(preview_answer)
        .service(evaluate_answer)
        .service(evaluate_upload);
}
