use std::sync::Arc;

use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, models::dto::response::HealthResponse};

#[get("/health")]
pub async fn health_check(state: web::Data<Arc<AppState>>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        backend: state.config.backend_label(),
        evaluator_ready: state.evaluator.is_ok(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let state = Arc::new(AppState::new(Config::test_config()));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(health_check),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["backend"], "chat");
        assert_eq!(body["evaluator_ready"], true);
    }

    #[actix_web::test]
    async fn test_health_reports_unconfigured_evaluator() {
        let config = Config {
            openai_api_key: None,
            ..Config::test_config()
        };
        let state = Arc::new(AppState::new(config));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(health_check),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["evaluator_ready"], false);
    }

    #[actix_web::test]
    async fn test_health_reports_unknown_backend() {
        let config = Config {
            backend: Err("unknown evaluation backend 'generat'".to_string()),
            ..Config::test_config()
        };
        let state = Arc::new(AppState::new(config));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(health_check),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["backend"], "unknown");
        assert_eq!(body["evaluator_ready"], false);
    }
}
