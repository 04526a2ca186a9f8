use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use answer_evaluator::{app_state::AppState, config::Config, handlers};

fn cors(config: &Config) -> Cors {
    match &config.cors_allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(3600),
        None => Cors::default(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let bind_address = (config.web_server_host.clone(), config.web_server_port);
    let max_upload_bytes = config.max_upload_bytes;

    let state = Arc::new(AppState::new(config));

    log::info!(
        "Starting answer evaluator on http://{}:{} (backend: {})",
        bind_address.0,
        bind_address.1,
        state.config.backend_label()
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&state)))
            .app_data(web::PayloadConfig::new(max_upload_bytes))
            .wrap(cors(&state.config))
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
