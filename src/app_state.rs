use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppError,
    services::{
        evaluation_client::{build_backend, EvaluationBackend},
        presentation_shell::PresentationShell,
    },
};

#[derive(Clone)]
pub struct AppState {
    /// `Err` keeps the startup configuration error so every evaluate request can report it.
    pub evaluator: Result<Arc<dyn EvaluationBackend>, AppError>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let evaluator = build_backend(&config);
        if let Err(e) = &evaluator {
            log::error!("Evaluation is disabled until fixed: {}", e);
        }

        Self {
            evaluator,
            config: Arc::new(config),
        }
    }

    pub fn with_evaluator(config: Config, evaluator: Arc<dyn EvaluationBackend>) -> Self {
        Self {
            evaluator: Ok(evaluator),
            config: Arc::new(config),
        }
    }

    /// A fresh shell per interaction; nothing is shared between users but the backend.
    pub fn shell(&self) -> PresentationShell {
        PresentationShell::new(self.evaluator.clone())
    }
}
