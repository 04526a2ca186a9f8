use std::sync::Arc;

use serde::Serialize;

use crate::{
    constants::prompts::{DEFAULT_ANSWER, DEFAULT_QUESTION},
    errors::{AppError, AppResult},
    models::evaluation::{EvaluationRequest, EvaluationResult},
    services::{
        evaluation_client::EvaluationBackend,
        prompt_builder::build_prompt,
        text_extractor::{self, UploadedDocument},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShellState {
    Idle,
    AnswerResolved,
    Evaluated,
}

/// What the front-end renders after each interaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShellView {
    pub state: ShellState,
    pub question: String,
    pub answer_preview: String,
    pub notice: Option<String>,
    pub evaluation_result: Option<String>,
    pub evaluation: Option<EvaluationResult>,
}

/// One user's interaction: inputs, an optional upload, and at most one evaluation in flight.
///
/// Every transition is driven by a method call; nothing happens in the background.
pub struct PresentationShell {
    evaluator: Result<Arc<dyn EvaluationBackend>, AppError>,
    state: ShellState,
    question: String,
    answer: String,
    notice: Option<String>,
    evaluation: Option<EvaluationResult>,
}

impl PresentationShell {
    pub fn new(evaluator: Result<Arc<dyn EvaluationBackend>, AppError>) -> Self {
        Self {
            evaluator,
            state: ShellState::Idle,
            question: DEFAULT_QUESTION.to_string(),
            answer: DEFAULT_ANSWER.to_string(),
            notice: None,
            evaluation: None,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
        self.reset_to_idle();
    }

    pub fn set_answer(&mut self, answer: impl Into<String>) {
        self.answer = answer.into();
        self.reset_to_idle();
    }

    /// Replaces the answer with the uploaded document's text.
    ///
    /// On failure the previous answer and state are kept.
    pub fn upload(&mut self, document: &UploadedDocument) -> AppResult<()> {
        let text = text_extractor::extract(document).map_err(|e| {
            log::warn!("Rejected {} upload: {}", document.media_type.label(), e);
            e
        })?;

        self.answer = text;
        self.notice = Some(format!(
            "Extracted text from {}.",
            document.media_type.label()
        ));
        self.evaluation = None;
        self.state = ShellState::AnswerResolved;
        Ok(())
    }

    /// Sends the current question and answer for grading and stores the result.
    ///
    /// Blocked with the configuration error, without any network call, when no
    /// evaluator could be built.
    pub async fn evaluate(&mut self) -> AppResult<&EvaluationResult> {
        let evaluator = match &self.evaluator {
            Ok(evaluator) => Arc::clone(evaluator),
            Err(e) => {
                log::error!("Evaluation blocked: {}", e);
                return Err(e.clone());
            }
        };

        let request = EvaluationRequest::new(self.question.clone(), self.answer.clone());
        let prompt = build_prompt(&request.question, &request.answer);

        log::info!("Evaluating answer via '{}'", evaluator.name());
        let result = evaluator.evaluate(&prompt, &request).await;
        if !result.is_completed() {
            log::warn!(
                "Evaluation via '{}' failed: {}",
                evaluator.name(),
                result.display_text()
            );
        }

        self.state = ShellState::Evaluated;
        self.notice = None;
        let stored = self.evaluation.insert(result);
        Ok(&*stored)
    }

    pub fn view(&self) -> ShellView {
        ShellView {
            state: self.state,
            question: self.question.clone(),
            answer_preview: self.answer.clone(),
            notice: self.notice.clone(),
            evaluation_result: self
                .evaluation
                .as_ref()
                .map(|result| result.display_text().to_string()),
            evaluation: self.evaluation.clone(),
        }
    }

    fn reset_to_idle(&mut self) {
        self.state = ShellState::Idle;
        self.notice = None;
        self.evaluation = None;
    }
}
