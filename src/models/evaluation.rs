use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// A question/answer pair submitted for evaluation. Not validated and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub question: String,
    pub answer: String,
}

impl EvaluationRequest {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationErrorKind {
    Configuration,
    Extraction,
    Transport,
    Remote,
}

/// Outcome of one evaluation call. Failures are values, not errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EvaluationResult {
    Completed {
        raw_text: String,
    },
    Failed {
        kind: EvaluationErrorKind,
        message: String,
    },
}

impl EvaluationResult {
    pub fn completed(raw_text: impl Into<String>) -> Self {
        EvaluationResult::Completed {
            raw_text: raw_text.into(),
        }
    }

    pub fn transport(err: impl std::fmt::Display) -> Self {
        EvaluationResult::Failed {
            kind: EvaluationErrorKind::Transport,
            message: format!("API Request Failed: {}", err),
        }
    }

    /// Non-2xx reply, rendered as `Error: <code> - <body>`.
    pub fn remote_status(status: StatusCode, body: &str) -> Self {
        EvaluationResult::Failed {
            kind: EvaluationErrorKind::Remote,
            message: format!("Error: {} - {}", status.as_u16(), body),
        }
    }

    pub fn remote_error(message: impl std::fmt::Display) -> Self {
        EvaluationResult::Failed {
            kind: EvaluationErrorKind::Remote,
            message: format!("API Error: {}", message),
        }
    }

    pub fn malformed(detail: impl std::fmt::Display) -> Self {
        EvaluationResult::Failed {
            kind: EvaluationErrorKind::Remote,
            message: format!("Malformed response: {}", detail),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, EvaluationResult::Completed { .. })
    }

    pub fn kind(&self) -> Option<EvaluationErrorKind> {
        match self {
            EvaluationResult::Completed { .. } => None,
            EvaluationResult::Failed { kind, .. } => Some(*kind),
        }
    }

    /// The text shown under "Evaluation Result".
    pub fn display_text(&self) -> &str {
        match self {
            EvaluationResult::Completed { raw_text } => raw_text,
            EvaluationResult::Failed { message, .. } => message,
        }
    }
}
