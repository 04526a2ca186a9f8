use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    config::{BackendKind, Config},
    constants::prompts::EVALUATOR_SYSTEM_PROMPT,
    errors::{AppError, AppResult},
    models::evaluation::{EvaluationRequest, EvaluationResult},
};

/// A remote model that grades one rendered prompt.
///
/// Implementations never return an error: transport failures, non-2xx replies and
/// malformed bodies all come back as [`EvaluationResult::Failed`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EvaluationBackend: Send + Sync {
    fn name(&self) -> &'static str;

    async fn evaluate(&self, prompt: &str, request: &EvaluationRequest) -> EvaluationResult;
}

/// Selects the backend named by `config.backend`.
///
/// Fails with [`AppError::Configuration`] before any network activity when the
/// backend name is unknown or the chat backend has no API key.
pub fn build_backend(config: &Config) -> AppResult<Arc<dyn EvaluationBackend>> {
    let kind = config.backend.clone().map_err(|e| {
        AppError::Configuration(format!("{}, set EVALUATION_BACKEND to chat or generate", e))
    })?;

    let backend: Arc<dyn EvaluationBackend> = match kind {
        BackendKind::ChatCompletion => Arc::new(ChatCompletionBackend::from_config(config)?),
        BackendKind::Generate => Arc::new(GenerateBackend::from_config(config)?),
    };
    log::info!("Using '{}' evaluation backend", backend.name());
    Ok(backend)
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// OpenAI-compatible `POST {api_base}/chat/completions`.
pub struct ChatCompletionBackend {
    http: reqwest::Client,
    endpoint: String,
    api_key: SecretString,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl ChatCompletionBackend {
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let api_key = config.openai_api_key.clone().ok_or_else(|| {
            AppError::Configuration(
                "OPENAI_API_KEY is not set. Add it to the environment or the .env file."
                    .to_string(),
            )
        })?;

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: format!(
                "{}/chat/completions",
                config.openai_api_base.trim_end_matches('/')
            ),
            api_key,
            model: config.openai_model.clone(),
            max_tokens: config.openai_max_tokens,
            temperature: config.openai_temperature,
        })
    }
}

#[async_trait]
impl EvaluationBackend for ChatCompletionBackend {
    fn name(&self) -> &'static str {
        "chat"
    }

    async fn evaluate(&self, prompt: &str, _request: &EvaluationRequest) -> EvaluationResult {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: EVALUATOR_SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        log::info!("Requesting chat completion from {} ({})", self.endpoint, self.model);
        let sent = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await;

        let parsed: ChatCompletionResponse = match read_json(sent).await {
            Ok(parsed) => parsed,
            Err(failure) => return failure,
        };

        if let Some(error) = parsed.error {
            log::warn!("Chat completion returned an error body: {}", error.message);
            return EvaluationResult::remote_error(error.message);
        }

        match parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
        {
            Some(content) => EvaluationResult::completed(content),
            None => EvaluationResult::malformed("no completion content in response"),
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    session_id: &'a str,
    max_length: u32,
    question: &'a str,
    answer: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

/// Custom generate service: flat JSON in, `{"response": ...}` out, no credential.
pub struct GenerateBackend {
    http: reqwest::Client,
    url: String,
    session_id: String,
    max_length: u32,
}

impl GenerateBackend {
    pub fn from_config(config: &Config) -> AppResult<Self> {
        if config.generate_accept_invalid_certs {
            log::warn!(
                "TLS certificate verification is DISABLED for {}; responses can be tampered with in transit",
                config.generate_url
            );
        }

        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.generate_accept_invalid_certs)
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            http,
            url: config.generate_url.clone(),
            session_id: config.generate_session_id.clone(),
            max_length: config.generate_max_length,
        })
    }
}

#[async_trait]
impl EvaluationBackend for GenerateBackend {
    fn name(&self) -> &'static str {
        "generate"
    }

    async fn evaluate(&self, prompt: &str, request: &EvaluationRequest) -> EvaluationResult {
        let body = GenerateRequest {
            prompt,
            session_id: &self.session_id,
            max_length: self.max_length,
            question: &request.question,
            answer: &request.answer,
        };

        log::info!("Requesting generation from {}", self.url);
        let sent = self.http.post(&self.url).json(&body).send().await;

        match read_json::<GenerateResponse>(sent).await {
            Ok(GenerateResponse {
                response: Some(text),
            }) => EvaluationResult::completed(text),
            Ok(GenerateResponse { response: None }) => {
                EvaluationResult::malformed("missing 'response' field")
            }
            Err(failure) => failure,
        }
    }
}

/// Turns a sent request into a parsed 2xx body, or the failure to show instead.
async fn read_json<T: DeserializeOwned>(
    sent: Result<reqwest::Response, reqwest::Error>,
) -> Result<T, EvaluationResult> {
    let response = sent.map_err(|e| {
        log::error!("Evaluation request failed: {}", e);
        EvaluationResult::transport(e)
    })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| {
        log::error!("Failed to read evaluation response body: {}", e);
        EvaluationResult::transport(e)
    })?;

    if !status.is_success() {
        log::warn!("Evaluation endpoint answered {}", status);
        return Err(EvaluationResult::remote_status(status, &body));
    }

    serde_json::from_str(&body).map_err(|e| {
        log::warn!("Evaluation endpoint returned an unparseable body: {}", e);
        EvaluationResult::malformed(e)
    })
}
