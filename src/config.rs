use std::{env, fmt, str::FromStr};

use secrecy::SecretString;
use uuid::Uuid;

/// Which remote service answers evaluation requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    /// OpenAI-compatible `/chat/completions` API.
    ChatCompletion,
    /// Custom LLaMA3 style `/generate` service.
    Generate,
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "chat" | "openai" | "chat-completion" => Ok(BackendKind::ChatCompletion),
            "generate" | "llama" | "llama3" => Ok(BackendKind::Generate),
            other => Err(format!("unknown evaluation backend '{}'", other)),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::ChatCompletion => write!(f, "chat"),
            BackendKind::Generate => write!(f, "generate"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: Option<String>,
    pub max_upload_bytes: usize,
    /// An unrecognised `EVALUATION_BACKEND` is kept as its error so startup can report it.
    pub backend: Result<BackendKind, String>,
    pub openai_api_key: Option<SecretString>,
    pub openai_api_base: String,
    pub openai_model: String,
    pub openai_max_tokens: u32,
    pub openai_temperature: f32,
    pub generate_url: String,
    pub generate_session_id: String,
    pub generate_max_length: u32,
    pub generate_accept_invalid_certs: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: parse_or("WEB_SERVER_PORT", 8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
            max_upload_bytes: parse_or("MAX_UPLOAD_BYTES", 10 * 1024 * 1024),
            backend: parse_backend(env::var("EVALUATION_BACKEND").ok()),
            openai_api_key: env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            openai_max_tokens: parse_or("OPENAI_MAX_TOKENS", 1000),
            openai_temperature: parse_or("OPENAI_TEMPERATURE", 0.3),
            generate_url: env::var("GENERATE_URL")
                .unwrap_or_else(|_| "https://localhost:8000/generate".to_string()),
            generate_session_id: env::var("GENERATE_SESSION_ID")
                .unwrap_or_else(|_| Uuid::new_v4().to_string()),
            generate_max_length: parse_or("GENERATE_MAX_LENGTH", 1000),
            generate_accept_invalid_certs: env::var("GENERATE_ACCEPT_INVALID_CERTS")
                .ok()
                .is_some_and(|v| parse_flag(&v)),
        }
    }

    /// Backend name for logs and `/health`; `unknown` when the configured name did not parse.
    pub fn backend_label(&self) -> String {
        self.backend
            .as_ref()
            .map_or_else(|_| "unknown".to_string(), |kind| kind.to_string())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: None,
            max_upload_bytes: 1024 * 1024,
            backend: Ok(BackendKind::ChatCompletion),
            openai_api_key: Some(SecretString::from("test-openai-key".to_string())),
            openai_api_base: "http://127.0.0.1:9/v1".to_string(),
            openai_model: "gpt-4o-mini".to_string(),
            openai_max_tokens: 1000,
            openai_temperature: 0.3,
            generate_url: "http://127.0.0.1:9/generate".to_string(),
            generate_session_id: "test-session".to_string(),
            generate_max_length: 1000,
            generate_accept_invalid_certs: false,
        }
    }
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Unset means chat; anything set must name a known backend.
fn parse_backend(value: Option<String>) -> Result<BackendKind, String> {
    value.map_or(Ok(BackendKind::ChatCompletion), |v| v.parse())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.web_server_host.is_empty());
        assert!(!config.openai_model.is_empty());
        assert!(!config.generate_session_id.is_empty());
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.backend, Ok(BackendKind::ChatCompletion));
        assert_eq!(config.openai_max_tokens, 1000);
        assert!(!config.generate_accept_invalid_certs);
    }

    #[test]
    fn test_backend_kind_parsing() {
        assert_eq!("chat".parse::<BackendKind>(), Ok(BackendKind::ChatCompletion));
        assert_eq!(" OpenAI ".parse::<BackendKind>(), Ok(BackendKind::ChatCompletion));
        assert_eq!("generate".parse::<BackendKind>(), Ok(BackendKind::Generate));
        assert_eq!("llama3".parse::<BackendKind>(), Ok(BackendKind::Generate));
        assert!("carrier-pigeon".parse::<BackendKind>().is_err());
    }

    #[test]
    fn test_parse_backend_keeps_unknown_names() {
        assert_eq!(parse_backend(None), Ok(BackendKind::ChatCompletion));
        assert_eq!(
            parse_backend(Some("generate".to_string())),
            Ok(BackendKind::Generate)
        );
        assert_eq!(
            parse_backend(Some("generat".to_string())),
            Err("unknown evaluation backend 'generat'".to_string())
        );
    }

    #[test]
    fn test_accept_invalid_certs_defaults_to_false() {
        if env::var_os("GENERATE_ACCEPT_INVALID_CERTS").is_none() {
            assert!(!Config::from_env().generate_accept_invalid_certs);
        }
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" 1 "));
        assert!(parse_flag("YES"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }
}
