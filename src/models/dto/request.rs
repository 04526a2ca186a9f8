use serde::Deserialize;

/// Body of `POST /api/evaluations`. Omitted fields fall back to the shell defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluateRequestDto {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

/// Query string accompanying a raw document upload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadParams {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_request_fields_are_optional() {
        let dto: EvaluateRequestDto = serde_json::from_str("{}").unwrap();
        assert!(dto.question.is_none());
        assert!(dto.answer.is_none());

        let dto: EvaluateRequestDto =
            serde_json::from_str(r#"{"question":"Q?","answer":"A."}"#).unwrap();
        assert_eq!(dto.question.as_deref(), Some("Q?"));
        assert_eq!(dto.answer.as_deref(), Some("A."));
    }
}
