use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub backend: String,
    pub evaluator_ready: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serializes() {
        let json = serde_json::to_value(HealthResponse {
            status: "healthy",
            version: "0.1.0",
            backend: "chat".to_string(),
            evaluator_ready: false,
        })
        .unwrap();

        assert_eq!(json["status"], "healthy");
        assert_eq!(json["backend"], "chat");
        assert_eq!(json["evaluator_ready"], false);
    }
}
