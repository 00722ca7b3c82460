/*
 * Responsibility
 * - GET /health のレスポンス DTO
 * - 固定値なので Deserialize は持たない
 */
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub const OK: Self = Self { status: "ok" };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_compactly() {
        let body = serde_json::to_string(&HealthResponse::OK).unwrap();
        assert_eq!(body, r#"{"status":"ok"}"#);
    }
}
