//! Gemini 분석 클라이언트.
//!
//! 캡처 이미지를 `generateContent`로 전송하고 스키마 제약 JSON 결과를 파싱한다.
//!
//! **보안**:
//! - API 키는 `x-goog-api-key` 요청 헤더로만 전달 — 본문/쿼리 스트링 금지
//! - API 키는 로그에 남기지 않는다
//! - 호출당 단일 왕복, 재시도 없음

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, warn};

use tabscan_core::config::GeminiApiConfig;
use tabscan_core::error::CoreError;
use tabscan_core::models::analysis::TabAnalysis;
use tabscan_core::models::payload::EncodedPayload;
use tabscan_core::ports::analyzer::AnalysisProvider;

use crate::schema::analysis_schema;

/// 추출 지시 프롬프트 — 모든 요청에 동일하게 사용
const ANALYSIS_PROMPT: &str = "\
Analyze this browser tab screenshot and extract all visible information.

Focus on:
- Page title and main heading
- All form fields (labels, types, whether required)
- All buttons and their purposes
- Navigation links
- Any error or warning messages
- The overall purpose and type of the page

Be thorough and accurate. Extract exactly what you see.";

/// 비성공 응답에 error.message가 없을 때의 대체 메시지
const GENERIC_FAILURE: &str = "API 요청 실패";

// ============================================================
// GeminiClient — Gemini generateContent 클라이언트
// ============================================================

/// Gemini 구조화 분석 클라이언트
///
/// 엔드포인트/모델/타임아웃은 설정에서 오고, API 키는 호출 시점에
/// 자격증명 저장소에서 받아 호출 범위에서만 사용한다.
#[derive(Debug)]
pub struct GeminiClient {
    /// HTTP 클라이언트
    http_client: reqwest::Client,
    /// API 베이스 URL
    endpoint: String,
    /// 모델 이름
    model: String,
}

impl GeminiClient {
    /// 새 GeminiClient 생성
    pub fn new(config: &GeminiApiConfig) -> Result<Self, CoreError> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CoreError::Network(format!("HTTP 클라이언트 생성 실패: {e}")))?;

        debug!(
            endpoint = %config.endpoint,
            model = %config.model,
            timeout = config.timeout_secs,
            "GeminiClient 초기화"
        );

        Ok(Self {
            http_client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    /// generateContent 요청 URL
    fn request_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        )
    }

    /// 요청 본문 구성 — 지시 텍스트 + 인라인 이미지 + 스키마 제약
    fn build_request_body(payload: &EncodedPayload) -> Value {
        json!({
            "contents": [{
                "parts": [
                    { "text": ANALYSIS_PROMPT },
                    {
                        "inline_data": {
                            "mime_type": payload.mime_type,
                            "data": payload.data
                        }
                    }
                ]
            }],
            "generationConfig": {
                "response_mime_type": "application/json",
                "response_schema": analysis_schema()
            }
        })
    }

    /// 비성공 응답 본문에서 error.message 추출
    fn error_message_from_body(body: &str) -> Option<String> {
        let value: Value = serde_json::from_str(body).ok()?;
        value
            .get("error")?
            .get("message")?
            .as_str()
            .map(|s| s.to_string())
    }

    /// 성공 엔벨로프에서 첫 후보의 텍스트 파트 추출
    fn extract_candidate_text(body: &str) -> Result<String, CoreError> {
        let value: Value =
            serde_json::from_str(body).map_err(|_| CoreError::MalformedEnvelope)?;

        value
            .get("candidates")
            .and_then(|c| c.as_array())
            .and_then(|arr| arr.first())
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.as_array())
            .and_then(|arr| arr.first())
            .and_then(|part| part.get("text"))
            .and_then(|t| t.as_str())
            .map(|s| s.to_string())
            .ok_or(CoreError::MalformedEnvelope)
    }

    /// 결과 텍스트를 TabAnalysis로 파싱
    ///
    /// HTTP 호출 자체는 성공했으므로 파싱 실패는
    /// `RemoteRequestFailed`가 아닌 `InvalidResultPayload`로 보고한다.
    fn parse_analysis(text: &str) -> Result<TabAnalysis, CoreError> {
        serde_json::from_str(text).map_err(|e| CoreError::InvalidResultPayload(e.to_string()))
    }
}

#[async_trait]
impl AnalysisProvider for GeminiClient {
    async fn analyze(
        &self,
        api_key: &str,
        payload: &EncodedPayload,
    ) -> Result<TabAnalysis, CoreError> {
        let request_body = Self::build_request_body(payload);

        debug!(
            model = %self.model,
            payload_bytes = payload.data.len(),
            "Gemini 분석 요청"
        );

        let response = self
            .http_client
            .post(self.request_url())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| CoreError::Network(format!("Gemini API 호출 실패: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CoreError::Network(format!("Gemini API 응답 읽기 실패: {e}")))?;

        if !status.is_success() {
            warn!(status = %status, "Gemini API 오류 응답");
            return Err(CoreError::RemoteRequestFailed {
                status: status.as_u16(),
                message: Self::error_message_from_body(&body)
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            });
        }

        let text = Self::extract_candidate_text(&body)?;
        let analysis = Self::parse_analysis(&text)?;

        debug!(
            page_type = %analysis.page_type,
            fields = analysis.form_fields.len(),
            buttons = analysis.buttons.len(),
            "Gemini 분석 완료"
        );

        Ok(analysis)
    }

    fn provider_name(&self) -> &str {
        &self.model
    }
}

// ============================================================
// 테스트
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tabscan_core::config::GeminiApiConfig;

    fn test_config(endpoint: &str) -> GeminiApiConfig {
        GeminiApiConfig {
            endpoint: endpoint.to_string(),
            model: "gemini-3-flash-preview".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }

    fn test_payload() -> EncodedPayload {
        EncodedPayload::png("aW1hZ2UtYnl0ZXM=".to_string())
    }

    #[test]
    fn request_url_shape() {
        let client = GeminiClient::new(&test_config("https://example.com/")).unwrap();
        assert_eq!(
            client.request_url(),
            "https://example.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn request_body_structure() {
        let body = GeminiClient::build_request_body(&test_payload());

        let parts = &body["contents"][0]["parts"];
        assert_eq!(parts[0]["text"].as_str().unwrap(), ANALYSIS_PROMPT);
        assert_eq!(
            parts[1]["inline_data"]["mime_type"].as_str().unwrap(),
            "image/png"
        );
        assert_eq!(
            parts[1]["inline_data"]["data"].as_str().unwrap(),
            "aW1hZ2UtYnl0ZXM="
        );
        assert_eq!(
            body["generationConfig"]["response_mime_type"],
            "application/json"
        );
        assert_eq!(
            body["generationConfig"]["response_schema"],
            *analysis_schema()
        );
    }

    #[test]
    fn extract_candidate_text_valid() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"{}"}]}}]}"#;
        assert_eq!(GeminiClient::extract_candidate_text(body).unwrap(), "{}");
    }

    #[test]
    fn extract_candidate_text_empty_candidates() {
        let body = r#"{"candidates":[]}"#;
        assert_matches!(
            GeminiClient::extract_candidate_text(body),
            Err(CoreError::MalformedEnvelope)
        );
    }

    #[test]
    fn extract_candidate_text_non_json_envelope() {
        assert_matches!(
            GeminiClient::extract_candidate_text("<html>oops</html>"),
            Err(CoreError::MalformedEnvelope)
        );
    }

    #[test]
    fn parse_analysis_rejects_non_json() {
        assert_matches!(
            GeminiClient::parse_analysis("{not json"),
            Err(CoreError::InvalidResultPayload(_))
        );
    }

    #[test]
    fn parse_analysis_rejects_missing_required() {
        assert_matches!(
            GeminiClient::parse_analysis(r#"{"page_title":"T"}"#),
            Err(CoreError::InvalidResultPayload(_))
        );
    }

    #[test]
    fn error_message_extraction() {
        let body = r#"{"error":{"code":400,"message":"API key not valid"}}"#;
        assert_eq!(
            GeminiClient::error_message_from_body(body).unwrap(),
            "API key not valid"
        );
        assert!(GeminiClient::error_message_from_body("Internal Server Error").is_none());
    }

    #[tokio::test]
    async fn analyze_success_login_page() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "POST",
                "/v1beta/models/gemini-3-flash-preview:generateContent",
            )
            .match_header("x-goog-api-key", "test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"candidates":[{"content":{"parts":[{"text":"{\"page_title\":\"Login\",\"page_type\":\"auth\",\"description\":\"Sign-in form\",\"form_fields\":[{\"label\":\"Email\",\"field_type\":\"text\",\"required\":true}]}"}]}}]}"#,
            )
            .create_async()
            .await;

        let client = GeminiClient::new(&test_config(&server.url())).unwrap();
        let analysis = client.analyze("test-key", &test_payload()).await.unwrap();

        assert_eq!(analysis.page_title, "Login");
        assert_eq!(analysis.page_type, "auth");
        assert_eq!(analysis.form_fields.len(), 1);
        assert_eq!(analysis.form_fields[0].label, "Email");
        assert!(analysis.form_fields[0].required);
        assert!(analysis.buttons.is_empty());
        assert!(analysis.links.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn analyze_http_error_with_envelope() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock(
                "POST",
                "/v1beta/models/gemini-3-flash-preview:generateContent",
            )
            .with_status(400)
            .with_body(r#"{"error":{"code":400,"message":"API key not valid"}}"#)
            .create_async()
            .await;

        let client = GeminiClient::new(&test_config(&server.url())).unwrap();
        let result = client.analyze("bad-key", &test_payload()).await;

        assert_matches!(
            result,
            Err(CoreError::RemoteRequestFailed { status: 400, message }) => {
                assert_eq!(message, "API key not valid");
            }
        );
    }

    #[tokio::test]
    async fn analyze_http_error_without_envelope() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock(
                "POST",
                "/v1beta/models/gemini-3-flash-preview:generateContent",
            )
            .with_status(503)
            .with_body("Service Unavailable")
            .create_async()
            .await;

        let client = GeminiClient::new(&test_config(&server.url())).unwrap();
        let result = client.analyze("test-key", &test_payload()).await;

        assert_matches!(
            result,
            Err(CoreError::RemoteRequestFailed { status: 503, message }) => {
                assert_eq!(message, GENERIC_FAILURE);
            }
        );
    }

    #[tokio::test]
    async fn analyze_malformed_envelope() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock(
                "POST",
                "/v1beta/models/gemini-3-flash-preview:generateContent",
            )
            .with_status(200)
            .with_body(r#"{"candidates":[{"content":{"parts":[]}}]}"#)
            .create_async()
            .await;

        let client = GeminiClient::new(&test_config(&server.url())).unwrap();
        let result = client.analyze("test-key", &test_payload()).await;
        assert_matches!(result, Err(CoreError::MalformedEnvelope));
    }

    #[tokio::test]
    async fn analyze_invalid_result_payload() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock(
                "POST",
                "/v1beta/models/gemini-3-flash-preview:generateContent",
            )
            .with_status(200)
            .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"{not json"}]}}]}"#)
            .create_async()
            .await;

        let client = GeminiClient::new(&test_config(&server.url())).unwrap();
        let result = client.analyze("test-key", &test_payload()).await;
        assert_matches!(result, Err(CoreError::InvalidResultPayload(_)));
    }

    #[tokio::test]
    async fn analyze_network_error() {
        // 도달 불가 URL → 네트워크 에러
        let client = GeminiClient::new(&test_config("http://127.0.0.1:1")).unwrap();
        let result = client.analyze("test-key", &test_payload()).await;
        assert_matches!(result, Err(CoreError::Network(_)));
    }

    #[test]
    fn api_key_not_in_url_or_body() {
        let client = GeminiClient::new(&test_config("https://example.com")).unwrap();
        assert!(!client.request_url().contains("key="));

        let body = GeminiClient::build_request_body(&test_payload()).to_string();
        assert!(!body.contains("api_key"));
    }
}
