//! TABSCAN 핵심 에러 타입.
//!
//! 분석 파이프라인 각 단계(캡처 → 인코딩 → 원격 호출 → 파싱)의
//! 실패 원인을 구분한다. 어댑터 crate는 `CoreError`를 직접 반환한다.

use thiserror::Error;

/// 코어 레이어 에러.
///
/// 원격 호출의 HTTP 실패(`RemoteRequestFailed`)와
/// 성공 응답의 내용 위반(`MalformedEnvelope`, `InvalidResultPayload`)은
/// 사용자에게 다른 원인으로 보고되어야 하므로 분리되어 있다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 캡처 대상 없음 또는 호스트가 캡처를 거부
    #[error("화면 캡처 불가: {0}")]
    CaptureUnavailable(String),

    /// API 키 미설정 — 분석을 시작할 수 없음
    #[error("API 키 미설정. --set-api-key 또는 GEMINI_API_KEY로 설정하세요")]
    MissingCredential,

    /// 원격 API가 비성공 HTTP 상태를 반환
    #[error("원격 요청 실패 ({status}): {message}")]
    RemoteRequestFailed {
        /// HTTP 상태 코드
        status: u16,
        /// 원격 에러 엔벨로프의 error.message (없으면 일반 메시지)
        message: String,
    },

    /// 성공 응답이지만 candidates/parts 구조가 없음
    #[error("응답 엔벨로프에서 결과 텍스트를 찾을 수 없음")]
    MalformedEnvelope,

    /// 결과 텍스트가 JSON이 아니거나 필수 필드 누락
    #[error("분석 결과 파싱 실패: {0}")]
    InvalidResultPayload(String),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// 네트워크 에러 (연결 실패, 타임아웃)
    #[error("네트워크 에러: {0}")]
    Network(String),

    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 내부 에러 (예상치 못한 상황)
    #[error("내부 에러: {0}")]
    Internal(String),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),
}
