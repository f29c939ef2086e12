//! 애플리케이션 설정 구조체.
//!
//! `config.json`으로 직렬화되며, 알 수 없는 필드는 무시하고
//! 누락된 필드는 기본값으로 채운다 (버전 간 호환).

use serde::{Deserialize, Serialize};

/// Gemini API 기본 엔드포인트
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// 기본 분석 모델
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Gemini API 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiApiConfig {
    /// API 베이스 URL
    pub endpoint: String,
    /// 모델 이름
    pub model: String,
    /// API 키 (메모리와 설정 파일에만 유지 — 로그 금지)
    pub api_key: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: String::new(),
            timeout_secs: 60,
        }
    }
}

/// 화면 캡처 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// 캡처할 모니터 인덱스 (None이면 주 모니터)
    pub monitor_index: Option<usize>,
}

/// 애플리케이션 전체 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Gemini API 설정
    pub api: GeminiApiConfig,
    /// 캡처 설정
    pub capture: CaptureConfig,
}

impl AppConfig {
    /// 기본 설정 생성
    pub fn default_config() -> Self {
        Self::default()
    }
}
