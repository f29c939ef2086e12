//! 전송용 인코딩 페이로드 모델.

use serde::{Deserialize, Serialize};

/// 페이로드 MIME 타입 — 캡처는 항상 PNG로 재인코딩된다
pub const PNG_MIME: &str = "image/png";

/// Base64 인코딩된 이미지 페이로드
///
/// 생성 후 불변이며, 한 번의 분석 요청에서 정확히 한 번 소비된다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedPayload {
    /// Base64 텍스트 (data-URI 접두사 없음)
    pub data: String,
    /// MIME 타입 태그
    pub mime_type: String,
}

impl EncodedPayload {
    /// PNG 페이로드 생성
    pub fn png(data: String) -> Self {
        Self {
            data,
            mime_type: PNG_MIME.to_string(),
        }
    }
}
