//! 화면 캡처 포트.
//!
//! 구현: `tabscan-vision` crate (`ScreenCapture`, `FileCapture`)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::capture::CapturedImage;

/// 캡처 제공자 — 현재 보이는 화면 또는 스크린샷 파일
///
/// 호출 시점의 화면을 그대로 담는다. 영역 선택이나 크롭은 없으며,
/// 캡처 대상이 없으면 `CoreError::CaptureUnavailable`로 실패한다.
#[async_trait]
pub trait TabCapturer: Send + Sync {
    /// 단일 정지 이미지 캡처
    async fn capture(&self) -> Result<CapturedImage, CoreError>;

    /// 캡처 소스 이름 (예: "screen", "file")
    fn source_name(&self) -> &str;
}
