//! 화면/파일 캡처.
//!
//! xcap 기반 모니터 캡처와 스크린샷 파일 로드.
//! 두 구현 모두 `TabCapturer` 포트로 노출된다.

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;
use xcap::Monitor;

use tabscan_core::error::CoreError;
use tabscan_core::models::capture::CapturedImage;
use tabscan_core::ports::capturer::TabCapturer;

/// 화면 캡처 — xcap 기반
///
/// `monitor_index`가 None이면 주 모니터를, 없으면 첫 번째 모니터를 캡처한다.
pub struct ScreenCapture {
    monitor_index: Option<usize>,
}

impl ScreenCapture {
    /// 새 캡처 인스턴스 생성
    pub fn new(monitor_index: Option<usize>) -> Self {
        Self { monitor_index }
    }

    fn capture_sync(&self) -> Result<CapturedImage, CoreError> {
        let monitors = Monitor::all()
            .map_err(|e| CoreError::CaptureUnavailable(format!("모니터 목록 조회 실패: {e}")))?;

        let monitor = match self.monitor_index {
            Some(index) => monitors.into_iter().nth(index).ok_or_else(|| {
                CoreError::CaptureUnavailable(format!("모니터 인덱스 {index} 없음"))
            })?,
            None => monitors
                .into_iter()
                .find(|m| m.is_primary().unwrap_or(false))
                .or_else(|| Monitor::all().ok()?.into_iter().next())
                .ok_or_else(|| {
                    CoreError::CaptureUnavailable("모니터를 찾을 수 없음".to_string())
                })?,
        };

        let image = monitor
            .capture_image()
            .map_err(|e| CoreError::CaptureUnavailable(format!("화면 캡처 실패: {e}")))?;

        debug!("화면 캡처 완료: {}x{}", image.width(), image.height());

        let (width, height) = (image.width(), image.height());
        CapturedImage::new(width, height, image.into_raw())
    }
}

#[async_trait]
impl TabCapturer for ScreenCapture {
    async fn capture(&self) -> Result<CapturedImage, CoreError> {
        self.capture_sync()
    }

    fn source_name(&self) -> &str {
        "screen"
    }
}

/// 파일 캡처 — 기존 스크린샷 파일 로드
pub struct FileCapture {
    path: PathBuf,
}

impl FileCapture {
    /// 분석할 스크린샷 파일 지정
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load_sync(&self) -> Result<CapturedImage, CoreError> {
        let image = image::open(&self.path).map_err(|e| {
            CoreError::CaptureUnavailable(format!(
                "스크린샷 파일 로드 실패: {}: {e}",
                self.path.display()
            ))
        })?;

        let rgba = image.to_rgba8();
        let (width, height) = (rgba.width(), rgba.height());
        debug!("스크린샷 파일 로드: {} ({width}x{height})", self.path.display());

        CapturedImage::new(width, height, rgba.into_raw())
    }
}

#[async_trait]
impl TabCapturer for FileCapture {
    async fn capture(&self) -> Result<CapturedImage, CoreError> {
        self.load_sync()
    }

    fn source_name(&self) -> &str {
        "file"
    }
}
