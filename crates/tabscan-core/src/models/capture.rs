//! 캡처 이미지 모델.
//!
//! 캡처 직후의 원시 비트맵. 분석 요청마다 새로 생성되고
//! 인코딩 후 폐기된다 (디스크에 저장하지 않는다).

use crate::error::CoreError;

/// 캡처된 화면의 원시 RGBA 비트맵
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    /// 가로 픽셀 수
    pub width: u32,
    /// 세로 픽셀 수
    pub height: u32,
    /// RGBA 픽셀 데이터 (width * height * 4 바이트)
    pub rgba: Vec<u8>,
}

impl CapturedImage {
    /// 새 캡처 이미지 생성
    ///
    /// 버퍼 길이가 `width * height * 4`와 일치하지 않으면 에러.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, CoreError> {
        let expected = (width as usize) * (height as usize) * 4;
        if rgba.len() != expected {
            return Err(CoreError::Internal(format!(
                "RGBA 버퍼 길이 불일치: expected={expected}, actual={}",
                rgba.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }
}
