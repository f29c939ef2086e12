//! PNG 인코더.
//!
//! 원시 RGBA 비트맵을 PNG로 재인코딩한 뒤 Base64 텍스트로 변환한다.
//! 순수 변환: 동일한 입력 픽셀은 항상 동일한 출력 텍스트를 만든다.

use base64::{engine::general_purpose::STANDARD as B64, Engine};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use tracing::debug;

use tabscan_core::error::CoreError;
use tabscan_core::models::capture::CapturedImage;
use tabscan_core::models::payload::EncodedPayload;

/// 캡처 이미지를 PNG 바이트로 인코딩
pub fn to_png_bytes(image: &CapturedImage) -> Result<Vec<u8>, CoreError> {
    let rgba = RgbaImage::from_raw(image.width, image.height, image.rgba.clone())
        .ok_or_else(|| CoreError::Internal("RGBA 버퍼를 이미지로 변환 실패".to_string()))?;

    let mut bytes = Vec::new();
    rgba.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| CoreError::Internal(format!("PNG 인코딩 실패: {e}")))?;

    debug!(
        "PNG 인코딩: {}x{} → {} bytes",
        image.width,
        image.height,
        bytes.len()
    );

    Ok(bytes)
}

/// 캡처 이미지를 전송용 페이로드로 인코딩 (PNG + Base64)
pub fn encode_payload(image: &CapturedImage) -> Result<EncodedPayload, CoreError> {
    let png = to_png_bytes(image)?;
    Ok(EncodedPayload::png(B64.encode(&png)))
}
