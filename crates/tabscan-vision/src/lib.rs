//! # tabscan-vision
//!
//! 이미지 획득/인코딩 크레이트.
//! 화면 캡처(xcap), 스크린샷 파일 로드, PNG 재인코딩 + Base64 변환 등
//! 분석 요청 전의 이미지 전처리 단계를 담당한다.

pub mod capture;
pub mod encoder;
