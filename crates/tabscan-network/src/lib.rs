//! # tabscan-network
//!
//! 원격 추론 어댑터 크레이트.
//! Gemini `generateContent` 호출(스키마 제약 JSON 출력)과
//! 응답 스키마 상수를 제공한다.

pub mod gemini_client;
pub mod schema;
