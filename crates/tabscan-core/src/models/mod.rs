//! TABSCAN 도메인 모델.
//!
//! 분석 파이프라인을 흐르는 데이터 구조체를 정의한다.
//! 모든 모델은 `serde` Serialize/Deserialize를 구현한다.

pub mod analysis;
pub mod capture;
pub mod payload;
