//! # tabscan-report
//!
//! 분석 결과를 표시용 프레젠테이션으로 변환하는 크레이트.
//! 모델 출력은 스키마에 맞더라도 신뢰할 수 없는 텍스트이므로
//! 모든 값은 [`sanitize::SafeText`] 생성자를 거쳐야 렌더링에 들어간다.

pub mod renderer;
pub mod sanitize;
