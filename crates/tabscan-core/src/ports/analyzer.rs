//! 원격 분석 포트.
//!
//! 구현: `tabscan-network` crate (`GeminiClient`)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::analysis::TabAnalysis;
use crate::models::payload::EncodedPayload;

/// 구조화 분석 제공자 — 스키마 제약 멀티모달 추론 API
///
/// 호출당 단일 왕복. 재시도/중복 제거 없음.
/// API 키는 호출 범위에서만 사용되며 보관하지 않는다.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// 인코딩된 화면 이미지를 분석하여 구조화 결과 반환
    async fn analyze(
        &self,
        api_key: &str,
        payload: &EncodedPayload,
    ) -> Result<TabAnalysis, CoreError>;

    /// 제공자 이름 (예: "gemini-3-flash-preview")
    fn provider_name(&self) -> &str;
}
