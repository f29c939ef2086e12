//! 상태 알림 포트.
//!
//! 구현: `tabscan-app` crate (`TerminalStatus`)

use async_trait::async_trait;

use crate::error::CoreError;

/// 상태 메시지 심각도
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// 진행 상황 안내
    Info,
    /// 완료 — 일시적 피드백
    Success,
    /// 실패 — 다음 상태 갱신까지 유지
    Error,
}

/// 상태 표시 인터페이스
///
/// 파이프라인의 모든 에러는 이 포트를 통해 사용자에게 보고된다.
/// 조용히 삼켜지는 에러는 없다.
#[async_trait]
pub trait StatusSink: Send + Sync {
    /// 상태 메시지 표시
    async fn notify(&self, message: &str, severity: Severity) -> Result<(), CoreError>;
}
