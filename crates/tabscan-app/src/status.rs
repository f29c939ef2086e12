//! 터미널 상태 표시.
//!
//! 파이프라인 진행/완료/실패 메시지를 타임스탬프와 함께 출력한다.
//! 성공 메시지는 일시적 피드백이고, 오류는 스크롤백에 남는다.

use async_trait::async_trait;

use tabscan_core::error::CoreError;
use tabscan_core::ports::status::{Severity, StatusSink};

/// 터미널 StatusSink 구현
pub struct TerminalStatus;

#[async_trait]
impl StatusSink for TerminalStatus {
    async fn notify(&self, message: &str, severity: Severity) -> Result<(), CoreError> {
        let timestamp = chrono::Local::now().format("%H:%M:%S");
        match severity {
            Severity::Info => println!("[{timestamp}] {message}"),
            Severity::Success => println!("[{timestamp}] ✓ {message}"),
            Severity::Error => eprintln!("[{timestamp}] ✗ {message}"),
        }
        Ok(())
    }
}
