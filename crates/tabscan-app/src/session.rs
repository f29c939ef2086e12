//! 분석 세션 — 단일 진행 가드 + 파이프라인 오케스트레이션.
//!
//! 세션 인스턴스당 동시에 최대 하나의 분석만 진행된다.
//! 진행 중 재트리거는 no-op이며, 성공/실패 어느 종료 경로에서도
//! 상태는 반드시 Idle로 복원된다 (수동 재시도 허용).
//!
//! 단계 순서는 엄격히 고정: 자격증명 확인 → 캡처 → 인코딩 → 원격 호출 → 렌더링.
//! 자격증명이 없으면 캡처조차 시도하지 않는다.

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, warn};

use tabscan_core::error::CoreError;
use tabscan_core::ports::analyzer::AnalysisProvider;
use tabscan_core::ports::capturer::TabCapturer;
use tabscan_core::ports::credentials::CredentialStore;
use tabscan_core::ports::status::{Severity, StatusSink};
use tabscan_report::renderer::{render, Presentation};
use tabscan_vision::encoder;

/// 세션 상태 — {Idle → InFlight → Idle} 전이만 존재
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Idle,
    InFlight,
}

/// 트리거 결과
#[derive(Debug)]
pub enum TriggerOutcome {
    /// 분석 성공 — 렌더링된 프레젠테이션
    Completed(Box<Presentation>),
    /// 이미 분석 진행 중 — 이번 트리거는 no-op
    Busy,
    /// 분석 실패 (상태 표면에 이미 보고됨)
    Failed(CoreError),
}

/// 분석 세션
pub struct AnalysisSession {
    capturer: Arc<dyn TabCapturer>,
    analyzer: Arc<dyn AnalysisProvider>,
    credentials: Arc<dyn CredentialStore>,
    status: Arc<dyn StatusSink>,
    state: Mutex<SessionState>,
}

impl AnalysisSession {
    /// 새 분석 세션 생성
    pub fn new(
        capturer: Arc<dyn TabCapturer>,
        analyzer: Arc<dyn AnalysisProvider>,
        credentials: Arc<dyn CredentialStore>,
        status: Arc<dyn StatusSink>,
    ) -> Self {
        Self {
            capturer,
            analyzer,
            credentials,
            status,
            state: Mutex::new(SessionState::Idle),
        }
    }

    /// 분석 트리거
    ///
    /// 진행 중이면 `Busy`를 즉시 반환한다. 취소는 지원하지 않는다 —
    /// 시작된 분석은 완료 또는 실패까지 진행된다.
    pub async fn trigger(&self) -> TriggerOutcome {
        let busy = {
            let mut state = self.state.lock();
            if *state == SessionState::InFlight {
                true
            } else {
                *state = SessionState::InFlight;
                false
            }
        };
        if busy {
            self.report("분석이 이미 진행 중입니다", Severity::Info).await;
            return TriggerOutcome::Busy;
        }

        let result = self.run_pipeline().await;

        // 성공/실패 모든 종료 경로에서 무조건 해제
        *self.state.lock() = SessionState::Idle;

        match result {
            Ok(presentation) => {
                self.report("분석 완료", Severity::Success).await;
                TriggerOutcome::Completed(Box::new(presentation))
            }
            Err(err) => {
                self.report(&err.to_string(), Severity::Error).await;
                TriggerOutcome::Failed(err)
            }
        }
    }

    /// 캡처 → 인코딩 → 원격 호출 → 렌더링 (이 순서 고정)
    async fn run_pipeline(&self) -> Result<Presentation, CoreError> {
        let api_key = self
            .credentials
            .api_key()
            .await?
            .ok_or(CoreError::MissingCredential)?;

        self.report("화면 캡처 중...", Severity::Info).await;
        let image = self.capturer.capture().await?;

        let payload = encoder::encode_payload(&image)?;
        drop(image); // 캡처 비트맵은 인코딩 후 즉시 폐기

        self.report("Gemini 분석 중...", Severity::Info).await;
        let analysis = self
            .analyzer
            .analyze(&api_key, &payload)
            .await?;

        debug!(page_type = %analysis.page_type, "파이프라인 완료");
        render(&analysis)
    }

    async fn report(&self, message: &str, severity: Severity) {
        if let Err(err) = self.status.notify(message, severity).await {
            warn!("상태 표시 실패: {err}");
        }
    }
}
