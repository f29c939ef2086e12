//! # tabscan-app
//!
//! TABSCAN CLI 진입점.
//! 설정/자격증명 로드, 어댑터 와이어링, 분석 세션 실행을 담당한다.

mod credentials;
mod session;
mod status;

use anyhow::{bail, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tabscan_core::config_manager::ConfigManager;
use tabscan_core::ports::analyzer::AnalysisProvider;
use tabscan_core::ports::capturer::TabCapturer;
use tabscan_core::ports::status::{Severity, StatusSink};
use tabscan_network::gemini_client::GeminiClient;
use tabscan_report::renderer::Presentation;
use tabscan_vision::capture::{FileCapture, ScreenCapture};

use crate::credentials::ConfigCredentialStore;
use crate::session::{AnalysisSession, TriggerOutcome};
use crate::status::TerminalStatus;

/// TABSCAN — 화면 캡처 구조화 분석 도구
///
/// 현재 화면(또는 스크린샷 파일)을 Gemini로 분석하여
/// 페이지 제목/양식 필드/버튼/링크/오류 메시지를 JSON으로 추출한다.
#[derive(Parser, Debug)]
#[command(name = "tabscan")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 분석할 스크린샷 파일 (생략 시 현재 화면 캡처)
    image: Option<PathBuf>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,

    /// 설정 파일 경로 (기본: 플랫폼 설정 디렉토리)
    #[arg(long)]
    config: Option<PathBuf>,

    /// API 엔드포인트 재정의
    #[arg(long)]
    endpoint: Option<String>,

    /// 모델 이름 재정의
    #[arg(long, short = 'm')]
    model: Option<String>,

    /// 결과 JSON 저장 경로 (기본: <이미지 이름>_analysis.json)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// 캡처할 모니터 인덱스 (기본: 주 모니터)
    #[arg(long)]
    monitor: Option<usize>,

    /// API 키를 설정 파일에 저장하고 종료
    #[arg(long, value_name = "KEY")]
    set_api_key: Option<String>,

    /// 대화형 모드 — Enter로 반복 분석, q로 종료
    #[arg(long, short = 'i')]
    interactive: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level.clone())),
        )
        .init();

    run(args).await
}

async fn run(args: Args) -> Result<()> {
    let manager = match &args.config {
        Some(path) => ConfigManager::with_path(path.clone())?,
        None => ConfigManager::new()?,
    };
    info!("설정 로드: {}", manager.config_path().display());

    let status: Arc<dyn StatusSink> = Arc::new(TerminalStatus);
    let credentials = Arc::new(ConfigCredentialStore::new(manager.clone()));

    // 키 저장 모드 — 분석 없이 종료
    if let Some(key) = &args.set_api_key {
        use tabscan_core::ports::credentials::CredentialStore;
        credentials.store_api_key(key).await?;
        status.notify("API 키 저장 완료", Severity::Success).await?;
        return Ok(());
    }

    // CLI 재정의는 메모리 설정에만 적용 (파일에 저장하지 않음)
    let mut config = manager.get();
    if let Some(endpoint) = &args.endpoint {
        config.api.endpoint = endpoint.clone();
    }
    if let Some(model) = &args.model {
        config.api.model = model.clone();
    }
    if args.monitor.is_some() {
        config.capture.monitor_index = args.monitor;
    }

    let capturer: Arc<dyn TabCapturer> = match &args.image {
        Some(path) => Arc::new(FileCapture::new(path.clone())),
        None => Arc::new(ScreenCapture::new(config.capture.monitor_index)),
    };

    let analyzer: Arc<dyn AnalysisProvider> = Arc::new(GeminiClient::new(&config.api)?);
    info!(model = %analyzer.provider_name(), source = %capturer.source_name(), "분석기 준비 완료");

    let session = Arc::new(AnalysisSession::new(
        capturer,
        analyzer,
        credentials,
        status.clone(),
    ));

    if args.interactive {
        run_interactive(session, status).await
    } else {
        run_once(&session, &status, args.image.as_deref(), args.output).await
    }
}

/// 단발 분석 — 결과 출력 후 JSON 파일로 저장
async fn run_once(
    session: &AnalysisSession,
    status: &Arc<dyn StatusSink>,
    image: Option<&Path>,
    output: Option<PathBuf>,
) -> Result<()> {
    match session.trigger().await {
        TriggerOutcome::Completed(presentation) => {
            println!("{}", presentation.to_text());

            let path = output.unwrap_or_else(|| default_output_path(image));
            save_result(&presentation, &path)?;
            status
                .notify(&format!("분석 결과 저장: {}", path.display()), Severity::Success)
                .await?;
            Ok(())
        }
        TriggerOutcome::Busy => Ok(()),
        // 원인은 이미 상태 표면에 보고됨
        TriggerOutcome::Failed(_) => bail!("분석 실패"),
    }
}

/// 대화형 모드 — 트리거마다 비동기 분석, 진행 중 재트리거는 no-op
async fn run_interactive(
    session: Arc<AnalysisSession>,
    status: Arc<dyn StatusSink>,
) -> Result<()> {
    status
        .notify("대화형 모드: Enter로 분석, q로 종료", Severity::Info)
        .await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == "q" {
            break;
        }

        let session = session.clone();
        let status = status.clone();
        tokio::spawn(async move {
            if let TriggerOutcome::Completed(presentation) = session.trigger().await {
                println!("{}", presentation.to_text());

                let path = timestamped_output_path();
                match save_result(&presentation, &path) {
                    Ok(()) => {
                        notify_or_log(
                            status.as_ref(),
                            &format!("분석 결과 저장: {}", path.display()),
                            Severity::Success,
                        )
                        .await;
                    }
                    Err(err) => warn!("결과 저장 실패: {err}"),
                }
            }
        });
    }

    Ok(())
}

/// 상태 표시 실패는 분석 흐름을 멈추지 않는다 — 로그만 남긴다
async fn notify_or_log(status: &dyn StatusSink, message: &str, severity: Severity) {
    if let Err(err) = status.notify(message, severity).await {
        warn!("상태 표시 실패: {err}");
    }
}

/// 결과 JSON을 파일로 저장 (원본 JSON 뷰 그대로)
fn save_result(presentation: &Presentation, path: &Path) -> Result<()> {
    std::fs::write(path, format!("{}\n", presentation.raw_json))?;
    Ok(())
}

/// 기본 저장 경로 — 입력 파일 이름에서 유도
fn default_output_path(image: Option<&Path>) -> PathBuf {
    match image.and_then(|p| p.file_stem()).and_then(|s| s.to_str()) {
        Some(stem) => PathBuf::from(format!("{stem}_analysis.json")),
        None => PathBuf::from("tabscan_analysis.json"),
    }
}

/// 대화형 모드 저장 경로 — 실행 시각으로 구분
fn timestamped_output_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("tabscan_{timestamp}_analysis.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_from_image_stem() {
        let path = default_output_path(Some(Path::new("/tmp/shots/login.png")));
        assert_eq!(path, PathBuf::from("login_analysis.json"));
    }

    #[test]
    fn default_output_for_screen_capture() {
        assert_eq!(
            default_output_path(None),
            PathBuf::from("tabscan_analysis.json")
        );
    }

    #[test]
    fn timestamped_path_shape() {
        let path = timestamped_output_path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("tabscan_"));
        assert!(name.ends_with("_analysis.json"));
    }

    #[tokio::test]
    async fn notify_failure_does_not_propagate() {
        struct FailingStatus;

        #[async_trait::async_trait]
        impl StatusSink for FailingStatus {
            async fn notify(
                &self,
                _message: &str,
                _severity: Severity,
            ) -> Result<(), tabscan_core::error::CoreError> {
                Err(tabscan_core::error::CoreError::Internal(
                    "표시 표면 닫힘".to_string(),
                ))
            }
        }

        // 실패해도 로그만 남기고 정상 복귀해야 한다
        notify_or_log(&FailingStatus, "저장 완료", Severity::Success).await;
    }

    #[test]
    fn args_parse_defaults() {
        let args = Args::parse_from(["tabscan"]);
        assert!(args.image.is_none());
        assert_eq!(args.log_level, "info");
        assert!(!args.interactive);
    }

    #[test]
    fn args_parse_image_and_overrides() {
        let args = Args::parse_from([
            "tabscan",
            "shot.png",
            "--model",
            "gemini-2.5-pro",
            "-o",
            "out.json",
        ]);
        assert_eq!(args.image.unwrap(), PathBuf::from("shot.png"));
        assert_eq!(args.model.unwrap(), "gemini-2.5-pro");
        assert_eq!(args.output.unwrap(), PathBuf::from("out.json"));
    }
}
