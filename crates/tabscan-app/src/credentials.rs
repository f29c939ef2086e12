//! 설정 기반 자격증명 저장소.
//!
//! 환경변수(`GEMINI_API_KEY`)가 설정 파일의 키보다 우선한다.
//! 키는 설정 파일과 메모리에만 존재하며 어디에도 로깅되지 않는다.

use async_trait::async_trait;
use tracing::debug;

use tabscan_core::config_manager::ConfigManager;
use tabscan_core::error::CoreError;
use tabscan_core::ports::credentials::CredentialStore;

/// API 키 환경변수 이름
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// config.json + 환경변수 기반 CredentialStore 구현
pub struct ConfigCredentialStore {
    manager: ConfigManager,
    env_var: String,
}

impl ConfigCredentialStore {
    /// 새 자격증명 저장소 생성
    pub fn new(manager: ConfigManager) -> Self {
        Self::with_env_var(manager, API_KEY_ENV)
    }

    /// 환경변수 이름 지정 생성 (테스트용)
    pub fn with_env_var(manager: ConfigManager, env_var: &str) -> Self {
        Self {
            manager,
            env_var: env_var.to_string(),
        }
    }
}

#[async_trait]
impl CredentialStore for ConfigCredentialStore {
    async fn api_key(&self) -> Result<Option<String>, CoreError> {
        if let Ok(key) = std::env::var(&self.env_var) {
            let key = key.trim().to_string();
            if !key.is_empty() {
                debug!("환경변수에서 API 키 사용");
                return Ok(Some(key));
            }
        }

        let key = self.manager.get().api.api_key;
        if key.is_empty() {
            Ok(None)
        } else {
            Ok(Some(key))
        }
    }

    async fn store_api_key(&self, key: &str) -> Result<(), CoreError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(CoreError::Config("빈 API 키는 저장할 수 없음".to_string()));
        }
        self.manager
            .update_with(|c| c.api.api_key = key.to_string())?;
        debug!("API 키 저장 완료");
        Ok(())
    }
}
