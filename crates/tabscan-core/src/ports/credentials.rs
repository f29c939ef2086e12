//! 자격증명 조회 포트.
//!
//! 구현: `tabscan-app` crate (`ConfigCredentialStore` — config.json + 환경변수)

use async_trait::async_trait;

use crate::error::CoreError;

/// API 키 저장소
///
/// 코어는 키를 소비만 하며 변조/캐싱하지 않는다.
/// 키가 없으면 분석은 시작되지 않아야 한다 (`CoreError::MissingCredential`).
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// 현재 설정된 API 키 (미설정 시 None)
    async fn api_key(&self) -> Result<Option<String>, CoreError>;

    /// API 키 저장
    async fn store_api_key(&self, key: &str) -> Result<(), CoreError>;
}
