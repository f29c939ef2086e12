//! 탭 분석 결과 모델.
//!
//! 모델이 스키마에 맞춰 출력한 JSON 텍스트를 파싱한 구조체.
//! `page_title` / `page_type` / `description`은 파싱 성공 시 항상 존재하며,
//! 시퀀스 필드는 모델이 생략하면 빈 벡터가 된다 (absent가 아님).
//! 모든 문자열 값은 신뢰할 수 없는 텍스트로 취급한다 — 렌더링 시 새니타이징 필수.

use serde::{Deserialize, Serialize};

/// 화면에서 발견된 양식 필드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    /// 필드 레이블 또는 placeholder 텍스트
    pub label: String,
    /// 필드 종류 (text, email, password, select 등)
    pub field_type: String,
    /// 화면에 보이는 현재 값
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// 필수 입력 여부
    #[serde(default)]
    pub required: bool,
}

/// 화면에서 발견된 버튼/클릭 요소
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonInfo {
    /// 버튼 텍스트
    pub text: String,
    /// 버튼 종류 (submit, button, link 등)
    pub button_type: String,
    /// 주 액션 버튼 여부
    #[serde(default)]
    pub primary: bool,
}

/// 브라우저 탭 분석 결과 전체
///
/// 스키마가 정의하지 않은 추가 필드는 파싱 시 무시한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabAnalysis {
    /// 페이지 제목
    pub page_title: String,
    /// 스크린샷에서 보이는 URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// 페이지의 주 제목(헤딩)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_heading: Option<String>,
    /// 발견된 양식 필드 (화면 순서 유지)
    #[serde(default)]
    pub form_fields: Vec<FormField>,
    /// 발견된 버튼 (화면 순서 유지)
    #[serde(default)]
    pub buttons: Vec<ButtonInfo>,
    /// 내비게이션 링크
    #[serde(default)]
    pub links: Vec<String>,
    /// 에러/경고 메시지
    #[serde(default)]
    pub error_messages: Vec<String>,
    /// 페이지 종류 (login, signup, dashboard 등)
    pub page_type: String,
    /// 페이지 용도 요약
    pub description: String,
}
