//! 분석 결과 렌더러.
//!
//! `TabAnalysis`를 고정된 순서의 표시 섹션으로 투영한다.
//! 순수 함수: 같은 입력은 항상 같은 프레젠테이션을 만들고,
//! 시퀀스 필드는 파싱된 순서 그대로 유지한다 (재정렬 금지).

use tracing::debug;

use tabscan_core::error::CoreError;
use tabscan_core::models::analysis::TabAnalysis;

use crate::sanitize::SafeText;

/// 표시 섹션 종류 — 선언 순서가 곧 표시 순서
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// 페이지 정보 (항상 존재)
    PageInfo,
    /// 양식 필드 (비어 있으면 생략)
    FormFields,
    /// 버튼 (비어 있으면 생략)
    Buttons,
    /// 링크 (비어 있으면 생략)
    Links,
    /// 오류 메시지 (비어 있으면 생략)
    ErrorMessages,
}

/// 표시 섹션 — 제목 + 새니타이징된 줄 목록
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// 섹션 종류
    pub kind: SectionKind,
    /// 섹션 제목 (고정 문자열 + 항목 수)
    pub title: String,
    /// 표시 줄 (입력 순서 유지)
    pub lines: Vec<SafeText>,
}

/// 렌더링 결과 — 순서 있는 섹션 + 항상 존재하는 원본 JSON 뷰
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    /// 표시 섹션 (고정 순서)
    pub sections: Vec<Section>,
    /// 전체 결과의 pretty JSON (복사/내보내기용, 새니타이징하지 않은 원문)
    pub raw_json: String,
}

impl Presentation {
    /// 터미널 출력용 텍스트 투영
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            out.push_str(&format!("=== {} ===\n", section.title));
            for line in &section.lines {
                out.push_str(&format!("  {line}\n"));
            }
            out.push('\n');
        }
        out.push_str("=== 원본 JSON ===\n");
        out.push_str(&self.raw_json);
        out.push('\n');
        out
    }
}

/// 분석 결과를 프레젠테이션으로 렌더링
///
/// 섹션 순서는 고정: 페이지 정보 → 양식 필드 → 버튼 → 링크 → 오류 메시지.
/// 빈 시퀀스 섹션은 통째로 생략하며, 원본 JSON 뷰는 항상 포함된다.
pub fn render(analysis: &TabAnalysis) -> Result<Presentation, CoreError> {
    let mut sections = Vec::new();

    // 페이지 정보
    let mut info_lines = vec![SafeText::new(&analysis.page_title)];
    if let Some(heading) = &analysis.main_heading {
        info_lines.push(SafeText::new(heading));
    }
    if let Some(url) = &analysis.url {
        info_lines.push(SafeText::new(url));
    }
    info_lines.push(SafeText::new(&analysis.page_type));
    info_lines.push(SafeText::new(&analysis.description));
    sections.push(Section {
        kind: SectionKind::PageInfo,
        title: "페이지 정보".to_string(),
        lines: info_lines,
    });

    // 양식 필드
    if !analysis.form_fields.is_empty() {
        let lines = analysis
            .form_fields
            .iter()
            .map(|field| {
                let mut line = format!("{} [{}]", field.label, field.field_type);
                if field.required {
                    line.push_str(" (필수)");
                }
                if let Some(value) = &field.value {
                    line.push_str(&format!(" 값: {value}"));
                }
                SafeText::new(&line)
            })
            .collect();
        sections.push(Section {
            kind: SectionKind::FormFields,
            title: format!("양식 필드 ({})", analysis.form_fields.len()),
            lines,
        });
    }

    // 버튼
    if !analysis.buttons.is_empty() {
        let lines = analysis
            .buttons
            .iter()
            .map(|button| {
                let mut line = format!("{} [{}]", button.text, button.button_type);
                if button.primary {
                    line.push_str(" (주 버튼)");
                }
                SafeText::new(&line)
            })
            .collect();
        sections.push(Section {
            kind: SectionKind::Buttons,
            title: format!("버튼 ({})", analysis.buttons.len()),
            lines,
        });
    }

    // 링크
    if !analysis.links.is_empty() {
        sections.push(Section {
            kind: SectionKind::Links,
            title: format!("링크 ({})", analysis.links.len()),
            lines: analysis.links.iter().map(|l| SafeText::new(l)).collect(),
        });
    }

    // 오류 메시지
    if !analysis.error_messages.is_empty() {
        sections.push(Section {
            kind: SectionKind::ErrorMessages,
            title: "오류 메시지".to_string(),
            lines: analysis
                .error_messages
                .iter()
                .map(|m| SafeText::new(m))
                .collect(),
        });
    }

    let raw_json = serde_json::to_string_pretty(analysis)?;

    debug!(sections = sections.len(), "프레젠테이션 생성");

    Ok(Presentation { sections, raw_json })
}
