//! 표시용 텍스트 새니타이징.
//!
//! 모델이 만든 문자열은 마크업/터미널 제어 문자를 포함할 수 있다.
//! `SafeText` 생성자 밖에서는 날것의 문자열이 렌더링 표면에 닿지 않는다.

use std::fmt;

/// 새니타이징된 표시용 텍스트
///
/// 생성 시 HTML 특수 문자를 이스케이프하고
/// 제어 문자(개행 제외)를 제거한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeText(String);

impl SafeText {
    /// 신뢰할 수 없는 문자열에서 새니타이징된 텍스트 생성
    pub fn new(raw: &str) -> Self {
        let mut out = String::with_capacity(raw.len());
        for c in raw.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                '\n' => out.push('\n'),
                c if c.is_control() => {}
                c => out.push(c),
            }
        }
        Self(out)
    }

    /// 새니타이징된 문자열 참조
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SafeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SafeText {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(SafeText::new("로그인 페이지").as_str(), "로그인 페이지");
    }

    #[test]
    fn markup_escaped() {
        assert_eq!(
            SafeText::new("<script>alert('x')</script>").as_str(),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn ampersand_and_quotes() {
        assert_eq!(
            SafeText::new(r#"a & "b""#).as_str(),
            "a &amp; &quot;b&quot;"
        );
    }

    #[test]
    fn ansi_escape_stripped() {
        // \x1b[31m — 터미널 색상 제어 시퀀스
        assert_eq!(SafeText::new("\x1b[31mred\x1b[0m").as_str(), "[31mred[0m");
    }

    #[test]
    fn newline_preserved() {
        assert_eq!(SafeText::new("줄1\n줄2").as_str(), "줄1\n줄2");
    }
}
