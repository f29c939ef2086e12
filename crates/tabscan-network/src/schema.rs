//! 분석 응답 스키마.
//!
//! Gemini `generationConfig.response_schema`에 그대로 전달되는
//! 고정 JSON Schema. 프로세스 수명 동안 불변이며 요청별로 변형하지 않는다.
//! 호출부에 리터럴을 흩뿌리지 않도록 단일 상수로 관리한다.

use once_cell::sync::Lazy;
use serde_json::{json, Value};

/// 파싱 성공 시 반드시 존재해야 하는 필드
pub const REQUIRED_FIELDS: [&str; 3] = ["page_title", "page_type", "description"];

static ANALYSIS_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "properties": {
            "page_title": { "type": "string", "description": "Title of the page" },
            "url": { "type": "string", "nullable": true, "description": "URL if visible" },
            "main_heading": { "type": "string", "nullable": true, "description": "Main heading" },
            "form_fields": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "label": { "type": "string" },
                        "field_type": { "type": "string" },
                        "value": { "type": "string", "nullable": true },
                        "required": { "type": "boolean" }
                    },
                    "required": ["label", "field_type", "required"]
                }
            },
            "buttons": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "text": { "type": "string" },
                        "button_type": { "type": "string" },
                        "primary": { "type": "boolean" }
                    },
                    "required": ["text", "button_type", "primary"]
                }
            },
            "links": { "type": "array", "items": { "type": "string" } },
            "error_messages": { "type": "array", "items": { "type": "string" } },
            "page_type": { "type": "string" },
            "description": { "type": "string" }
        },
        "required": REQUIRED_FIELDS
    })
});

/// 고정 분석 스키마 반환
pub fn analysis_schema() -> &'static Value {
    &ANALYSIS_SCHEMA
}
