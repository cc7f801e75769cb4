//! Prompt templates for risk narratives and follow-up answers.
//!
//! Fixed natural-language templates with `{placeholder}` substitution. The
//! wording is beginner-facing Korean; the model is steered toward plain
//! explanations rather than legal boilerplate.

use serde_json::{Map, Value};

/// System role description for every analysis call.
pub const SYSTEM_PROMPT: &str =
    "너는 부동산 경매 권리분석 전문가야. 초보자도 이해할 수 있게 설명해줘.";

/// Four-part risk narrative over the full merged extraction result.
pub const REPORT_PROMPT: &str = r#"[사건 상세 정보 및 임차인 내역 분석]

사건 정보:
{report}

위 정보를 기반으로 아래 항목에 대해 전문가처럼 공손하게 분석해주세요:

1. 세입자 중 대항력과 우선변제권이 있는 사람이 있는가?
2. 배당요구 여부에 따라 낙찰자가 인수할 위험이 있는가?
3. 낙찰자가 주의해야 할 점은?
4. 종합적으로 안전/주의/위험 중 어떤 수준인가?

→ 꼭 초보자 눈높이에 맞게 쉽고 친절하게 설명해주세요."#;

/// Four-part narrative over only the remarks field.
pub const REMARKS_PROMPT: &str = r#"[물건비고 기반 권리분석]

물건비고:
{remarks}

위 내용을 기반으로 아래 항목을 분석해주세요:

1. 위험 요소가 있는가? (유치권, 법정지상권, 선순위 임차인 등)
2. 법적으로 안정적이라고 볼 수 있는 근거는?
3. 입찰 전 확인해야 할 체크리스트는?
4. 초보자도 이해할 수 있는 한 줄 요약

→ 꼭 초보자 눈높이에 맞게 쉽고 친절하게 설명해주세요."#;

/// Follow-up answer over a previously generated narrative.
pub const FOLLOWUP_PROMPT: &str = r#"[기존 권리분석 내용]
{analysis}

[추가 질문]
{question}

위 권리분석 내용을 참고해서 질문에 답변해주세요. 초보자 눈높이에 맞게 쉽고 친절하게 설명해주세요."#;

/// Placeholder shown when the remarks field is absent or empty.
const EMPTY_REMARKS: &str = "(비고 없음)";

/// Format the full-report prompt with the merged extraction result.
pub fn format_report_prompt(report: &Map<String, Value>) -> String {
    let report_text =
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string());
    REPORT_PROMPT.replace("{report}", &report_text)
}

/// Format the remarks-only prompt.
pub fn format_remarks_prompt(remarks: &str) -> String {
    let remarks = if remarks.trim().is_empty() {
        EMPTY_REMARKS
    } else {
        remarks
    };
    REMARKS_PROMPT.replace("{remarks}", remarks)
}

/// Format the follow-up prompt embedding the prior narrative and question.
pub fn format_followup_prompt(analysis: &str, question: &str) -> String {
    FOLLOWUP_PROMPT
        .replace("{analysis}", analysis)
        .replace("{question}", question)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_report_prompt_embeds_the_mapping() {
        let report = match json!({"사건번호": "2024타경1234", "감정가": 100000000}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        let prompt = format_report_prompt(&report);

        assert!(prompt.contains("2024타경1234"));
        assert!(prompt.contains("100000000"));
        assert!(prompt.contains("안전/주의/위험"));
    }

    #[test]
    fn test_format_remarks_prompt_embeds_remarks() {
        let prompt = format_remarks_prompt("유치권 신고 있음");

        assert!(prompt.contains("유치권 신고 있음"));
        assert!(prompt.contains("체크리스트"));
    }

    #[test]
    fn test_empty_remarks_get_a_placeholder() {
        let prompt = format_remarks_prompt("   ");
        assert!(prompt.contains(EMPTY_REMARKS));
    }

    #[test]
    fn test_format_followup_prompt_embeds_both_parts() {
        let prompt = format_followup_prompt("기존 분석 내용", "추가로 궁금한 점");

        assert!(prompt.contains("기존 분석 내용"));
        assert!(prompt.contains("추가로 궁금한 점"));
    }
}
