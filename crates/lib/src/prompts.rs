//! # Formatting Prompt Templates
//!
//! The instruction template in this module is the contract for the shape of
//! the model's output. It is pinned and versioned: any wording change must
//! bump `FORMATTING_PROMPT_VERSION` so the evolution stays auditable.

/// Identifies the current revision of the formatting instruction.
pub const FORMATTING_PROMPT_VERSION: &str = "v1";

/// The system prompt fixing the assistant's persona for every formatting call.
pub const FORMATTING_SYSTEM_PROMPT: &str = "You are a medical transcription assistant. Extract lab results accurately and format them for Russian medical consultation notes.";

/// The user instruction template for the formatting call. The raw report
/// text is substituted at the end, after the rule list.
/// Placeholder: `{report_text}`
pub const FORMATTING_USER_PROMPT: &str = r#"Analyze this medical lab report and extract ALL test results in the format used in Russian medical consultation notes.

Format each result as: "Test name: value unit (reference range) status"
Group by test type and include the test date.

Example format:
"ОАК от 17.07.2025: лейкоциты 5.5 /л (4-9), эритроциты 4.8 /л (3.9-4.7) выше нормы, гемоглобин 135 г/л (120-140)"

Rules:
1. Keep original Russian test names
2. Include all numerical values with units
3. Include reference ranges in parentheses
4. Add status (повышено/понижено/выше нормы/ниже нормы) when indicated
5. Group related tests together
6. Use commas to separate individual tests
7. Use semicolons to separate different test groups
8. Include test dates when available

Medical lab report text:
{report_text}
"#;

/// Builds the user prompt for one formatting call by substituting the raw
/// report text into the pinned template.
pub fn build_user_prompt(report_text: &str) -> String {
    FORMATTING_USER_PROMPT.replace("{report_text}", report_text)
}
