//! LLM prompt engineering for profile extraction

use serde_json::Value;

/// Builds the single system prompt sent for one resume
pub struct PromptBuilder<'a> {
    text: &'a str,
    template: &'a Value,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder for normalized resume text
    pub fn new(text: &'a str, template: &'a Value) -> Self {
        Self { text, template }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let rendered = serde_json::to_string_pretty(self.template)
            .unwrap_or_else(|_| self.template.to_string());

        let mut prompt = String::with_capacity(
            EXTRACTION_INSTRUCTIONS.len() + rendered.len() + OUTPUT_FORMAT_REMINDER.len() + self.text.len() + 8,
        );

        // 1. Instruction
        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. Annotated schema template
        prompt.push_str(&rendered);
        prompt.push_str("\n\n");

        // 3. Output format reminder
        prompt.push_str(OUTPUT_FORMAT_REMINDER);
        prompt.push_str("\n\n");

        // 4. The resume text
        prompt.push_str(self.text);

        prompt
    }
}

const EXTRACTION_INSTRUCTIONS: &str = "Extract the following information from the resume below. \
Fill in this JSON structure, replacing every placeholder in angle brackets with the value found \
in the resume:";

const OUTPUT_FORMAT_REMINDER: &str = "Provide the extracted information as a single JSON object \
with exactly these keys. Use numbers for years and durations, true/false for flags, and null for \
unknown URLs. Return ONLY valid JSON, no markdown code blocks, no explanations.";
