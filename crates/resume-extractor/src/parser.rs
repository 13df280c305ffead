//! Decode a successful response body into raw profile JSON

use crate::config::ResponseShape;
use crate::error::ExtractorError;
use serde_json::Value;

/// Decode the response body according to its configured shape
///
/// The result is not validated against the profile schema.
pub fn decode_response(body: &str, shape: ResponseShape) -> Result<Value, ExtractorError> {
    match shape {
        ResponseShape::Direct => Ok(serde_json::from_str(body)?),
        ResponseShape::ChatCompletion => {
            let envelope: Value = serde_json::from_str(body)?;
            let content = envelope
                .pointer("/choices/0/message/content")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    ExtractorError::MalformedResponse(
                        "Missing choices[0].message.content".to_string(),
                    )
                })?;

            let json_str = extract_json(content)?;
            serde_json::from_str(&json_str).map_err(|e| {
                ExtractorError::MalformedResponse(format!("Message content is not JSON: {}", e))
            })
        }
    }
}

/// Extract JSON from message content, handling markdown code blocks
fn extract_json(content: &str) -> Result<String, ExtractorError> {
    let trimmed = content.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(ExtractorError::MalformedResponse("Empty code block".to_string()));
        }

        // Skip the opening fence and, when present, the closing one
        let end = if lines[lines.len() - 1].trim() == "```" {
            lines.len() - 1
        } else {
            lines.len()
        };
        Ok(lines[1..end].join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}
