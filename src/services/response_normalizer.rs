use serde_json::Value;
use crate::errors::{AnalyzerError, AnalyzerResult};

const CODE_FENCE: &str = "```";

/// Removes a markdown fence around a model reply.
///
/// When the reply starts with a fence the first line is always dropped; the
/// last line is dropped only if it is exactly a closing fence, so an opening
/// fence that is never closed still yields its body. Replies with several
/// fenced blocks are not treated specially.
pub fn strip_code_fences(raw: &str) -> String {
    if !raw.starts_with(CODE_FENCE) {
        return raw.to_string();
    }

    let lines: Vec<&str> = raw.split('\n').collect();
    let end = if lines.len() > 1 && lines[lines.len() - 1] == CODE_FENCE {
        lines.len() - 1
    } else {
        lines.len()
    };

    lines[1..end].join("\n")
}

/// Parses a reply as JSON. The shape is not checked beyond that; on failure
/// the fence-stripped text travels with the error.
pub fn parse_analysis(raw: &str) -> AnalyzerResult<Value> {
    let stripped = strip_code_fences(raw);
    match serde_json::from_str::<Value>(&stripped) {
        Ok(value) => Ok(value),
        Err(e) => {
            let reason = e.to_string();
            Err(AnalyzerError::parse_error(stripped, &reason))
        }
    }
}
