//! Result helpers shared by the part tools.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

use crate::domains::bom::{BomError, PartId};

/// Text for a missing part, as shown to clients.
pub fn not_found_message(id: PartId) -> String {
    format!("Part with Id '{}' not found.", id)
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content only.
pub fn text_result(content: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content.into())])
}

/// Create a success result with a text summary plus structured content.
pub fn structured_result<T: Serialize>(summary: impl Into<String>, data: &T) -> CallToolResult {
    match serde_json::to_value(data) {
        Ok(value) => CallToolResult {
            content: vec![Content::text(summary.into())],
            structured_content: Some(value),
            is_error: Some(false),
            meta: None,
        },
        Err(e) => error_result(&format!("Failed to serialize result: {}", e)),
    }
}

/// Map a domain error onto an error result.
pub fn bom_error_result(error: &BomError) -> CallToolResult {
    match error {
        BomError::NotFound { id } => error_result(&not_found_message(*id)),
        other => error_result(&other.to_string()),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{is_error, text_of};
    use super::*;

    #[test]
    fn test_not_found_error_text() {
        let result = bom_error_result(&BomError::not_found(12));
        assert!(is_error(&result));
        assert_eq!(text_of(&result), "Part with Id '12' not found.");
    }

    #[test]
    fn test_validation_error_text() {
        let result = bom_error_result(&BomError::validation("name", "must not be empty"));
        assert_eq!(text_of(&result), "Invalid name: must not be empty");
    }

    #[test]
    fn test_structured_result_carries_data() {
        let result = structured_result("done", &serde_json::json!({ "id": 3 }));
        assert!(!is_error(&result));
        assert_eq!(result.structured_content.unwrap()["id"], 3);
    }
}
