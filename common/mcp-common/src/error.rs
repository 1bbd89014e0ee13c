//! Error handling utilities for MCP servers

use rmcp::ErrorData as McpError;

/// Type alias for MCP tool results
pub type McpResult<T> = Result<T, McpError>;

/// Create an internal error with a message
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::internal_error;
///
/// fn my_tool(&self) -> McpResult<CallToolResult> {
///     if bad_condition {
///         return Err(internal_error("Something went wrong"));
///     }
///     // ...
/// }
/// ```
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_error() {
        let err = internal_error("test");
        assert!(err.message.contains("test"));
    }
}
