//! Result helpers for MCP tool responses
//!
//! Convenient constructors for `CallToolResult`, reducing boilerplate in
//! tool implementations.

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use serde::Serialize;

use crate::error::internal_error;

/// Create a successful JSON response from any serializable data
///
/// Pretty-prints `data` as JSON and wraps it in a single text content item.
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::json_success;
///
/// #[derive(Serialize)]
/// struct MyData { value: i32 }
///
/// fn my_tool(&self) -> Result<CallToolResult, McpError> {
///     let data = MyData { value: 42 };
///     json_success(&data)
/// }
/// ```
pub fn json_success<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data).map_err(|e| internal_error(e.to_string()))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Create a successful plain text response
///
/// For tools that return simple text rather than structured data.
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}
