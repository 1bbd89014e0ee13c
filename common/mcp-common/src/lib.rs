//! MCP Common - Shared utilities for MCP servers
//!
//! This crate provides the pieces every MCP server in this workspace needs:
//!
//! - **Initialization**: [`init_tracing`] for stderr logging setup
//! - **Results**: Helper functions for creating `CallToolResult` responses
//! - **Errors**: Helpers for MCP-compatible error values
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{json_success, text_success, McpResult};
//! use rmcp::model::CallToolResult;
//!
//! fn my_tool(&self) -> McpResult<CallToolResult> {
//!     let data = get_some_data();
//!     json_success(&data)
//! }
//! ```

pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use error::{internal_error, McpResult};
pub use init::init_tracing;
pub use result::{json_success, text_success};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
