//! Axum extractors for request handling
//!
//! Custom extractors for caller identity, tool paths and listing queries.

mod client_ip;
mod path;
mod tool_query;

pub use client_ip::ClientIp;
pub use path::ToolPath;
pub use tool_query::{ToolDetailParams, ToolDetailQuery, ToolListParams, ToolListQuery};
