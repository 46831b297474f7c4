//! Domains module - business logic organized by bounded contexts.
//!
//! Each domain is self-contained with its own types, errors, and logic:
//!
//! - **telegram**: Outbound Bot API client and wire types
//! - **tools**: MCP tool definitions, routing, and registry

pub mod telegram;
pub mod tools;
