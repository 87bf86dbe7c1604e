// Library root — exposes internals for integration tests.
// The binary entry point is src/main.rs.

pub mod chat;
pub mod config;
pub mod console;
pub mod error;
pub mod llm;
pub mod logger;
pub mod session;
