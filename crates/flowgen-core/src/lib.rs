//! Derive placeholder request payloads from workflow descriptions and render
//! client snippets that send them to a workflow execution server.

pub mod error;
pub mod models;
pub mod services;
pub mod template;

pub use error::{CodegenError, Result};
pub use models::*;
pub use services::{derive_payload, generate, generate_code, render_snippet};
