pub mod client;
pub mod error;
pub mod forms;
pub mod message;
pub mod models;
mod plugin;
mod trait_impl;

#[cfg(test)]
mod client_tests;

pub use client::GitHubClient;
pub use error::{GitHubError, Result};
pub use message::extract_error_message;
pub use models::*;
pub use plugin::{GitHubPlugin, DEFAULT_API_URL, DEFAULT_WEB_URL, USER_AGENT};

// Re-export plugin-core types for convenience
pub use plugin_core::{IssuePlugin, PluginError};
