//! Command implementations for the agent-yaml CLI

pub mod completions;
pub mod extract;
pub mod version;
