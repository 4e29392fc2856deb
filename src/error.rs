//! Error types for agent-yaml
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//! The extractor itself never fails; a missing block is `None`. These errors
//! cover reading documents and post-processing the extracted text.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for agent-yaml operations
#[derive(Error, Diagnostic, Debug)]
pub enum AgentYamlError {
    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(agent_yaml::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(agent_yaml::fs::read_failed))]
    FileRead { path: String, reason: String },

    #[error("Failed to walk directory: {reason}")]
    #[diagnostic(code(agent_yaml::fs::walk_failed))]
    Walk { reason: String },

    // Extraction errors
    #[error("No YAML block found in {path}")]
    #[diagnostic(
        code(agent_yaml::extract::not_found),
        help(
            "Expected a ```yaml fenced block or --- front matter at the start of the file. \
             Pass --allow-missing to skip such files."
        )
    )]
    YamlNotFound { path: String },

    #[error("Extracted YAML is invalid: {reason}")]
    #[diagnostic(code(agent_yaml::yaml::parse_failed))]
    YamlParse { reason: String },

    #[error("Failed to serialize output: {reason}")]
    #[diagnostic(code(agent_yaml::output::serialization_failed))]
    Serialization { reason: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(agent_yaml::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(agent_yaml::fs::io_error))]
    Io { message: String },
}

impl From<std::io::Error> for AgentYamlError {
    fn from(err: std::io::Error) -> Self {
        AgentYamlError::Io {
            message: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for AgentYamlError {
    fn from(err: walkdir::Error) -> Self {
        AgentYamlError::Walk {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AgentYamlError {
    fn from(err: serde_json::Error) -> Self {
        AgentYamlError::Serialization {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AgentYamlError>;
