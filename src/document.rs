//! Caller-side helpers around [`extract_yaml`]: reading agent documents from
//! disk and parsing the extracted text into a YAML value.

use std::path::Path;

use serde_yaml::Value;

use crate::error::{AgentYamlError, Result};
use crate::extract::extract_yaml;

/// Options controlling how a payload is extracted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Reduce `- "cmd" - description` list items to `- "cmd"`
    pub clean_commands: bool,
}

impl ExtractOptions {
    pub fn new(clean_commands: bool) -> Self {
        Self { clean_commands }
    }

    /// Extract the YAML payload from an in-memory document.
    pub fn extract(&self, document: &str) -> Option<String> {
        extract_yaml(document, self.clean_commands)
    }
}

/// Parse extracted YAML text into a [`serde_yaml::Value`].
pub fn parse_yaml(yaml: &str) -> Result<Value> {
    serde_yaml::from_str(yaml).map_err(|e| AgentYamlError::YamlParse {
        reason: e.to_string(),
    })
}

/// Read an agent document from disk.
pub fn read_document(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(AgentYamlError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    std::fs::read_to_string(path).map_err(|e| AgentYamlError::FileRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Read `path` and extract its YAML payload.
///
/// I/O failures are errors; a document without a recognized block is `Ok(None)`.
pub fn extract_from_file(path: &Path, options: ExtractOptions) -> Result<Option<String>> {
    let content = read_document(path)?;
    let yaml = options.extract(&content);
    if yaml.is_none() {
        tracing::debug!(path = %path.display(), "no yaml block found");
    }
    Ok(yaml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_options_default_keeps_descriptions() {
        let doc = "```yaml\n- \"run\" - executes\n```";
        assert_eq!(
            ExtractOptions::default().extract(doc).as_deref(),
            Some("- \"run\" - executes")
        );
        assert_eq!(
            ExtractOptions::new(true).extract(doc).as_deref(),
            Some("- \"run\"")
        );
    }

    #[test]
    fn test_parse_yaml_mapping() {
        let value = parse_yaml("name: bot\ncommands:\n  - \"run\"").unwrap();
        assert_eq!(value["name"].as_str(), Some("bot"));
        assert_eq!(value["commands"][0].as_str(), Some("run"));
    }

    #[test]
    fn test_parse_yaml_invalid() {
        let err = parse_yaml("key: [unclosed").unwrap_err();
        assert!(matches!(err, AgentYamlError::YamlParse { .. }));
    }

    #[test]
    fn test_extract_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("agent.md");
        std::fs::write(&path, "---\r\nname: bot\r\n---\r\n# Bot\r\n").unwrap();

        let yaml = extract_from_file(&path, ExtractOptions::default()).unwrap();
        assert_eq!(yaml.as_deref(), Some("name: bot"));
    }

    #[test]
    fn test_extract_from_file_without_block() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("plain.md");
        std::fs::write(&path, "# Nothing here\n").unwrap();

        let yaml = extract_from_file(&path, ExtractOptions::default()).unwrap();
        assert!(yaml.is_none());
    }

    #[test]
    fn test_read_document_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = read_document(&temp.path().join("missing.md")).unwrap_err();
        assert!(matches!(err, AgentYamlError::FileNotFound { .. }));
    }
}
