//! agent-yaml - extract embedded YAML from markdown agent documents
//!
//! Agent documents carry their configuration either in a fenced code block
//! tagged `yaml`/`yml` or in `---` front matter. [`extract_yaml`] finds
//! that block and returns its trimmed text, or `None` when there is none.
//!
//! ```
//! let doc = "# Agent\n```yaml\nname: bot\ncommands:\n  - \"run\" - executes\n```\n";
//! assert_eq!(
//!     agent_yaml::extract_yaml(doc, true).as_deref(),
//!     Some("name: bot\ncommands:\n  - \"run\"")
//! );
//! ```

pub mod document;
pub mod error;
pub mod extract;

pub use document::{ExtractOptions, extract_from_file, parse_yaml, read_document};
pub use error::{AgentYamlError, Result};
pub use extract::{BlockKind, clean_commands, extract_yaml, find_block};
