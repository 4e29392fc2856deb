//! Locate the YAML block embedded in an agent markdown document.
//!
//! Two notations are recognized, tried in order:
//!
//! 1. A fenced code block tagged `yaml` or `yml` anywhere in the document.
//! 2. Front matter: `---` delimiters starting at the very first byte.
//!
//! Nothing here parses YAML. The payload is located, trimmed and optionally
//! has `- "cmd" - description` list items reduced to `- "cmd"`.

use std::sync::LazyLock;

use regex::Regex;

/// Fenced block tagged `yaml`/`yml`. Stops at the first closing fence.
#[allow(clippy::expect_used)]
static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```ya?ml\n([\s\S]*?)\n```").expect("fenced block pattern is valid")
});

/// Front matter anchored at offset 0 of the whole document.
#[allow(clippy::expect_used)]
static FRONT_MATTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^---\n([\s\S]*?)\n---").expect("front matter pattern is valid"));

/// `- "command" - description`, matched per line. `[^\S\n]` and `[^"\n]`
/// keep every part of a match on a single line.
#[allow(clippy::expect_used)]
static COMMAND_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^([^\S\n]*-)([^\S\n]*"[^"\n]+")([^\S\n]*-.*)$"#)
        .expect("command description pattern is valid")
});

/// Which delimiter notation produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Fenced code block tagged `yaml` or `yml`
    Fenced,
    /// `---` front matter at the start of the document
    FrontMatter,
}

/// Extract the YAML payload from `document`.
///
/// Carriage returns are stripped before matching. Returns `None` when neither
/// a fenced `yaml`/`yml` block nor leading front matter is present. Empty
/// content between delimiters yields `Some("")`, not `None`.
///
/// With `clean_commands`, list items shaped like `- "cmd" - description`
/// are reduced to `- "cmd"`; see [`clean_commands`].
pub fn extract_yaml(document: &str, clean_commands: bool) -> Option<String> {
    let normalized = document.replace('\r', "");
    let (kind, content) = find_block(&normalized)?;
    tracing::debug!(?kind, len = content.len(), "found yaml block");

    let trimmed = content.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if clean_commands {
        Some(self::clean_commands(trimmed))
    } else {
        Some(trimmed.to_string())
    }
}

/// Find the raw (untrimmed) block content. Expects `\r` already removed.
///
/// The fenced form always wins over front matter, even when the front matter
/// comes first in the document.
pub fn find_block(normalized: &str) -> Option<(BlockKind, &str)> {
    if let Some(caps) = FENCED_BLOCK.captures(normalized) {
        return caps.get(1).map(|m| (BlockKind::Fenced, m.as_str()));
    }
    FRONT_MATTER
        .captures(normalized)
        .and_then(|caps| caps.get(1))
        .map(|m| (BlockKind::FrontMatter, m.as_str()))
}

/// Strip trailing ` - description` text from quoted list-item commands.
///
/// Each line is tested on its own. Lines that lack a non-empty quoted token
/// followed by a dash are left untouched.
pub fn clean_commands(yaml: &str) -> String {
    let cleaned = COMMAND_DESCRIPTION.replace_all(yaml, "${1}${2}");
    tracing::trace!(
        rewritten = COMMAND_DESCRIPTION.find_iter(yaml).count(),
        "cleaned command descriptions"
    );
    cleaned.into_owned()
}
