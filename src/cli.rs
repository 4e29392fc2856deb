//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// agent-yaml - extract embedded YAML from agent documents
#[derive(Parser, Debug)]
#[command(
    name = "agent-yaml",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Extract embedded YAML from markdown agent documents",
    long_about = "Extracts the YAML block embedded in markdown agent documents, either a \
                  ```yaml / ```yml fenced code block or --- front matter at the start of \
                  the file, and prints it for further processing.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  agent-yaml extract agents/dev.md\n    \
                  agent-yaml extract --clean-commands agents/\n    \
                  cat agent.md | agent-yaml extract -\n    \
                  agent-yaml extract --format json agents/dev.md"
)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the YAML block from agent documents
    Extract(ExtractArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format for extracted YAML
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Raw extracted text
    #[default]
    Yaml,
    /// Parsed and re-serialized as JSON
    Json,
}

/// Arguments for the extract command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Extract from a single file:\n    agent-yaml extract agents/dev.md\n\n\
                  Extract from stdin:\n    cat agent.md | agent-yaml extract -\n\n\
                  Strip command descriptions:\n    agent-yaml extract --clean-commands agents/dev.md\n\n\
                  Walk a directory, skipping files without YAML:\n    agent-yaml extract agents/ --allow-missing\n\n\
                  Validate and convert to JSON:\n    agent-yaml extract --format json agents/dev.md")]
pub struct ExtractArgs {
    /// Files or directories to read (`-` reads stdin)
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Reduce `- "cmd" - description` list items to `- "cmd"`
    #[arg(long, env = "AGENT_YAML_CLEAN_COMMANDS")]
    pub clean_commands: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t, env = "AGENT_YAML_FORMAT")]
    pub format: OutputFormat,

    /// Fail if the extracted text is not valid YAML
    #[arg(long)]
    pub validate: bool,

    /// Skip documents without a YAML block instead of failing
    #[arg(long)]
    pub allow_missing: bool,

    /// File extensions considered when walking directories
    #[arg(long = "ext", value_name = "EXT", default_values_t = [String::from("md")])]
    pub extensions: Vec<String>,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    agent-yaml completions --shell bash > ~/.bash_completion.d/agent-yaml\n\n\
                  Generate zsh completions:\n    agent-yaml completions --shell zsh > ~/.zfunc/_agent-yaml\n\n\
                  Generate fish completions:\n    agent-yaml completions --shell fish > ~/.config/fish/completions/agent-yaml.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
