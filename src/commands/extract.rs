//! Extract command implementation
//!
//! Reads agent documents from files, directories or stdin and prints the
//! YAML block each one carries.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use console::Style;
use serde::Serialize;
use walkdir::WalkDir;

use agent_yaml::{AgentYamlError, ExtractOptions, Result, parse_yaml, read_document};

use crate::cli::{ExtractArgs, OutputFormat};

const STDIN_PATH: &str = "-";

/// A document to extract from
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    fn label(&self) -> String {
        match self {
            Input::Stdin => "<stdin>".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            Input::Stdin => {
                let mut content = String::new();
                std::io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
            Input::File(path) => read_document(path),
        }
    }
}

/// Payload pulled from one input, parsed when validation or JSON output asked for it
struct Extracted {
    label: String,
    yaml: String,
    value: Option<serde_yaml::Value>,
}

/// One extracted payload, as emitted in multi-document JSON output
#[derive(Debug, Serialize)]
struct JsonEntry {
    path: String,
    data: serde_json::Value,
}

/// Run extract command
pub fn run(args: ExtractArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_writer(&args, &mut out)
}

fn run_with_writer(args: &ExtractArgs, out: &mut impl Write) -> Result<()> {
    let inputs = collect_inputs(&args.paths, &args.extensions)?;
    let options = ExtractOptions::new(args.clean_commands);
    let multiple = inputs.len() > 1;

    let mut extracted = Vec::with_capacity(inputs.len());
    for input in &inputs {
        let content = input.read()?;
        let Some(yaml) = options.extract(&content) else {
            if args.allow_missing {
                tracing::warn!(path = %input.label(), "no yaml block found, skipping");
                continue;
            }
            return Err(AgentYamlError::YamlNotFound {
                path: input.label(),
            });
        };
        let value = if args.validate || args.format == OutputFormat::Json {
            Some(parse_yaml(&yaml)?)
        } else {
            None
        };
        extracted.push(Extracted {
            label: input.label(),
            yaml,
            value,
        });
    }

    match args.format {
        OutputFormat::Yaml => write_yaml(out, &extracted, multiple),
        OutputFormat::Json => write_json(out, &extracted, multiple),
    }
}

/// Expand paths into inputs. Directories are walked recursively and only
/// files with one of `extensions` are kept, sorted by path.
fn collect_inputs(paths: &[PathBuf], extensions: &[String]) -> Result<Vec<Input>> {
    let mut inputs = Vec::new();
    for path in paths {
        if path.as_os_str() == STDIN_PATH {
            inputs.push(Input::Stdin);
        } else if path.is_dir() {
            let files = walk_dir(path, extensions)?;
            if files.is_empty() {
                tracing::warn!(
                    path = %path.display(),
                    extensions = %extensions.join(","),
                    "no matching documents in directory"
                );
            }
            inputs.extend(files.into_iter().map(Input::File));
        } else {
            inputs.push(Input::File(path.clone()));
        }
    }
    tracing::debug!(count = inputs.len(), "collected inputs");
    Ok(inputs)
}

fn walk_dir(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry?;
        if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
}

fn write_yaml(out: &mut impl Write, extracted: &[Extracted], multiple: bool) -> Result<()> {
    let header = Style::new().bold().green();
    for (index, Extracted { label, yaml, .. }) in extracted.iter().enumerate() {
        if multiple {
            if index > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}", header.apply_to(format!("# {label}")))?;
        }
        writeln!(out, "{yaml}")?;
    }
    Ok(())
}

fn write_json(out: &mut impl Write, extracted: &[Extracted], multiple: bool) -> Result<()> {
    let mut entries = Vec::with_capacity(extracted.len());
    for item in extracted {
        let data = match &item.value {
            Some(value) => serde_json::to_value(value)?,
            None => serde_json::to_value(parse_yaml(&item.yaml)?)?,
        };
        entries.push(JsonEntry {
            path: item.label.clone(),
            data,
        });
    }

    let rendered = if multiple {
        serde_json::to_string_pretty(&entries)?
    } else if let Some(entry) = entries.first() {
        serde_json::to_string_pretty(&entry.data)?
    } else {
        return Ok(());
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}
