//! Minimal CLI: read JSON samples → (interface | schema)
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use indexmap::IndexMap;
use json2interface::{Declaration, GenerateOptions, DEFAULT_MAX_DEPTH, DEFAULT_ROOT_NAME};
use rayon::prelude::*;
use serde_json::Value;
use tracing::info;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer `export interface` declarations from JSON samples
#[derive(Parser, Debug)]
#[command(name = "json2interface", version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// infer and emit `export interface` declarations
    Interface(InterfaceOut),
    /// infer and print the declaration model as JSON (debug view)
    Schema(SchemaOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// treat input as newline-delimited JSON (NDJSON)
    #[arg(long, default_value_t = false)]
    ndjson: bool,

    /// JSON Pointer to select a subnode in each document (e.g. /data/items/0/payload)
    #[arg(long)]
    json_pointer: Option<String>,

    /// JQ pre-process filter for each document.
    #[arg(long)]
    jq_expr: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns or '-' for stdin
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug, Clone)]
struct InferenceSettings {
    /// name of the top-level declaration
    #[arg(long, default_value = DEFAULT_ROOT_NAME)]
    root_name: String,

    /// maximum object/array nesting before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

#[derive(clap::Parser, Debug)]
struct InterfaceOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    inference_settings: InferenceSettings,

    /// output .ts file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(clap::Parser, Debug)]
struct SchemaOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    inference_settings: InferenceSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

/// One JSON value to infer from, labelled by where it came from.
#[derive(Debug)]
struct Document {
    label: String,
    value: Value,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load_documents(&self) -> Result<Vec<Document>> {
        let source_paths = resolve_file_path_patterns(&self.input)
            .context("failed to resolve input file paths")?;
        let per_file = source_paths
            .par_iter()
            .map(|path| self.load_file(path))
            .collect::<Result<Vec<_>>>()?;
        let documents: Vec<Document> = per_file.into_iter().flatten().collect();
        info!(files = source_paths.len(), documents = documents.len(), "loaded input");
        Ok(documents)
    }

    fn load_file(&self, source_path: &Path) -> Result<Vec<Document>> {
        let label = source_path.to_string_lossy().to_string();
        let source = if source_path == Path::new("-") {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
            buf
        } else {
            std::fs::read_to_string(source_path)
                .with_context(|| format!("failed to read source file {label}"))?
        };

        let mut raw = Vec::new();
        if self.ndjson {
            for (ix, line) in source.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                raw.push((format!("{label}:{}", ix + 1), parse_json(line, &label)?));
            }
        } else {
            raw.push((label.clone(), parse_json(&source, &label)?));
        }

        let mut out = Vec::new();
        for (label, value) in raw {
            let value = match self.json_pointer.as_deref() {
                None => value,
                Some(ptr) => match value.pointer(ptr) {
                    Some(selected) => selected.clone(),
                    None => bail!("JSON pointer {ptr} selects nothing in {label}"),
                },
            };
            match self.jq_expr.as_deref() {
                None => out.push(Document { label, value }),
                Some(jq_expr) => {
                    let results = crate::jq_exec::run_jaq(jq_expr, &value).with_context(|| {
                        format!("failed to apply jq expression to {label}")
                    })?;
                    let many = results.len() > 1;
                    for (ix, value) in results.into_iter().enumerate() {
                        let label = if many { format!("{label}#{ix}") } else { label.clone() };
                        out.push(Document { label, value });
                    }
                }
            }
        }
        Ok(out)
    }
}

impl InferenceSettings {
    fn options(&self) -> GenerateOptions {
        GenerateOptions::default()
            .with_root_name(self.root_name.clone())
            .with_max_depth(self.max_depth)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Interface(target) => {
                let documents = target.input_settings.load_documents()?;
                let options = target.inference_settings.options();

                // each call owns its registry, so documents are independent
                let rendered = documents
                    .par_iter()
                    .map(|doc| {
                        json2interface::generate_value(&doc.value, &options)
                            .with_context(|| format!("failed to infer declarations for {}", doc.label))
                    })
                    .collect::<Result<Vec<_>>>()?;

                let src = if documents.len() == 1 {
                    rendered.concat()
                } else {
                    documents
                        .iter()
                        .zip(rendered)
                        .map(|(doc, ts)| format!("// source: {}\n{ts}", doc.label))
                        .collect::<Vec<_>>()
                        .join("\n\n")
                };
                write_output(target.out.as_deref(), &src)
            }
            Command::Schema(target) => {
                let documents = target.input_settings.load_documents()?;
                let options = target.inference_settings.options();

                let inferred = documents
                    .par_iter()
                    .map(|doc| {
                        json2interface::infer(&doc.value, &options)
                            .with_context(|| format!("failed to infer declarations for {}", doc.label))
                    })
                    .collect::<Result<Vec<_>>>()?;

                let schema: IndexMap<&str, Vec<Declaration>> = documents
                    .iter()
                    .map(|doc| doc.label.as_str())
                    .zip(inferred)
                    .collect();
                let schema_src = serde_json::to_string_pretty(&schema)?;
                write_output(target.out.as_deref(), &schema_src)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn parse_json(source: &str, label: &str) -> Result<Value> {
    serde_json::from_str::<Value>(source)
        .map_err(json2interface::Error::from)
        .with_context(|| format!("failed to parse JSON source ({label})"))
}

fn write_output(out: Option<&Path>, src: &str) -> Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, src).with_context(|| format!("failed to write {}", out.display()))?;
            info!(path = %out.display(), "wrote output");
        }
        None => println!("{src}"),
    }
    Ok(())
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{' ))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_paths_pass_through() {
        let paths = resolve_file_path_patterns(["a.json", "-"]).unwrap();
        assert_eq!(paths, [PathBuf::from("a.json"), PathBuf::from("-")]);
    }

    #[test]
    fn empty_glob_is_an_error() {
        assert!(resolve_file_path_patterns(["/nonexistent-dir-for-test/*.json"]).is_err());
    }

    #[test]
    fn parses_interface_flags() {
        let cli = CommandLineInterface::try_parse_from([
            "json2interface", "interface", "-i", "x.json", "--root-name", "User", "--max-depth", "8",
        ])
        .unwrap();
        match cli.cmd {
            Command::Interface(target) => {
                let options = target.inference_settings.options();
                assert_eq!(options.root_name, "User");
                assert_eq!(options.max_depth, 8);
                assert_eq!(target.input_settings.input, ["x.json"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn defaults_match_library() {
        let cli = CommandLineInterface::try_parse_from(["json2interface", "schema", "-i", "x.json"]).unwrap();
        match cli.cmd {
            Command::Schema(target) => {
                assert_eq!(target.inference_settings.root_name, DEFAULT_ROOT_NAME);
                assert_eq!(target.inference_settings.max_depth, DEFAULT_MAX_DEPTH);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
