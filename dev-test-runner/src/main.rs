//! Regenerate every `fixtures/*.json` and diff against its sibling `.ts`.
//!
//! `cargo run -p dev-test-runner` checks; `-- --bless` rewrites the `.ts` files.
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use json2interface::{generate, DEFAULT_ROOT_NAME};

enum Outcome {
    Pass,
    Fail { expected: String, actual: String },
    Blessed,
}

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("fixtures")
}

fn run_fixture(json_path: &Path, bless: bool) -> Result<Outcome> {
    let source = std::fs::read_to_string(json_path)
        .with_context(|| format!("failed to read {}", json_path.display()))?;
    let actual = generate(&source, DEFAULT_ROOT_NAME)
        .with_context(|| format!("failed to generate {}", json_path.display()))?;
    let ts_path = json_path.with_extension("ts");

    if bless {
        std::fs::write(&ts_path, format!("{actual}\n"))
            .with_context(|| format!("failed to write {}", ts_path.display()))?;
        return Ok(Outcome::Blessed);
    }

    let expected = std::fs::read_to_string(&ts_path)
        .with_context(|| format!("missing expectation {}", ts_path.display()))?;
    if expected.trim_end() == actual {
        Ok(Outcome::Pass)
    } else {
        Ok(Outcome::Fail { expected: expected.trim_end().to_string(), actual })
    }
}

fn main() -> Result<ExitCode> {
    let bless = std::env::args().any(|a| a == "--bless");
    let pattern = fixtures_dir().join("*.json");
    let pattern = pattern.to_string_lossy();

    let mut failures = 0usize;
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        let name = path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
        match run_fixture(&path, bless) {
            Ok(Outcome::Pass) => eprintln!("✅ {name}"),
            Ok(Outcome::Blessed) => eprintln!("{} {name}", "blessed".yellow()),
            Ok(Outcome::Fail { expected, actual }) => {
                failures += 1;
                eprintln!("❌ {name}");
                eprintln!("{}\n{expected}", "—— expected ——".dimmed());
                eprintln!("{}\n{actual}", "—— actual ——".dimmed());
            }
            Err(error) => {
                failures += 1;
                eprintln!("❌ {name}: {}", format!("{error:#}").red());
            }
        }
    }

    if failures > 0 {
        eprintln!("{}", format!("{failures} fixture(s) failed").red().bold());
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
