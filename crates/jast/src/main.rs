use std::process::ExitCode;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use jast_db::{Diagnostic, File, FileParse as _, RootDatabase, check_file};
use jast_errors::Renderer;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
enum Options {
    /// Prints the syntax tree of a Java file.
    Dump { path: Utf8PathBuf },
    /// Reports syntax errors, failing if there are any.
    Check { path: Utf8PathBuf },
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("JAST_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let db = RootDatabase::default();

    match Options::parse() {
        Options::Dump { path } => {
            let file = load(&db, path)?;
            print!("{}", file.parse(&db).tree().debug_dump());
            Ok(ExitCode::SUCCESS)
        }
        Options::Check { path } => {
            let file = load(&db, path)?;
            let diagnostics = check_file::accumulated::<Diagnostic>(&db, file);

            let renderer = Renderer::styled();
            let path = file.path(&db).as_str();
            let text = file.text(&db);

            for diagnostic in &diagnostics {
                eprintln!("{}", diagnostic.render(&renderer, path, text));
            }
            tracing::debug!(errors = diagnostics.len(), "checked {path}");

            Ok(if diagnostics.is_empty() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}

fn load(db: &RootDatabase, path: Utf8PathBuf) -> anyhow::Result<File> {
    let text =
        std::fs::read_to_string(&path).with_context(|| format!("failed to read `{path}`"))?;
    Ok(File::new(db, path, text))
}
