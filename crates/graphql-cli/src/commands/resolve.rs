use super::read_document;
use crate::OutputFormat;
use anyhow::{ensure, Result};
use colored::Colorize;
use graphql_explorer::{ExplorerIndex, Position, Session, SessionError};
use std::path::PathBuf;
use std::process;

pub fn run(
    config_path: Option<PathBuf>,
    project_name: Option<String>,
    document: Option<String>,
    line: usize,
    column: usize,
    format: OutputFormat,
) -> Result<()> {
    ensure!(line >= 1 && column >= 1, "Line and column are 1-based");

    let text = read_document(document.as_deref(), config_path, project_name.as_deref())?;
    let mut session = Session::new();
    session.set_document(text);

    let position = Position::new(line - 1, column - 1);
    // The explorer's nodes are the document's definitions, numbered in
    // source order
    let index = match ExplorerIndex::from_document(session.document(), |_, number| number) {
        Ok(index) => index,
        Err(e) => report_failure(&SessionError::Resolve(e), format),
    };

    match session.inspect(position, &index) {
        Ok(outcome) => match format {
            OutputFormat::Human => {
                println!("{}", outcome.key.as_str().green().bold());
                if let Some(node) = outcome.handle {
                    println!("  {} {}", "explorer node:".dimmed(), node);
                }
            }
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "key": outcome.key,
                        "kind": outcome.key.kind(),
                        "name": outcome.key.name(),
                        "node": outcome.handle,
                    })
                );
            }
        },
        Err(e) => report_failure(&e, format),
    }

    Ok(())
}

fn report_failure(error: &SessionError, format: OutputFormat) -> ! {
    match format {
        OutputFormat::Human => eprintln!("{} {}", "✗".red(), error),
        OutputFormat::Json => eprintln!("{}", serde_json::json!({ "error": error.to_string() })),
    }
    process::exit(1);
}
