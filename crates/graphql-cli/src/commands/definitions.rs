use super::read_document;
use crate::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use graphql_explorer::{Document, LineIndex};
use std::path::PathBuf;
use std::process;

pub fn run(
    config_path: Option<PathBuf>,
    project_name: Option<String>,
    document: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let text = read_document(document.as_deref(), config_path, project_name.as_deref())?;

    let parsed = match Document::parse(&text) {
        Ok(parsed) => parsed,
        Err(e) => {
            match format {
                OutputFormat::Human => eprintln!("{} {}", "✗".red(), e),
                OutputFormat::Json => {
                    eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
                }
            }
            process::exit(1);
        }
    };

    match format {
        OutputFormat::Human => print_human(&text, &parsed),
        OutputFormat::Json => {
            let definitions: Vec<_> = parsed
                .definitions()
                .iter()
                .map(|definition| {
                    serde_json::json!({
                        "key": definition.selection_key(),
                        "definition": definition,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&definitions)?);
        }
    }

    Ok(())
}

fn print_human(text: &str, document: &Document) {
    if document.is_empty() {
        println!("{}", "No definitions".yellow());
        return;
    }

    let lines = LineIndex::new(text);
    for definition in document.definitions() {
        let location = definition.range.map_or_else(
            || "no location".to_string(),
            |range| {
                let start = lines.offset_to_position(range.start);
                let end = lines.offset_to_position(range.end);
                format!(
                    "{}:{}-{}:{}",
                    start.line + 1,
                    start.character + 1,
                    end.line + 1,
                    end.character + 1
                )
            },
        );
        println!(
            "{:<40} {}",
            definition.selection_key().as_str().bold(),
            location.dimmed()
        );
    }
}
