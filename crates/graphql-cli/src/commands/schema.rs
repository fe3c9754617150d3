use super::load_endpoint;
use anyhow::{Context, Result};
use colored::Colorize;
use graphql_explorer::Session;
use graphql_introspect::{fetch_schema, HttpTransport};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Duration;

pub async fn run(
    config_path: Option<PathBuf>,
    project_name: Option<String>,
    sdl: bool,
) -> Result<()> {
    let loaded = load_endpoint(config_path, project_name.as_deref())?;
    let transport =
        HttpTransport::from_config(&loaded.endpoint).context("Failed to build HTTP client")?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
    spinner.set_message(format!("Introspecting {}", transport.endpoint()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = fetch_schema(&transport).await;
    spinner.finish_and_clear();

    let schema = match result {
        Ok(schema) => schema,
        Err(e) => {
            eprintln!("{} {}", "✗ Schema bootstrap failed:".red(), e);
            if e.is_retryable() {
                eprintln!("{}", "  The request may succeed if retried".yellow());
            }
            process::exit(1);
        }
    };

    let session = Session::new();
    session.install_schema(Arc::new(schema))?;
    let schema = session.schema().context("Schema was not installed")?;

    if sdl {
        println!("{}", schema.sdl());
        return Ok(());
    }

    println!(
        "{} ({} types)",
        "✓ Schema loaded successfully".green(),
        schema.type_count()
    );
    let roots = [
        ("query", schema.query_type()),
        ("mutation", schema.mutation_type()),
        ("subscription", schema.subscription_type()),
    ];
    for (operation, root) in roots {
        if let Some(name) = root {
            println!("  {} {}", format!("{operation}:").dimmed(), name.bold());
        }
    }
    if session.explorer_enabled() {
        println!("{}", "✓ Explorer enabled".green());
    }

    Ok(())
}
