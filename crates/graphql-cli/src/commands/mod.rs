pub mod definitions;
pub mod resolve;
pub mod schema;

use anyhow::{bail, Context, Result};
use graphql_config::{find_config, load_config, EndpointConfig};
use graphql_explorer::DEFAULT_DOCUMENT;
use std::io::Read;
use std::path::{Path, PathBuf};

/// An endpoint config and the directory its relative paths are based on
pub struct LoadedEndpoint {
    pub endpoint: EndpointConfig,
    pub base_dir: PathBuf,
}

/// Locate the config file: the explicit path, or the nearest one above the
/// working directory.
fn config_path(explicit: Option<PathBuf>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        return Ok(Some(path));
    }
    let current_dir = std::env::current_dir()?;
    find_config(&current_dir).context("Failed to search for config")
}

/// Load the config and pick the endpoint for `project_name`.
///
/// Without a project name the config must describe exactly one endpoint.
pub fn load_endpoint(
    explicit_config: Option<PathBuf>,
    project_name: Option<&str>,
) -> Result<LoadedEndpoint> {
    let path = config_path(explicit_config)?.context("No GraphQL config file found")?;
    load_endpoint_from(&path, project_name)
}

fn load_endpoint_from(path: &Path, project_name: Option<&str>) -> Result<LoadedEndpoint> {
    let config = load_config(path).context("Failed to load config")?;
    let base_dir = path
        .parent()
        .context("Failed to get config directory")?
        .to_path_buf();

    let endpoint = match project_name {
        Some(name) => config
            .get_project(name)
            .with_context(|| format!("Project '{name}' not found"))?
            .clone(),
        None => {
            let mut projects = config.projects();
            match (projects.next(), projects.next()) {
                (Some((_, endpoint)), None) => endpoint.clone(),
                (Some(_), Some(_)) => {
                    bail!("Config has {} projects; pick one with --project", config.project_count())
                }
                (None, _) => bail!("Config has no projects"),
            }
        }
    };

    Ok(LoadedEndpoint { endpoint, base_dir })
}

/// Read the document to work on.
///
/// `-` reads stdin. Without an argument the configured `document` is used
/// if a config is present, otherwise the built-in sample document.
pub fn read_document(
    argument: Option<&str>,
    explicit_config: Option<PathBuf>,
    project_name: Option<&str>,
) -> Result<String> {
    match argument {
        Some("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read document from stdin")?;
            Ok(text)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read document '{path}'")),
        None => {
            let Some(path) = config_path(explicit_config)? else {
                tracing::info!("No config found, using the sample document");
                return Ok(DEFAULT_DOCUMENT.to_string());
            };

            let loaded = load_endpoint_from(&path, project_name)?;
            match loaded.endpoint.document {
                Some(document) => {
                    let document_path = loaded.base_dir.join(document);
                    std::fs::read_to_string(&document_path).with_context(|| {
                        format!("Failed to read document '{}'", document_path.display())
                    })
                }
                None => Ok(DEFAULT_DOCUMENT.to_string()),
            }
        }
    }
}
