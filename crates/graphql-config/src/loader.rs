use crate::{ConfigError, EndpointConfig, GraphQLConfig, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names to search for, in order of preference
const CONFIG_FILES: &[&str] = &[
    ".graphqlrc.yml",
    ".graphqlrc.yaml",
    ".graphqlrc.json",
    ".graphqlrc",
    "graphql.config.yml",
    "graphql.config.yaml",
    "graphql.config.json",
];

/// Find a config file by walking up the directory tree from the given start directory.
/// Returns the path to the config file if found.
pub fn find_config(start_dir: &Path) -> Result<Option<PathBuf>> {
    let mut current_dir = start_dir.to_path_buf();

    loop {
        for file_name in CONFIG_FILES {
            let config_path = current_dir.join(file_name);
            if config_path.is_file() {
                return Ok(Some(config_path));
            }
        }

        if !current_dir.pop() {
            break;
        }
    }

    Ok(None)
}

/// Load a config from the specified path.
/// Automatically detects the format based on file extension.
pub fn load_config(path: &Path) -> Result<GraphQLConfig> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents, path)
}

/// Load a config from a string.
/// The path is used for error messages and format detection.
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<GraphQLConfig> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    let file_name = path.file_name().and_then(|name| name.to_str()).unwrap_or("");

    let config = match extension {
        "yml" | "yaml" => parse_yaml(contents, path)?,
        "json" => parse_json(contents, path)?,
        // .graphqlrc without extension: try YAML first, then JSON
        "" if file_name == ".graphqlrc" => {
            parse_yaml(contents, path).or_else(|_| parse_json(contents, path))?
        }
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    validate_config(&config, path)?;

    Ok(config)
}

fn parse_yaml(contents: &str, path: &Path) -> Result<GraphQLConfig> {
    serde_yaml::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("YAML parse error: {e}"),
    })
}

fn parse_json(contents: &str, path: &Path) -> Result<GraphQLConfig> {
    serde_json::from_str(contents).map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: format!("JSON parse error: {e}"),
    })
}

/// Validate the loaded configuration
fn validate_config(config: &GraphQLConfig, path: &Path) -> Result<()> {
    let invalid = |message: String| ConfigError::Invalid {
        path: path.to_path_buf(),
        message,
    };

    if config.project_count() == 0 {
        return Err(invalid("No projects configured".to_string()));
    }

    for (project_name, project_config) in config.projects() {
        validate_endpoint(project_config).map_err(|reason| {
            invalid(format!("Project '{project_name}' {reason}"))
        })?;
    }

    Ok(())
}

fn validate_endpoint(config: &EndpointConfig) -> std::result::Result<(), String> {
    if config.endpoint.trim().is_empty() {
        return Err("has an empty endpoint".to_string());
    }

    if !config.is_http() {
        return Err(format!(
            "has endpoint '{}' which is not an http(s) URL",
            config.endpoint
        ));
    }

    if config.headers.keys().any(|name| name.trim().is_empty()) {
        return Err("has a header with an empty name".to_string());
    }

    if config.timeout_secs == Some(0) || config.connect_timeout_secs == Some(0) {
        return Err("has a zero timeout".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(suffix).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_yaml_single_project() {
        let yaml = r#"
endpoint: "https://serve.example.com/graphql"
headers:
  Authorization: "Bearer token"
document: "queries/explore.graphql"
"#;

        let file = write_temp(".yml", yaml);
        let config = load_config(file.path()).unwrap();
        assert!(!config.is_multi_project());
        assert_eq!(config.project_count(), 1);

        let project = config.get_project("default").unwrap();
        assert_eq!(project.endpoint, "https://serve.example.com/graphql");
        assert_eq!(project.document.as_deref(), Some("queries/explore.graphql"));
        assert_eq!(project.headers.len(), 1);
    }

    #[test]
    fn test_load_yaml_multi_project() {
        let yaml = r#"
projects:
  github:
    endpoint: "https://api.github.com/graphql"
  local:
    endpoint: "http://localhost:4000/graphql"
    timeoutSecs: 5
"#;

        let file = write_temp(".yml", yaml);
        let config = load_config(file.path()).unwrap();
        assert!(config.is_multi_project());
        assert_eq!(config.project_count(), 2);
        assert_eq!(config.get_project("local").unwrap().timeout_secs, Some(5));
    }

    #[test]
    fn test_load_json_single_project() {
        let json = r#"
{
  "endpoint": "https://serve.example.com/graphql",
  "variables": "{\"name\": \"prisma\"}"
}
"#;

        let file = write_temp(".json", json);
        let config = load_config(file.path()).unwrap();
        assert!(!config.is_multi_project());
    }

    #[test]
    fn test_validation_empty_endpoint() {
        let file = write_temp(".yml", "endpoint: \"\"\n");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_validation_non_http_endpoint() {
        let file = write_temp(".yml", "endpoint: schema.graphql\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("not an http(s) URL"));
    }

    #[test]
    fn test_validation_zero_timeout() {
        let file = write_temp(
            ".yml",
            "endpoint: https://api.example.com/graphql\ntimeoutSecs: 0\n",
        );
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_unsupported_format() {
        let file = write_temp(".toml", "endpoint = \"https://api.example.com\"");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = load_config(&temp_dir.path().join(".graphqlrc.yml"));
        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn test_extensionless_graphqlrc_falls_back_to_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(".graphqlrc");
        fs::write(
            &config_path,
            r#"{"endpoint": "https://api.example.com/graphql"}"#,
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(
            config.get_project("default").unwrap().endpoint,
            "https://api.example.com/graphql"
        );
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(".graphqlrc.yml");
        fs::write(&config_path, "endpoint: https://api.example.com/graphql").unwrap();

        let found = find_config(temp_dir.path()).unwrap();
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(".graphqlrc.yml");
        fs::write(&config_path, "endpoint: https://api.example.com/graphql").unwrap();

        let sub_dir = temp_dir.path().join("subdir");
        fs::create_dir(&sub_dir).unwrap();

        let found = find_config(&sub_dir).unwrap();
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_config_file_priority() {
        let temp_dir = tempfile::tempdir().unwrap();

        fs::write(
            temp_dir.path().join(".graphqlrc.yml"),
            "endpoint: https://yml.example.com/graphql",
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("graphql.config.json"),
            r#"{"endpoint": "https://json.example.com/graphql"}"#,
        )
        .unwrap();

        let found = find_config(temp_dir.path()).unwrap().unwrap();

        // .graphqlrc.yml wins over graphql.config.json
        assert_eq!(found.file_name().unwrap(), ".graphqlrc.yml");
    }
}
