use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::fragment::FragmentOptions;

/// Top-level project configuration loaded from `.ir2openapi.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Ir2OpenApiConfig {
    pub input: String,
    pub output: String,
    pub format: OutputFormat,
    pub naming: NamingConfig,
}

impl Default for Ir2OpenApiConfig {
    fn default() -> Self {
        Self {
            input: "ir.json".to_string(),
            output: "openapi-components.yaml".to_string(),
            format: OutputFormat::Yaml,
            naming: NamingConfig::default(),
        }
    }
}

impl Ir2OpenApiConfig {
    pub fn fragment_options(&self) -> FragmentOptions {
        FragmentOptions {
            on_collision: self.naming.on_collision,
        }
    }
}

/// Serialization format of the emitted fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Schema naming options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    pub on_collision: CollisionPolicy,
}

/// What to do when two declared types resolve to the same schema name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Keep the later declaration and log a warning.
    #[default]
    Overwrite,
    /// Fail the conversion.
    Error,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".ir2openapi.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<Ir2OpenApiConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: Ir2OpenApiConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# ir2openapi configuration
input: ir.json                      # IR document (.json, otherwise YAML)
output: openapi-components.yaml     # use "-" to print to stdout
format: yaml                        # yaml | json

naming:
  on_collision: overwrite           # overwrite | error
"#
}
