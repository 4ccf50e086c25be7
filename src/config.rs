use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use anyhow::{Context, Result};
use toml::Value;
use log::{debug, info};
use crate::queue::DEFAULT_CAPACITY;

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV_VAR: &str = "DATAHOLDER_CONFIG";

/// Configuration storage - section_name -> key -> value
pub type Configuration = HashMap<String, HashMap<String, String>>;

/// Settings for the queue backing the data holder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueConfig {
    pub capacity: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl QueueConfig {
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            anyhow::bail!("Queue capacity must be greater than zero");
        }
        Ok(())
    }
}

/// Configuration manager
#[derive(Debug, Default)]
pub struct ConfigManager {
    config: Configuration,
    config_file_path: Option<PathBuf>,
    selected_section: Option<String>,
}

impl ConfigManager {
    /// Create a new ConfigManager from a Configuration (primarily for testing)
    pub fn from_config(config: Configuration) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Load configuration using discovery hierarchy
    pub fn load() -> Result<Self> {
        Self::discover(&ConfigSearch::from_environment())
    }

    /// Load the first existing candidate of `search`, or an empty configuration.
    /// A path named by the environment variable must exist.
    pub fn discover(search: &ConfigSearch) -> Result<Self> {
        debug!("Starting configuration discovery");

        if let Some(env_path) = &search.env_path {
            if !env_path.exists() {
                anyhow::bail!(
                    "Config file named by ${} does not exist: {}",
                    CONFIG_ENV_VAR,
                    env_path.display()
                );
            }
        }

        for path in search.candidates() {
            debug!("Attempting to load config from: {}", path.display());
            if path.exists() {
                return Self::load_from_file(path);
            }
        }

        info!("No configuration file found, using empty configuration");
        Ok(Self::default())
    }

    /// Load configuration from explicit file path
    pub fn load_from_file(path: PathBuf) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = parse_toml_config(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        info!("Loaded configuration from: {}", path.display());
        Ok(Self {
            config,
            config_file_path: Some(path),
            selected_section: None,
        })
    }

    /// Path the configuration was read from, if any
    pub fn config_file_path(&self) -> Option<&PathBuf> {
        self.config_file_path.as_ref()
    }

    /// Get value from configuration with section fallback
    pub fn get_value(&self, section: &str, key: &str) -> Option<&String> {
        // Priority: selected_section -> specified section -> base
        self.selected_section
            .as_deref()
            .into_iter()
            .chain([section, "base"])
            .find_map(|name| self.config.get(name).and_then(|s| s.get(key)))
    }

    /// Select configuration section for --config-name
    pub fn select_section(&mut self, section: String) {
        debug!("Selecting configuration section: {}", section);
        self.selected_section = Some(section);
    }

    /// Get boolean value with type conversion
    pub fn get_bool(&self, section: &str, key: &str) -> Result<Option<bool>> {
        match self.get_value(section, key) {
            Some(value) => match value.to_lowercase().as_str() {
                "true" => Ok(Some(true)),
                "false" => Ok(Some(false)),
                _ => Err(anyhow::anyhow!("Invalid boolean value for {}.{}: {}", section, key, value)),
            },
            None => Ok(None),
        }
    }

    /// Get unsigned integer value with type conversion
    pub fn get_usize(&self, section: &str, key: &str) -> Result<Option<usize>> {
        self.get_value(section, key)
            .map(|value| {
                value.parse::<usize>()
                    .with_context(|| format!("Invalid {}.{} value in config: {}", section, key, value))
            })
            .transpose()
    }

    /// Get log level value with type conversion
    pub fn get_log_level(&self, section: &str, key: &str) -> Result<Option<log::LevelFilter>> {
        self.get_value(section, key)
            .map(|value| crate::logging::parse_log_level(value))
            .transpose()
    }

    /// Get path value with type conversion
    pub fn get_path(&self, section: &str, key: &str) -> Option<PathBuf> {
        self.get_value(section, key).map(PathBuf::from)
    }

    /// Get queue configuration from the `[queue]` section
    pub fn get_queue_config(&self) -> Result<QueueConfig> {
        let mut config = QueueConfig::default();

        if let Some(capacity) = self.get_usize("queue", "capacity")? {
            config.capacity = capacity;
        }

        config.validate()
            .context("Queue configuration validation failed")?;

        Ok(config)
    }
}

/// Locations searched for a configuration file
#[derive(Debug, Clone, Default)]
pub struct ConfigSearch {
    pub env_path: Option<PathBuf>,
    pub config_dir: Option<PathBuf>,
    pub home_dir: Option<PathBuf>,
    pub current_dir: PathBuf,
}

impl ConfigSearch {
    /// Search rooted in the process environment
    pub fn from_environment() -> Self {
        Self {
            env_path: env::var_os(CONFIG_ENV_VAR)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            config_dir: dirs::config_dir(),
            home_dir: dirs::home_dir(),
            current_dir: PathBuf::from("."),
        }
    }

    /// Candidate files in order of precedence
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(env_path) = &self.env_path {
            paths.push(env_path.clone());
        }
        if let Some(config_dir) = &self.config_dir {
            paths.push(config_dir.join("dataholder").join("config.toml"));
        }
        if let Some(home_dir) = &self.home_dir {
            paths.push(home_dir.join(".dataholder.toml"));
        }
        paths.push(self.current_dir.join(".dataholder.toml"));

        debug!("Config discovery paths: {:?}", paths);
        paths
    }
}

/// Parse TOML content to string-based configuration
fn parse_toml_config(content: &str) -> Result<Configuration> {
    let toml_value: Value = content.parse()
        .context("Failed to parse TOML content")?;

    let mut config = Configuration::new();

    if let Value::Table(table) = toml_value {
        flatten_toml_table(&table, "", &mut config);
    }

    debug!("Parsed configuration: {:?}", config);
    Ok(config)
}

/// Flatten nested tables into `section.subsection` keys; top-level scalars land in `base`
fn flatten_toml_table(table: &toml::Table, prefix: &str, config: &mut Configuration) {
    for (key, value) in table {
        match value {
            Value::Table(subtable) => {
                let section_name = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_toml_table(subtable, &section_name, config);
            }
            _ => {
                let section_name = if prefix.is_empty() { "base" } else { prefix };
                config
                    .entry(section_name.to_string())
                    .or_default()
                    .insert(key.clone(), toml_value_to_string(value));
            }
        }
    }
}

/// Convert TOML Value to string representation
fn toml_value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Boolean(b) => b.to_string(),
        // Arrays, tables and datetimes keep their TOML spelling
        other => other.to_string(),
    }
}
