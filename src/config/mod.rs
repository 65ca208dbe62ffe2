use crate::constants::env_vars;
use crate::data_fetcher::models::Session;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_api_domain;
use validation::{normalize_api_domain, validate_config};

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the league backend, e.g. `https://api.fuchiboli.example`.
    pub api_domain: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Session obtained with `--login`. Absent until the operator logs in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: String::new(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            session: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, prompts the user for the API domain and creates one.
    ///
    /// # Environment Variables
    /// - `FUCHIBOLI_API_DOMAIN` - Override API domain
    /// - `FUCHIBOLI_LOG_FILE` - Override log file path
    /// - `FUCHIBOLI_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    /// - `FUCHIBOLI_TOKEN` / `FUCHIBOLI_USER` - Override the stored session
    ///
    /// Environment variables take precedence over the config file.
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            Config {
                api_domain,
                ..Config::default()
            }
        } else {
            let config = Config {
                api_domain: prompt_for_api_domain().await?,
                ..Config::default()
            };
            config.save().await?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            self.api_domain = api_domain;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Ok(token) = std::env::var(env_vars::TOKEN) {
            let usuario = std::env::var(env_vars::USER)
                .ok()
                .or_else(|| self.session.as_ref().map(|s| s.usuario.clone()))
                .unwrap_or_default();
            self.session = Some(Session::new(token, usuario));
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.api_domain, &self.log_file_path)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    /// The session token itself is never printed.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nConfiguración actual");
            println!("────────────────────────────────────");
            println!("Archivo de configuración:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Dominio de la API:");
            println!("{}", config.api_domain);
            println!("────────────────────────────────────");
            println!("Tiempo de espera HTTP:");
            println!("{} segundos", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Sesión:");
            match &config.session {
                Some(session) => println!("{} ({})", session.usuario, session.dispositivo),
                None => println!("(sin sesión)"),
            }
            println!("────────────────────────────────────");
            println!("Archivo de log:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/fuchiboli_admin.log");
                println!("(Ubicación por defecto)");
            }
        } else {
            println!("\nNo se encontró archivo de configuración en:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and normalizes the API
    /// domain scheme before writing.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(&Config {
            api_domain: normalize_api_domain(&self.api_domain),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
