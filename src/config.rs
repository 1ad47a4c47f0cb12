use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::errors::RagChatError;
use crate::errors::Result;

/// Environment variables that carry credentials, mapped to their config keys.
/// These take precedence over every other source.
const CREDENTIAL_VARS: [(&str, &str); 4] = [
    ("VECTARA_CUSTOMER_ID", "vectara.customer_id"),
    ("VECTARA_API_KEY", "vectara.api_key"),
    ("VECTARA_CORPUS_ID", "vectara.corpus_id"),
    ("ANTHROPIC_API_KEY", "anthropic.api_key"),
];

const ENV_PREFIX: &str = "RAGCHAT";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub enable_cors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Also write logs to `logs/ragchat.log.YYYY-MM-DD`
    #[serde(default = "default_file_output")]
    pub file_output: bool,
}

fn default_file_output() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectaraConfig {
    #[serde(default = "default_vectara_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub corpus_id: String,
    #[serde(default = "default_num_results")]
    pub num_results: u32,
    /// Request timeout; unset means wait indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_vectara_endpoint() -> String {
    "https://api.vectara.io/v1/query".to_string()
}

fn default_num_results() -> u32 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicConfig {
    #[serde(default = "default_anthropic_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_anthropic_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Request timeout; unset means wait indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_anthropic_endpoint() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_anthropic_model() -> String {
    "claude-3-sonnet-20240229".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_api_version() -> String {
    "2023-06-01".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub vectara: VectaraConfig,
    pub anthropic: AnthropicConfig,
}

impl AppConfig {
    /// Read `.env` if present, then load from `path` and the process environment
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Ok(env_file) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", env_file.display());
        }
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::load_from(path, &vars)
    }

    /// Layer built-in defaults, the file at `path` if it exists, the
    /// `RAGCHAT__*` entries of `vars`, and finally the credential variables.
    pub fn load_from<P: AsRef<Path>>(path: P, vars: &HashMap<String, String>) -> Result<Self> {
        let defaults = config::Config::try_from(&Self::default())?;

        let mut builder = config::Config::builder()
            .add_source(defaults)
            .add_source(
                config::File::from(path.as_ref())
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars.clone())),
            );

        for (var, key) in CREDENTIAL_VARS {
            builder = builder.set_override_option(key, vars.get(var).cloned())?;
        }

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would only fail later at request time
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.vectara.endpoint)?;
        url::Url::parse(&self.anthropic.endpoint)?;

        if self.vectara.num_results == 0 {
            return Err(RagChatError::ConfigError(
                "vectara.num_results must be greater than zero".to_string(),
            ));
        }
        if self.anthropic.max_tokens == 0 {
            return Err(RagChatError::ConfigError(
                "anthropic.max_tokens must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Get Vectara query endpoint
    pub fn vectara_endpoint(&self) -> &str {
        &self.vectara.endpoint
    }

    /// Get Anthropic API base URL
    pub fn anthropic_endpoint(&self) -> &str {
        &self.anthropic.endpoint
    }

    /// Get LLM model
    pub fn llm_model(&self) -> &str {
        &self.anthropic.model
    }

    /// Copy of the configuration with credentials masked, for display
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        config.vectara.api_key = mask(&config.vectara.api_key);
        config.anthropic.api_key = mask(&config.anthropic.api_key);
        config
    }
}

fn mask(secret: &str) -> String {
    if secret.is_empty() {
        "<unset>".to_string()
    } else {
        "********".to_string()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8501,
                enable_cors: false,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_output: true,
            },
            vectara: VectaraConfig {
                endpoint: default_vectara_endpoint(),
                customer_id: String::new(),
                api_key: String::new(),
                corpus_id: String::new(),
                num_results: default_num_results(),
                timeout_secs: None,
            },
            anthropic: AnthropicConfig {
                endpoint: default_anthropic_endpoint(),
                api_key: String::new(),
                model: default_anthropic_model(),
                max_tokens: default_max_tokens(),
                api_version: default_api_version(),
                timeout_secs: None,
            },
        }
    }
}
