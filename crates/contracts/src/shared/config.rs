use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub routes: RoutesConfig,
    #[serde(default)]
    pub currency: CurrencyConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// Where gates send the user.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RoutesConfig {
    /// Target for unauthenticated visits.
    pub login: String,
    /// Default authenticated landing page, target for unauthorized visits.
    pub landing: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CurrencyConfig {
    pub symbol: String,
    pub decimals: u8,
    #[serde(default = "default_separator")]
    pub thousands_separator: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub port: u16,
}

fn default_separator() -> String {
    ",".to_string()
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid console configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[routes]
login = "/"
landing = "/dashboard"

[currency]
symbol = "$"
decimals = 2
thousands_separator = ","

[api]
port = 3000
"#;

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            login: "/".to_string(),
            landing: "/dashboard".to_string(),
        }
    }
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            decimals: 2,
            thousands_separator: default_separator(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

impl ConsoleConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

/// Load configuration.
///
/// Uses `overrides` (a TOML document, sections may be omitted) when given,
/// falls back to the embedded default otherwise or when it does not parse.
pub fn load_config(overrides: Option<&str>) -> ConsoleConfig {
    if let Some(contents) = overrides {
        match ConsoleConfig::from_toml_str(contents) {
            Ok(config) => {
                log::info!("Loaded console configuration overrides");
                return config;
            }
            Err(e) => log::warn!("{}, using embedded defaults", e),
        }
    }

    log::info!("Using default embedded configuration");
    DEFAULTS.clone()
}

/// The embedded configuration, parsed once.
pub fn default_config() -> &'static ConsoleConfig {
    &DEFAULTS
}

static DEFAULTS: Lazy<ConsoleConfig> =
    Lazy::new(|| ConsoleConfig::from_toml_str(DEFAULT_CONFIG).unwrap_or_default());
