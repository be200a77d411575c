use serde_aux::field_attributes::deserialize_number_from_string;
use std::path::Path;

pub const BIND_ALL_INTERFACES: &str = "0.0.0.0";

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub log_level: String,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

/// Reads settings from the `configuration` directory next to the working
/// directory, layered with `APP_*` variables and the platform-provided `PORT`.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(|e: UnsupportedEnvironment| config::ConfigError::Message(e.to_string()))?;

    load_configuration(
        &configuration_directory,
        environment,
        std::env::var("PORT").ok(),
    )
}

pub fn load_configuration(
    configuration_directory: &Path,
    environment: Environment,
    port_override: Option<String>,
) -> Result<Settings, config::ConfigError> {
    build_settings(configuration_directory, environment, port_override, None)
}

/// `variables` replaces the process environment when given.
fn build_settings(
    configuration_directory: &Path,
    environment: Environment,
    port_override: Option<String>,
    variables: Option<config::Map<String, String>>,
) -> Result<Settings, config::ConfigError> {
    let environment_filename = format!("{}.yaml", environment.as_str());
    let settings = config::Config::builder()
        .set_default("application.port", 8000_i64)?
        .set_default("log_level", "info")?
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(false))
        .add_source(
            config::File::from(configuration_directory.join(environment_filename)).required(false),
        )
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_APPLICATION__PORT=5001` would set `Settings.application.port`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .source(variables),
        )
        // Always bind all interfaces
        .set_override("application.host", BIND_ALL_INTERFACES)?
        // The platform-provided `PORT` wins over every other source
        .set_override_option("application.port", port_override)?
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// The possible runtime environment for our application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{0} is not a supported environment. Use either `local` or `production`.")]
pub struct UnsupportedEnvironment(String);

impl TryFrom<String> for Environment {
    type Error = UnsupportedEnvironment;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(UnsupportedEnvironment(s)),
        }
    }
}
