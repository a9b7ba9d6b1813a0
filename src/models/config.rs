//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings shared by the command line tools.
pub struct AppConfig {
    pub database_url: String,
}

#[cfg(feature = "cli")]
impl AppConfig {
    /// Reads `config/default.yaml`, the optional `config/{APP_ENV}.yaml`
    /// profile and `APP_*` environment variables, in that order.
    pub fn load() -> Result<Self, config::ConfigError> {
        // Select config profile (defaults to `local`).
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize::<AppConfig>()
    }
}
