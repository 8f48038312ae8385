use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use tracing::Level;

// Identifiable defines common traits that can be shared by catalog records
pub trait Identifiable {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}


// Configuration abstracts config options for the library console. Environment
// variables use the LMS_ prefix: LMS_BRANCH_ID, LMS_PRELOAD, LMS_PAUSE,
// LMS_LOG_LEVEL and LMS_LOG_JSON.
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct Configuration {
    pub branch_id: String,
    #[serde(rename = "preload")]
    pub preload_books: bool,
    #[serde(rename = "pause")]
    pub pause_after_command: bool,
    pub log_level: String,
    #[serde(rename = "log_json")]
    pub json_logs: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            preload_books: true,
            pause_after_command: true,
            log_level: "warn".to_string(),
            json_logs: true,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(Environment::with_prefix("LMS"))
    }

    // Unset variables keep the defaults of `Configuration::new("main")`; values
    // that cannot be read as their field type are rejected.
    pub(crate) fn load(env: Environment) -> Result<Self, ConfigError> {
        let defaults = Configuration::new("main");
        let mut config: Configuration = Config::builder()
            .set_default("branch_id", defaults.branch_id)?
            .set_default("preload", defaults.preload_books)?
            .set_default("pause", defaults.pause_after_command)?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_json", defaults.json_logs)?
            .add_source(env)
            .build()?
            .try_deserialize()?;
        if config.log_level.parse::<Level>().is_err() {
            return Err(ConfigError::Message(format!("invalid log level {}", config.log_level)));
        }
        config.log_level = config.log_level.to_lowercase();
        Ok(config)
    }

    pub fn max_log_level(&self) -> Level {
        self.log_level.parse::<Level>().unwrap_or(Level::WARN)
    }
}
