use std::path::Path;

use config::{Config, ConfigError};
use serde::Deserialize;

pub mod domain;
pub mod infrastructure;

const CONFIG_FILE: &str = "clientele.toml";
const ENV_PREFIX: &str = "CLIENTELE";

#[derive(Clone, Debug, Deserialize)]
pub struct ClienteleConfig {
    pub mongodb: MongoDb,
    pub logger: Logger,
}

impl ClienteleConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// 指定されたファイルと環境変数から設定を読み込む
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("_"))
            .build()?
            .try_deserialize::<ClienteleConfig>()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct MongoDb {
    pub url: String,
    pub database: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Logger {
    pub level: Level,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub enum Level {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl From<&Level> for tracing::Level {
    fn from(value: &Level) -> Self {
        match value {
            Level::TRACE => tracing::Level::TRACE,
            Level::DEBUG => tracing::Level::DEBUG,
            Level::INFO => tracing::Level::INFO,
            Level::WARN => tracing::Level::WARN,
            Level::ERROR => tracing::Level::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r#"
            [mongodb]
            url = "mongodb://localhost:27017"
            database = "customers"

            [logger]
            level = "DEBUG"
            "#,
        );
        let config = ClienteleConfig::load_from(file.path()).unwrap();
        assert_eq!(config.mongodb.url, "mongodb://localhost:27017");
        assert_eq!(config.mongodb.database, "customers");
        assert_eq!(config.logger.level, Level::DEBUG);
        assert_eq!(tracing::Level::from(&config.logger.level), tracing::Level::DEBUG);
    }

    #[test]
    fn test_load_rejects_missing_section() {
        let file = write_config(
            r#"
            [logger]
            level = "INFO"
            "#,
        );
        assert!(ClienteleConfig::load_from(file.path()).is_err());
    }

    #[test]
    fn test_load_rejects_unknown_level() {
        let file = write_config(
            r#"
            [mongodb]
            url = "mongodb://localhost:27017"
            database = "customers"

            [logger]
            level = "VERBOSE"
            "#,
        );
        assert!(ClienteleConfig::load_from(file.path()).is_err());
    }
}
