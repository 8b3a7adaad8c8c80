use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub delimiter: char,
    pub skip_empty: bool,
    pub null_separated: bool,
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error: line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl ConfigError {
    fn parse(line: usize, message: impl Into<String>) -> Self {
        ConfigError::Parse {
            line,
            message: message.into(),
        }
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn default_config() -> Config {
        Config {
            delimiter: ',',
            skip_empty: true,
            null_separated: false,
            log_level: "info".to_string(),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let src = fs::read_to_string(path)?;
        debug!(path = %path.display(), "loaded config file");
        Self::load_from_str(&src)
    }

    pub fn load_from_str(src: &str) -> Result<Config, ConfigError> {
        let mut config = Self::default_config();

        for (idx, raw) in src.lines().enumerate() {
            let lineno = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::parse(lineno, format!("no '=' found: {}", line)));
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "delimiter" => {
                    let mut chars = value.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => config.delimiter = c,
                        _ => {
                            return Err(ConfigError::parse(
                                lineno,
                                format!("delimiter must be a single character: {:?}", value),
                            ))
                        }
                    }
                }
                "skip_empty" => config.skip_empty = parse_bool(lineno, value)?,
                "null_separated" => config.null_separated = parse_bool(lineno, value)?,
                "log_level" => {
                    if value.is_empty() {
                        return Err(ConfigError::parse(lineno, "log_level is empty"));
                    }
                    config.log_level = value.to_string();
                }
                _ => return Err(ConfigError::parse(lineno, format!("unknown key: {}", key))),
            }
        }

        Ok(config)
    }
}

fn parse_bool(lineno: usize, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::parse(lineno, format!("invalid bool: {}", value))),
    }
}
