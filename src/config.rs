use std::{ io, fmt };
use std::fs;
use std::path::Path;
use log::LevelFilter;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub prompt: String,
    pub exit_keyword: String,
    pub log_level: LevelFilter,
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn default_config() -> Config {
        Config {
            prompt: "cssh$ ".to_string(),
            exit_keyword: "exit".to_string(),
            log_level: LevelFilter::Off,
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let src = fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::load_from_str(&src)
    }

    /// Parse `key=value` lines. The value is taken verbatim after the first
    /// `=`, so a prompt may keep its trailing space.
    pub fn load_from_str(src: &str) -> Result<Config, ConfigError> {
        let mut config = Self::default_config();

        for (lineno, line) in src.lines().enumerate() {
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::Parse(format!("Line {}: No '=' found: {}", lineno + 1, line)));
            };

            match key.trim() {
                "prompt" => config.prompt = value.to_string(),
                "exit_keyword" => {
                    let value = value.trim();
                    if value.is_empty() || value.contains(char::is_whitespace) {
                        return Err(ConfigError::Parse(format!("Line {}: Invalid exit keyword: {}", lineno + 1, line)));
                    }
                    config.exit_keyword = value.to_string();
                }
                "log_level" => match value.trim().parse::<LevelFilter>() {
                    Ok(level) => config.log_level = level,
                    Err(_) => return Err(ConfigError::Parse(format!("Line {}: Invalid log level: {}", lineno + 1, line))),
                },
                k => return Err(ConfigError::Parse(format!("Line {}: Unknown key: {}", lineno + 1, k))),
            }
        }

        Ok(config)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
