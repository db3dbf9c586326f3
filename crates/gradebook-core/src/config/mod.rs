//! Application configuration.
//!
//! `Config` is read from an optional TOML file. Every field has a default, so
//! an empty or partial file is valid.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Default values used when the config file omits a field.
pub mod defaults {
    pub const DATA_FILE: &str = "data/students.json";
    pub const BIND: &str = "127.0.0.1:5000";
    pub const SESSION_COOKIE: &str = "gradebook_session";
    pub const ADMIN_USERNAME: &str = "admin";
    pub const ADMIN_PASSWORD: &str = "admin";
}

/// Credentials seeded into a fresh data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultAdmin {
    pub username: String,
    pub password: String,
}

impl Default for DefaultAdmin {
    fn default() -> Self {
        Self {
            username: defaults::ADMIN_USERNAME.to_string(),
            password: defaults::ADMIN_PASSWORD.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file holding admin and student records
    pub data_file: PathBuf,
    /// Address the web server listens on
    pub bind: String,
    /// Name of the session cookie
    pub session_cookie: String,
    pub default_admin: DefaultAdmin,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(defaults::DATA_FILE),
            bind: defaults::BIND.to_string(),
            session_cookie: defaults::SESSION_COOKIE.to_string(),
            default_admin: DefaultAdmin::default(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.data_file, PathBuf::from("data/students.json"));
        assert_eq!(config.bind, "127.0.0.1:5000");
        assert_eq!(config.default_admin.username, "admin");
        assert_eq!(config.default_admin.password, "admin");
    }

    #[test]
    fn test_config_parse_empty() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_config_parse_partial() {
        let config = Config::parse(
            r#"
data_file = "/var/lib/gradebook/students.json"

[default_admin]
password = "s3cret"
"#,
        )
        .unwrap();

        assert_eq!(
            config.data_file,
            PathBuf::from("/var/lib/gradebook/students.json")
        );
        assert_eq!(config.bind, defaults::BIND);
        assert_eq!(config.default_admin.username, "admin");
        assert_eq!(config.default_admin.password, "s3cret");
    }

    #[test]
    fn test_config_parse_invalid() {
        let err = Config::parse("bind = 5000").unwrap_err();
        assert!(matches!(err, Error::ConfigParseError(_)));
    }

    #[test]
    fn test_config_parse_error_points_at_line() {
        let err = Config::parse("data_file = \"a.json\"\nbind = 5000\n").unwrap_err();
        match err {
            Error::ConfigParseError(message) => assert!(message.contains("line 2"), "{}", message),
            other => panic!("expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_config_load_missing_file() {
        let err = Config::load("/nonexistent/gradebook.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
