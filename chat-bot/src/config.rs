//! Configuration module for environment variable parsing.
//!
//! Everything is read once at start-up. Handlers receive the resulting
//! [`Config`] through shared state and never touch the environment.

use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use tracing::warn;

/// Environment variable holding the Google Chat signing key.
pub const SIGNING_KEY_ENV: &str = "GOOGLE_CHAT_SIGNING_KEY";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Address the web server binds to
    pub bind_address: IpAddr,

    /// Shared secret used to verify `X-Google-Signature`.
    ///
    /// A missing key does not stop the server; requests are answered with 500.
    pub signing_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            signing_key: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Config::default();

        Config {
            port: parse_or_default("PORT", defaults.port),

            bind_address: parse_or_default("BIND_ADDRESS", defaults.bind_address),

            signing_key: env::var(SIGNING_KEY_ENV).ok(),
        }
    }

    /// Build a config with the given signing key and default networking.
    pub fn with_signing_key(signing_key: impl Into<String>) -> Self {
        Config {
            signing_key: Some(signing_key.into()),
            ..Config::default()
        }
    }

    /// The signing key, if one is configured and non-empty.
    pub fn signing_key(&self) -> Option<&str> {
        self.signing_key.as_deref().filter(|k| !k.is_empty())
    }
}

/// Parse an environment variable, falling back to `default` when it is
/// unset or invalid.
fn parse_or_default<T>(name: &str, default: T) -> T
where
    T: FromStr,
{
    let raw = match env::var(name) {
        Ok(v) => v,
        Err(_) => return default,
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(env_var = name, value = %raw, "invalid_config_value_using_default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_default_valid() {
        env::set_var("TEST_CHAT_BOT_PORT", "9090");
        let result: u16 = parse_or_default("TEST_CHAT_BOT_PORT", 8080);
        assert_eq!(result, 9090);
        env::remove_var("TEST_CHAT_BOT_PORT");
    }

    #[test]
    fn test_parse_or_default_invalid() {
        env::set_var("TEST_CHAT_BOT_BAD_PORT", "not-a-port");
        let result: u16 = parse_or_default("TEST_CHAT_BOT_BAD_PORT", 8080);
        assert_eq!(result, 8080);
        env::remove_var("TEST_CHAT_BOT_BAD_PORT");
    }

    #[test]
    fn test_parse_or_default_missing() {
        let result: IpAddr = parse_or_default("NONEXISTENT_VAR", IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(result, IpAddr::V4(Ipv4Addr::LOCALHOST));
    }

    #[test]
    fn test_signing_key_empty_is_not_configured() {
        assert_eq!(Config::default().signing_key(), None);
        assert_eq!(Config::with_signing_key("").signing_key(), None);
        assert_eq!(Config::with_signing_key("key123").signing_key(), Some("key123"));
    }

    #[test]
    fn test_signing_key_whitespace_is_kept_verbatim() {
        assert_eq!(Config::with_signing_key("   ").signing_key(), Some("   "));
        assert_eq!(Config::with_signing_key(" key ").signing_key(), Some(" key "));
    }
}
