//! Bridge configuration from the environment.

use std::env;
use std::net::{Ipv4Addr, SocketAddr};

use crate::types::BOT_DEFAULT_PORT;

pub const ENV_ENABLE: &str = "SNAKE_BOT";
pub const ENV_PORT: &str = "SNAKE_BOT_PORT";
pub const ENV_LOG_PATH: &str = "SNAKE_BOT_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    pub enabled: bool,
    pub port: u16,
    /// JSON-lines log of every state message sent.
    pub log_path: Option<String>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            port: BOT_DEFAULT_PORT,
            log_path: None,
        }
    }
}

impl BridgeConfig {
    /// Enabled bridge on `port` (0 picks an ephemeral port).
    pub fn enabled(port: u16) -> Self {
        Self {
            enabled: true,
            port,
            log_path: None,
        }
    }

    /// Read `SNAKE_BOT`, `SNAKE_BOT_PORT` and `SNAKE_BOT_LOG_PATH`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable lookup (tests avoid
    /// mutating the process environment).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let enabled = lookup(ENV_ENABLE)
            .map(|v| {
                let v = v.trim();
                v == "1" || v.eq_ignore_ascii_case("true")
            })
            .unwrap_or(false);

        let port = lookup(ENV_PORT)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(BOT_DEFAULT_PORT);

        let log_path = lookup(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            enabled,
            port,
            log_path,
        }
    }

    /// Always loopback.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::LOCALHOST, self.port))
    }
}
