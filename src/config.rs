use std::env;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub streaming: StreamingConfig,
    pub auth: AuthConfig,
    pub rate_limit: RateLimitConfig,
    /// Language used for user-facing response messages (`zh` or `en`).
    pub lang: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origin. `*` allows any origin (without credentials).
    pub cors_origin: String,
}

/// Media server coordinates used when synthesizing playback URLs.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamingConfig {
    pub server_ip: String,
    pub hls_port: u16,
    pub rtmp_port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Lifetime (seconds) reported for stub login tokens.
    pub token_expires_in: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    pub enabled: bool,
    /// Seconds between replenished login requests per IP. This is the
    /// governor's `per_second` period, so `2` allows one request every two seconds.
    pub login_per_second: u32,
    /// Requests a single IP may send back to back before the period applies
    pub login_burst: u32,
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let lang = crate::i18n::normalize_language(
            &env::var("APP_LANG").unwrap_or_else(|_| crate::i18n::DEFAULT_LANG.to_string()),
        );
        if !crate::i18n::is_supported_language(&lang) {
            return Err(ConfigError::InvalidValue("APP_LANG".to_string()));
        }

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,
                cors_origin: env::var("CORS_ORIGIN").unwrap_or_else(|_| "*".to_string()),
            },
            streaming: StreamingConfig {
                server_ip: env::var("SERVER_IP").unwrap_or_else(|_| "localhost".to_string()),
                hls_port: env::var("HLS_SERVER_PORT")
                    .unwrap_or_else(|_| "8086".to_string())
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("HLS_SERVER_PORT".to_string()))?,
                rtmp_port: env::var("RTMP_SERVER_PORT")
                    .unwrap_or_else(|_| "1935".to_string())
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("RTMP_SERVER_PORT".to_string()))?,
            },
            auth: AuthConfig {
                token_expires_in: env::var("LOGIN_TOKEN_EXPIRES_IN")
                    .unwrap_or_else(|_| "7200".to_string())
                    .parse()
                    .unwrap_or(7200),
            },
            rate_limit: RateLimitConfig {
                enabled: env::var("RATE_LIMIT_ENABLED")
                    .ok()
                    .and_then(|v| parse_bool(&v))
                    .unwrap_or(true),
                login_per_second: env::var("RATE_LIMIT_LOGIN_PER_SECOND")
                    .unwrap_or_else(|_| "2".to_string())
                    .parse()
                    .unwrap_or(2),
                login_burst: env::var("RATE_LIMIT_LOGIN_BURST")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .unwrap_or(10),
            },
            lang,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                cors_origin: "*".to_string(),
            },
            streaming: StreamingConfig {
                server_ip: "localhost".to_string(),
                hls_port: 8086,
                rtmp_port: 1935,
            },
            auth: AuthConfig {
                token_expires_in: 7200,
            },
            rate_limit: RateLimitConfig {
                enabled: true,
                login_per_second: 2,
                login_burst: 10,
            },
            lang: crate::i18n::DEFAULT_LANG.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn defaults_match_media_server_layout() {
        let config = Config::default();
        assert_eq!(config.streaming.server_ip, "localhost");
        assert_eq!(config.streaming.hls_port, 8086);
        assert_eq!(config.streaming.rtmp_port, 1935);
        assert_eq!(config.auth.token_expires_in, 7200);
        assert_eq!(config.lang, "zh");
    }
}
