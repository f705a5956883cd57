use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Load the sample catalog into the store at startup
    pub seed_sample_books: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            seed_sample_books: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: parse_or_default("HOST", get("HOST"), defaults.host),
            port: parse_or_default("PORT", get("PORT"), defaults.port),
            seed_sample_books: get("SEED_SAMPLE_BOOKS")
                .map(|v| parse_flag("SEED_SAMPLE_BOOKS", &v, defaults.seed_sample_books))
                .unwrap_or(defaults.seed_sample_books),
        }
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or_default<T>(key: &str, value: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match value {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {} value {:?}, using {}", key, raw, default);
            default
        }),
    }
}

fn parse_flag(key: &str, raw: &str, default: bool) -> bool {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" | "" => false,
        _ => {
            tracing::warn!("Invalid {} value {:?}, using {}", key, raw, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert!(!config.seed_sample_books);
    }

    #[test]
    fn reads_host_port_and_seed_flag() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("SEED_SAMPLE_BOOKS", "yes"),
        ]);
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:9090");
        assert!(config.seed_sample_books);
    }

    #[test]
    fn invalid_port_falls_back() {
        let config = config_from(&[("PORT", "eighty")]);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn seed_flag_parsing() {
        assert!(parse_flag("X", "TRUE", false));
        assert!(parse_flag("X", " on ", false));
        assert!(!parse_flag("X", "off", true));
        assert!(parse_flag("X", "maybe", true));
    }
}
