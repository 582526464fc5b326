use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::warn;

use crate::domain::Fees;

/// Which key-value backend persisted collections are written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Redb,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "redb" => Ok(Self::Redb),
            other => Err(format!("unknown store backend: {}", other)),
        }
    }
}

/// Shop configuration.
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | MUNCHIES_STORE | memory | `memory` or `redb` |
/// | MUNCHIES_DATA_DIR | ./data | directory holding the redb file |
/// | MUNCHIES_DELIVERY_FEE | 2.99 | flat delivery fee |
/// | MUNCHIES_EXPRESS_FEE | 2.00 | express delivery surcharge |
/// | MUNCHIES_CHANNEL_BUFFER | 32 | mpsc buffer size per actor |
///
/// Unparseable values fall back to the default with a warning.
#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreBackend,
    pub data_dir: PathBuf,
    pub fees: Fees,
    pub channel_buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreBackend::Memory,
            data_dir: PathBuf::from("./data"),
            fees: Fees::default(),
            channel_buffer: 32,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            store: parse_or("MUNCHIES_STORE", lookup("MUNCHIES_STORE"), defaults.store),
            data_dir: lookup("MUNCHIES_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            fees: Fees {
                delivery_fee: parse_or::<Decimal>(
                    "MUNCHIES_DELIVERY_FEE",
                    lookup("MUNCHIES_DELIVERY_FEE"),
                    defaults.fees.delivery_fee,
                ),
                express_fee: parse_or::<Decimal>(
                    "MUNCHIES_EXPRESS_FEE",
                    lookup("MUNCHIES_EXPRESS_FEE"),
                    defaults.fees.express_fee,
                ),
            },
            channel_buffer: parse_or(
                "MUNCHIES_CHANNEL_BUFFER",
                lookup("MUNCHIES_CHANNEL_BUFFER"),
                defaults.channel_buffer,
            )
            .max(1),
        }
    }
}

fn parse_or<T: FromStr>(name: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(value) => match value.trim().parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(variable = name, value = %value, "Ignoring unparseable config value");
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.store, StoreBackend::Memory);
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.fees.delivery_fee, Decimal::new(299, 2));
        assert_eq!(config.fees.express_fee, Decimal::new(200, 2));
        assert_eq!(config.channel_buffer, 32);
    }

    #[test]
    fn test_overrides_and_bad_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("MUNCHIES_STORE", "REDB"),
            ("MUNCHIES_DATA_DIR", "/tmp/munchies"),
            ("MUNCHIES_DELIVERY_FEE", "3.49"),
            ("MUNCHIES_EXPRESS_FEE", "not-a-number"),
            ("MUNCHIES_CHANNEL_BUFFER", "0"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.store, StoreBackend::Redb);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/munchies"));
        assert_eq!(config.fees.delivery_fee, Decimal::new(349, 2));
        assert_eq!(config.fees.express_fee, Decimal::new(2, 0));
        assert_eq!(config.channel_buffer, 1);
    }
}
