// config.rs

use crate::catalog::Catalog;
use crate::error::ConfigError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct InstrumentSeed {
    pub symbol: String,
    pub name: String,
    pub price: Decimal,
}

impl InstrumentSeed {
    fn new(symbol: &str, name: &str, price: Decimal) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
        }
    }
}

/// Opening state of the market and the user's account.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MarketConfig {
    pub user_name: Option<String>,
    pub starting_cash: Decimal,
    pub instruments: Vec<InstrumentSeed>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            user_name: None,
            starting_cash: dec!(10000.0),
            instruments: vec![
                InstrumentSeed::new("AAPL", "Apple Inc.", dec!(150.0)),
                InstrumentSeed::new("GOOG", "Alphabet Inc.", dec!(2800.0)),
                InstrumentSeed::new("TSLA", "Tesla Inc.", dec!(700.0)),
                InstrumentSeed::new("AMZN", "Amazon Inc.", dec!(3300.0)),
            ],
        }
    }
}

impl MarketConfig {
    /// Read a JSON config file. Fields missing from the file keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json_data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: MarketConfig =
            serde_json::from_str(&json_data).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_cash < Decimal::ZERO {
            return Err(ConfigError::NegativeCash(self.starting_cash));
        }
        Ok(())
    }

    pub fn build_catalog(&self) -> Result<Catalog, ConfigError> {
        let mut catalog = Catalog::new();
        for seed in &self.instruments {
            catalog.insert(&seed.symbol, &seed.name, seed.price)?;
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use std::env;

    fn temp_config(contents: &str) -> std::path::PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("paper_trading_config_{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_market() {
        let config = MarketConfig::default();
        let catalog = config.build_catalog().unwrap();

        assert_eq!(config.starting_cash, dec!(10000.0));
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.price_of("AMZN"), Some(dec!(3300.0)));
        assert_eq!(catalog.lookup("TSLA").unwrap().name, "Tesla Inc.");
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_config(
            r#"{
                "user_name": "Grace",
                "starting_cash": "2500.50",
                "instruments": [
                    { "symbol": "msft", "name": "Microsoft Corp.", "price": "410.25" }
                ]
            }"#,
        );

        let config = MarketConfig::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.user_name.as_deref(), Some("Grace"));
        assert_eq!(config.starting_cash, dec!(2500.50));
        let catalog = config.build_catalog().unwrap();
        assert_eq!(catalog.price_of("MSFT"), Some(dec!(410.25)));
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let path = temp_config(r#"{ "starting_cash": "500" }"#);

        let config = MarketConfig::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.starting_cash, dec!(500));
        assert_eq!(config.instruments.len(), 4);
        assert!(config.user_name.is_none());
    }

    #[test]
    fn test_rejects_bad_config() {
        let negative = temp_config(r#"{ "starting_cash": "-1" }"#);
        assert!(matches!(
            MarketConfig::load(&negative),
            Err(ConfigError::NegativeCash(_))
        ));
        fs::remove_file(&negative).ok();

        let garbage = temp_config("not json");
        assert!(matches!(MarketConfig::load(&garbage), Err(ConfigError::Parse { .. })));
        fs::remove_file(&garbage).ok();

        assert!(matches!(
            MarketConfig::load("/definitely/not/here.json"),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_bad_instrument_seed() {
        let config = MarketConfig {
            instruments: vec![
                InstrumentSeed::new("AAPL", "Apple Inc.", dec!(150)),
                InstrumentSeed::new("aapl", "Apple again", dec!(151)),
            ],
            ..MarketConfig::default()
        };

        assert!(matches!(
            config.build_catalog(),
            Err(ConfigError::Catalog(CatalogError::DuplicateSymbol(_)))
        ));
    }
}
