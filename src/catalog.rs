// catalog.rs

use crate::error::CatalogError;
use crate::models::Instrument;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Symbols are stored and looked up trimmed and uppercased.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// The set of listed instruments and their current prices.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    instruments: HashMap<String, Instrument>, // symbol -> instrument
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            instruments: HashMap::new(),
        }
    }

    /// List a new instrument. The symbol must be non-empty and not yet listed,
    /// and the price strictly positive.
    pub fn insert(&mut self, symbol: &str, name: &str, price: Decimal) -> Result<(), CatalogError> {
        let symbol = normalize_symbol(symbol);
        if symbol.is_empty() {
            return Err(CatalogError::InvalidSymbol);
        }
        if price <= Decimal::ZERO {
            return Err(CatalogError::InvalidPrice { symbol, price });
        }
        if self.instruments.contains_key(&symbol) {
            return Err(CatalogError::DuplicateSymbol(symbol));
        }

        self.instruments.insert(
            symbol.clone(),
            Instrument {
                symbol,
                name: name.trim().to_string(),
                price,
            },
        );
        Ok(())
    }

    pub fn lookup(&self, symbol: &str) -> Option<&Instrument> {
        let found = self.instruments.get(&normalize_symbol(symbol));
        if found.is_none() {
            debug!("Catalog lookup missed for {:?}", symbol);
        }
        found
    }

    pub fn price_of(&self, symbol: &str) -> Option<Decimal> {
        self.lookup(symbol).map(|instrument| instrument.price)
    }

    /// All listed instruments, ordered by symbol.
    pub fn list_all(&self) -> Vec<&Instrument> {
        let mut all: Vec<&Instrument> = self.instruments.values().collect();
        all.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        all
    }

    pub fn set_price(&mut self, symbol: &str, price: Decimal) -> Result<(), CatalogError> {
        let symbol = normalize_symbol(symbol);
        if price <= Decimal::ZERO {
            return Err(CatalogError::InvalidPrice { symbol, price });
        }
        let instrument = self
            .instruments
            .get_mut(&symbol)
            .ok_or_else(|| CatalogError::UnknownSymbol(symbol.clone()))?;

        warn!("Price of {} changed from {} to {}", symbol, instrument.price, price);
        instrument.price = price;
        Ok(())
    }

    /// Remove an instrument from the market. Holdings in it stay with their
    /// owners but can no longer be priced.
    pub fn delist(&mut self, symbol: &str) -> Option<Instrument> {
        self.instruments.remove(&normalize_symbol(symbol))
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}
