// models.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use uuid::Uuid;

/// A tradable instrument as listed in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    pub symbol: String,
    pub name: String,
    pub price: Decimal,
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) : ${:.2}", self.symbol, self.name, self.price)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeAction {
    Buy,
    Sell,
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeAction::Buy => write!(f, "Bought"),
            TradeAction::Sell => write!(f, "Sold"),
        }
    }
}

/// Receipt for an executed buy or sell.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub order_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub action: TradeAction,
    pub symbol: String,
    pub quantity: u64,
    pub price: Decimal,
    /// Cost of a buy or revenue of a sell.
    pub amount: Decimal,
    pub cash_after: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HoldingValue {
    pub symbol: String,
    pub quantity: u64,
    pub value: Decimal,
}

/// Point-in-time valuation of a ledger against catalog prices.
#[derive(Debug, Clone, PartialEq)]
pub struct Valuation {
    pub cash_balance: Decimal,
    pub holdings: Vec<HoldingValue>,
    /// Held symbols that could not be priced (unlisted, or a value too large
    /// to represent). Not part of `total_value`.
    pub unpriced: Vec<(String, u64)>,
    pub total_value: Decimal,
}

impl Valuation {
    pub fn holdings_value(&self) -> Decimal {
        self.total_value - self.cash_balance
    }
}
