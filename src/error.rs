use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Quantity must be greater than zero (got {0}).")]
    InvalidQuantity(i64),

    #[error("Insufficient balance to buy {symbol}: cost {required:.2}, available {available:.2}.")]
    InsufficientFunds {
        symbol: String,
        required: Decimal,
        available: Decimal,
    },

    #[error("Not enough shares to sell {symbol}: requested {requested}, held {held}.")]
    InsufficientShares {
        symbol: String,
        requested: u64,
        held: u64,
    },

    #[error("Cannot trade {symbol} at a price of {price}; price must be greater than zero.")]
    InvalidPrice { symbol: String, price: Decimal },

    #[error("Trade in {symbol} exceeds the largest representable amount.")]
    AmountOverflow { symbol: String },

    #[error("Buying {requested} more {symbol} would overflow the {held} shares held.")]
    PositionOverflow {
        symbol: String,
        requested: u64,
        held: u64,
    },

    #[error("Starting cash must not be negative (got {0}).")]
    NegativeCash(Decimal),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Invalid stock symbol: {0}")]
    UnknownSymbol(String),

    #[error("Price for {symbol} must be greater than zero (got {price}).")]
    InvalidPrice { symbol: String, price: Decimal },

    #[error("Stock symbol must not be empty.")]
    InvalidSymbol,

    #[error("Stock symbol {0} is already listed.")]
    DuplicateSymbol(String),
}

/// Failure of a trade routed through the broker.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TradeError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Starting cash must not be negative (got {0}).")]
    NegativeCash(Decimal),

    #[error("Invalid instrument in config: {0}")]
    Catalog(#[from] CatalogError),
}
