//! Single-user paper trading against an in-memory market.
//!
//! The [`catalog::Catalog`] lists instruments and their current prices, the
//! [`broker::Ledger`] holds one user's cash and shares, and the
//! [`broker::Broker`] routes buy/sell orders from a caller to the ledger after
//! resolving the symbol. [`console`] is the interactive menu on top.

pub mod broker;
pub mod catalog;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod report;

pub use broker::{Broker, Ledger, Session};
pub use catalog::Catalog;
pub use error::{CatalogError, ConfigError, LedgerError, TradeError};
pub use models::{Confirmation, HoldingValue, Instrument, TradeAction, Valuation};
