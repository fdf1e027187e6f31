// broker/broker.rs

use crate::broker::session::Session;
use crate::catalog::{normalize_symbol, Catalog};
use crate::error::{CatalogError, TradeError};
use crate::models::{Confirmation, Instrument, TradeAction, Valuation};
use log::debug;

/// Routes orders for one session against the market catalog.
///
/// The broker owns the symbol check: an unlisted symbol never reaches the
/// ledger. Prices are read from the catalog at the moment of each trade.
pub struct Broker {
    catalog: Catalog,
    session: Session,
}

impl Broker {
    pub fn new(catalog: Catalog, session: Session) -> Self {
        Self { catalog, session }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn resolve(&self, symbol: &str) -> Result<&Instrument, CatalogError> {
        self.catalog
            .lookup(symbol)
            .ok_or_else(|| CatalogError::UnknownSymbol(normalize_symbol(symbol)))
    }

    pub fn buy(&mut self, symbol: &str, quantity: i64) -> Result<Confirmation, TradeError> {
        self.execute(TradeAction::Buy, symbol, quantity)
    }

    pub fn sell(&mut self, symbol: &str, quantity: i64) -> Result<Confirmation, TradeError> {
        self.execute(TradeAction::Sell, symbol, quantity)
    }

    pub fn execute(
        &mut self,
        action: TradeAction,
        symbol: &str,
        quantity: i64,
    ) -> Result<Confirmation, TradeError> {
        let instrument = self.catalog.lookup(symbol).ok_or_else(|| {
            debug!("{:?} order for unlisted symbol {:?}", action, symbol);
            CatalogError::UnknownSymbol(normalize_symbol(symbol))
        })?;

        let ledger = self.session.ledger_mut();
        let confirmation = match action {
            TradeAction::Buy => ledger.buy(instrument, quantity)?,
            TradeAction::Sell => ledger.sell(instrument, quantity)?,
        };

        self.session.record(confirmation.clone());
        Ok(confirmation)
    }

    pub fn valuate(&self) -> Valuation {
        self.session.ledger().valuate(&self.catalog)
    }
}
