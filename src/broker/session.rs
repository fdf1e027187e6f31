// broker/session.rs

use crate::broker::ledger::Ledger;
use crate::error::LedgerError;
use crate::models::{Confirmation, TradeAction};
use rust_decimal::Decimal;

/// A named user trading out of a single ledger for the life of the process.
pub struct Session {
    name: String,
    starting_cash: Decimal,
    ledger: Ledger,
    history: Vec<Confirmation>,
}

impl Session {
    pub fn new(name: impl Into<String>, starting_cash: Decimal) -> Result<Self, LedgerError> {
        Ok(Self {
            name: name.into(),
            starting_cash,
            ledger: Ledger::new(starting_cash)?,
            history: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn starting_cash(&self) -> Decimal {
        self.starting_cash
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    pub fn record(&mut self, confirmation: Confirmation) {
        self.history.push(confirmation);
    }

    /// Executed trades, oldest first.
    pub fn history(&self) -> &[Confirmation] {
        &self.history
    }

    pub fn buy_count(&self) -> usize {
        self.count(TradeAction::Buy)
    }

    pub fn sell_count(&self) -> usize {
        self.count(TradeAction::Sell)
    }

    fn count(&self, action: TradeAction) -> usize {
        self.history.iter().filter(|c| c.action == action).count()
    }
}
