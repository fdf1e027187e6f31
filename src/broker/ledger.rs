// broker/ledger.rs

use crate::catalog::Catalog;
use crate::error::LedgerError;
use crate::models::{Confirmation, HoldingValue, Instrument, TradeAction, Valuation};
use chrono::Utc;
use log::{debug, info, warn};
use rust_decimal::Decimal;
use std::collections::HashMap;
use uuid::Uuid;

/// One user's cash balance and share holdings.
///
/// Holdings never contain a zero quantity and the cash balance never goes
/// negative. Every operation validates first and only then mutates, so a
/// rejected trade leaves the ledger untouched.
#[derive(Debug, Clone)]
pub struct Ledger {
    cash_balance: Decimal,
    holdings: HashMap<String, u64>, // stock_symbol -> quantity
}

impl Ledger {
    pub fn new(starting_cash: Decimal) -> Result<Self, LedgerError> {
        if starting_cash < Decimal::ZERO {
            return Err(LedgerError::NegativeCash(starting_cash));
        }
        Ok(Self {
            cash_balance: starting_cash,
            holdings: HashMap::new(),
        })
    }

    pub fn cash_balance(&self) -> Decimal {
        self.cash_balance
    }

    /// Get the quantity of a specific stock, zero when not held.
    pub fn quantity_of(&self, stock_symbol: &str) -> u64 {
        self.holdings.get(stock_symbol).copied().unwrap_or(0)
    }

    pub fn holdings(&self) -> impl Iterator<Item = (&str, u64)> {
        self.holdings.iter().map(|(symbol, qty)| (symbol.as_str(), *qty))
    }

    pub fn is_flat(&self) -> bool {
        self.holdings.is_empty()
    }

    pub fn buy(&mut self, instrument: &Instrument, quantity: i64) -> Result<Confirmation, LedgerError> {
        let quantity = positive(quantity)?;
        let price = tradable_price(instrument)?;
        let symbol = &instrument.symbol;

        // An unrepresentable cost is necessarily more than we hold.
        let cost = price.checked_mul(Decimal::from(quantity));
        let cost = match cost {
            Some(cost) if cost <= self.cash_balance => cost,
            _ => {
                debug!(
                    "Rejected buy of {} {}: cash {} insufficient",
                    quantity, symbol, self.cash_balance
                );
                return Err(LedgerError::InsufficientFunds {
                    symbol: symbol.clone(),
                    required: cost.unwrap_or(Decimal::MAX),
                    available: self.cash_balance,
                });
            }
        };

        let held = self.quantity_of(symbol);
        let new_held = held.checked_add(quantity).ok_or_else(|| {
            debug!("Rejected buy of {} {}: {} already held", quantity, symbol, held);
            LedgerError::PositionOverflow {
                symbol: symbol.clone(),
                requested: quantity,
                held,
            }
        })?;

        self.cash_balance -= cost;
        self.holdings.insert(symbol.clone(), new_held);

        info!(
            "Bought {} {} at {} for {}, cash now {}",
            quantity, symbol, price, cost, self.cash_balance
        );
        Ok(self.confirm(TradeAction::Buy, instrument, quantity, cost))
    }

    pub fn sell(&mut self, instrument: &Instrument, quantity: i64) -> Result<Confirmation, LedgerError> {
        let quantity = positive(quantity)?;
        let price = tradable_price(instrument)?;
        let symbol = &instrument.symbol;

        let held = self.quantity_of(symbol);
        if held < quantity {
            debug!("Rejected sell of {} {}: only {} held", quantity, symbol, held);
            return Err(LedgerError::InsufficientShares {
                symbol: symbol.clone(),
                requested: quantity,
                held,
            });
        }

        let proceeds = price
            .checked_mul(Decimal::from(quantity))
            .and_then(|revenue| Some((revenue, self.cash_balance.checked_add(revenue)?)));
        let Some((revenue, new_cash)) = proceeds else {
            debug!("Rejected sell of {} {} at {}: amount overflows", quantity, symbol, price);
            return Err(LedgerError::AmountOverflow {
                symbol: symbol.clone(),
            });
        };

        self.cash_balance = new_cash;
        let remaining = held - quantity;
        if remaining == 0 {
            self.holdings.remove(symbol);
        } else {
            self.holdings.insert(symbol.clone(), remaining);
        }

        info!(
            "Sold {} {} at {} for {}, cash now {}",
            quantity, symbol, price, revenue, self.cash_balance
        );
        Ok(self.confirm(TradeAction::Sell, instrument, quantity, revenue))
    }

    /// Cash plus the market value of every holding the catalog can price.
    ///
    /// Holdings that are not listed, or whose value cannot be represented,
    /// are reported in `unpriced` and left out of the total.
    pub fn valuate(&self, catalog: &Catalog) -> Valuation {
        let mut holdings = Vec::new();
        let mut unpriced = Vec::new();
        let mut total_value = self.cash_balance;

        for (symbol, &qty) in &self.holdings {
            let Some(price) = catalog.price_of(symbol) else {
                warn!("{} {} held but not listed, excluded from valuation", qty, symbol);
                unpriced.push((symbol.clone(), qty));
                continue;
            };

            let valued = price
                .checked_mul(Decimal::from(qty))
                .and_then(|value| Some((value, total_value.checked_add(value)?)));
            match valued {
                Some((value, new_total)) => {
                    total_value = new_total;
                    holdings.push(HoldingValue {
                        symbol: symbol.clone(),
                        quantity: qty,
                        value,
                    });
                }
                None => {
                    warn!("{} {} at {} overflows, excluded from valuation", qty, symbol, price);
                    unpriced.push((symbol.clone(), qty));
                }
            }
        }

        holdings.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        unpriced.sort();

        Valuation {
            cash_balance: self.cash_balance,
            holdings,
            unpriced,
            total_value,
        }
    }

    fn confirm(&self, action: TradeAction, instrument: &Instrument, quantity: u64, amount: Decimal) -> Confirmation {
        Confirmation {
            order_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            action,
            symbol: instrument.symbol.clone(),
            quantity,
            price: instrument.price,
            amount,
            cash_after: self.cash_balance,
        }
    }
}

fn positive(quantity: i64) -> Result<u64, LedgerError> {
    if quantity <= 0 {
        return Err(LedgerError::InvalidQuantity(quantity));
    }
    Ok(quantity as u64)
}

fn tradable_price(instrument: &Instrument) -> Result<Decimal, LedgerError> {
    if instrument.price <= Decimal::ZERO {
        return Err(LedgerError::InvalidPrice {
            symbol: instrument.symbol.clone(),
            price: instrument.price,
        });
    }
    Ok(instrument.price)
}
