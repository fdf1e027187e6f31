// report.rs

use crate::catalog::Catalog;
use crate::models::{Confirmation, Valuation};
use colored::*; // Use colored crate for text colors
use rust_decimal::Decimal;
use std::fmt::Display;
use std::io::{self, Write};

pub fn write_market<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "\n{}", "Market Data:".bold())?;
    if catalog.is_empty() {
        writeln!(out, "  (no instruments listed)")?;
    }
    for instrument in catalog.list_all() {
        writeln!(out, "{}", instrument)?;
    }
    Ok(())
}

pub fn write_confirmation<W: Write>(out: &mut W, confirmation: &Confirmation) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!(
            "{} {} shares of {} at ${:.2} (${:.2}). Cash Balance: ${:.2}",
            confirmation.action,
            confirmation.quantity,
            confirmation.symbol,
            confirmation.price,
            confirmation.amount,
            confirmation.cash_after
        )
        .green()
    )
}

pub fn write_failure<W: Write>(out: &mut W, message: impl Display) -> io::Result<()> {
    writeln!(out, "{}", message.to_string().red())
}

/// Portfolio summary with profit & loss against the starting cash.
pub fn write_portfolio<W: Write>(
    out: &mut W,
    valuation: &Valuation,
    starting_cash: Decimal,
) -> io::Result<()> {
    writeln!(out, "\n{}", "Portfolio Summary:".bold())?;
    writeln!(out, "Cash Balance: ${:.2}", valuation.cash_balance)?;

    for holding in &valuation.holdings {
        writeln!(
            out,
            "{} - Shares: {} | Value: ${:.2}",
            holding.symbol, holding.quantity, holding.value
        )?;
    }
    for (symbol, quantity) in &valuation.unpriced {
        writeln!(
            out,
            "{}",
            format!("{} - Shares: {} | Value: unavailable", symbol, quantity).bright_black()
        )?;
    }

    writeln!(out, "Total Portfolio Value: ${:.2}", valuation.total_value)?;

    // Display P&L with color
    let pnl = valuation.total_value - starting_cash;
    if pnl >= Decimal::ZERO {
        writeln!(out, "Profit & Loss (P&L): {}", format!("+{:.2}", pnl).green())
    } else {
        writeln!(out, "Profit & Loss (P&L): {}", format!("{:.2}", pnl).red())
    }
}
