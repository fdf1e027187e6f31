// console.rs

use crate::broker::Broker;
use crate::models::TradeAction;
use crate::report;
use colored::*;
use log::info;
use std::io::{self, BufRead, Write};

const DEFAULT_NAME: &str = "Trader";

/// Interactive menu over a broker. Reads one answer per line; end of input
/// behaves like choosing Exit.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn prompt_name(&mut self) -> io::Result<String> {
        let name = self.ask("Enter your name: ")?.unwrap_or_default();
        let name = name.trim();
        if name.is_empty() {
            Ok(DEFAULT_NAME.to_string())
        } else {
            Ok(name.to_string())
        }
    }

    pub fn run(&mut self, broker: &mut Broker) -> io::Result<()> {
        loop {
            self.write_menu()?;
            let Some(line) = self.ask("Choose an option: ")? else {
                break;
            };

            let choice = match line.trim().parse::<u32>() {
                Ok(choice) => choice,
                Err(_) => {
                    report::write_failure(&mut self.output, "Please enter a valid number!")?;
                    continue;
                }
            };

            match choice {
                1 => report::write_market(&mut self.output, broker.catalog())?,
                2 => self.trade(broker, TradeAction::Buy)?,
                3 => self.trade(broker, TradeAction::Sell)?,
                4 => {
                    let valuation = broker.valuate();
                    let starting_cash = broker.session().starting_cash();
                    report::write_portfolio(&mut self.output, &valuation, starting_cash)?;
                }
                5 => break,
                _ => report::write_failure(&mut self.output, "Invalid choice")?,
            }
        }

        let session = broker.session();
        info!(
            "Session for {} closed after {} buys and {} sells",
            session.name(),
            session.buy_count(),
            session.sell_count()
        );
        writeln!(self.output, "Exiting... Goodbye {}!", session.name())?;
        self.output.flush()
    }

    fn trade(&mut self, broker: &mut Broker, action: TradeAction) -> io::Result<()> {
        let verb = match action {
            TradeAction::Buy => "buy",
            TradeAction::Sell => "sell",
        };
        let Some(symbol) = self.ask(&format!("Enter stock symbol to {}: ", verb))? else {
            return Ok(());
        };
        let symbol = symbol.trim().to_uppercase();

        if let Err(e) = broker.resolve(&symbol) {
            return report::write_failure(&mut self.output, e);
        }

        let Some(quantity) = self.ask("Enter quantity: ")? else {
            return Ok(());
        };
        let quantity = match quantity.trim().parse::<i64>() {
            Ok(quantity) => quantity,
            Err(_) => return report::write_failure(&mut self.output, "Invalid quantity!"),
        };

        match broker.execute(action, &symbol, quantity) {
            Ok(confirmation) => report::write_confirmation(&mut self.output, &confirmation),
            Err(e) => report::write_failure(&mut self.output, e),
        }
    }

    fn write_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", "==== Stock Trading Menu ====".bold())?;
        writeln!(self.output, "1. View Market Data")?;
        writeln!(self.output, "2. Buy Stock")?;
        writeln!(self.output, "3. Sell Stock")?;
        writeln!(self.output, "4. View Portfolio")?;
        writeln!(self.output, "5. Exit")
    }

    /// Print a prompt and read one line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
