//! # Console Session
//!
//! The interactive loop: read a line, run the command, print the result.
//!
//! ## Command Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  "> buy Okami"                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Command::from_str ── InvalidCommand ──► "Invalid input. Please ..."   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Session::execute ── CoreError ──► message printed, loop continues     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  report / chart output                                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only I/O errors on the output end the session early.

use std::io::{self, BufRead, Write};

use arcade_core::{CoreError, ListQuery};
use tracing::{debug, info};

use crate::chart::render_revenue_chart;
use crate::command::Command;
use crate::config::ReportSettings;
use crate::report;
use crate::state::StoreState;

pub struct Session {
    state: StoreState,
    settings: ReportSettings,
}

impl Session {
    pub fn new(state: StoreState, settings: ReportSettings) -> Self {
        Session { state, settings }
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Runs until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        report::write_commands(out)?;

        let mut line = String::new();
        loop {
            write!(out, "\n> ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }

            match line.parse::<Command>() {
                Ok(Command::Exit) => break,
                Ok(command) => self.execute(command, out)?,
                Err(e) => writeln!(out, "{}", e)?,
            }
        }

        info!(sales = self.state.sales.ledger().len(), "Session ended");
        Ok(())
    }

    /// Runs one command. Domain errors are printed, not returned.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<()> {
        debug!(?command, "Executing command");
        let StoreState { catalog, sales } = &mut self.state;

        match command {
            Command::List { sort, reverse } => {
                let mut query = ListQuery::new().reverse(reverse);
                if let Some(key) = sort {
                    query = query.sort_by(key);
                }
                match catalog.list(query) {
                    Ok(products) => report::write_product_names(out, products.into_iter().map(|p| p.name()))?,
                    Err(CoreError::NoProductsFound) => writeln!(out, "No products registered.")?,
                    Err(e) => writeln!(out, "{}", e)?,
                }
            }
            Command::Buy(name) => match sales.process_sale(catalog, &name) {
                Ok(_) => writeln!(out, "Sale registered successfully")?,
                Err(CoreError::ProductNotFound(_)) => writeln!(
                    out,
                    "{} is not available in the store. Please enter an exact product name.",
                    name
                )?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            Command::Discounts => report::write_discounts(out, sales.discounts())?,
            Command::Summary => report::write_sales_summary(out, &sales.summary(catalog))?,
            Command::Graph => {
                let summary = sales.summary(catalog);
                report::write_header(out, "Sales Graph")?;
                if summary.rows.is_empty() {
                    writeln!(out, "No products registered.")?;
                }
                for line in render_revenue_chart(&summary.rows, self.settings.chart_width) {
                    writeln!(out, "{}", line)?;
                }
                report::write_total_revenue(out, &summary)?;
            }
            Command::History => report::write_history(out, sales.ledger().history())?,
            Command::Help => report::write_commands(out)?,
            Command::Exit => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_core::{Catalog, Game, Genre, Money, SalesManager};

    fn session() -> Session {
        let mut catalog = Catalog::new();
        for (name, cents) in [("Okami", 1999), ("Portal 2", 999), ("The Witness", 3999)] {
            catalog
                .add(Game::new(name, Money::from_cents(cents), vec![Genre::Puzzle], "Studio", "Publisher", "2016/01/26").unwrap())
                .unwrap();
        }
        let mut sales = SalesManager::new();
        sales.discounts_mut().add("Okami", 50.0).unwrap();

        Session::new(StoreState { catalog, sales }, ReportSettings { chart_width: 20 })
    }

    fn drive(session: &mut Session, input: &str) -> String {
        let mut out = Vec::new();
        session.run(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_buy_records_discounted_sale() {
        let mut session = session();
        let text = drive(&mut session, "buy Okami\nexit\n");

        assert!(text.contains("Sale registered successfully"));
        let history = session.state().sales.ledger().history();
        assert_eq!(history.len(), 1);
        // 19.99 at 50%: 9.995 → 10.00
        assert_eq!(history[0].price_paid().cents(), 1000);
    }

    #[test]
    fn test_buy_unknown_product() {
        let mut session = session();
        let text = drive(&mut session, "buy Okamy\n");

        assert!(text.contains("Okamy is not available in the store. Please enter an exact product name."));
        assert!(session.state().sales.ledger().is_empty());
    }

    #[test]
    fn test_invalid_input_keeps_looping() {
        let mut session = session();
        let text = drive(&mut session, "dance\nbuy Portal 2\nexit\nbuy Okami\n");

        assert!(text.contains("Invalid input. Please try again."));
        // Nothing after exit runs.
        assert_eq!(session.state().sales.ledger().len(), 1);
    }

    #[test]
    fn test_list_in_insertion_and_sorted_order() {
        let mut session = session();
        let text = drive(&mut session, "list\n");
        let okami = text.find("\nOkami\n").unwrap();
        let portal = text.find("\nPortal 2\n").unwrap();
        assert!(okami < portal);

        let text = drive(&mut session, "list price desc\n");
        let witness = text.find("\nThe Witness\n").unwrap();
        let portal = text.find("\nPortal 2\n").unwrap();
        assert!(witness < portal);
    }

    #[test]
    fn test_list_empty_catalog() {
        let mut session = Session::new(StoreState::new(), ReportSettings::default());
        let text = drive(&mut session, "list\nexit\n");
        assert!(text.contains("No products registered."));
    }

    #[test]
    fn test_summary_and_graph() {
        let mut session = session();
        let text = drive(&mut session, "buy Portal 2\nbuy Portal 2\nsummary\ngraph\n");

        assert!(text.contains("Sales Summary"));
        assert!(text.contains("Total revenue: 19.98"));
        assert!(text.contains("Sales Graph"));
        assert!(text.contains(&"#".repeat(20)));
    }

    #[test]
    fn test_discounts_history_and_help() {
        let mut session = session();
        let text = drive(&mut session, "discounts\nbuy Okami\nhistory\nhelp\nexit\n");

        assert!(text.contains("'Okami': 50%"));
        assert!(text.contains(" Okami - 10.00"));
        assert_eq!(text.matches("Available commands:").count(), 2);
    }
}
