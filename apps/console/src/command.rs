//! # Console Commands
//!
//! One line of input becomes one [`Command`].
//!
//! ```text
//! "list"                 → List { sort: None, reverse: false }
//! "list price desc"      → List { sort: Some(Price), reverse: true }
//! "buy Hollow Knight"    → Buy("Hollow Knight")
//! "summary"              → Summary
//! "dance"                → InvalidCommand
//! ```

use std::str::FromStr;

use arcade_core::SortKey;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Registered product names, optionally sorted.
    List { sort: Option<SortKey>, reverse: bool },
    /// Sell one unit of the named product.
    Buy(String),
    Discounts,
    Summary,
    Graph,
    History,
    Help,
    Exit,
}

/// Input that doesn't name a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid input. Please try again.")]
pub struct InvalidCommand;

/// `(usage, description)` for the help listing.
pub const COMMANDS: &[(&str, &str)] = &[
    ("list [<key> [desc]]", "list registered products"),
    ("buy <product name>", "register a sale"),
    ("discounts", "list discounted products"),
    ("summary", "summarize sales"),
    ("graph", "summarize sales as graph"),
    ("history", "list every sale"),
    ("help", "show this list"),
    ("exit", "exit the program"),
];

impl FromStr for Command {
    type Err = InvalidCommand;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();

        if let Some(name) = input.strip_prefix("buy ") {
            let name = name.trim();
            if name.is_empty() {
                return Err(InvalidCommand);
            }
            return Ok(Command::Buy(name.to_string()));
        }

        let mut words = input.split_whitespace();
        let command = match words.next() {
            Some("list") => {
                let sort = words
                    .next()
                    .map(|key| key.parse::<SortKey>().map_err(|_| InvalidCommand))
                    .transpose()?;
                let reverse = match words.next() {
                    None | Some("asc") => false,
                    Some("desc") if sort.is_some() => true,
                    Some(_) => return Err(InvalidCommand),
                };
                Command::List { sort, reverse }
            }
            Some("discounts") => Command::Discounts,
            Some("summary") => Command::Summary,
            Some("graph") => Command::Graph,
            Some("history") => Command::History,
            Some("help") => Command::Help,
            Some("exit") => Command::Exit,
            _ => return Err(InvalidCommand),
        };

        if words.next().is_some() {
            return Err(InvalidCommand);
        }
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_commands() {
        assert_eq!("summary".parse::<Command>(), Ok(Command::Summary));
        assert_eq!("  graph  ".parse::<Command>(), Ok(Command::Graph));
        assert_eq!("discounts".parse::<Command>(), Ok(Command::Discounts));
        assert_eq!("history".parse::<Command>(), Ok(Command::History));
        assert_eq!("help".parse::<Command>(), Ok(Command::Help));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Exit));
    }

    #[test]
    fn test_buy_keeps_inner_spaces() {
        assert_eq!(
            "buy The Talos Principle".parse::<Command>(),
            Ok(Command::Buy("The Talos Principle".to_string()))
        );
        assert_eq!("buy   Okami ".parse::<Command>(), Ok(Command::Buy("Okami".to_string())));
    }

    #[test]
    fn test_buy_without_name_is_invalid() {
        assert_eq!("buy".parse::<Command>(), Err(InvalidCommand));
        assert_eq!("buy    ".parse::<Command>(), Err(InvalidCommand));
    }

    #[test]
    fn test_list_variants() {
        assert_eq!(
            "list".parse::<Command>(),
            Ok(Command::List {
                sort: None,
                reverse: false
            })
        );
        assert_eq!(
            "list price desc".parse::<Command>(),
            Ok(Command::List {
                sort: Some(SortKey::Price),
                reverse: true
            })
        );
        assert_eq!(
            "list name asc".parse::<Command>(),
            Ok(Command::List {
                sort: Some(SortKey::Name),
                reverse: false
            })
        );
        assert!("list colour".parse::<Command>().is_err());
        assert!("list price sideways".parse::<Command>().is_err());
        assert!("list price desc extra".parse::<Command>().is_err());
    }

    #[test]
    fn test_unknown_input() {
        assert!("".parse::<Command>().is_err());
        assert!("dance".parse::<Command>().is_err());
        assert!("summary please".parse::<Command>().is_err());
        assert!("EXIT".parse::<Command>().is_err());
        assert_eq!(InvalidCommand.to_string(), "Invalid input. Please try again.");
    }
}
