//! # Report Rendering
//!
//! Plain-text reports for the console.
//!
//! ## Sales Summary Layout
//! ```text
//! ====================================================================================================
//! Sales Summary
//! ====================================================================================================
//! 'Bastion'                                                               1234                14795.66
//! 'Celeste'                                                                987                 4932.53
//! └──────────────── name, 66 ────────────────────────────────────┘└ count 10 ┘└──── amount 24 ──────┘
//!
//! ----------------------------------------------------------------------------------------------------
//! Total revenue: 19728.19
//! ----------------------------------------------------------------------------------------------------
//! ```

use std::io::{self, Write};

use arcade_core::{DiscountTable, ImportReport, SaleRecord, SalesReport};
use chrono::Local;

use crate::command::COMMANDS;

/// Width of the name column.
pub const NAME_WIDTH: usize = 66;
/// Width of the sale count column.
pub const COUNT_WIDTH: usize = 10;
/// Width of the amount column.
pub const AMOUNT_WIDTH: usize = 24;
/// Length of header rules: one full table row.
pub const RULE_WIDTH: usize = NAME_WIDTH + COUNT_WIDTH + AMOUNT_WIDTH;

/// chrono format of history timestamps.
pub const HISTORY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A name in single quotes, or double quotes if it contains a single one.
pub fn quoted(name: &str) -> String {
    if name.contains('\'') && !name.contains('"') {
        format!("\"{}\"", name)
    } else {
        format!("'{}'", name.replace('\'', "\\'"))
    }
}

pub fn write_header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", rule)
}

pub fn write_subheader<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let rule = "-".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", rule)
}

/// The command listing shown at startup and by `help`.
pub fn write_commands<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Available commands:")?;
    for (usage, description) in COMMANDS {
        writeln!(out, "\t{:<20} - {}", usage, description)?;
    }
    Ok(())
}

/// Per-product rows, then the total revenue footer.
pub fn write_sales_summary<W: Write>(out: &mut W, report: &SalesReport) -> io::Result<()> {
    write_header(out, "Sales Summary")?;
    for row in &report.rows {
        writeln!(
            out,
            "{:<name$}{:>count$}{:>amount$}",
            quoted(&row.product_name),
            row.count,
            row.total_earned.to_plain_string(),
            name = NAME_WIDTH,
            count = COUNT_WIDTH,
            amount = AMOUNT_WIDTH,
        )?;
    }
    write_total_revenue(out, report)
}

pub fn write_total_revenue<W: Write>(out: &mut W, report: &SalesReport) -> io::Result<()> {
    write_subheader(
        out,
        &format!("Total revenue: {}", report.total_revenue.to_plain_string()),
    )
}

pub fn write_discounts<W: Write>(out: &mut W, discounts: &DiscountTable) -> io::Result<()> {
    write_header(out, "Discounted Products")?;
    if discounts.is_empty() {
        return writeln!(out, "No discounts set.");
    }
    for discount in discounts.iter() {
        writeln!(out, "{}: {}", quoted(&discount.product_name), discount.rate)?;
    }
    Ok(())
}

pub fn write_product_names<'a, W: Write>(
    out: &mut W,
    names: impl IntoIterator<Item = &'a str>,
) -> io::Result<()> {
    write_header(out, "Registered Products")?;
    for name in names {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

/// Every sale, oldest first, in local time.
pub fn write_history<W: Write>(out: &mut W, history: &[SaleRecord]) -> io::Result<()> {
    write_header(out, "Sales History")?;
    if history.is_empty() {
        return writeln!(out, "No sales recorded yet.");
    }
    for record in history {
        writeln!(
            out,
            "{} {} - {}",
            record.sold_at().with_timezone(&Local).format(HISTORY_TIME_FORMAT),
            record.product_name(),
            record.price_paid().to_plain_string(),
        )?;
    }
    Ok(())
}

/// Import outcome, one line per skipped record.
pub fn write_import_report<W: Write>(out: &mut W, source: &str, report: &ImportReport) -> io::Result<()> {
    writeln!(out, "Imported {} products from {}", report.imported, source)?;
    for rejected in &report.rejected {
        match &rejected.name {
            Some(name) => writeln!(
                out,
                "  skipped record #{} ({}): {}",
                rejected.index,
                quoted(name),
                rejected.error
            )?,
            None => writeln!(out, "  skipped record #{}: {}", rejected.index, rejected.error)?,
        }
    }
    Ok(())
}
