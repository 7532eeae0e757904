//! # Revenue Chart
//!
//! Horizontal text bars, one per catalog product, scaled so the best seller
//! fills the configured width.
//!
//! ```text
//! 'Bastion'        |##################################################| 14795.66
//! 'Celeste'        |################                                  |  4932.53
//! 'Okami'          |                                                  |     0.00
//! ```

use arcade_core::{Money, SalesSummary};

use crate::report::quoted;

const BAR: char = '#';

/// Bar length for `amount` when `max` gets `width`, rounded half up.
fn bar_length(amount: Money, max: Money, width: usize) -> usize {
    if max.cents() <= 0 || amount.cents() <= 0 {
        return 0;
    }
    let max = i128::from(max.cents());
    let scaled = (i128::from(amount.cents()) * width as i128 * 2 + max) / (2 * max);
    usize::try_from(scaled).map_or(width, |n| n.min(width))
}

/// Renders the chart lines. No rows, no lines.
pub fn render_revenue_chart(rows: &[SalesSummary], width: usize) -> Vec<String> {
    let max = rows.iter().map(|r| r.total_earned).max().unwrap_or_default();
    let labels: Vec<String> = rows.iter().map(|r| quoted(&r.product_name)).collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let amounts: Vec<String> = rows.iter().map(|r| r.total_earned.to_plain_string()).collect();
    let amount_width = amounts.iter().map(String::len).max().unwrap_or(0);

    rows.iter()
        .zip(labels)
        .zip(amounts)
        .map(|((row, label), amount)| {
            let bar: String = std::iter::repeat(BAR)
                .take(bar_length(row.total_earned, max, width))
                .collect();
            format!(
                "{:<label_width$} |{:<width$}| {:>amount_width$}",
                label,
                bar,
                amount,
                label_width = label_width,
                width = width,
                amount_width = amount_width,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, cents: i64) -> SalesSummary {
        SalesSummary {
            product_name: name.to_string(),
            count: 1,
            total_earned: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_best_seller_fills_width() {
        let lines = render_revenue_chart(&[row("Okami", 1000), row("Bastion", 500), row("Celeste", 0)], 20);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains(&format!("|{}|", "#".repeat(20))));
        assert!(lines[1].contains(&format!("|{}{}|", "#".repeat(10), " ".repeat(10))));
        assert!(lines[2].contains(&format!("|{}|", " ".repeat(20))));
        assert!(lines[2].ends_with(" 0.00"));
    }

    #[test]
    fn test_labels_and_amounts_align() {
        let lines = render_revenue_chart(&[row("A", 123456), row("Longer Name", 7)], 10);
        let bar_start: Vec<usize> = lines.iter().map(|l| l.find('|').unwrap()).collect();
        assert_eq!(bar_start[0], bar_start[1]);
        assert_eq!(lines[0].len(), lines[1].len());
        assert!(lines[1].ends_with("   0.07"));
    }

    #[test]
    fn test_rounding_and_zero_max() {
        assert_eq!(bar_length(Money::from_cents(1), Money::from_cents(3), 10), 3);
        assert_eq!(bar_length(Money::from_cents(2), Money::from_cents(3), 10), 7);
        assert_eq!(bar_length(Money::zero(), Money::zero(), 10), 0);
        assert!(render_revenue_chart(&[], 10).is_empty());
    }
}
