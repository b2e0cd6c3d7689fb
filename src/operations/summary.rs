use crate::console::{Console, format_amount};
use crate::db::{category_repository, expense_repository};
use crate::error::{Error, OrLog};
use crate::models::category::Category;
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

const TABLE_RULE: &str = "─────────────────────────────────────────────────────────";

#[derive(Debug, PartialEq)]
pub struct SummaryRow {
    pub category: String,
    pub total: Decimal,
}

#[derive(Debug, PartialEq)]
pub struct Summary {
    pub rows: Vec<SummaryRow>,
    pub grand_total: Decimal,
}

/// Totals for `categories`, in the order given.
///
/// Only categories with a positive total are kept, and the grand total only
/// counts those rows. A total that cannot be computed counts as zero.
pub fn build_summary(conn: &Connection, categories: Vec<Category>) -> Summary {
    let rows: Vec<SummaryRow> = categories
        .into_iter()
        .map(|category| SummaryRow {
            total: expense_repository::get_total_expenses_by_category(conn, category.id)
                .or_log(Decimal::ZERO, "Error calculating category expenses"),
            category: category.name,
        })
        .filter(|row| row.total > Decimal::ZERO)
        .collect();
    let grand_total = expense_repository::checked_total(rows.iter().map(|row| row.total))
        .or_log(Decimal::ZERO, "Error calculating grand total");

    Summary { rows, grand_total }
}

pub fn view_expense_summary<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), Error> {
    writeln!(console, "\n=== EXPENSE SUMMARY ===")?;

    let categories = category_repository::get_all_categories(conn)
        .or_log(Vec::new(), "Error fetching categories");
    if categories.is_empty() {
        writeln!(console, "No categories found.")?;
        return Ok(());
    }

    let summary = build_summary(conn, categories);
    writeln!(console, "{TABLE_RULE}")?;
    writeln!(console, "{:<20} {:>15}", "Category", "Total Amount")?;
    writeln!(console, "{TABLE_RULE}")?;
    for row in &summary.rows {
        writeln!(console, "{:<20} {:>15}", row.category, format_amount(row.total))?;
    }
    writeln!(console, "{TABLE_RULE}")?;
    let grand_total = format_amount(summary.grand_total);
    writeln!(console, "{:<20} {:>15}", "GRAND TOTAL", grand_total)?;
    writeln!(console, "{TABLE_RULE}")?;
    Ok(())
}
