use super::categories::display_categories;
use crate::console::Console;
use crate::db::{category_repository, expense_repository};
use crate::error::{Error, OrLog};
use crate::models::expense::Expense;
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

const LIST_RULE: &str =
    "─────────────────────────────────────────────────────────────────────────";

pub fn view_all_expenses<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), Error> {
    writeln!(console, "\n=== ALL EXPENSES ===")?;
    let expenses =
        expense_repository::get_all_expenses(conn).or_log(Vec::new(), "Error fetching expenses");

    if expenses.is_empty() {
        writeln!(console, "No expenses found.")?;
        return Ok(());
    }

    let total = expense_repository::get_total_expenses(conn)
        .or_log(Decimal::ZERO, "Error calculating total expenses");
    print_expenses(conn, console, &expenses)?;
    let total = console.money(total);
    writeln!(console, "Total Expenses: {total}")?;
    Ok(())
}

pub fn view_expenses_by_category<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), Error> {
    writeln!(console, "\n=== EXPENSES BY CATEGORY ===")?;
    display_categories(conn, console)?;

    let category_id = console.prompt_int("Enter Category ID: ")?;
    let exists = category_repository::category_exists(conn, category_id)
        .or_log(false, "Error checking category");
    if !exists {
        console.failure("Invalid category ID!")?;
        return Ok(());
    }

    let expenses = expense_repository::get_expenses_by_category(conn, category_id)
        .or_log(Vec::new(), "Error fetching expenses by category");
    if expenses.is_empty() {
        writeln!(console, "No expenses found for this category.")?;
        return Ok(());
    }

    let category_name = category_repository::category_name_or_unknown(conn, category_id);
    let total = expense_repository::get_total_expenses_by_category(conn, category_id)
        .or_log(Decimal::ZERO, "Error calculating category expenses");
    writeln!(console, "\nCategory: {category_name}")?;
    print_expenses(conn, console, &expenses)?;
    let total = console.money(total);
    writeln!(console, "Total: {total}")?;
    Ok(())
}

pub fn view_expenses_by_date_range<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), Error> {
    writeln!(console, "\n=== EXPENSES BY DATE RANGE ===")?;
    let start_date = console.prompt_date("Enter Start Date (YYYY-MM-DD): ")?;
    let end_date = console.prompt_date("Enter End Date (YYYY-MM-DD): ")?;

    if start_date > end_date {
        console.failure("Start date cannot be after end date!")?;
        return Ok(());
    }

    let expenses = expense_repository::get_expenses_in_range(conn, start_date, end_date)
        .or_log(Vec::new(), "Error fetching expenses by date range");
    if expenses.is_empty() {
        writeln!(console, "No expenses found in this date range.")?;
        return Ok(());
    }

    // Per-range totals have no stored aggregate, so add up what was listed.
    let total = expense_repository::checked_total(expenses.iter().map(|e| e.amount))
        .or_log(Decimal::ZERO, "Error calculating date range total");
    writeln!(console, "\nExpenses from {start_date} to {end_date}:")?;
    print_expenses(conn, console, &expenses)?;
    let total = console.money(total);
    writeln!(console, "Total: {total}")?;
    Ok(())
}

fn print_expenses<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
    expenses: &[Expense],
) -> Result<(), Error> {
    writeln!(console, "{LIST_RULE}")?;
    for expense in expenses {
        display_expense(conn, console, expense)?;
    }
    writeln!(console, "{LIST_RULE}")?;
    Ok(())
}

fn display_expense<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
    expense: &Expense,
) -> Result<(), Error> {
    let category_name = category_repository::category_name_or_unknown(conn, expense.category_id);
    let amount = console.money(expense.amount);
    writeln!(
        console,
        "ID: {} | Category: {} | Amount: {} | Description: {} | Date: {}",
        expense.id, category_name, amount, expense.description, expense.expense_date
    )?;
    Ok(())
}
