use super::categories::display_categories;
use crate::console::Console;
use crate::db::{category_repository, expense_repository};
use crate::error::{Error, OrLog};
use crate::models::expense::NewExpense;
use rusqlite::Connection;
use std::io::{BufRead, Write};

/// Walks the user through recording one expense.
///
/// An unknown category id ends the operation instead of asking again. The
/// amount and description are stored as entered; an empty date means today.
pub fn add_expense<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), Error> {
    writeln!(console, "\n=== ADD NEW EXPENSE ===")?;
    display_categories(conn, console)?;

    let category_id = console.prompt_int("Enter Category ID: ")?;
    let exists = category_repository::category_exists(conn, category_id)
        .or_log(false, "Error checking category");
    if !exists {
        console.failure("Invalid category ID!")?;
        return Ok(());
    }

    let amount_prompt = format!("Enter Amount: {}", console.currency());
    let amount = console.prompt_decimal(&amount_prompt)?;
    let description = console.prompt_line("Enter Description: ")?;
    let expense_date = console.prompt_date("Enter Date (YYYY-MM-DD) or press Enter for today: ")?;

    let expense = NewExpense::new(category_id, amount, description, expense_date);
    match expense_repository::add_expense(conn, &expense) {
        Ok(id) => {
            tracing::info!(expense_id = id, category_id, "Added expense of {amount}");
            console.success("✓ Expense added successfully!")?;
        }
        Err(error) => {
            tracing::error!("Error adding expense: {error}");
            console.failure(&format!("✗ Failed to add expense: {error}"))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::test_console;
    use crate::db::category_repository::add_category;
    use crate::db::connection::establish_test_connection;
    use crate::db::expense_repository::get_all_expenses;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn test_add_expense_success() {
        let conn = establish_test_connection().unwrap();
        let food = add_category(&conn, "Food", "Meals").unwrap();
        let mut console = test_console(&format!("{food}\n12.50\nLunch\n2025-06-01\n"));

        add_expense(&conn, &mut console).unwrap();

        assert!(console.output().contains("Expense added successfully"));
        let expenses = get_all_expenses(&conn).unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].category_id, food);
        assert_eq!(expenses[0].amount, Decimal::new(1250, 2));
        assert_eq!(expenses[0].description, "Lunch");
        assert_eq!(expenses[0].expense_date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn test_add_expense_defaults_to_today() {
        let conn = establish_test_connection().unwrap();
        let food = add_category(&conn, "Food", "Meals").unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 1, 28).unwrap();
        let mut console = test_console(&format!("{food}\n3\nCoffee\n\n")).with_today(today);

        add_expense(&conn, &mut console).unwrap();

        let expenses = get_all_expenses(&conn).unwrap();
        assert_eq!(expenses[0].expense_date, today);
    }

    #[test]
    fn test_add_expense_unknown_category_aborts() {
        let conn = establish_test_connection().unwrap();
        add_category(&conn, "Food", "Meals").unwrap();
        // The remaining lines would complete an expense if the flow re-prompted.
        let mut console = test_console("42\n1\n10\nLunch\n2025-06-01\n");

        add_expense(&conn, &mut console).unwrap();

        assert!(console.output().contains("Invalid category ID!"));
        assert!(!console.output().contains("Enter Amount"));
        assert!(get_all_expenses(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_add_expense_reprompts_for_amount() {
        let conn = establish_test_connection().unwrap();
        let food = add_category(&conn, "Food", "Meals").unwrap();
        let mut console = test_console(&format!("{food}\nten\n10\nLunch\n2025-06-01\n"));

        add_expense(&conn, &mut console).unwrap();

        assert!(console.output().contains("Please enter a valid amount"));
        assert_eq!(get_all_expenses(&conn).unwrap()[0].amount, Decimal::from(10));
    }

    #[test]
    fn test_add_expense_gives_up_on_bad_date() {
        let conn = establish_test_connection().unwrap();
        let food = add_category(&conn, "Food", "Meals").unwrap();
        let mut console = test_console(&format!("{food}\n10\nLunch\nx\ny\nz\n"));

        let result = add_expense(&conn, &mut console);

        assert!(matches!(result, Err(Error::TooManyAttempts(3))));
        assert!(get_all_expenses(&conn).unwrap().is_empty());
    }
}
