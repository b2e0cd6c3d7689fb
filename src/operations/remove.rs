use super::view::view_all_expenses;
use crate::console::Console;
use crate::db::expense_repository;
use crate::error::Error;
use rusqlite::Connection;
use std::io::{BufRead, Write};

pub fn delete_expense<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), Error> {
    writeln!(console, "\n=== DELETE EXPENSE ===")?;
    view_all_expenses(conn, console)?;

    let expense_id = console.prompt_int("\nEnter Expense ID to delete (0 to cancel): ")?;
    if expense_id == 0 {
        writeln!(console, "Deletion cancelled.")?;
        return Ok(());
    }

    if !console.confirm("Are you sure you want to delete this expense? (yes/no): ")? {
        writeln!(console, "Deletion cancelled.")?;
        return Ok(());
    }

    match expense_repository::remove_expense(conn, expense_id) {
        Ok(true) => {
            tracing::info!(expense_id, "Deleted expense");
            console.success("✓ Expense deleted successfully!")?;
        }
        Ok(false) => {
            console.failure("✗ Failed to delete expense. Invalid ID?")?;
        }
        Err(error) => {
            tracing::error!("Error deleting expense: {error}");
            console.failure(&format!("✗ Failed to delete expense: {error}"))?;
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
    use crate::db::expense_repository::{add_expense, get_all_expenses};
    use crate::models::DatabaseId;
    use crate::models::expense::NewExpense;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn connection_with_expense() -> (Connection, DatabaseId) {
        let conn = establish_test_connection().unwrap();
        let food = add_category(&conn, "Food", "Meals").unwrap();
        let id = add_expense(
            &conn,
            &NewExpense::new(
                food,
                Decimal::new(999, 2),
                "Snack".to_string(),
                NaiveDate::from_ymd_opt(2025, 2, 2).unwrap(),
            ),
        )
        .unwrap();
        (conn, id)
    }

    #[test]
    fn test_delete_expense_confirmed() {
        let (conn, id) = connection_with_expense();
        let mut console = test_console(&format!("{id}\n Y \n"));

        delete_expense(&conn, &mut console).unwrap();

        let output = console.output();
        assert!(output.contains("Snack"), "listing is shown before the prompt");
        assert!(output.contains("Expense deleted successfully"));
        assert!(get_all_expenses(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_delete_expense_declined() {
        let (conn, id) = connection_with_expense();
        let mut console = test_console(&format!("{id}\nnope\n"));

        delete_expense(&conn, &mut console).unwrap();

        assert!(console.output().contains("Deletion cancelled."));
        assert_eq!(get_all_expenses(&conn).unwrap().len(), 1);
    }

    #[test]
    fn test_delete_expense_zero_cancels_without_confirmation() {
        let (conn, _) = connection_with_expense();
        let mut console = test_console("0\n");

        delete_expense(&conn, &mut console).unwrap();

        assert!(console.output().contains("Deletion cancelled."));
        assert!(!console.output().contains("Are you sure"));
        assert_eq!(get_all_expenses(&conn).unwrap().len(), 1);
    }

    #[test]
    fn test_delete_unknown_expense() {
        let (conn, id) = connection_with_expense();
        let mut console = test_console(&format!("{}\nyes\n", id + 100));

        delete_expense(&conn, &mut console).unwrap();

        assert!(console.output().contains("Failed to delete expense. Invalid ID?"));
        assert_eq!(get_all_expenses(&conn).unwrap().len(), 1);
    }
}
