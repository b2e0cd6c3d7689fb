use crate::console::Console;
use crate::db::connection::ConnectionProvider;
use crate::error::Error;
use crate::operations::{add, categories, remove, summary, view};
use rusqlite::Connection;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewAll,
    ViewByCategory,
    ViewByDateRange,
    DeleteExpense,
    ManageCategories,
    ViewSummary,
    Exit,
}

impl MenuChoice {
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::AddExpense),
            2 => Some(MenuChoice::ViewAll),
            3 => Some(MenuChoice::ViewByCategory),
            4 => Some(MenuChoice::ViewByDateRange),
            5 => Some(MenuChoice::DeleteExpense),
            6 => Some(MenuChoice::ManageCategories),
            7 => Some(MenuChoice::ViewSummary),
            8 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Runs the main menu until the user picks Exit or input runs out.
pub fn run<R: BufRead, W: Write>(
    provider: &mut ConnectionProvider,
    console: &mut Console<R, W>,
) -> Result<(), Error> {
    match run_until_exit(provider, console) {
        Err(Error::InputClosed) => {
            tracing::info!("Input closed, leaving the main menu");
            Ok(())
        }
        result => result,
    }
}

fn run_until_exit<R: BufRead, W: Write>(
    provider: &mut ConnectionProvider,
    console: &mut Console<R, W>,
) -> Result<(), Error> {
    loop {
        display_main_menu(console)?;
        let choice = match console.prompt_int("Enter your choice: ") {
            Ok(number) => MenuChoice::from_number(number),
            Err(Error::TooManyAttempts(_)) => None,
            Err(e) => return Err(e),
        };

        match choice {
            Some(MenuChoice::Exit) => {
                writeln!(console, "\nThank you for using Expense Tracker!")?;
                return Ok(());
            }
            Some(choice) => match provider.acquire() {
                Ok(conn) => match dispatch(choice, conn, console) {
                    Err(Error::TooManyAttempts(attempts)) => {
                        tracing::warn!(?choice, "Gave up after {attempts} invalid answers");
                        console.failure("Too many invalid attempts. Returning to the main menu.")?;
                    }
                    result => result?,
                },
                Err(error) => {
                    console.failure(&format!("Database unavailable: {error}"))?;
                }
            },
            None => writeln!(console, "Invalid choice. Please try again.")?,
        }

        console.pause()?;
    }
}

fn dispatch<R: BufRead, W: Write>(
    choice: MenuChoice,
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), Error> {
    tracing::debug!(?choice, "Menu selection");
    match choice {
        MenuChoice::AddExpense => add::add_expense(conn, console),
        MenuChoice::ViewAll => view::view_all_expenses(conn, console),
        MenuChoice::ViewByCategory => view::view_expenses_by_category(conn, console),
        MenuChoice::ViewByDateRange => view::view_expenses_by_date_range(conn, console),
        MenuChoice::DeleteExpense => remove::delete_expense(conn, console),
        MenuChoice::ManageCategories => categories::manage_categories(conn, console),
        MenuChoice::ViewSummary => summary::view_expense_summary(conn, console),
        MenuChoice::Exit => Ok(()),
    }
}

fn display_main_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\n╔════════════════════════════════════════╗")?;
    writeln!(out, "║           MAIN MENU                    ║")?;
    writeln!(out, "╠════════════════════════════════════════╣")?;
    writeln!(out, "║ 1. Add Expense                         ║")?;
    writeln!(out, "║ 2. View All Expenses                   ║")?;
    writeln!(out, "║ 3. View Expenses by Category           ║")?;
    writeln!(out, "║ 4. View Expenses by Date Range         ║")?;
    writeln!(out, "║ 5. Delete Expense                      ║")?;
    writeln!(out, "║ 6. Manage Categories                   ║")?;
    writeln!(out, "║ 7. View Expense Summary                ║")?;
    writeln!(out, "║ 8. Exit                                ║")?;
    writeln!(out, "╚════════════════════════════════════════╝")
}
