use crate::error::Error;
use crate::models::DatabaseId;
use crate::models::expense::{Expense, NewExpense};
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{Connection, Params, Row, ffi, params};
use rust_decimal::Decimal;
use std::str::FromStr;

const SELECT_EXPENSES: &str =
    "SELECT id, category_id, amount, description, expense_date FROM expenses";

pub fn add_expense(conn: &Connection, expense: &NewExpense) -> Result<DatabaseId, Error> {
    conn.execute(
        "INSERT INTO expenses (category_id, amount, description, expense_date)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            expense.category_id,
            expense.amount.to_string(),
            &expense.description,
            expense.expense_date,
        ],
    )
    .map_err(|e| match e {
        rusqlite::Error::SqliteFailure(ref failure, _)
            if failure.extended_code == ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            Error::UnknownCategory(expense.category_id)
        }
        e => Error::Sql(e),
    })?;
    Ok(conn.last_insert_rowid())
}

pub fn get_all_expenses(conn: &Connection) -> Result<Vec<Expense>, Error> {
    query_expenses(
        conn,
        &format!("{SELECT_EXPENSES} ORDER BY expense_date DESC, id DESC"),
        [],
    )
}

pub fn get_expenses_by_category(
    conn: &Connection,
    category_id: DatabaseId,
) -> Result<Vec<Expense>, Error> {
    query_expenses(
        conn,
        &format!("{SELECT_EXPENSES} WHERE category_id = ?1 ORDER BY expense_date DESC, id DESC"),
        [category_id],
    )
}

/// Expenses dated between `start_date` and `end_date`, both inclusive.
///
/// A reversed range simply matches nothing.
pub fn get_expenses_in_range(
    conn: &Connection,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<Expense>, Error> {
    query_expenses(
        conn,
        &format!(
            "{SELECT_EXPENSES} WHERE expense_date BETWEEN ?1 AND ?2
             ORDER BY expense_date DESC, id DESC"
        ),
        [start_date, end_date],
    )
}

/// Returns whether a row was removed.
pub fn remove_expense(conn: &Connection, id: DatabaseId) -> Result<bool, Error> {
    let rows_affected = conn.execute("DELETE FROM expenses WHERE id = ?1", [id])?;
    Ok(rows_affected > 0)
}

pub fn get_total_expenses(conn: &Connection) -> Result<Decimal, Error> {
    sum_amounts(conn, "SELECT amount FROM expenses", [])
}

pub fn get_total_expenses_by_category(
    conn: &Connection,
    category_id: DatabaseId,
) -> Result<Decimal, Error> {
    sum_amounts(conn, "SELECT amount FROM expenses WHERE category_id = ?1", [category_id])
}

/// Adds up `amounts` exactly, failing instead of panicking when the total does
/// not fit in a `Decimal`.
pub fn checked_total<I>(amounts: I) -> Result<Decimal, Error>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount))
        .ok_or(Error::AmountOverflow)
}

fn query_expenses<P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> Result<Vec<Expense>, Error> {
    let mut stmt = conn.prepare(sql)?;
    let expenses = stmt
        .query_map(params, map_expense_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(expenses)
}

// Amounts are stored as decimal text, and SQLite's SUM works in floating
// point, so totals are added up here.
fn sum_amounts<P: Params>(conn: &Connection, sql: &str, params: P) -> Result<Decimal, Error> {
    let mut stmt = conn.prepare(sql)?;
    let amounts = stmt
        .query_map(params, |row| parse_amount(row, 0))?
        .collect::<Result<Vec<_>, _>>()?;
    checked_total(amounts)
}

fn map_expense_row(row: &Row) -> rusqlite::Result<Expense> {
    let description: Option<String> = row.get(3)?;
    Ok(Expense {
        id: row.get(0)?,
        category_id: row.get(1)?,
        amount: parse_amount(row, 2)?,
        description: description.unwrap_or_default(),
        expense_date: row.get(4)?,
    })
}

fn parse_amount(row: &Row, idx: usize) -> rusqlite::Result<Decimal> {
    let amount_str: String = row.get(idx)?;
    Decimal::from_str(&amount_str)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
