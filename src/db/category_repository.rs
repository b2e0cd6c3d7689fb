use crate::error::{Error, OrLog};
use crate::models::DatabaseId;
use crate::models::category::Category;
use rusqlite::{Connection, OptionalExtension, ffi};

/// Shown wherever a category name cannot be looked up.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

pub fn add_category(conn: &Connection, name: &str, description: &str) -> Result<DatabaseId, Error> {
    conn.execute(
        "INSERT INTO categories (name, description) VALUES (?1, ?2)",
        [name, description],
    )
    .map_err(|e| match e {
        rusqlite::Error::SqliteFailure(ref failure, _)
            if failure.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            Error::DuplicateCategoryName(name.to_string())
        }
        e => Error::Sql(e),
    })?;
    Ok(conn.last_insert_rowid())
}

pub fn get_all_categories(conn: &Connection) -> Result<Vec<Category>, Error> {
    let mut stmt = conn.prepare("SELECT id, name, description FROM categories ORDER BY name ASC")?;

    let categories = stmt
        .query_map([], |row| {
            let description: Option<String> = row.get(2)?;
            Ok(Category {
                id: row.get(0)?,
                name: row.get(1)?,
                description: description.unwrap_or_default(),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(categories)
}

pub fn get_category_name(conn: &Connection, id: DatabaseId) -> Result<Option<String>, Error> {
    let name = conn
        .query_row("SELECT name FROM categories WHERE id = ?1", [id], |row| row.get(0))
        .optional()?;
    Ok(name)
}

/// The category's name, or [UNKNOWN_CATEGORY] when it is missing or the
/// lookup fails.
pub fn category_name_or_unknown(conn: &Connection, id: DatabaseId) -> String {
    get_category_name(conn, id)
        .or_log(None, "Error fetching category name")
        .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string())
}

pub fn category_exists(conn: &Connection, id: DatabaseId) -> Result<bool, Error> {
    let exists = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?1)",
        [id],
        |row| row.get(0),
    )?;
    Ok(exists)
}
