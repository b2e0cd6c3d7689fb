use crate::console::Console;
use crate::db::category_repository;
use crate::error::{Error, OrLog};
use rusqlite::Connection;
use std::io::{BufRead, Write};

const TABLE_RULE: &str = "─────────────────────────────────────────────────────────";

pub fn manage_categories<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), Error> {
    writeln!(console, "\n=== MANAGE CATEGORIES ===")?;
    writeln!(console, "1. View All Categories")?;
    writeln!(console, "2. Add New Category")?;

    match console.prompt_int("Enter your choice: ")? {
        1 => display_categories(conn, console),
        2 => add_category(conn, console),
        _ => {
            writeln!(console, "Invalid choice.")?;
            Ok(())
        }
    }
}

/// Prints the category table, also used as a picker by other operations.
pub fn display_categories<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), Error> {
    let categories = category_repository::get_all_categories(conn)
        .or_log(Vec::new(), "Error fetching categories");

    if categories.is_empty() {
        writeln!(console, "No categories found.")?;
        return Ok(());
    }

    writeln!(console, "\n{TABLE_RULE}")?;
    writeln!(console, "{:<5} {:<20} {:<30}", "ID", "Name", "Description")?;
    writeln!(console, "{TABLE_RULE}")?;
    for category in &categories {
        writeln!(
            console,
            "{:<5} {:<20} {:<30}",
            category.id, category.name, category.description
        )?;
    }
    writeln!(console, "{TABLE_RULE}")?;
    Ok(())
}

fn add_category<R: BufRead, W: Write>(
    conn: &Connection,
    console: &mut Console<R, W>,
) -> Result<(), Error> {
    writeln!(console, "\n=== ADD NEW CATEGORY ===")?;
    let name = console.prompt_line("Enter Category Name: ")?;
    let description = console.prompt_line("Enter Description: ")?;

    match category_repository::add_category(conn, &name, &description) {
        Ok(id) => {
            tracing::info!(category_id = id, "Added category {name}");
            console.success("✓ Category added successfully!")?;
        }
        Err(error) => {
            tracing::error!("Error adding category: {error}");
            console.failure(&format!("✗ Failed to add category: {error}"))?;
        }
    }
    Ok(())
}
