use crate::config::DbConfig;
use crate::error::Error;
use rusqlite::Connection;

/// Opens the database on first use and hands out the same connection until
/// it is released.
pub struct ConnectionProvider {
    config: DbConfig,
    connection: Option<Connection>,
}

impl ConnectionProvider {
    pub fn new(config: DbConfig) -> Self {
        Self {
            config,
            connection: None,
        }
    }

    pub fn acquire(&mut self) -> Result<&Connection, Error> {
        let connection = match self.connection.take() {
            Some(connection) => connection,
            None => establish_connection(&self.config).inspect_err(|e| {
                tracing::error!("Database connection failed: {e}");
            })?,
        };
        Ok(&*self.connection.insert(connection))
    }

    /// Closes the cached connection, if any. Safe to call repeatedly.
    pub fn release(&mut self) {
        if let Some(connection) = self.connection.take() {
            match connection.close() {
                Ok(()) => tracing::info!("Database connection closed."),
                Err((_, e)) => tracing::error!("Error closing connection: {e}"),
            }
        }
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.connection.is_some()
    }
}

pub fn establish_connection(config: &DbConfig) -> Result<Connection, Error> {
    let path = config.database_path();
    let connection_error = |source: rusqlite::Error| Error::Connection {
        url: config.url.clone(),
        source,
    };

    if !config.password.is_empty() {
        tracing::warn!("DB_PASSWORD is set but SQLite does not use credentials; ignoring it");
    }
    tracing::debug!(user = %config.user, "Opening database at {path}");

    let conn = Connection::open(path).map_err(connection_error)?;
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(connection_error)?;
    create_schema(&conn).map_err(connection_error)?;

    tracing::info!(user = %config.user, "Database connected successfully at {path}");
    Ok(conn)
}

fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            description TEXT
        )",
        [],
    )?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS expenses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            category_id INTEGER NOT NULL REFERENCES categories(id),
            amount TEXT NOT NULL,
            description TEXT,
            expense_date TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

#[cfg(test)]
pub fn establish_test_connection() -> Result<Connection, Error> {
    let conn = Connection::open_in_memory()?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    create_schema(&conn)?;
    Ok(conn)
}
