pub mod category;
pub mod expense;

/// Row ids assigned by SQLite.
pub type DatabaseId = i64;
