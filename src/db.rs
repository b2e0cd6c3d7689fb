pub mod category_repository;
pub mod connection;
pub mod expense_repository;
