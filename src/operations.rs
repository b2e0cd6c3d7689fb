pub mod add;
pub mod categories;
pub mod remove;
pub mod summary;
pub mod view;
