use super::DatabaseId;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: DatabaseId,
    pub name: String,
    pub description: String,
}
