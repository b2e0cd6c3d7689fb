use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::DatabaseId;

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: DatabaseId,
    pub category_id: DatabaseId,
    pub amount: Decimal,
    pub description: String,
    pub expense_date: NaiveDate,
}

/// An expense that has not been stored yet and so has no id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub category_id: DatabaseId,
    pub amount: Decimal,
    pub description: String,
    pub expense_date: NaiveDate,
}

impl NewExpense {
    pub fn new(
        category_id: DatabaseId,
        amount: Decimal,
        description: String,
        expense_date: NaiveDate,
    ) -> Self {
        Self {
            category_id,
            amount,
            description,
            expense_date,
        }
    }
}
