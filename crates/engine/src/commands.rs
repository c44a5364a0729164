//! Input commands accepted by the engine.
//!
//! Commands carry raw values; the engine validates them and converts them
//! into domain types before anything reaches a repository.

use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Clone, Debug)]
pub struct ExpenseCmd {
    pub amount: Decimal,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    pub user_id: String,
}

/// Partial edit; `None` fields are left untouched.
#[derive(Clone, Debug, Default)]
pub struct UpdateExpenseCmd {
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub user_id: Option<String>,
}

#[derive(Clone, Debug)]
pub struct SpendingLimitCmd {
    pub user_id: String,
    pub monthly_limit: Decimal,
    pub month: u32,
    pub year: i32,
}
