//! Expense records and the inputs used to create and edit them.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::Money;

/// One spending event owned by a user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    pub id: Uuid,
    pub amount: Money,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    pub user_id: String,
}

/// Fields of a new expense. The store assigns the id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseNew {
    pub amount: Money,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    pub user_id: String,
}

impl ExpenseNew {
    pub(crate) fn into_expense(self, id: Uuid) -> Expense {
        Expense {
            id,
            amount: self.amount,
            description: self.description,
            category: self.category,
            date: self.date,
            user_id: self.user_id,
        }
    }
}

/// Partial edit of an expense; `None` keeps the stored value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpenseUpdate {
    pub amount: Option<Money>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub user_id: Option<String>,
}

impl ExpenseUpdate {
    /// Returns `true` when no field would change.
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.date.is_none()
            && self.user_id.is_none()
    }
}

impl Expense {
    /// Apply `update` in place. The id is never touched.
    pub fn apply(&mut self, update: ExpenseUpdate) {
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(user_id) = update.user_id {
            self.user_id = user_id;
        }
    }
}
