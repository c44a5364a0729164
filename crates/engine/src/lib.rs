//! Expense tracking and monthly budget engine.
//!
//! The engine owns the domain types ([`Expense`], [`SpendingLimit`],
//! [`SpendingSummary`]), the repository traits they are stored through and
//! the [`Engine`] facade that validates input and runs the use-cases.

pub use commands::{ExpenseCmd, SpendingLimitCmd, UpdateExpenseCmd};
pub use error::EngineError;
pub use expenses::{Expense, ExpenseNew, ExpenseUpdate};
pub use memory::{InMemoryExpenses, InMemorySpendingLimits};
pub use money::Money;
pub use ops::{Engine, EngineBuilder};
pub use period::MonthPeriod;
pub use repository::{ExpenseRepository, SpendingLimitRepository};
pub use spending_limits::{LimitWrite, SpendingLimit, SpendingLimitNew};
pub use summary::SpendingSummary;
pub use util::parse_calendar_date;

mod commands;
mod error;
mod expenses;
pub mod memory;
mod money;
mod ops;
mod period;
mod repository;
mod spending_limits;
mod summary;
mod util;

pub type ResultEngine<T> = Result<T, EngineError>;
