//! Storage capabilities the engine depends on.
//!
//! [`Engine`](crate::Engine) only talks to these traits. The in-memory
//! implementations live in [`memory`](crate::memory); a persistent store can
//! implement the same traits without touching the engine.

use std::future::Future;

use uuid::Uuid;

use crate::{
    Expense, ExpenseNew, ExpenseUpdate, LimitWrite, MonthPeriod, ResultEngine, SpendingLimit,
    SpendingLimitNew,
};

/// Repository trait for expense persistence.
pub trait ExpenseRepository: Send + Sync {
    /// Store a new expense under a freshly generated id.
    fn create(&self, input: ExpenseNew) -> impl Future<Output = ResultEngine<Expense>> + Send;

    /// All expenses of `user_id`, in insertion order.
    fn find_all(&self, user_id: &str) -> impl Future<Output = ResultEngine<Vec<Expense>>> + Send;

    /// Expenses of `user_id` dated inside `period`, in insertion order.
    fn find_by_month(
        &self,
        user_id: &str,
        period: MonthPeriod,
    ) -> impl Future<Output = ResultEngine<Vec<Expense>>> + Send;

    fn find_by_id(&self, id: Uuid) -> impl Future<Output = ResultEngine<Option<Expense>>> + Send;

    /// Replace the fields named in `update`.
    ///
    /// Returns [`EngineError::KeyNotFound`](crate::EngineError::KeyNotFound)
    /// when no expense has this id.
    fn update(
        &self,
        id: Uuid,
        update: ExpenseUpdate,
    ) -> impl Future<Output = ResultEngine<Expense>> + Send;

    /// Remove the expense if present. Missing ids are not an error.
    fn delete(&self, id: Uuid) -> impl Future<Output = ResultEngine<()>> + Send;
}

/// Repository trait for spending limit persistence.
pub trait SpendingLimitRepository: Send + Sync {
    /// Create the limit for `(user_id, period)` or replace the amount of the
    /// existing one. Implementations must make check and write atomic.
    fn upsert(&self, input: SpendingLimitNew)
    -> impl Future<Output = ResultEngine<LimitWrite>> + Send;

    fn find_by_user_and_month(
        &self,
        user_id: &str,
        period: MonthPeriod,
    ) -> impl Future<Output = ResultEngine<Option<SpendingLimit>>> + Send;

    /// All limits of `user_id`, in insertion order.
    fn find_all(
        &self,
        user_id: &str,
    ) -> impl Future<Output = ResultEngine<Vec<SpendingLimit>>> + Send;

    /// Remove the limit if present. Missing ids are not an error.
    fn delete(&self, id: Uuid) -> impl Future<Output = ResultEngine<()>> + Send;
}
