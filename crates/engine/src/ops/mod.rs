use crate::{
    ExpenseRepository, InMemoryExpenses, InMemorySpendingLimits, MonthPeriod, ResultEngine,
    SpendingLimitRepository, util::normalize_user_id,
};

mod expenses;
mod spending_limits;
mod summary;

/// Use-case facade over the expense and spending limit repositories.
///
/// The engine never names a concrete store: it is generic over the
/// repository traits and defaults to the in-memory implementations.
#[derive(Debug)]
pub struct Engine<E = InMemoryExpenses, L = InMemorySpendingLimits> {
    expenses: E,
    spending_limits: L,
}

impl<E, L> Engine<E, L>
where
    E: ExpenseRepository,
    L: SpendingLimitRepository,
{
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder<E, L> {
        EngineBuilder::default()
    }
}

impl Engine {
    /// Engine backed by empty in-memory stores.
    pub fn in_memory() -> Self {
        Self {
            expenses: InMemoryExpenses::new(),
            spending_limits: InMemorySpendingLimits::new(),
        }
    }
}

/// Validate the `(user, month, year)` key shared by monthly queries.
fn monthly_key(user_id: &str, month: u32, year: i32) -> ResultEngine<(String, MonthPeriod)> {
    let user_id = normalize_user_id(user_id)?;
    let period = MonthPeriod::new(year, month)?;
    Ok((user_id, period))
}

/// The builder for `Engine`
pub struct EngineBuilder<E, L> {
    expenses: Option<E>,
    spending_limits: Option<L>,
}

impl<E, L> Default for EngineBuilder<E, L> {
    fn default() -> Self {
        Self {
            expenses: None,
            spending_limits: None,
        }
    }
}

impl<E, L> EngineBuilder<E, L>
where
    E: ExpenseRepository + Default,
    L: SpendingLimitRepository + Default,
{
    /// Pass the expense repository
    pub fn expenses(mut self, repository: E) -> Self {
        self.expenses = Some(repository);
        self
    }

    /// Pass the spending limit repository
    pub fn spending_limits(mut self, repository: L) -> Self {
        self.spending_limits = Some(repository);
        self
    }

    /// Construct `Engine`. Repositories not passed fall back to their
    /// default (empty) value.
    pub fn build(self) -> Engine<E, L> {
        Engine {
            expenses: self.expenses.unwrap_or_default(),
            spending_limits: self.spending_limits.unwrap_or_default(),
        }
    }
}
