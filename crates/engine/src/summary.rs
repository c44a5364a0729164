//! Monthly spending summary: total spent against an optional limit.

use rust_decimal::Decimal;

use crate::{EngineError, Expense, Money, ResultEngine, SpendingLimit};

/// Decimal places kept in [`SpendingSummary::percentage_used`].
const PERCENTAGE_SCALE: u32 = 2;

/// Derived report of spend against a limit. Never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpendingSummary {
    pub total_spent: Decimal,
    pub spending_limit: Option<Decimal>,
    /// `limit - total`. Negative when the limit is overspent.
    pub remaining_budget: Option<Decimal>,
    /// `total / limit * 100`, may exceed 100. `None` without a limit or
    /// when the limit is zero.
    pub percentage_used: Option<Decimal>,
}

impl SpendingSummary {
    /// Computes the summary of `expenses` against `limit`.
    ///
    /// The caller is responsible for passing expenses and a limit that belong
    /// to the same user and month. Fails with [`EngineError::Overflow`] when
    /// the total or the percentage leaves the decimal range.
    pub fn compute<'a, I>(expenses: I, limit: Option<&SpendingLimit>) -> ResultEngine<Self>
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let total_spent = expenses
            .into_iter()
            .try_fold(Money::ZERO, |acc, expense| acc.checked_add(expense.amount))
            .ok_or_else(|| EngineError::Overflow("total spent".to_string()))?
            .amount();

        let Some(limit) = limit else {
            return Ok(Self {
                total_spent,
                spending_limit: None,
                remaining_budget: None,
                percentage_used: None,
            });
        };

        let monthly_limit = limit.monthly_limit.amount();
        let percentage_used = if monthly_limit.is_zero() {
            None
        } else {
            let pct = total_spent
                .checked_div(monthly_limit)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .ok_or_else(|| EngineError::Overflow("percentage used".to_string()))?;
            Some(pct.round_dp(PERCENTAGE_SCALE).normalize())
        };

        let remaining_budget = monthly_limit
            .checked_sub(total_spent)
            .ok_or_else(|| EngineError::Overflow("remaining budget".to_string()))?;

        Ok(Self {
            total_spent,
            spending_limit: Some(monthly_limit),
            remaining_budget: Some(remaining_budget),
            percentage_used,
        })
    }
}
