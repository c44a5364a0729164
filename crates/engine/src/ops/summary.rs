use crate::{ExpenseRepository, ResultEngine, SpendingLimitRepository, SpendingSummary};

use super::{Engine, monthly_key};

impl<E, L> Engine<E, L>
where
    E: ExpenseRepository,
    L: SpendingLimitRepository,
{
    /// Summary of a user's spending in `month`/`year` against the limit set
    /// for that month, if any.
    pub async fn monthly_summary(
        &self,
        user_id: &str,
        month: u32,
        year: i32,
    ) -> ResultEngine<SpendingSummary> {
        let (user_id, period) = monthly_key(user_id, month, year)?;
        let expenses = self.expenses.find_by_month(&user_id, period).await?;
        let limit = self
            .spending_limits
            .find_by_user_and_month(&user_id, period)
            .await?;

        SpendingSummary::compute(&expenses, limit.as_ref())
    }
}
