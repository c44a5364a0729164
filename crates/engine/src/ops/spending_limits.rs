use uuid::Uuid;

use crate::{
    EngineError, ExpenseRepository, LimitWrite, Money, ResultEngine, SpendingLimit,
    SpendingLimitCmd, SpendingLimitNew, SpendingLimitRepository, util::normalize_user_id,
};

use super::{Engine, monthly_key};

impl<E, L> Engine<E, L>
where
    E: ExpenseRepository,
    L: SpendingLimitRepository,
{
    /// Set the limit of a user for one month.
    ///
    /// A second call for the same `(user, month, year)` replaces the amount
    /// of the existing limit instead of adding another one.
    pub async fn set_spending_limit(&self, cmd: SpendingLimitCmd) -> ResultEngine<LimitWrite> {
        let (user_id, period) = monthly_key(&cmd.user_id, cmd.month, cmd.year)?;
        let input = SpendingLimitNew {
            user_id,
            period,
            monthly_limit: Money::new(cmd.monthly_limit)?,
        };
        self.spending_limits.upsert(input).await
    }

    pub async fn spending_limit(
        &self,
        user_id: &str,
        month: u32,
        year: i32,
    ) -> ResultEngine<SpendingLimit> {
        let (user_id, period) = monthly_key(user_id, month, year)?;
        self.spending_limits
            .find_by_user_and_month(&user_id, period)
            .await?
            .ok_or_else(|| {
                EngineError::KeyNotFound(format!(
                    "spending limit {user_id}/{}/{}",
                    period.year(),
                    period.month()
                ))
            })
    }

    pub async fn spending_limits(&self, user_id: &str) -> ResultEngine<Vec<SpendingLimit>> {
        let user_id = normalize_user_id(user_id)?;
        self.spending_limits.find_all(&user_id).await
    }

    pub async fn delete_spending_limit(&self, id: Uuid) -> ResultEngine<()> {
        self.spending_limits.delete(id).await
    }
}
