use uuid::Uuid;

use crate::{
    EngineError, Expense, ExpenseCmd, ExpenseNew, ExpenseRepository, ExpenseUpdate, Money,
    ResultEngine, SpendingLimitRepository, UpdateExpenseCmd,
    util::{normalize_text, normalize_user_id},
};

use super::{Engine, monthly_key};

impl<E, L> Engine<E, L>
where
    E: ExpenseRepository,
    L: SpendingLimitRepository,
{
    /// Record a new expense and return it with its generated id.
    pub async fn create_expense(&self, cmd: ExpenseCmd) -> ResultEngine<Expense> {
        let input = ExpenseNew {
            amount: Money::new(cmd.amount)?,
            description: normalize_text(&cmd.description),
            category: normalize_text(&cmd.category),
            date: cmd.date,
            user_id: normalize_user_id(&cmd.user_id)?,
        };
        self.expenses.create(input).await
    }

    /// All expenses of `user_id`, oldest insertion first.
    pub async fn expenses(&self, user_id: &str) -> ResultEngine<Vec<Expense>> {
        let user_id = normalize_user_id(user_id)?;
        self.expenses.find_all(&user_id).await
    }

    /// Expenses of `user_id` dated in `month`/`year` (`month` is 1-based).
    pub async fn expenses_for_month(
        &self,
        user_id: &str,
        month: u32,
        year: i32,
    ) -> ResultEngine<Vec<Expense>> {
        let (user_id, period) = monthly_key(user_id, month, year)?;
        self.expenses.find_by_month(&user_id, period).await
    }

    pub async fn expense(&self, id: Uuid) -> ResultEngine<Expense> {
        self.expenses
            .find_by_id(id)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))
    }

    /// Replace the fields present in `cmd`, keeping the id and every other
    /// field.
    pub async fn update_expense(&self, id: Uuid, cmd: UpdateExpenseCmd) -> ResultEngine<Expense> {
        let update = ExpenseUpdate {
            amount: cmd.amount.map(Money::new).transpose()?,
            description: cmd.description.as_deref().map(normalize_text),
            category: cmd.category.as_deref().map(normalize_text),
            date: cmd.date,
            user_id: cmd.user_id.as_deref().map(normalize_user_id).transpose()?,
        };
        if update.is_empty() {
            return self.expense(id).await;
        }
        self.expenses.update(id, update).await
    }

    /// Remove an expense. Deleting an unknown id succeeds.
    pub async fn delete_expense(&self, id: Uuid) -> ResultEngine<()> {
        self.expenses.delete(id).await
    }
}
