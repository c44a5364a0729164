//! In-memory repositories.
//!
//! Each store owns its records in a [`Table`]: rows are keyed by an insertion
//! sequence, so iteration follows insertion order, and a side index maps ids
//! to sequences for point lookups. The table sits behind one
//! [`RwLock`]; every mutation holds the write half, which serializes
//! concurrent writers.

use std::collections::{BTreeMap, HashMap};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    EngineError, Expense, ExpenseNew, ExpenseRepository, ExpenseUpdate, LimitWrite, MonthPeriod,
    ResultEngine, SpendingLimit, SpendingLimitNew, SpendingLimitRepository,
};

trait Keyed {
    fn key(&self) -> Uuid;
}

impl Keyed for Expense {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for SpendingLimit {
    fn key(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug)]
struct Table<T> {
    next_seq: u64,
    rows: BTreeMap<u64, T>,
    index: HashMap<Uuid, u64>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_seq: 0,
            rows: BTreeMap::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Keyed> Table<T> {
    fn insert(&mut self, row: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(row.key(), seq);
        self.rows.insert(seq, row);
    }

    fn get(&self, id: &Uuid) -> Option<&T> {
        self.index.get(id).and_then(|seq| self.rows.get(seq))
    }

    fn get_mut(&mut self, id: &Uuid) -> Option<&mut T> {
        self.index.get(id).and_then(|seq| self.rows.get_mut(seq))
    }

    fn remove(&mut self, id: &Uuid) -> Option<T> {
        let seq = self.index.remove(id)?;
        self.rows.remove(&seq)
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Generate an id that is not yet used in `table`.
fn fresh_id<T: Keyed>(table: &Table<T>) -> Uuid {
    loop {
        let id = Uuid::new_v4();
        if !table.index.contains_key(&id) {
            return id;
        }
    }
}

/// Expense store held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryExpenses {
    table: RwLock<Table<Expense>>,
}

impl InMemoryExpenses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored expenses, across all users.
    pub async fn len(&self) -> usize {
        self.table.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn filtered<F>(table: &Table<Expense>, mut keep: F) -> Vec<Expense>
    where
        F: FnMut(&Expense) -> bool,
    {
        table.iter().filter(|&expense| keep(expense)).cloned().collect()
    }
}

impl ExpenseRepository for InMemoryExpenses {
    async fn create(&self, input: ExpenseNew) -> ResultEngine<Expense> {
        let mut table = self.table.write().await;
        let expense = input.into_expense(fresh_id(&*table));
        table.insert(expense.clone());
        Ok(expense)
    }

    async fn find_all(&self, user_id: &str) -> ResultEngine<Vec<Expense>> {
        let table = self.table.read().await;
        Ok(Self::filtered(&table, |e| e.user_id == user_id))
    }

    async fn find_by_month(
        &self,
        user_id: &str,
        period: MonthPeriod,
    ) -> ResultEngine<Vec<Expense>> {
        let table = self.table.read().await;
        Ok(Self::filtered(&table, |e| {
            e.user_id == user_id && period.contains(e.date)
        }))
    }

    async fn find_by_id(&self, id: Uuid) -> ResultEngine<Option<Expense>> {
        Ok(self.table.read().await.get(&id).cloned())
    }

    async fn update(&self, id: Uuid, update: ExpenseUpdate) -> ResultEngine<Expense> {
        let mut table = self.table.write().await;
        let expense = table
            .get_mut(&id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))?;
        expense.apply(update);
        Ok(expense.clone())
    }

    async fn delete(&self, id: Uuid) -> ResultEngine<()> {
        self.table.write().await.remove(&id);
        Ok(())
    }
}

/// Spending limit store held in process memory.
#[derive(Debug, Default)]
pub struct InMemorySpendingLimits {
    table: RwLock<Table<SpendingLimit>>,
}

impl InMemorySpendingLimits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored limits, across all users.
    pub async fn len(&self) -> usize {
        self.table.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl SpendingLimitRepository for InMemorySpendingLimits {
    async fn upsert(&self, input: SpendingLimitNew) -> ResultEngine<LimitWrite> {
        let mut table = self.table.write().await;

        let existing = table
            .iter()
            .find(|limit| limit.matches(&input.user_id, input.period))
            .map(|limit| limit.id);

        if let Some(id) = existing
            && let Some(limit) = table.get_mut(&id)
        {
            limit.monthly_limit = input.monthly_limit;
            return Ok(LimitWrite::Replaced(limit.clone()));
        }

        let limit = input.into_limit(fresh_id(&*table));
        table.insert(limit.clone());
        Ok(LimitWrite::Created(limit))
    }

    async fn find_by_user_and_month(
        &self,
        user_id: &str,
        period: MonthPeriod,
    ) -> ResultEngine<Option<SpendingLimit>> {
        let table = self.table.read().await;
        Ok(table
            .iter()
            .find(|limit| limit.matches(user_id, period))
            .cloned())
    }

    async fn find_all(&self, user_id: &str) -> ResultEngine<Vec<SpendingLimit>> {
        let table = self.table.read().await;
        Ok(table
            .iter()
            .filter(|limit| limit.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: Uuid) -> ResultEngine<()> {
        self.table.write().await.remove(&id);
        Ok(())
    }
}
