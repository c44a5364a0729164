//! Per-user monthly budget ceilings.

use uuid::Uuid;

use crate::{Money, MonthPeriod};

/// Budget ceiling of one user for one calendar month.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpendingLimit {
    pub id: Uuid,
    pub user_id: String,
    pub period: MonthPeriod,
    pub monthly_limit: Money,
}

impl SpendingLimit {
    pub fn matches(&self, user_id: &str, period: MonthPeriod) -> bool {
        self.user_id == user_id && self.period == period
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpendingLimitNew {
    pub user_id: String,
    pub period: MonthPeriod,
    pub monthly_limit: Money,
}

impl SpendingLimitNew {
    pub(crate) fn into_limit(self, id: Uuid) -> SpendingLimit {
        SpendingLimit {
            id,
            user_id: self.user_id,
            period: self.period,
            monthly_limit: self.monthly_limit,
        }
    }
}

/// Outcome of setting a limit: a (user, month) key holds at most one limit,
/// so a second write for the same key replaces the amount of the first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LimitWrite {
    Created(SpendingLimit),
    Replaced(SpendingLimit),
}

impl LimitWrite {
    pub fn limit(&self) -> &SpendingLimit {
        match self {
            Self::Created(limit) | Self::Replaced(limit) => limit,
        }
    }

    pub fn into_limit(self) -> SpendingLimit {
        match self {
            Self::Created(limit) | Self::Replaced(limit) => limit,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}
