//! JSON bodies exchanged over the HTTP API.
//!
//! Keys are camelCase on the wire. Monetary values travel as JSON numbers and
//! are held as [`Decimal`] on both sides.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Query string shared by the monthly endpoints.
///
/// `month` and `year` go together: when both are absent, list endpoints
/// return every record of the user.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthQuery {
    pub user_id: String,
    /// 1-based month.
    pub month: Option<u32>,
    pub year: Option<i32>,
}

pub mod expense {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseNew {
        #[serde(with = "rust_decimal::serde::float")]
        pub amount: Decimal,
        pub description: String,
        pub category: String,
        /// `YYYY-MM-DD` or an RFC 3339 timestamp.
        pub date: String,
        pub user_id: String,
    }

    /// Partial update; omitted fields keep their value.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseUpdate {
        #[serde(
            default,
            with = "rust_decimal::serde::float_option",
            skip_serializing_if = "Option::is_none"
        )]
        pub amount: Option<Decimal>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub category: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub date: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub user_id: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Expense {
        pub id: Uuid,
        #[serde(with = "rust_decimal::serde::float")]
        pub amount: Decimal,
        pub description: String,
        pub category: String,
        pub date: NaiveDate,
        pub user_id: String,
    }
}

pub mod spending_limit {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SpendingLimitNew {
        pub user_id: String,
        #[serde(with = "rust_decimal::serde::float")]
        pub monthly_limit: Decimal,
        pub month: u32,
        pub year: i32,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SpendingLimit {
        pub id: Uuid,
        pub user_id: String,
        #[serde(with = "rust_decimal::serde::float")]
        pub monthly_limit: Decimal,
        pub month: u32,
        pub year: i32,
    }
}

pub mod summary {
    use super::*;

    /// Spending of one user in one month. The three limit-derived fields
    /// are `null` when no limit is set for that month.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SpendingSummary {
        #[serde(with = "rust_decimal::serde::float")]
        pub total_spent: Decimal,
        #[serde(with = "rust_decimal::serde::float_option")]
        pub spending_limit: Option<Decimal>,
        #[serde(with = "rust_decimal::serde::float_option")]
        pub remaining_budget: Option<Decimal>,
        /// `null` as well when the limit is zero.
        #[serde(with = "rust_decimal::serde::float_option")]
        pub percentage_used: Option<Decimal>,
    }
}
