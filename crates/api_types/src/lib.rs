use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query string shared by the period endpoints (`?start_date=..&end_date=..`).
///
/// Both bounds are inclusive calendar dates (`YYYY-MM-DD`).
#[derive(Debug, Serialize, Deserialize)]
pub struct PeriodQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

pub mod transaction {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionNew {
        pub date: NaiveDate,
        /// Must be > 0. The category carries the direction.
        pub amount: f64,
        /// `"Income"` or `"Expense"`.
        pub category: String,
        pub sub_category: String,
        pub description: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: i64,
        pub date: NaiveDate,
        pub amount: f64,
        pub category: String,
        pub sub_category: String,
        pub description: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PeriodSummary {
        pub start_date: NaiveDate,
        pub end_date: NaiveDate,
        pub total_income: f64,
        pub total_expense: f64,
        pub net_savings: f64,
        /// Ordered by date, then id.
        pub transactions: Vec<TransactionView>,
    }
}

pub mod health {
    use std::collections::BTreeMap;

    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub enum HealthLabel {
        Healthy,
        Neutral,
        Risky,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct HealthScoreResponse {
        pub start_date: NaiveDate,
        pub end_date: NaiveDate,
        /// 0 to 100.
        pub score: u8,
        pub label: HealthLabel,
        /// Net savings over income; 0 when the period has no income.
        pub savings_rate: f64,
        /// Share of total expense per sub-category. Empty without expenses.
        pub expense_breakdown: BTreeMap<String, f64>,
    }
}
