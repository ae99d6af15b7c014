//! Period totals.

use serde::{Deserialize, Serialize};

/// Income and expense totals of a period.
///
/// `net_savings` is `total_income - total_expense` without rounding, and is
/// negative when the period spent more than it earned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryTotals {
    pub total_income: f64,
    pub total_expense: f64,
    pub net_savings: f64,
}

pub fn compute_summary(income_sum: f64, expense_sum: f64) -> SummaryTotals {
    SummaryTotals {
        total_income: income_sum,
        total_expense: expense_sum,
        net_savings: income_sum - expense_sum,
    }
}
