//! Financial health scoring.
//!
//! The score starts at 100 and loses points for three independent reasons:
//!
//! 1. a low (or unknown) savings rate,
//! 2. a large share of spending on `Shopping` and `Entertainment`,
//! 3. a large share of spending on `Food`.
//!
//! Penalties are subtracted from the base and the result is clamped to
//! `0..=100` once at the end. Everything here is pure: callers hand in a
//! snapshot of a period and get a value back, there are no error paths.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Category, SummaryTotals, Transaction};

/// Share of total expense per sub-category, each in `(0, 1]`.
///
/// Keys are unique; iteration order carries no meaning.
pub type ExpenseBreakdown = BTreeMap<String, f64>;

const BASE_SCORE: i32 = 100;

const NO_INCOME_PENALTY: i32 = 15;
const NEGATIVE_SAVINGS_PENALTY: i32 = 40;
const LOW_SAVINGS_RATE: f64 = 0.10;
const LOW_SAVINGS_PENALTY: i32 = 25;
const MODERATE_SAVINGS_RATE: f64 = 0.20;
const MODERATE_SAVINGS_PENALTY: i32 = 10;

const DISCRETIONARY_CATEGORIES: [&str; 2] = ["Shopping", "Entertainment"];
const DISCRETIONARY_HIGH_SHARE: f64 = 0.50;
const DISCRETIONARY_HIGH_PENALTY: i32 = 25;
const DISCRETIONARY_MODERATE_SHARE: f64 = 0.30;
const DISCRETIONARY_MODERATE_PENALTY: i32 = 10;

const FOOD_CATEGORY: &str = "Food";
const FOOD_HIGH_SHARE: f64 = 0.50;
const FOOD_HIGH_PENALTY: i32 = 10;

const HEALTHY_MIN_SCORE: u8 = 80;
const NEUTRAL_MIN_SCORE: u8 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthLabel {
    Healthy,
    Neutral,
    Risky,
}

impl HealthLabel {
    /// Maps a clamped score to its tier. Lower bounds are inclusive.
    pub fn from_score(score: u8) -> Self {
        if score >= HEALTHY_MIN_SCORE {
            Self::Healthy
        } else if score >= NEUTRAL_MIN_SCORE {
            Self::Neutral
        } else {
            Self::Risky
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthScore {
    pub score: u8,
    pub label: HealthLabel,
    pub savings_rate: f64,
    pub expense_breakdown: ExpenseBreakdown,
}

/// Splits `total_expense` across the sub-categories of the expense rows.
///
/// Returns an empty map when `total_expense` is not positive.
pub fn expense_breakdown(transactions: &[Transaction], total_expense: f64) -> ExpenseBreakdown {
    if total_expense <= 0.0 {
        return ExpenseBreakdown::new();
    }

    let mut sums = ExpenseBreakdown::new();
    for tx in transactions
        .iter()
        .filter(|tx| tx.category == Category::Expense)
    {
        *sums.entry(tx.sub_category.clone()).or_insert(0.0) += tx.amount;
    }

    sums.into_iter()
        .filter(|(_, amount)| *amount != 0.0)
        .map(|(sub_category, amount)| (sub_category, amount / total_expense))
        .collect()
}

/// `net_savings / total_income`, or `0.0` without income.
pub fn savings_rate(totals: &SummaryTotals) -> f64 {
    if totals.total_income > 0.0 {
        totals.net_savings / totals.total_income
    } else {
        0.0
    }
}

fn savings_penalty(total_income: f64, savings_rate: f64) -> i32 {
    if total_income <= 0.0 {
        NO_INCOME_PENALTY
    } else if savings_rate < 0.0 {
        NEGATIVE_SAVINGS_PENALTY
    } else if savings_rate < LOW_SAVINGS_RATE {
        LOW_SAVINGS_PENALTY
    } else if savings_rate < MODERATE_SAVINGS_RATE {
        MODERATE_SAVINGS_PENALTY
    } else {
        0
    }
}

fn share_of(breakdown: &ExpenseBreakdown, sub_category: &str) -> f64 {
    breakdown.get(sub_category).copied().unwrap_or(0.0)
}

fn discretionary_penalty(breakdown: &ExpenseBreakdown) -> i32 {
    let share: f64 = DISCRETIONARY_CATEGORIES
        .iter()
        .map(|name| share_of(breakdown, name))
        .sum();

    if share > DISCRETIONARY_HIGH_SHARE {
        DISCRETIONARY_HIGH_PENALTY
    } else if share > DISCRETIONARY_MODERATE_SHARE {
        DISCRETIONARY_MODERATE_PENALTY
    } else {
        0
    }
}

fn food_penalty(breakdown: &ExpenseBreakdown) -> i32 {
    if share_of(breakdown, FOOD_CATEGORY) > FOOD_HIGH_SHARE {
        FOOD_HIGH_PENALTY
    } else {
        0
    }
}

/// Scores a period from its rows and the totals derived from the same rows.
pub fn compute_health_score(transactions: &[Transaction], totals: &SummaryTotals) -> HealthScore {
    let savings_rate = savings_rate(totals);
    let expense_breakdown = expense_breakdown(transactions, totals.total_expense);

    let raw = BASE_SCORE
        - savings_penalty(totals.total_income, savings_rate)
        - discretionary_penalty(&expense_breakdown)
        - food_penalty(&expense_breakdown);
    let score = raw.clamp(0, BASE_SCORE) as u8;

    HealthScore {
        score,
        label: HealthLabel::from_score(score),
        savings_rate,
        expense_breakdown,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::compute_summary;

    fn tx(id: i64, category: Category, sub_category: &str, amount: f64) -> Transaction {
        Transaction {
            id,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(id as u64),
            amount,
            category,
            sub_category: sub_category.to_string(),
            description: None,
        }
    }

    fn income(id: i64, amount: f64) -> Transaction {
        tx(id, Category::Income, "Salary", amount)
    }

    fn expense(id: i64, sub_category: &str, amount: f64) -> Transaction {
        tx(id, Category::Expense, sub_category, amount)
    }

    /// Totals the way the store does: by category, ignoring unknown ones.
    fn score(transactions: &[Transaction]) -> HealthScore {
        let sum = |category: Category| {
            transactions
                .iter()
                .filter(|t| t.category == category)
                .map(|t| t.amount)
                .sum::<f64>()
        };
        let totals = compute_summary(sum(Category::Income), sum(Category::Expense));
        compute_health_score(transactions, &totals)
    }

    #[test]
    fn empty_period() {
        let health = score(&[]);

        assert_eq!(health.score, 85);
        assert_eq!(health.label, HealthLabel::Healthy);
        assert_eq!(health.savings_rate, 0.0);
        assert!(health.expense_breakdown.is_empty());
    }

    #[test]
    fn healthy_saver() {
        let health = score(&[
            income(1, 5000.0),
            expense(2, "Rent", 1500.0),
            expense(3, "Food", 500.0),
        ]);

        assert_eq!(health.savings_rate, 0.6);
        assert_eq!(health.expense_breakdown["Food"], 0.25);
        assert_eq!(health.expense_breakdown["Rent"], 0.75);
        assert_eq!(health.score, 100);
        assert_eq!(health.label, HealthLabel::Healthy);
    }

    #[test]
    fn overspender() {
        let health = score(&[
            income(1, 2000.0),
            expense(2, "Shopping", 1200.0),
            expense(3, "Entertainment", 400.0),
        ]);

        assert_eq!(health.savings_rate, 0.2);
        assert_eq!(health.score, 75);
        assert_eq!(health.label, HealthLabel::Neutral);
    }

    #[test]
    fn savings_rate_tiers() {
        // (income, expense) -> expected score, spending only on Rent.
        let cases = [
            (1000.0, 1200.0, 60),
            (1000.0, 950.0, 75),
            (1000.0, 900.0, 90),
            (1000.0, 850.0, 90),
            (1000.0, 800.0, 100),
            (1000.0, 1000.0, 75),
        ];
        for (income_amount, rent, expected) in cases {
            let health = score(&[income(1, income_amount), expense(2, "Rent", rent)]);
            assert_eq!(health.score, expected, "income {income_amount} rent {rent}");
        }
    }

    #[test]
    fn no_income_but_expenses() {
        let health = score(&[expense(1, "Rent", 100.0)]);

        assert_eq!(health.savings_rate, 0.0);
        assert_eq!(health.score, 85);
    }

    #[test]
    fn moderate_discretionary_share() {
        let health = score(&[
            income(1, 1000.0),
            expense(2, "Shopping", 200.0),
            expense(3, "Entertainment", 200.0),
            expense(4, "Rent", 600.0),
        ]);

        // savings rate 0 -> -25, discretionary 0.4 -> -10
        assert_eq!(health.score, 65);
        assert_eq!(health.label, HealthLabel::Neutral);
    }

    #[test]
    fn discretionary_share_at_threshold_is_not_penalized() {
        let health = score(&[
            income(1, 10_000.0),
            expense(2, "Shopping", 300.0),
            expense(3, "Rent", 700.0),
        ]);
        assert_eq!(health.score, 100);
    }

    #[test]
    fn discretionary_share_at_half_is_moderate() {
        let health = score(&[
            income(1, 10_000.0),
            expense(2, "Shopping", 250.0),
            expense(3, "Entertainment", 250.0),
            expense(4, "Rent", 500.0),
        ]);

        assert_eq!(health.expense_breakdown["Shopping"], 0.25);
        assert_eq!(health.expense_breakdown["Entertainment"], 0.25);
        assert_eq!(health.score, 90);
    }

    #[test]
    fn food_share_at_half_is_not_penalized() {
        let health = score(&[
            income(1, 10_000.0),
            expense(2, "Food", 500.0),
            expense(3, "Rent", 500.0),
        ]);

        assert_eq!(health.expense_breakdown["Food"], 0.5);
        assert_eq!(health.score, 100);
    }

    #[test]
    fn shopping_and_food_at_half_each() {
        let health = score(&[
            income(1, 10_000.0),
            expense(2, "Shopping", 500.0),
            expense(3, "Food", 500.0),
        ]);

        // discretionary 0.5 -> -10, food 0.5 -> 0
        assert_eq!(health.score, 90);
        assert_eq!(health.label, HealthLabel::Healthy);
    }

    #[test]
    fn food_heavy_spending() {
        let health = score(&[
            income(1, 1000.0),
            expense(2, "Food", 600.0),
            expense(3, "Rent", 100.0),
        ]);

        // savings rate 0.3, food share ~0.857
        assert_eq!(health.score, 90);
    }

    #[test]
    fn worst_case_stays_in_range() {
        let health = score(&[
            income(1, 100.0),
            expense(2, "Shopping", 1000.0),
            expense(3, "Food", 1500.0),
        ]);

        // -40 -10 -10
        assert_eq!(health.score, 40);
        assert_eq!(health.label, HealthLabel::Risky);
    }

    #[test]
    fn score_and_label_agree_across_inputs() {
        let incomes = [0.0, 100.0, 1000.0, 2500.0, 10_000.0];
        let mixes: [&[(&str, f64)]; 6] = [
            &[],
            &[("Rent", 900.0)],
            &[("Shopping", 700.0), ("Rent", 300.0)],
            &[("Food", 800.0), ("Entertainment", 150.0)],
            &[("Shopping", 400.0), ("Entertainment", 400.0), ("Food", 1200.0)],
            &[("Travel", 50.0), ("Food", 25.0), ("Shopping", 25.0)],
        ];

        for income_amount in incomes {
            for mix in mixes {
                let mut rows = Vec::new();
                if income_amount > 0.0 {
                    rows.push(income(0, income_amount));
                }
                for (i, (sub_category, amount)) in mix.iter().enumerate() {
                    rows.push(expense(i as i64 + 1, sub_category, *amount));
                }

                let health = score(&rows);
                assert!(health.score <= 100, "income {income_amount} mix {mix:?}");
                assert_eq!(
                    health.label,
                    HealthLabel::from_score(health.score),
                    "income {income_amount} mix {mix:?}"
                );
            }
        }
    }

    #[test]
    fn unknown_categories_are_ignored() {
        let health = score(&[
            income(1, 5000.0),
            expense(2, "Rent", 1000.0),
            tx(3, Category::Other("Transfer".to_string()), "Shopping", 9000.0),
        ]);

        assert_eq!(health.expense_breakdown.len(), 1);
        assert_eq!(health.expense_breakdown["Rent"], 1.0);
        assert_eq!(health.score, 100);
    }

    #[test]
    fn breakdown_is_normalized() {
        let rows = [
            expense(1, "Food", 10.1),
            expense(2, "Rent", 33.3),
            expense(3, "Food", 0.7),
            expense(4, "Travel", 12.345),
        ];
        let total: f64 = rows.iter().map(|t| t.amount).sum();

        let breakdown = expense_breakdown(&rows, total);

        assert_eq!(breakdown.len(), 3);
        let sum: f64 = breakdown.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(breakdown.values().all(|share| *share > 0.0 && *share <= 1.0));
    }

    #[test]
    fn breakdown_is_empty_without_expense() {
        let rows = [income(1, 10.0)];
        assert!(expense_breakdown(&rows, 0.0).is_empty());
    }

    #[test]
    fn labels() {
        assert_eq!(HealthLabel::from_score(100), HealthLabel::Healthy);
        assert_eq!(HealthLabel::from_score(80), HealthLabel::Healthy);
        assert_eq!(HealthLabel::from_score(79), HealthLabel::Neutral);
        assert_eq!(HealthLabel::from_score(60), HealthLabel::Neutral);
        assert_eq!(HealthLabel::from_score(59), HealthLabel::Risky);
        assert_eq!(HealthLabel::from_score(0), HealthLabel::Risky);
    }
}
