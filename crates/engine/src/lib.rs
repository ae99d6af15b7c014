pub use category::Category;
pub use error::EngineError;
pub use health::{
    ExpenseBreakdown, HealthLabel, HealthScore, compute_health_score, expense_breakdown,
    savings_rate,
};
pub use ops::{Engine, EngineBuilder, HealthReport, PeriodReport, PeriodSnapshot};
pub use summary::{SummaryTotals, compute_summary};
pub use transactions::{NewTransaction, Transaction};

mod category;
mod error;
mod health;
mod ops;
mod summary;
mod transactions;

type ResultEngine<T> = Result<T, EngineError>;

fn normalize_required(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::MissingField(format!(
            "{label} must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}
