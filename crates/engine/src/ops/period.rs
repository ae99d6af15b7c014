use chrono::NaiveDate;
use sea_orm::{
    ConnectionTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait, prelude::*,
    sea_query::Expr,
};

use crate::{
    Category, EngineError, ResultEngine, Transaction, compute_health_score, compute_summary,
    transactions,
};

use super::{Engine, HealthReport, PeriodReport, PeriodSnapshot, with_tx};

fn validate_range(start_date: NaiveDate, end_date: NaiveDate) -> ResultEngine<()> {
    if start_date > end_date {
        return Err(EngineError::InvalidRange(format!(
            "start_date {start_date} is after end_date {end_date}"
        )));
    }
    Ok(())
}

/// Sum of `amount` over the rows of `category` in `[start_date, end_date]`.
///
/// `SUM` over no rows is `NULL`, reported here as `0.0`.
async fn sum_for_category<C: ConnectionTrait>(
    db: &C,
    start_date: NaiveDate,
    end_date: NaiveDate,
    category: &Category,
) -> ResultEngine<f64> {
    let total: Option<Option<f64>> = transactions::Entity::find()
        .select_only()
        .column_as(Expr::col(transactions::Column::Amount).sum(), "total")
        .filter(transactions::Column::Date.between(start_date, end_date))
        .filter(transactions::Column::Category.eq(category.as_str()))
        .into_tuple()
        .one(db)
        .await?;

    Ok(total.flatten().unwrap_or(0.0))
}

impl Engine {
    /// Reads every transaction dated within `[start_date, end_date]` along
    /// with the income and expense sums of the same rows.
    ///
    /// Rows are ordered by date, then by id. An empty period is not an error.
    pub async fn query_period(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ResultEngine<PeriodSnapshot> {
        validate_range(start_date, end_date)?;

        with_tx!(self, |db_tx| {
            let rows = transactions::Entity::find()
                .filter(transactions::Column::Date.between(start_date, end_date))
                .order_by_asc(transactions::Column::Date)
                .order_by_asc(transactions::Column::Id)
                .all(&db_tx)
                .await?;

            let transactions: Vec<Transaction> = rows.into_iter().map(Transaction::from).collect();
            for tx in transactions.iter().filter(|tx| !tx.category.is_known()) {
                tracing::warn!(
                    id = tx.id,
                    category = %tx.category,
                    "ignoring transaction with unknown category"
                );
            }

            let income_sum =
                sum_for_category(&db_tx, start_date, end_date, &Category::Income).await?;
            let expense_sum =
                sum_for_category(&db_tx, start_date, end_date, &Category::Expense).await?;

            tracing::debug!(
                %start_date,
                %end_date,
                rows = transactions.len(),
                income_sum,
                expense_sum,
                "period queried"
            );

            Ok::<_, EngineError>(PeriodSnapshot {
                start_date,
                end_date,
                transactions,
                income_sum,
                expense_sum,
            })
        })
    }

    /// Transactions of a period with income, expense and net totals.
    pub async fn period_report(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ResultEngine<PeriodReport> {
        let snapshot = self.query_period(start_date, end_date).await?;

        Ok(PeriodReport {
            start_date: snapshot.start_date,
            end_date: snapshot.end_date,
            totals: compute_summary(snapshot.income_sum, snapshot.expense_sum),
            transactions: snapshot.transactions,
        })
    }

    /// Health score of a period, computed from one snapshot of its rows.
    pub async fn health_report(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ResultEngine<HealthReport> {
        let snapshot = self.query_period(start_date, end_date).await?;
        let totals = compute_summary(snapshot.income_sum, snapshot.expense_sum);

        Ok(HealthReport {
            start_date: snapshot.start_date,
            end_date: snapshot.end_date,
            health: compute_health_score(&snapshot.transactions, &totals),
        })
    }
}
