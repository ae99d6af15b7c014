//! Transactions API endpoints

use api_types::{
    PeriodQuery,
    transaction::{PeriodSummary, TransactionNew, TransactionView},
};
use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

fn view(tx: engine::Transaction) -> TransactionView {
    TransactionView {
        id: tx.id,
        date: tx.date,
        amount: tx.amount,
        category: tx.category.into(),
        sub_category: tx.sub_category,
        description: tx.description,
    }
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<TransactionNew>, JsonRejection>,
) -> Result<(StatusCode, Json<TransactionView>), ServerError> {
    let Json(payload) = payload?;
    let tx = state
        .engine
        .create_transaction(engine::NewTransaction {
            date: payload.date,
            amount: payload.amount,
            category: payload.category,
            sub_category: payload.sub_category,
            description: payload.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(view(tx))))
}

pub async fn list(
    State(state): State<ServerState>,
    period: Result<Query<PeriodQuery>, QueryRejection>,
) -> Result<Json<PeriodSummary>, ServerError> {
    let Query(period) = period?;
    let report = state
        .engine
        .period_report(period.start_date, period.end_date)
        .await?;

    Ok(Json(PeriodSummary {
        start_date: report.start_date,
        end_date: report.end_date,
        total_income: report.totals.total_income,
        total_expense: report.totals.total_expense,
        net_savings: report.totals.net_savings,
        transactions: report.transactions.into_iter().map(view).collect(),
    }))
}
