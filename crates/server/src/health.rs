//! Health score API endpoint

use api_types::{
    PeriodQuery,
    health::{HealthLabel, HealthScoreResponse},
};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::{ServerError, server::ServerState};

fn map_label(label: engine::HealthLabel) -> HealthLabel {
    match label {
        engine::HealthLabel::Healthy => HealthLabel::Healthy,
        engine::HealthLabel::Neutral => HealthLabel::Neutral,
        engine::HealthLabel::Risky => HealthLabel::Risky,
    }
}

/// Handle requests for the health score of a period
pub async fn get_health_score(
    State(state): State<ServerState>,
    period: Result<Query<PeriodQuery>, QueryRejection>,
) -> Result<Json<HealthScoreResponse>, ServerError> {
    let Query(period) = period?;
    let report = state
        .engine
        .health_report(period.start_date, period.end_date)
        .await?;
    let health = report.health;

    Ok(Json(HealthScoreResponse {
        start_date: report.start_date,
        end_date: report.end_date,
        score: health.score,
        label: map_label(health.label),
        savings_rate: health.savings_rate,
        expense_breakdown: health.expense_breakdown,
    }))
}
