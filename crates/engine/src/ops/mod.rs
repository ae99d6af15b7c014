use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::{HealthScore, ResultEngine, SummaryTotals, Transaction};

mod period;
mod transactions;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

/// Entry point of the engine: owns the store connection and exposes the
/// create/query/report operations.
///
/// The engine keeps no derived state. Every report is recomputed from the
/// rows of the requested period.
#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// Rows of a period with their category sums, read from a single snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct PeriodSnapshot {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Ordered by `(date, id)` ascending.
    pub transactions: Vec<Transaction>,
    pub income_sum: f64,
    pub expense_sum: f64,
}

/// Listing of a period with its totals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PeriodReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub totals: SummaryTotals,
    pub transactions: Vec<Transaction>,
}

/// Health score of a period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub health: HealthScore,
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
        })
    }
}
