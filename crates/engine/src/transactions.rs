//! Transaction primitives.
//!
//! A `Transaction` is an immutable income or expense record. It is created
//! once through [`Engine::create_transaction`] and never updated or deleted.
//!
//!  [`Engine::create_transaction`]: crate::Engine::create_transaction

use chrono::NaiveDate;
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use crate::{Category, EngineError, ResultEngine, normalize_optional_text, normalize_required};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Assigned by the store, strictly increasing in insertion order.
    pub id: i64,
    pub date: NaiveDate,
    pub amount: f64,
    pub category: Category,
    pub sub_category: String,
    pub description: Option<String>,
}

/// Input for a new transaction, before validation.
#[derive(Clone, Debug, PartialEq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub amount: f64,
    pub category: String,
    pub sub_category: String,
    pub description: Option<String>,
}

/// A `NewTransaction` that passed validation and is ready to be stored.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ValidTransaction {
    pub date: NaiveDate,
    pub amount: f64,
    pub category: Category,
    pub sub_category: String,
    pub description: Option<String>,
}

impl NewTransaction {
    pub(crate) fn validate(self) -> ResultEngine<ValidTransaction> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(EngineError::InvalidAmount(
                "amount must be > 0".to_string(),
            ));
        }
        let category = Category::parse(&self.category)?;
        let sub_category = normalize_required(&self.sub_category, "sub_category")?;

        Ok(ValidTransaction {
            date: self.date,
            amount: self.amount,
            category,
            sub_category,
            description: normalize_optional_text(self.description.as_deref()),
        })
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub date: Date,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub category: String,
    pub sub_category: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&ValidTransaction> for ActiveModel {
    fn from(tx: &ValidTransaction) -> Self {
        Self {
            id: ActiveValue::NotSet,
            date: ActiveValue::Set(tx.date),
            amount: ActiveValue::Set(tx.amount),
            category: ActiveValue::Set(tx.category.as_str().to_string()),
            sub_category: ActiveValue::Set(tx.sub_category.clone()),
            description: ActiveValue::Set(tx.description.clone()),
        }
    }
}

impl From<Model> for Transaction {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            date: model.date,
            amount: model.amount,
            category: Category::from(model.category),
            sub_category: model.sub_category,
            description: model.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_tx(amount: f64, category: &str, sub_category: &str) -> NewTransaction {
        NewTransaction {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            amount,
            category: category.to_string(),
            sub_category: sub_category.to_string(),
            description: None,
        }
    }

    #[test]
    fn validate_trims_text_fields() {
        let mut tx = new_tx(12.5, "Expense", "  Food ");
        tx.description = Some("   ".to_string());

        let valid = tx.validate().unwrap();

        assert_eq!(valid.category, Category::Expense);
        assert_eq!(valid.sub_category, "Food");
        assert_eq!(valid.description, None);
    }

    #[test]
    fn validate_rejects_non_positive_amounts() {
        for amount in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = new_tx(amount, "Income", "Salary").validate().unwrap_err();
            assert_eq!(
                err,
                EngineError::InvalidAmount("amount must be > 0".to_string())
            );
        }
    }

    #[test]
    fn validate_rejects_blank_sub_category() {
        let err = new_tx(10.0, "Income", " ").validate().unwrap_err();
        assert_eq!(
            err,
            EngineError::MissingField("sub_category must not be empty".to_string())
        );
    }

    #[test]
    fn validate_rejects_unknown_category() {
        let err = new_tx(10.0, "Transfer", "Bank").validate().unwrap_err();
        assert!(matches!(err, EngineError::InvalidCategory(_)));
        assert!(err.is_validation());
    }

    #[test]
    fn model_with_unknown_category_is_kept() {
        let tx = Transaction::from(Model {
            id: 7,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            amount: 3.0,
            category: "Refund".to_string(),
            sub_category: "Shop".to_string(),
            description: None,
        });
        assert_eq!(tx.category, Category::Other("Refund".to_string()));
    }
}
