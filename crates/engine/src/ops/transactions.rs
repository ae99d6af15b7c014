use sea_orm::{ActiveModelTrait, TransactionTrait};

use crate::{NewTransaction, ResultEngine, Transaction, transactions};

use super::{Engine, with_tx};

impl Engine {
    /// Validates and stores a new transaction.
    ///
    /// Nothing is written when validation fails. The returned transaction
    /// carries the id assigned by the store.
    pub async fn create_transaction(&self, new: NewTransaction) -> ResultEngine<Transaction> {
        let valid = new.validate()?;

        let model = with_tx!(self, |db_tx| {
            transactions::ActiveModel::from(&valid).insert(&db_tx).await
        })?;

        tracing::info!(
            id = model.id,
            date = %model.date,
            category = %model.category,
            "transaction created"
        );
        Ok(Transaction::from(model))
    }
}
