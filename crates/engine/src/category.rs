//! Transaction direction.
//!
//! Amounts are always positive; whether money came in or went out is carried
//! by the category. Only `Income` and `Expense` take part in any total.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Income,
    Expense,
    /// A stored value outside the known set. Never produced by
    /// [`Category::parse`], only by reading rows written by other tools.
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
            Self::Other(value) => value,
        }
    }

    /// Strict parsing used on the write path.
    pub fn parse(value: &str) -> ResultEngine<Self> {
        match value.trim() {
            "Income" => Ok(Self::Income),
            "Expense" => Ok(Self::Expense),
            "" => Err(EngineError::MissingField("category".to_string())),
            other => Err(EngineError::InvalidCategory(format!(
                "expected \"Income\" or \"Expense\", got \"{other}\""
            ))),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

/// Lenient conversion used on the read path.
impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Income" => Self::Income,
            "Expense" => Self::Expense,
            _ => Self::Other(value),
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_values() {
        assert_eq!(Category::parse("Income").unwrap(), Category::Income);
        assert_eq!(Category::parse(" Expense ").unwrap(), Category::Expense);
    }

    #[test]
    fn parse_rejects_unknown_and_blank() {
        assert!(matches!(
            Category::parse("income"),
            Err(EngineError::InvalidCategory(_))
        ));
        assert_eq!(
            Category::parse("  ").unwrap_err(),
            EngineError::MissingField("category".to_string())
        );
    }

    #[test]
    fn stored_values_are_read_leniently() {
        let category = Category::from("Transfer".to_string());
        assert_eq!(category, Category::Other("Transfer".to_string()));
        assert!(!category.is_known());
        assert_eq!(String::from(category), "Transfer");
    }
}
