use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::StoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewExpense {
    pub amount: f64,
    pub description: String,
    pub category: String,
}

impl NewExpense {
    /// Validates the input and assigns an id and timestamp. Records are
    /// immutable after this point.
    pub fn into_expense(self) -> Result<Expense, StoreError> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(StoreError::InvalidAmount(self.amount));
        }

        let description = self.description.trim().to_string();
        if description.is_empty() {
            return Err(StoreError::EmptyDescription);
        }

        Ok(Expense {
            id: Uuid::new_v4().to_string(),
            amount: self.amount,
            description,
            category: self.category,
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(amount: f64, description: &str) -> NewExpense {
        NewExpense {
            amount,
            description: description.to_string(),
            category: "Food".to_string(),
        }
    }

    #[test]
    fn test_into_expense_assigns_id_and_timestamp() {
        let expense = input(12.5, "Coffee").into_expense().unwrap();

        assert!(!expense.id.is_empty());
        assert!(!expense.timestamp.is_empty());
        assert_eq!(expense.amount, 12.5);
        assert_eq!(expense.description, "Coffee");
        assert_eq!(expense.category, "Food");
    }

    #[test]
    fn test_into_expense_unique_ids() {
        let a = input(1.0, "one").into_expense().unwrap();
        let b = input(1.0, "one").into_expense().unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_into_expense_trims_description() {
        let expense = input(5.0, "  Lunch  ").into_expense().unwrap();
        assert_eq!(expense.description, "Lunch");
    }

    #[test]
    fn test_into_expense_rejects_non_positive_amount() {
        assert!(matches!(
            input(-5.0, "Coffee").into_expense(),
            Err(StoreError::InvalidAmount(_))
        ));
        assert!(matches!(
            input(0.0, "Coffee").into_expense(),
            Err(StoreError::InvalidAmount(_))
        ));
        assert!(matches!(
            input(f64::NAN, "Coffee").into_expense(),
            Err(StoreError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_into_expense_rejects_blank_description() {
        assert!(matches!(
            input(5.0, "").into_expense(),
            Err(StoreError::EmptyDescription)
        ));
        assert!(matches!(
            input(5.0, "   ").into_expense(),
            Err(StoreError::EmptyDescription)
        ));
    }
}
