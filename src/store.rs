use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::sync::Mutex;

use crate::expense::{Expense, NewExpense};

/// Category value the UI sends when no filter is applied.
pub const FILTER_ALL: &str = "All";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("amount must be a positive number, got {0}")]
    InvalidAmount(f64),
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("no expense with id '{0}'")]
    NotFound(String),
    #[error("failed to access data file")]
    Io(#[from] std::io::Error),
    #[error("data file is not a valid expense collection")]
    Corrupt(#[from] serde_json::Error),
}

/// Owns the expense collection and its persistence. Every operation reads
/// the whole data file, mutations write the whole file back. The mutex is
/// held across each read-modify-write so concurrent requests cannot drop
/// each other's updates.
pub struct ExpenseStore {
    data_file: PathBuf,
    write_lock: Mutex<()>,
}

impl ExpenseStore {
    pub fn new(data_file: PathBuf) -> Self {
        Self {
            data_file,
            write_lock: Mutex::new(()),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Loads the full collection. A missing data file is an empty
    /// collection, not an error.
    pub async fn load(&self) -> Result<Vec<Expense>, StoreError> {
        match tokio::fs::read_to_string(&self.data_file).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Overwrites the data file with the full collection, pretty-printed.
    pub async fn save(&self, expenses: &[Expense]) -> Result<(), StoreError> {
        if let Some(parent) = self.data_file.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(expenses)?;
        tokio::fs::write(&self.data_file, content).await?;
        Ok(())
    }

    /// Returns all expenses, or only those in `category` when a filter is
    /// present and not the "All" sentinel. Unknown categories yield an
    /// empty result.
    pub async fn list(&self, category: Option<&str>) -> Result<Vec<Expense>, StoreError> {
        let expenses = self.load().await?;

        match category {
            Some(filter) if filter != FILTER_ALL => Ok(expenses
                .into_iter()
                .filter(|e| e.category == filter)
                .collect()),
            _ => Ok(expenses),
        }
    }

    /// Validates the input, appends the new record and persists the
    /// collection. Returns the record with its assigned id and timestamp.
    pub async fn create(&self, input: NewExpense) -> Result<Expense, StoreError> {
        let expense = input.into_expense()?;

        let _guard = self.write_lock.lock().await;
        let mut expenses = self.load().await?;
        expenses.push(expense.clone());
        self.save(&expenses).await?;

        Ok(expense)
    }

    /// Removes the first record matching `id` and persists the collection.
    /// Returns the removed record, or `NotFound` with the file untouched.
    pub async fn delete(&self, id: &str) -> Result<Expense, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut expenses = self.load().await?;

        let position = expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let removed = expenses.remove(position);
        self.save(&expenses).await?;

        Ok(removed)
    }
}
