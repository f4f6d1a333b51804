use crate::expense::NewExpense;
use crate::store::ExpenseStore;
use crate::workspace;
use anyhow::Result;

fn open_store() -> Result<ExpenseStore> {
    Ok(ExpenseStore::new(workspace::data_file()?))
}

pub async fn execute_add(amount: f64, description: &str, category: &str) -> Result<()> {
    let store = open_store()?;

    let expense = store
        .create(NewExpense {
            amount,
            description: description.to_string(),
            category: category.to_string(),
        })
        .await?;

    println!("Added expense {}", expense.id);
    Ok(())
}

pub async fn execute_list(category: Option<&str>) -> Result<()> {
    let store = open_store()?;
    let expenses = store.list(category).await?;

    if expenses.is_empty() {
        println!("No expenses");
        return Ok(());
    }

    for expense in &expenses {
        println!(
            "{:<36}  {:<12}  {:>10.2}  {}",
            expense.id, expense.category, expense.amount, expense.description
        );
    }

    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    println!("Total: {total:.2}");

    Ok(())
}

pub async fn execute_delete(id: &str) -> Result<()> {
    let store = open_store()?;
    let expense = store.delete(id).await?;

    println!("Deleted expense {} ({})", expense.id, expense.description);
    Ok(())
}
