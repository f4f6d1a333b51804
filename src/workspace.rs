use anyhow::{Context, Result};
use std::cell::RefCell;
use std::path::PathBuf;

pub const DATA_FILE_NAME: &str = "expenses.json";

thread_local! {
    static DATA_DIR_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

#[cfg(test)]
pub fn set_data_dir_override(path: PathBuf) {
    DATA_DIR_OVERRIDE.with(|p| {
        *p.borrow_mut() = Some(path);
    });
}

#[cfg(test)]
pub fn clear_data_dir_override() {
    DATA_DIR_OVERRIDE.with(|p| {
        *p.borrow_mut() = None;
    });
}

pub fn data_dir() -> Result<PathBuf> {
    if let Some(path) = DATA_DIR_OVERRIDE.with(|p| p.borrow().clone()) {
        return Ok(path);
    }

    if let Ok(path) = std::env::var("EXPENSE_TRACKER_DATA_DIRECTORY") {
        return Ok(PathBuf::from(path));
    }
    Ok(std::env::current_dir()?.join("data"))
}

pub fn data_file() -> Result<PathBuf> {
    Ok(data_dir()?.join(DATA_FILE_NAME))
}

pub fn ensure_data_directory() -> Result<PathBuf> {
    let dir = data_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
    Ok(dir)
}
