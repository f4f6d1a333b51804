pub mod api;
pub mod commands;
pub mod expense;
pub mod store;
pub mod ui;
pub mod workspace;

#[cfg(test)]
pub mod test_helpers;
