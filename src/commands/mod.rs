pub mod expense;
pub mod init;
pub mod serve;
