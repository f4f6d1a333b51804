use crate::api;
use anyhow::Result;

pub const DEFAULT_PORT: u16 = 3000;

pub async fn execute_serve(port: Option<u16>) -> Result<()> {
    api::main(resolve_port(port)).await
}

/// Explicit flag wins, then the PORT environment variable, then the default.
fn resolve_port(flag: Option<u16>) -> u16 {
    flag.or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
        .unwrap_or(DEFAULT_PORT)
}
