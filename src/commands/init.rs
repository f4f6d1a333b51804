use crate::workspace;
use anyhow::Result;
use std::fs;

pub fn execute_init() -> Result<()> {
    let data_dir = workspace::ensure_data_directory()?;
    let data_file = data_dir.join(workspace::DATA_FILE_NAME);

    if data_file.exists() {
        println!("Data file already exists at {}", data_file.display());
        return Ok(());
    }

    fs::write(&data_file, "[]")?;
    println!("Created empty expense collection at {}", data_file.display());

    Ok(())
}
