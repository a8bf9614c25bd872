//! Log setup.
//!
//! Stdout belongs to the TUI, so logs go to a file under the platform
//! data directory. Filtering follows `RUST_LOG`, defaulting to `info`.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::constants::APP_DIR;

pub fn init() -> anyhow::Result<()> {
    let dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR);
    fs::create_dir_all(&dir)?;

    let file = File::options()
        .create(true)
        .append(true)
        .open(dir.join("pentangelen.log"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
