use anyhow::Context;

use pentangelen::{logging, ui};

fn main() -> anyhow::Result<()> {
    logging::init().context("failed to initialize logging")?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    tracing::info!("starting pentangelen client");

    ui::runtime::run(runtime.handle().clone())?;

    tracing::info!("session ended");
    Ok(())
}
