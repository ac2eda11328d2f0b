pub mod commands;
mod console;
pub mod core;

use tracing_subscriber::EnvFilter;

use crate::console::Console;
use crate::core::error::PackResult;
use crate::core::state::{AppState, Settings};

pub fn run() -> PackResult<()> {
    // Structured logging on stderr; stdout belongs to the console.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,packcrafter_lib=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("PackCrafter starting...");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let state = AppState::new(Settings::load())?;
        Console::new(state).run().await
    })
}
