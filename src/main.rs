//! shellkit - A responsive application shell for the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::{Path, PathBuf};

use clap::Parser;
use shellkit_app::config::{self, ShellConfig, SHELLKIT_DIR};
use shellkit_app::storage::{self, FileStore, SharedStore};
use tracing::{info, warn};

/// shellkit - A responsive application shell for the terminal
#[derive(Parser, Debug)]
#[command(name = "shellkit")]
#[command(about = "A responsive application shell for the terminal", long_about = None)]
struct Args {
    /// Config file (defaults to .shellkit/config.toml in the working directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Do not read or write persisted layout state
    #[arg(long)]
    no_persist: bool,

    /// Pixels per terminal column when mapping the terminal width to breakpoints
    #[arg(long, value_name = "N")]
    px_per_column: Option<u32>,

    /// Write a default .shellkit/config.toml in the working directory and exit
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    shellkit_core::logging::init()?;

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if args.init {
        config::save_settings(&cwd, &ShellConfig::default())?;
        println!("Wrote {}", config::config_path(&cwd).display());
        return Ok(());
    }

    let (mut settings, config_dir) = match &args.config {
        Some(path) => {
            let dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.clone());
            (config::load_from_path(path)?, dir)
        }
        None => (config::load_settings(&cwd), cwd.join(SHELLKIT_DIR)),
    };

    if let Some(px) = args.px_per_column.filter(|px| *px > 0) {
        settings.ui.px_per_column = px;
    }

    let storage = if args.no_persist || !settings.persistence.enabled {
        info!("Persistence disabled");
        None
    } else {
        open_storage(&settings)
    };

    shellkit_tui::run(settings, &config_dir, storage).await?;
    Ok(())
}

/// A storage failure is not fatal; the shell runs without persistence.
fn open_storage(settings: &ShellConfig) -> Option<SharedStore> {
    let dir = storage::resolve_data_dir(settings.persistence.dir.as_deref());
    match FileStore::open(&dir) {
        Ok(store) => {
            info!("Persisting layout state under {}", store.path().display());
            Some(storage::shared(store))
        }
        Err(e) => {
            warn!("Storage unavailable at {}: {}", dir.display(), e);
            None
        }
    }
}
