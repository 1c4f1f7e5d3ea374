//! File logging.
//!
//! The terminal belongs to the animation, so log output goes to a file in the
//! cache directory, and only when `RUST_LOG` is set.

use std::env;
use std::fs::{self, File};

use color_eyre::eyre::WrapErr;
use directories::ProjectDirs;
use env_logger::{Builder, Target};
use nightfall_config::APP_NAME;

const LOG_FILE: &str = "nightfall.log";

/// Initialize the logger if `RUST_LOG` is set.
pub fn init() -> color_eyre::Result<()> {
    if env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let Some(dirs) = ProjectDirs::from("", "", APP_NAME) else {
        return Ok(());
    };

    let dir = dirs.cache_dir();
    fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create log directory {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = File::create(&path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;

    Builder::from_default_env()
        .target(Target::Pipe(Box::new(file)))
        .init();
    log::info!("logging to {}", path.display());
    Ok(())
}
