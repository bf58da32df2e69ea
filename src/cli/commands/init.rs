use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::worklog::LogWriter;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (kept as is unless `--force`)
pub fn handle(force: bool) -> AppResult<()> {
    println!("⚙️  Initializing rworklog…");

    let path = Config::init_all(force)?;
    success(format!("Config file : {}", path.display()));

    let cfg = Config::try_load()?;
    match LogWriter::from_config(&cfg).resolved_dir() {
        Ok(dir) => info(format!("Work logs   : {}", dir.display())),
        Err(e) => info(format!("Work logs   : {} ({})", cfg.log_dir, e)),
    }

    tracing::info!(path = %path.display(), force, "configuration initialized");
    Ok(())
}
