use crate::config::Config;
use crate::core::DayOrchestrator;
use crate::errors::{AppError, AppResult};
use crate::session::TerminalSession;
use crate::session::cancel::{CancelToken, install_interrupt_handler};
use crate::ui::prompt::StdinPrompter;
use crate::worklog::LogWriter;
use std::io::{self, IsTerminal};
use std::time::Duration;

/// Interactive tracking: the default action when no subcommand is given.
pub fn handle(project: &str, cfg: &Config) -> AppResult<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        return Err(AppError::Terminal(
            "tracking requires an interactive terminal (TTY)".to_string(),
        ));
    }

    let writer = LogWriter::from_config(cfg);

    let cancel = CancelToken::new();
    install_interrupt_handler(cancel.clone())?;

    let tick = Duration::from_millis(cfg.tick_millis.max(1));
    let sessions = TerminalSession::new(tick, cancel, StdinPrompter);

    tracing::info!(project, log_dir = %cfg.log_dir, "tracking started");

    let mut day = DayOrchestrator::new(project, sessions, StdinPrompter, writer);
    day.run()?;
    Ok(())
}
