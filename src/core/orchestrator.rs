//! Day loop: track tasks one after another and write the log when the user is done.

use crate::errors::AppResult;
use crate::session::SessionSource;
use crate::ui::messages::{error, farewell, header, success, warning};
use crate::ui::prompt::{Prompter, is_affirmative};
use crate::utils::formatting::bold;
use crate::utils::format_duration;
use crate::utils::table::{Column, Table};
use crate::worklog::{LogWriter, SessionLog};
use chrono::NaiveDate;
use std::path::PathBuf;

pub const DONE_PROMPT: &str = "✅ Done for the day? (yes/no): ";

pub struct DayOrchestrator<S: SessionSource, P: Prompter> {
    project: String,
    sessions: S,
    prompter: P,
    writer: LogWriter,
    date: Option<NaiveDate>,
    log: SessionLog,
}

impl<S: SessionSource, P: Prompter> DayOrchestrator<S, P> {
    pub fn new(project: impl Into<String>, sessions: S, prompter: P, writer: LogWriter) -> Self {
        Self {
            project: project.into(),
            sessions,
            prompter,
            writer,
            date: None,
            log: SessionLog::new(),
        }
    }

    /// Pin the log date instead of using today's local date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    /// Run sessions until the user is done for the day and the log is saved.
    /// Returns the path of the written file.
    ///
    /// A session that fails ends tracking, but the entries gathered so far can
    /// still be saved before the error is returned.
    pub fn run(&mut self) -> AppResult<PathBuf> {
        loop {
            let outcome = match self.sessions.run_session() {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!(error = %e, entries = self.log.len(), "session failed");
                    error(&e);
                    if self.log.is_empty() {
                        return Err(e);
                    }
                    if let Some(path) = self.end_of_day()? {
                        tracing::info!(path = %path.display(), "entries saved after session failure");
                    }
                    return Err(e);
                }
            };
            self.log.push(outcome.entry);

            if outcome.quit_requested {
                farewell("Quit early with 'q'. See you next time!");
            }

            if let Some(path) = self.end_of_day()? {
                return Ok(path);
            }
        }
    }

    /// Ask whether the day is over. `Ok(None)` means keep tracking.
    /// A failed write keeps every entry and asks again.
    fn end_of_day(&mut self) -> AppResult<Option<PathBuf>> {
        loop {
            let answer = self.prompter.ask(DONE_PROMPT);
            if !is_affirmative(&answer) {
                return Ok(None);
            }

            self.print_summary();

            let date = self
                .date
                .unwrap_or_else(|| chrono::Local::now().date_naive());

            match self.writer.write(&self.project, self.log.entries(), date) {
                Ok(path) => {
                    success(format!("Markdown log saved to {}", path.display()));
                    farewell("Session complete. See you next time!");
                    return Ok(Some(path));
                }
                Err(e) => {
                    tracing::error!(error = %e, "work log not written");
                    error(&e);
                    warning(format!(
                        "{} entries kept in memory; answer 'yes' to retry or 'no' to keep tracking.",
                        self.log.len()
                    ));
                }
            }
        }
    }

    fn print_summary(&self) {
        header(format!("Work log for {}", self.project));

        let mut table = Table::new(vec![
            Column::right("#", 3),
            Column::left("Task", 32),
            Column::right("Duration", 10),
        ]);
        for (i, entry) in self.log.entries().iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                entry.task.clone(),
                format_duration(entry.duration),
            ]);
        }
        print!("{}", table.render());
        println!(
            "{} {}\n",
            bold("Total:"),
            format_duration(self.log.total())
        );
    }
}
