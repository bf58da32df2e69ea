#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rworklog::errors::{AppError, AppResult};
use rworklog::session::{SessionOutcome, SessionSource, SessionState};
use rworklog::ui::prompt::Prompter;
use rworklog::worklog::TaskEntry;
use std::collections::VecDeque;
use std::path::Path;
use std::time::Duration;

pub fn rw() -> Command {
    cargo_bin_cmd!("rworklog")
}

/// Binary with HOME pointed at a scratch directory so config and logs stay isolated.
pub fn rw_home(home: &Path) -> Command {
    let mut cmd = rw();
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

/// Answers prompts from a fixed script; an exhausted script answers "yes".
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> String {
        self.asked.push(prompt.to_string());
        self.answers.pop_front().unwrap_or_else(|| "yes".to_string())
    }
}

/// Hands out prepared session outcomes in order.
pub struct ScriptedSessions {
    outcomes: VecDeque<SessionOutcome>,
    pub runs: usize,
}

impl ScriptedSessions {
    pub fn new(outcomes: Vec<SessionOutcome>) -> Self {
        Self {
            outcomes: outcomes.into(),
            runs: 0,
        }
    }
}

impl SessionSource for ScriptedSessions {
    fn run_session(&mut self) -> AppResult<SessionOutcome> {
        self.runs += 1;
        self.outcomes
            .pop_front()
            .ok_or_else(|| AppError::Terminal("no more scripted sessions".into()))
    }
}

pub fn finished(task: &str, secs: u64) -> SessionOutcome {
    SessionOutcome {
        entry: TaskEntry::new(task, Duration::from_secs(secs)),
        quit_requested: true,
        state: SessionState::EndedByUser,
    }
}

pub fn interrupted(task: &str, secs: u64) -> SessionOutcome {
    SessionOutcome {
        entry: TaskEntry::new(task, Duration::from_secs(secs)),
        quit_requested: false,
        state: SessionState::EndedBySignal,
    }
}
