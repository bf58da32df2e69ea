//! Elapsed-time state machine for a single tracked task.
//!
//! The timer never reads the clock itself: every transition receives `now`,
//! which keeps pause/resume arithmetic exact and testable.

use crate::session::events::SessionEvent;
use crate::worklog::TaskEntry;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Paused,
    /// Task completed with `q`.
    EndedByUser,
    /// Task cut short by an interrupt.
    EndedBySignal,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionState::EndedByUser | SessionState::EndedBySignal)
    }
}

/// What one finished session produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub entry: TaskEntry,
    pub quit_requested: bool,
    pub state: SessionState,
}

#[derive(Debug)]
pub struct SessionTimer {
    state: SessionState,
    /// Start of the current running stretch.
    start: Instant,
    /// Time banked before `start`.
    banked: Duration,
    elapsed: Duration,
    quit_requested: bool,
}

impl SessionTimer {
    pub fn start(now: Instant) -> Self {
        Self {
            state: SessionState::Running,
            start: now,
            banked: Duration::ZERO,
            elapsed: Duration::ZERO,
            quit_requested: false,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_paused(&self) -> bool {
        self.state == SessionState::Paused
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Refresh elapsed time. Only a running timer moves.
    pub fn tick(&mut self, now: Instant) -> Duration {
        if self.state == SessionState::Running {
            self.elapsed = self.banked + now.saturating_duration_since(self.start);
        }
        self.elapsed
    }

    pub fn handle(&mut self, event: SessionEvent, now: Instant) {
        if self.is_finished() {
            return;
        }

        match event {
            SessionEvent::TogglePause => self.toggle_pause(now),
            SessionEvent::EndTask => {
                self.tick(now);
                self.quit_requested = true;
                self.state = SessionState::EndedByUser;
                tracing::info!(elapsed = ?self.elapsed, "task ended by user");
            }
            SessionEvent::Interrupt => self.interrupt(),
        }
    }

    /// Stop at the last computed elapsed value.
    pub fn interrupt(&mut self) {
        if self.is_finished() {
            return;
        }
        self.state = SessionState::EndedBySignal;
        tracing::info!(elapsed = ?self.elapsed, "task interrupted");
    }

    fn toggle_pause(&mut self, now: Instant) {
        match self.state {
            SessionState::Running => {
                self.tick(now);
                self.banked = self.elapsed;
                self.state = SessionState::Paused;
                tracing::debug!(elapsed = ?self.elapsed, "paused");
            }
            SessionState::Paused => {
                // The paused interval is never counted: restart from the banked total.
                self.start = now;
                self.state = SessionState::Running;
                tracing::debug!(elapsed = ?self.elapsed, "resumed");
            }
            SessionState::EndedByUser | SessionState::EndedBySignal => {}
        }
    }

    pub fn into_outcome(self, task: String) -> SessionOutcome {
        SessionOutcome {
            entry: TaskEntry::new(task, self.elapsed),
            quit_requested: self.quit_requested,
            state: self.state,
        }
    }
}
