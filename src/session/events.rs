//! Keyboard events for a running session.
//!
//! A background thread reads raw key presses and forwards typed events over a
//! channel; the timer loop is the only consumer.

use crate::errors::{AppError, AppResult};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// How long the listener blocks on one poll before re-checking its stop flag.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    TogglePause,
    EndTask,
    Interrupt,
}

/// `p`/`P` pause toggle, `q`/`Q` end task, `Ctrl+C` interrupt.
pub fn key_to_event(key: KeyEvent) -> Option<SessionEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(SessionEvent::Interrupt)
        }
        KeyCode::Char('p') | KeyCode::Char('P') => Some(SessionEvent::TogglePause),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(SessionEvent::EndTask),
        _ => None,
    }
}

/// Owns raw mode and the reader thread for the lifetime of one session.
pub struct KeyListener {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl KeyListener {
    pub fn spawn(tx: Sender<SessionEvent>) -> AppResult<Self> {
        enable_raw_mode().map_err(|e| AppError::Terminal(e.to_string()))?;

        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        let spawned = thread::Builder::new()
            .name("key-listener".into())
            .spawn(move || listen(tx, flag));

        match spawned {
            Ok(handle) => Ok(Self {
                stop,
                handle: Some(handle),
            }),
            Err(e) => {
                let _ = disable_raw_mode();
                Err(AppError::Io(e))
            }
        }
    }

    /// Stop reading and give the terminal back. Returns once the reader thread
    /// has exited, so stdin is free for prompts afterwards.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("key listener thread panicked");
            }
            if let Err(e) = disable_raw_mode() {
                tracing::warn!(error = %e, "failed to leave raw mode");
            }
        }
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        self.stop();
    }
}

fn listen(tx: Sender<SessionEvent>, stop: Arc<AtomicBool>) {
    while !stop.load(Ordering::SeqCst) {
        match event::poll(POLL_INTERVAL) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                tracing::warn!(error = %e, "key poll failed");
                thread::sleep(POLL_INTERVAL);
                continue;
            }
        }

        let Ok(Event::Key(key)) = event::read() else {
            continue;
        };

        if let Some(ev) = key_to_event(key) {
            let last = ev == SessionEvent::EndTask || ev == SessionEvent::Interrupt;
            if tx.send(ev).is_err() || last {
                break;
            }
        }
    }
}
