//! The foreground tick/render loop and the interactive session built on it.

use crate::clock::ClockRenderer;
use crate::errors::AppResult;
use crate::session::cancel::CancelToken;
use crate::session::events::{KeyListener, SessionEvent};
use crate::session::timer::{SessionOutcome, SessionTimer};
use crate::ui::prompt::Prompter;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

pub const TASK_PROMPT: &str = "📝 What task did you just finish? ";

/// Anything that can run one tracked task to completion.
pub trait SessionSource {
    fn run_session(&mut self) -> AppResult<SessionOutcome>;
}

impl<S: SessionSource + ?Sized> SessionSource for &mut S {
    fn run_session(&mut self) -> AppResult<SessionOutcome> {
        (**self).run_session()
    }
}

/// Run `timer` until it reaches a terminal state.
///
/// Each iteration refreshes the timer, hands it to `on_frame`, then waits up to
/// `tick` for a key event. Events are applied in arrival order and redrawn
/// immediately; `cancel` is checked on every pass, so an interrupt is observed
/// within one tick.
pub fn drive<F>(
    mut timer: SessionTimer,
    events: &Receiver<SessionEvent>,
    cancel: &CancelToken,
    tick: Duration,
    mut on_frame: F,
) -> AppResult<SessionTimer>
where
    F: FnMut(&SessionTimer) -> AppResult<()>,
{
    let mut listening = true;

    loop {
        if cancel.is_cancelled() {
            timer.interrupt();
        }
        if timer.is_finished() {
            return Ok(timer);
        }

        timer.tick(Instant::now());
        on_frame(&timer)?;

        if !listening {
            std::thread::sleep(tick);
            continue;
        }

        match events.recv_timeout(tick) {
            Ok(ev) => {
                timer.handle(ev, Instant::now());
                while let Ok(next) = events.try_recv() {
                    timer.handle(next, Instant::now());
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                tracing::debug!("key events closed; only an interrupt can end the session");
                listening = false;
            }
        }
    }
}

/// Track one task from start to its named entry.
///
/// Runs `drive` over `events`, then calls `stop_keys` before asking for the
/// task name: whatever feeds `events` must release stdin before the prompt
/// reads it. An interrupted session is prompted for like any other.
pub fn track_task<F, S, P>(
    events: &Receiver<SessionEvent>,
    cancel: &CancelToken,
    tick: Duration,
    on_frame: F,
    stop_keys: S,
    prompter: &mut P,
) -> AppResult<SessionOutcome>
where
    F: FnMut(&SessionTimer) -> AppResult<()>,
    S: FnOnce(),
    P: Prompter + ?Sized,
{
    let result = drive(
        SessionTimer::start(Instant::now()),
        events,
        cancel,
        tick,
        on_frame,
    );

    stop_keys();
    let timer = result?;

    tracing::info!(state = ?timer.state(), elapsed = ?timer.elapsed(), "session finished");

    println!();
    let task = prompter.ask(TASK_PROMPT);
    Ok(timer.into_outcome(task))
}

/// Interactive session on the real terminal.
pub struct TerminalSession<P: Prompter> {
    tick: Duration,
    cancel: CancelToken,
    prompter: P,
}

impl<P: Prompter> TerminalSession<P> {
    pub fn new(tick: Duration, cancel: CancelToken, prompter: P) -> Self {
        Self {
            tick,
            cancel,
            prompter,
        }
    }
}

impl<P: Prompter> SessionSource for TerminalSession<P> {
    fn run_session(&mut self) -> AppResult<SessionOutcome> {
        self.cancel.reset();
        tracing::info!("session started");

        let (tx, rx) = mpsc::channel();
        let mut listener = KeyListener::spawn(tx)?;
        let mut renderer = ClockRenderer::stdout();

        // Raw mode and the reader are gone before stdin is prompted.
        track_task(
            &rx,
            &self.cancel,
            self.tick,
            |t| renderer.paint(t.elapsed(), t.is_paused()),
            || listener.stop(),
            &mut self.prompter,
        )
    }
}
