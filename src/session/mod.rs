//! One tracked task: timer state machine, key events, interrupt token, run loop.

pub mod cancel;
pub mod events;
pub mod runner;
pub mod timer;

pub use cancel::CancelToken;
pub use events::SessionEvent;
pub use runner::{SessionSource, TerminalSession};
pub use timer::{SessionOutcome, SessionState, SessionTimer};
