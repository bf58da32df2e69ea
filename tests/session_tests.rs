use rworklog::session::runner::{TASK_PROMPT, track_task};
use rworklog::session::{CancelToken, SessionEvent, SessionState};
use rworklog::ui::prompt::Prompter;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Answers with a fixed task name and records whether keys were already
/// released when the question came.
struct TaskNamePrompter {
    answer: &'static str,
    keys_stopped: Rc<Cell<bool>>,
    asked: Vec<String>,
    stopped_when_asked: Vec<bool>,
}

impl TaskNamePrompter {
    fn new(answer: &'static str, keys_stopped: Rc<Cell<bool>>) -> Self {
        Self {
            answer,
            keys_stopped,
            asked: Vec::new(),
            stopped_when_asked: Vec::new(),
        }
    }
}

impl Prompter for TaskNamePrompter {
    fn ask(&mut self, prompt: &str) -> String {
        self.asked.push(prompt.to_string());
        self.stopped_when_asked.push(self.keys_stopped.get());
        self.answer.to_string()
    }
}

#[test]
fn test_interrupt_key_still_prompts_for_task_name() {
    let (tx, rx) = mpsc::channel();
    let cancel = CancelToken::new();
    let stopped = Rc::new(Cell::new(false));
    let mut prompter = TaskNamePrompter::new("Half done", Rc::clone(&stopped));

    let sender = thread::spawn(move || {
        thread::sleep(Duration::from_millis(40));
        tx.send(SessionEvent::Interrupt).unwrap();
    });

    let started = Instant::now();
    let flag = Rc::clone(&stopped);
    let outcome = track_task(
        &rx,
        &cancel,
        Duration::from_millis(10),
        |_| Ok(()),
        move || flag.set(true),
        &mut prompter,
    )
    .unwrap();
    let wall = started.elapsed();
    sender.join().unwrap();

    assert_eq!(prompter.asked, vec![TASK_PROMPT]);
    assert_eq!(prompter.stopped_when_asked, vec![true]);
    assert_eq!(outcome.state, SessionState::EndedBySignal);
    assert!(!outcome.quit_requested);
    assert_eq!(outcome.entry.task, "Half done");
    assert!(outcome.entry.duration <= wall);
}

#[test]
fn test_cancel_token_still_prompts_for_task_name() {
    let (_tx, rx) = mpsc::channel::<SessionEvent>();
    let cancel = CancelToken::new();
    let remote = cancel.clone();
    let stopped = Rc::new(Cell::new(false));
    let mut prompter = TaskNamePrompter::new("Review", Rc::clone(&stopped));

    let canceller = thread::spawn(move || {
        thread::sleep(Duration::from_millis(40));
        remote.cancel();
    });

    let started = Instant::now();
    let flag = Rc::clone(&stopped);
    let outcome = track_task(
        &rx,
        &cancel,
        Duration::from_millis(10),
        |_| Ok(()),
        move || flag.set(true),
        &mut prompter,
    )
    .unwrap();
    let wall = started.elapsed();
    canceller.join().unwrap();

    assert_eq!(prompter.asked, vec![TASK_PROMPT]);
    assert_eq!(prompter.stopped_when_asked, vec![true]);
    assert_eq!(outcome.state, SessionState::EndedBySignal);
    assert_eq!(outcome.entry.task, "Review");
    assert!(outcome.entry.duration <= wall);
}

#[test]
fn test_end_task_names_entry_and_requests_quit() {
    let (tx, rx) = mpsc::channel();
    let cancel = CancelToken::new();
    let stopped = Rc::new(Cell::new(false));
    let mut prompter = TaskNamePrompter::new("Design", Rc::clone(&stopped));

    tx.send(SessionEvent::EndTask).unwrap();

    let flag = Rc::clone(&stopped);
    let outcome = track_task(
        &rx,
        &cancel,
        Duration::from_millis(10),
        |_| Ok(()),
        move || flag.set(true),
        &mut prompter,
    )
    .unwrap();

    assert_eq!(prompter.asked, vec![TASK_PROMPT]);
    assert_eq!(prompter.stopped_when_asked, vec![true]);
    assert_eq!(outcome.state, SessionState::EndedByUser);
    assert!(outcome.quit_requested);
    assert_eq!(outcome.entry.task, "Design");
}

#[test]
fn test_render_failure_stops_keys_without_prompting() {
    let (_tx, rx) = mpsc::channel::<SessionEvent>();
    let cancel = CancelToken::new();
    let stopped = Rc::new(Cell::new(false));
    let mut prompter = TaskNamePrompter::new("unused", Rc::clone(&stopped));

    let flag = Rc::clone(&stopped);
    let result = track_task(
        &rx,
        &cancel,
        Duration::from_millis(10),
        |_| Err(std::io::Error::other("terminal gone").into()),
        move || flag.set(true),
        &mut prompter,
    );

    assert!(result.is_err());
    assert!(stopped.get());
    assert!(prompter.asked.is_empty());
}
