//! Blocking line prompts on stdin.

use std::io::{self, Write};

pub trait Prompter {
    /// Show `prompt` and return the trimmed answer. Never fails: unreadable
    /// input counts as an empty answer.
    fn ask(&mut self, prompt: &str) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, prompt: &str) -> String {
        print!("{}", prompt);
        io::stdout().flush().ok();

        let mut answer = String::new();
        if let Err(e) = io::stdin().read_line(&mut answer) {
            tracing::warn!(error = %e, "failed to read answer, treating it as empty");
            return String::new();
        }
        answer.trim().to_string()
    }
}

/// `yes` / `y`, any case.
pub fn is_affirmative(answer: &str) -> bool {
    let ans = answer.trim().to_ascii_lowercase();
    ans == "y" || ans == "yes"
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn ask(&mut self, prompt: &str) -> String {
        (**self).ask(prompt)
    }
}
