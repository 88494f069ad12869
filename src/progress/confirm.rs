//! Yes/no confirmation for destructive actions.

use std::io::{self, BufRead, Write};

use tracing::warn;

/// Anything that can ask the user a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Prompts on stdout and reads the answer from a line reader.
/// Anything other than `y`/`yes` declines.
pub struct PromptConfirm<R> {
    input: R,
}

impl<R: BufRead> PromptConfirm<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl PromptConfirm<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> Confirm for PromptConfirm<R> {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{} [y/N]: ", prompt);
        if let Err(e) = io::stdout().flush() {
            warn!("Failed to flush prompt: {}", e);
        }

        let mut answer = String::new();
        if let Err(e) = self.input.read_line(&mut answer) {
            warn!("Failed to read confirmation: {}", e);
            return false;
        }
        let answer = answer.trim().to_lowercase();

        answer == "y" || answer == "yes"
    }
}

/// Answers yes without asking, for `--yes`.
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}
