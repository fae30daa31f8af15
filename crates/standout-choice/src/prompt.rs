//! Questions with single-keystroke answers.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::answers::{AnswerSet, AnswerSpec};
use crate::error::{ChoiceError, Result};
use crate::terminal::{RealTerminal, TerminalIO};

/// A question the user answers by typing an indicator.
///
/// The question is printed together with the choice string. If the typed
/// indicator does not match an active answer, the question is asked again.
///
/// # Example
///
/// ```no_run
/// use standout_choice::Prompt;
///
/// let mut prompt = Prompt::new("File does exist, what should be done?");
/// prompt.set_answers(["skip", "overwrite", "abort"])?;
/// let answer = prompt.ask()?;
/// // $ File does exist, what should be done? [s]kip, [o]verwrite, [a]bort
/// // s<enter>
/// assert_eq!(answer, "skip");
/// # Ok::<(), standout_choice::ChoiceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Prompt<T: TerminalIO = RealTerminal> {
    terminal: Arc<T>,
    message: String,
    answers: AnswerSet,
    max_attempts: Option<usize>,
}

impl Prompt<RealTerminal> {
    /// Create a prompt on stdin/stdout.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_terminal(message, RealTerminal)
    }
}

impl<T: TerminalIO> Prompt<T> {
    /// Create a prompt with a custom terminal.
    pub fn with_terminal(message: impl Into<String>, terminal: T) -> Self {
        Self {
            terminal: Arc::new(terminal),
            message: message.into(),
            answers: AnswerSet::new(),
            max_attempts: None,
        }
    }

    /// Give up after `attempts` unmatched responses.
    ///
    /// By default the prompt asks until a valid indicator is typed. A limit
    /// of `0` is treated as `1`: the question is always asked once.
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts.max(1));
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Replace the answers.
    pub fn set_answers(&mut self, answers: impl Into<AnswerSpec>) -> Result<&mut Self> {
        self.answers.clear();
        self.answers.append(answers)?;
        Ok(self)
    }

    /// Ask until the user selects an answer, and return its name.
    ///
    /// Fails with [`ChoiceError::NoAnswers`] when no answers are set and with
    /// [`ChoiceError::NoActiveAnswers`] when none of them can be selected.
    pub fn ask(&mut self) -> Result<String> {
        if self.answers.is_empty() {
            return Err(ChoiceError::NoAnswers);
        }
        if self.answers.active_count() == 0 {
            return Err(ChoiceError::NoActiveAnswers);
        }

        let mut attempts = 0;
        loop {
            let question = format!("{} {}", self.message, self.answers.render()?);
            let line = self.terminal.get_line(&question)?;
            attempts += 1;

            let input = line.trim_end();
            if let Some(answer) = self.answers.lookup(input)? {
                debug!(answer = answer.name(), attempts, "answer selected");
                return Ok(answer.name().to_string());
            }
            debug!(input, attempts, "no answer matches, asking again");

            if let Some(max) = self.max_attempts {
                if attempts >= max {
                    warn!(attempts, "giving up without a valid answer");
                    return Err(ChoiceError::TooManyAttempts { attempts });
                }
            }
        }
    }
}

/// Ask `message` on stdin/stdout with the given answers.
///
/// ```no_run
/// let answer = standout_choice::ask("Do you have a problem?", [("yes", true), ("no", true)])?;
/// # Ok::<(), standout_choice::ChoiceError>(())
/// ```
pub fn ask(message: impl Into<String>, answers: impl Into<AnswerSpec>) -> Result<String> {
    ask_with_terminal(message, answers, RealTerminal)
}

/// Ask `message` on a custom terminal with the given answers.
pub fn ask_with_terminal<T: TerminalIO>(
    message: impl Into<String>,
    answers: impl Into<AnswerSpec>,
    terminal: T,
) -> Result<String> {
    let mut prompt = Prompt::with_terminal(message, terminal);
    prompt.set_answers(answers)?;
    prompt.ask()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::MockTerminal;

    fn prompt(responses: &[&str]) -> Prompt<MockTerminal> {
        Prompt::with_terminal("What?", MockTerminal::with_responses(responses.to_vec()))
    }

    #[test]
    fn ask_without_answers_fails() {
        let mut p = prompt(&["y"]);
        assert!(matches!(p.ask(), Err(ChoiceError::NoAnswers)));
        assert!(p.terminal().prompts().is_empty());
    }

    #[test]
    fn ask_with_only_inactive_answers_fails() {
        let mut p = prompt(&["y"]);
        p.set_answers([("yes", false), ("no", false)]).unwrap();
        assert!(matches!(p.ask(), Err(ChoiceError::NoActiveAnswers)));
    }

    #[test]
    fn ask_returns_selected_name() {
        let mut p = prompt(&["n"]);
        p.set_answers(["yes", "no"]).unwrap();
        assert_eq!(p.ask().unwrap(), "no");
    }

    #[test]
    fn ask_prints_message_and_choices() {
        let mut p = prompt(&["y"]);
        p.set_answers(["yes", "no"]).unwrap();
        p.ask().unwrap();
        assert_eq!(p.terminal().prompts(), ["What? [y]es, [n]o "]);
    }

    #[test]
    fn ask_trims_trailing_whitespace() {
        let mut p = prompt(&["y  \t"]);
        p.set_answers(["yes", "no"]).unwrap();
        assert_eq!(p.ask().unwrap(), "yes");
    }

    #[test]
    fn ask_keeps_leading_whitespace() {
        let mut p = prompt(&[" y", "y"]);
        p.set_answers(["yes", "no"]).unwrap();
        assert_eq!(p.ask().unwrap(), "yes");
        assert_eq!(p.terminal().reads(), 2);
    }

    #[test]
    fn ask_repeats_until_match() {
        let mut p = prompt(&["", "maybe", "N", "n"]);
        p.set_answers(["yes", "no"]).unwrap();
        assert_eq!(p.ask().unwrap(), "no");
        assert_eq!(p.terminal().reads(), 4);
    }

    #[test]
    fn ask_eof_cancels() {
        let mut p = prompt(&["x"]);
        p.set_answers(["yes", "no"]).unwrap();
        assert!(matches!(p.ask(), Err(ChoiceError::PromptCancelled)));
    }

    #[test]
    fn ask_gives_up_after_max_attempts() {
        let mut p = prompt(&["x", "z", "y"]).max_attempts(2);
        p.set_answers(["yes", "no"]).unwrap();
        assert!(matches!(
            p.ask(),
            Err(ChoiceError::TooManyAttempts { attempts: 2 })
        ));
    }

    #[test]
    fn max_attempts_zero_asks_once() {
        let mut p = prompt(&["x", "y"]).max_attempts(0);
        p.set_answers(["yes", "no"]).unwrap();
        assert!(matches!(
            p.ask(),
            Err(ChoiceError::TooManyAttempts { attempts: 1 })
        ));
        assert_eq!(p.terminal().reads(), 1);
    }

    #[test]
    fn ask_propagates_resolution_errors() {
        let mut p = prompt(&["s"]);
        p.set_answers(["abc", "ab", "a"]).unwrap();
        assert!(matches!(
            p.ask(),
            Err(ChoiceError::IndicatorExhausted { ref name }) if name == "a"
        ));
        assert!(p.terminal().prompts().is_empty());
    }

    #[test]
    fn ask_with_duplicate_names() {
        let mut p = prompt(&["sk"]);
        p.set_answers(["skip", "skip"]).unwrap();
        assert_eq!(p.ask().unwrap(), "skip");
        assert_eq!(p.terminal().prompts(), ["What? [s]kip, [sk]ip "]);
    }

    #[test]
    fn set_answers_replaces_previous() {
        let mut p = prompt(&[]);
        p.set_answers(["yes", "no"]).unwrap();
        p.set_answers("abort").unwrap();
        assert_eq!(p.answers().names(), ["abort"]);
    }

    #[test]
    fn ask_with_terminal_one_call() {
        let answer = ask_with_terminal(
            "What are you doing?",
            ["nothing", "cleaning_up"],
            MockTerminal::with_response("c"),
        )
        .unwrap();
        assert_eq!(answer, "cleaning_up");
    }
}
