//! Single-keystroke answer prompts for CLI applications.
//!
//! `standout-choice` asks a question with a fixed set of answers, each
//! selected by a short indicator derived from its name:
//!
//! ```text
//! File does exist, what should be done? [s]kip, [o]verwrite, [O]verwrite all, [a]bort
//! ```
//!
//! # Quick Start
//!
//! ```no_run
//! use standout_choice::ask;
//!
//! let answer = ask(
//!     "File does exist, what should be done?",
//!     ["skip", "overwrite", "overwrite_all", "abort"],
//! )?;
//! # Ok::<(), standout_choice::ChoiceError>(())
//! ```
//!
//! # Indicators
//!
//! An answer's indicator is the first character of its name. Names ending
//! in `all` get an uppercase indicator. When two answers would share an
//! indicator, the one added later uses a longer prefix of its name:
//!
//! ```
//! use standout_choice::AnswerSet;
//!
//! let mut answers = AnswerSet::from_spec(["abort", "abort_all", "abc"])?;
//! assert_eq!(answers.render()?, "[a]bort, [A]bort all, [ab]c");
//! # Ok::<(), standout_choice::ChoiceError>(())
//! ```
//!
//! Inactive answers stay in the set but are neither shown nor selectable:
//!
//! ```
//! use standout_choice::AnswerSet;
//!
//! let mut answers = AnswerSet::from_spec([("skip", true), ("overwrite", false), ("abort", true)])?;
//! assert_eq!(answers.render()?, "[s]kip, [a]bort");
//! # Ok::<(), standout_choice::ChoiceError>(())
//! ```
//!
//! # Testing
//!
//! Prompts accept any [`TerminalIO`], so tests can script the user:
//!
//! ```
//! use standout_choice::{ask_with_terminal, MockTerminal};
//!
//! let terminal = MockTerminal::with_responses(["x", "s"]);
//! let answer = ask_with_terminal("Now what?", ["skip", "abort"], terminal)?;
//! assert_eq!(answer, "skip");
//! # Ok::<(), standout_choice::ChoiceError>(())
//! ```
//!
//! # Features
//!
//! - **`cli`** (default) - Build the `choose` binary

mod answer;
mod answers;
mod error;
pub mod indicator;
mod prompt;
pub mod terminal;

pub use answer::Answer;
pub use answers::{AnswerSet, AnswerSpec};
pub use error::{ChoiceError, Result};
pub use prompt::{ask, ask_with_terminal, Prompt};
pub use terminal::{MockTerminal, RealTerminal, StreamTerminal, TerminalIO};
