//! Error types for answer prompts.

use std::io;

/// Errors that can occur while building answers or asking a question.
#[derive(Debug, thiserror::Error)]
pub enum ChoiceError {
    /// The given text is not usable as an answer name.
    #[error("'{0}' is not a valid answer name")]
    InvalidName(String),

    /// A question was asked before any answers were set.
    #[error("You have to set answers before asking.")]
    NoAnswers,

    /// Every configured answer is inactive, so nothing can be selected.
    #[error("None of the answers is active.")]
    NoActiveAnswers,

    /// No prefix of the answer's name is free to use as an indicator.
    #[error("No free indicator left for answer '{name}'")]
    IndicatorExhausted { name: String },

    /// An explicitly set indicator is already claimed by an earlier answer.
    #[error("Indicator '{indicator}' of answer '{name}' is already taken")]
    IndicatorTaken { name: String, indicator: String },

    /// Writing the prompt or reading the response failed.
    #[error("Prompt failed: {0}")]
    PromptFailed(#[source] io::Error),

    /// Input ended before a valid answer was given.
    #[error("Prompt cancelled by user.")]
    PromptCancelled,

    /// The configured attempt limit was reached without a match.
    #[error("No valid answer after {attempts} attempts")]
    TooManyAttempts { attempts: usize },
}

impl ChoiceError {
    /// Create an invalid-name error.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName(name.into())
    }

    /// Create an exhausted-indicator error.
    pub fn exhausted(name: impl Into<String>) -> Self {
        Self::IndicatorExhausted { name: name.into() }
    }
}

/// Result type for choice operations.
pub type Result<T> = std::result::Result<T, ChoiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_answer() {
        assert_eq!(
            ChoiceError::exhausted("abort").to_string(),
            "No free indicator left for answer 'abort'"
        );
        assert_eq!(
            ChoiceError::invalid_name("non-symbol").to_string(),
            "'non-symbol' is not a valid answer name"
        );
    }
}
