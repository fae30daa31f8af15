//! Indicator helpers shared by answers and answer sets.

use crate::answer::Answer;
use crate::error::{ChoiceError, Result};

/// Check whether `s` can be used as an answer name.
///
/// A name starts with a letter or `_`, followed by letters, digits or `_`.
pub fn is_name_token(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// The shortest indicator of `answer` that is not in `used`.
///
/// Inactive answers get `None`. An explicitly set indicator is kept, and
/// fails with [`ChoiceError::IndicatorTaken`] if it is already used. When
/// every prefix of the name is taken, fails with
/// [`ChoiceError::IndicatorExhausted`].
pub fn free_indicator(answer: &Answer, used: &[String]) -> Result<Option<String>> {
    if answer.is_inactive() {
        return Ok(None);
    }

    if let Some(fixed) = answer.fixed_indicator() {
        if used.iter().any(|u| u == fixed) {
            return Err(ChoiceError::IndicatorTaken {
                name: answer.name().to_string(),
                indicator: fixed.to_string(),
            });
        }
        return Ok(Some(fixed.to_string()));
    }

    let max_len = answer.name().chars().count();
    for len in 1..=max_len {
        if let Some(candidate) = answer.indicator_with_len(len) {
            if !used.contains(&candidate) {
                return Ok(Some(candidate));
            }
        }
    }

    Err(ChoiceError::exhausted(answer.name()))
}
