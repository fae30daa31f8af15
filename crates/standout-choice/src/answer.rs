//! A single selectable answer.
//!
//! An answer has a name (`overwrite`, `overwrite_all`) and an indicator: the
//! short code the user types to select it. Indicators are the first few
//! characters of the name, shown in square brackets followed by the rest of
//! the name:
//!
//! ```text
//! overwrite      → [o]verwrite
//! overwrite_all  → [O]verwrite all
//! ```
//!
//! Answers whose name ends in `all` are *special*: their indicator is
//! uppercase. Inactive answers have no indicator and render to nothing.

use std::fmt;

use crate::error::{ChoiceError, Result};
use crate::indicator::is_name_token;

/// Name endings that mark an answer as special.
const SPECIAL_ENDINGS: &[&str] = &["all"];

/// A named choice with an activeness flag and a derived indicator.
///
/// # Example
///
/// ```
/// use standout_choice::Answer;
///
/// let answer = Answer::new("overwrite")?;
/// assert_eq!(answer.indicator().as_deref(), Some("o"));
/// assert_eq!(answer.indicator_with_len(2).as_deref(), Some("ov"));
/// assert_eq!(answer.render().as_deref(), Some("[o]verwrite"));
/// # Ok::<(), standout_choice::ChoiceError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    name: String,
    active: bool,
    indicator: Option<String>,
}

impl Answer {
    /// Create an active answer.
    ///
    /// Fails with [`ChoiceError::InvalidName`] if `name` is not a name token.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_active(name, true)
    }

    /// Create an answer with explicit activeness.
    pub fn with_active(name: impl Into<String>, active: bool) -> Result<Self> {
        let name = name.into();
        if !is_name_token(&name) {
            return Err(ChoiceError::invalid_name(name));
        }
        Ok(Self {
            name,
            active,
            indicator: None,
        })
    }

    /// Create an inactive answer.
    pub fn inactive(name: impl Into<String>) -> Result<Self> {
        Self::with_active(name, false)
    }

    /// The answer's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_inactive(&self) -> bool {
        !self.active
    }

    /// Whether the name ends with one of the special endings.
    ///
    /// This is a plain suffix match: `overall` is special as well.
    pub fn is_special(&self) -> bool {
        SPECIAL_ENDINGS
            .iter()
            .any(|ending| self.name.ends_with(ending))
    }

    /// The one-character indicator, or the explicit one if set.
    pub fn indicator(&self) -> Option<String> {
        self.indicator_with_len(1)
    }

    /// The indicator made from the first `len` characters of the name.
    ///
    /// Returns `None` for inactive answers. An explicitly set indicator is
    /// returned as is, regardless of `len`.
    pub fn indicator_with_len(&self, len: usize) -> Option<String> {
        if self.is_inactive() {
            return None;
        }
        if let Some(indicator) = &self.indicator {
            return Some(indicator.clone());
        }
        let prefix: String = self.name.chars().take(len).collect();
        if self.is_special() {
            Some(prefix.to_uppercase())
        } else {
            Some(prefix)
        }
    }

    /// Fix the indicator. Once set it wins over the derived one.
    pub fn set_indicator(&mut self, indicator: impl Into<String>) {
        self.indicator = Some(indicator.into());
    }

    /// Builder form of [`set_indicator`](Self::set_indicator).
    pub fn indicator_override(mut self, indicator: impl Into<String>) -> Self {
        self.set_indicator(indicator);
        self
    }

    /// The explicitly set indicator, if any.
    pub fn fixed_indicator(&self) -> Option<&str> {
        self.indicator.as_deref()
    }

    /// `(indicator, name)` for active answers.
    ///
    /// ```
    /// use standout_choice::Answer;
    ///
    /// let answer = Answer::new("overwrite")?;
    /// assert_eq!(answer.indicator_entry(), Some(("o".to_string(), "overwrite")));
    /// # Ok::<(), standout_choice::ChoiceError>(())
    /// ```
    pub fn indicator_entry(&self) -> Option<(String, &str)> {
        self.indicator().map(|indicator| (indicator, self.name.as_str()))
    }

    /// Render as `[indicator]rest of name`, with underscores shown as spaces.
    ///
    /// Returns `None` for inactive answers.
    pub fn render(&self) -> Option<String> {
        let indicator = self.indicator()?;
        let rest: String = self
            .name
            .chars()
            .skip(indicator.chars().count())
            .map(|c| if c == '_' { ' ' } else { c })
            .collect();
        Some(format!("[{}]{}", indicator, rest))
    }
}

impl fmt::Display for Answer {
    /// Inactive answers display as an empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render() {
            Some(rendered) => f.write_str(&rendered),
            None => Ok(()),
        }
    }
}

impl TryFrom<&str> for Answer {
    type Error = ChoiceError;

    fn try_from(name: &str) -> Result<Self> {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(name: &str) -> Answer {
        Answer::new(name).unwrap()
    }

    #[test]
    fn new_is_active() {
        let a = answer("overwrite");
        assert_eq!(a.name(), "overwrite");
        assert!(a.is_active());
        assert!(!a.is_inactive());
    }

    #[test]
    fn with_active_false_is_inactive() {
        let a = Answer::with_active("overwrite", false).unwrap();
        assert!(a.is_inactive());
        assert_eq!(a, Answer::inactive("overwrite").unwrap());
    }

    #[test]
    fn rejects_non_names() {
        for bad in ["", "non-symbol", "two words", "3d"] {
            assert!(
                matches!(Answer::new(bad), Err(ChoiceError::InvalidName(_))),
                "'{}' should be rejected",
                bad
            );
        }
    }

    #[test]
    fn indicator_takes_leading_chars() {
        let a = answer("overwrite");
        assert_eq!(a.indicator().as_deref(), Some("o"));
        assert_eq!(a.indicator_with_len(2).as_deref(), Some("ov"));
        assert_eq!(a.indicator_with_len(100).as_deref(), Some("overwrite"));
    }

    #[test]
    fn special_indicator_is_uppercase() {
        let a = answer("overwrite_all");
        assert!(a.is_special());
        assert_eq!(a.indicator().as_deref(), Some("O"));
        assert_eq!(a.indicator_with_len(2).as_deref(), Some("OV"));
    }

    #[test]
    fn special_is_a_plain_suffix_match() {
        assert!(answer("overall").is_special());
        assert!(answer("all").is_special());
        assert!(!answer("allow").is_special());
    }

    #[test]
    fn inactive_has_no_indicator() {
        let mut a = Answer::inactive("overwrite").unwrap();
        assert_eq!(a.indicator(), None);
        a.set_indicator("x");
        assert_eq!(a.indicator(), None);
        assert_eq!(a.render(), None);
        assert_eq!(a.indicator_entry(), None);
    }

    #[test]
    fn fixed_indicator_wins() {
        let mut a = answer("overwrite");
        a.set_indicator("ov");
        assert_eq!(a.indicator().as_deref(), Some("ov"));
        assert_eq!(a.indicator_with_len(5).as_deref(), Some("ov"));
        assert_eq!(a.fixed_indicator(), Some("ov"));
    }

    #[test]
    fn render_plain() {
        assert_eq!(answer("overwrite").render().as_deref(), Some("[o]verwrite"));
    }

    #[test]
    fn render_humanizes_underscores() {
        assert_eq!(
            answer("overwrite_all").render().as_deref(),
            Some("[O]verwrite all")
        );
        assert_eq!(
            answer("cleaning_up").render().as_deref(),
            Some("[c]leaning up")
        );
    }

    #[test]
    fn render_strips_fixed_indicator_length() {
        let a = answer("abc").indicator_override("ab");
        assert_eq!(a.render().as_deref(), Some("[ab]c"));
    }

    #[test]
    fn try_from_str() {
        let a = Answer::try_from("skip").unwrap();
        assert_eq!(a, answer("skip"));
        assert!(matches!(
            Answer::try_from("not-a-name"),
            Err(ChoiceError::InvalidName(ref n)) if n == "not-a-name"
        ));
    }

    #[test]
    fn display_matches_render() {
        assert_eq!(answer("abort").to_string(), "[a]bort");
        assert_eq!(Answer::inactive("abort").unwrap().to_string(), "");
    }
}
