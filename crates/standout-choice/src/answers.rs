//! Ordered answer collections.
//!
//! [`AnswerSet`] keeps answers in insertion order and makes sure every active
//! answer has its own indicator. When two answers would share one, the later
//! answer gets a longer prefix of its name:
//!
//! ```text
//! abort, abort_all, abc   →   [a]bort, [A]bort all, [ab]c
//! ```
//!
//! Earlier answers always win; there is no other tie-break.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, trace};

use crate::answer::Answer;
use crate::error::Result;
use crate::indicator::{free_indicator, is_name_token};

/// Anything that can be appended to an [`AnswerSet`].
///
/// Usually built through `From`:
///
/// ```
/// use standout_choice::{AnswerSet, AnswerSpec};
///
/// let mut set = AnswerSet::new();
/// set.append("abort")?
///     .append(["skip", "overwrite"])?
///     .append(AnswerSpec::map([("retry", false)]))?;
/// assert_eq!(set.names(), ["abort", "skip", "overwrite", "retry"]);
/// # Ok::<(), standout_choice::ChoiceError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerSpec {
    /// An existing answer, appended as is.
    Answer(Answer),
    /// A bare name, appended as an active answer.
    Name(String),
    /// A sequence, appended element by element.
    List(Vec<AnswerSpec>),
    /// Name to activeness. Entries whose key is not a valid name are dropped.
    Map(Vec<(String, bool)>),
}

impl AnswerSpec {
    /// Build a mapping spec from ordered `(name, active)` pairs.
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, bool)>,
    {
        Self::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<Answer> for AnswerSpec {
    fn from(answer: Answer) -> Self {
        Self::Answer(answer)
    }
}

impl From<&str> for AnswerSpec {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for AnswerSpec {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl<S: Into<String>> From<(S, bool)> for AnswerSpec {
    fn from((name, active): (S, bool)) -> Self {
        Self::Map(vec![(name.into(), active)])
    }
}

impl<T: Into<AnswerSpec>> From<Vec<T>> for AnswerSpec {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<AnswerSpec>, const N: usize> From<[T; N]> for AnswerSpec {
    fn from(items: [T; N]) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, bool>> for AnswerSpec {
    fn from(map: BTreeMap<String, bool>) -> Self {
        Self::Map(map.into_iter().collect())
    }
}

/// An ordered set of answers with unique indicators.
///
/// # Example
///
/// ```
/// use standout_choice::AnswerSet;
///
/// let mut set = AnswerSet::from_spec(["abort", "abort_all", "abc"])?;
/// assert_eq!(set.render()?, "[a]bort, [A]bort all, [ab]c");
/// assert_eq!(set.lookup("ab")?.map(|a| a.name()), Some("abc"));
/// # Ok::<(), standout_choice::ChoiceError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    items: Vec<Answer>,
}

impl AnswerSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from anything [`append`](Self::append) accepts.
    pub fn from_spec(spec: impl Into<AnswerSpec>) -> Result<Self> {
        let mut set = Self::new();
        set.append(spec)?;
        Ok(set)
    }

    /// Append answers. Returns the set for chaining.
    ///
    /// A bare name that is not a valid name fails with
    /// [`ChoiceError::InvalidName`]; invalid mapping keys are skipped.
    pub fn append(&mut self, spec: impl Into<AnswerSpec>) -> Result<&mut Self> {
        match spec.into() {
            AnswerSpec::Answer(answer) => self.items.push(answer),
            AnswerSpec::Name(name) => self.items.push(Answer::new(name)?),
            AnswerSpec::List(specs) => {
                for spec in specs {
                    self.append(spec)?;
                }
            }
            AnswerSpec::Map(entries) => {
                for (name, active) in entries {
                    if !is_name_token(&name) {
                        trace!(name = %name, "skipping mapping entry with invalid name");
                        continue;
                    }
                    self.items.push(Answer::with_active(name, active)?);
                }
            }
        }
        Ok(self)
    }

    /// Make all active indicators unique.
    ///
    /// Does nothing if they already are. Otherwise each active answer, in
    /// insertion order, is fixed to the shortest indicator not used by the
    /// answers before it. On error no indicator is changed.
    pub fn resolve_uniqueness(&mut self) -> Result<()> {
        if self.has_unique_indicators() {
            return Ok(());
        }

        let mut used: Vec<String> = Vec::with_capacity(self.items.len());
        let mut resolved: Vec<Option<String>> = Vec::with_capacity(self.items.len());
        for answer in &self.items {
            let indicator = free_indicator(answer, &used)?;
            if let Some(indicator) = &indicator {
                used.push(indicator.clone());
            }
            resolved.push(indicator);
        }

        for (answer, indicator) in self.items.iter_mut().zip(resolved) {
            if let Some(indicator) = indicator {
                if answer.fixed_indicator() != Some(indicator.as_str()) {
                    debug!(answer = answer.name(), indicator = %indicator, "assigned indicator");
                }
                answer.set_indicator(indicator);
            }
        }
        Ok(())
    }

    /// Find the active answer selected by `indicator`.
    ///
    /// Resolves indicators first. Returns `Ok(None)` when nothing matches.
    pub fn lookup(&mut self, indicator: &str) -> Result<Option<&Answer>> {
        self.resolve_uniqueness()?;
        Ok(self
            .items
            .iter()
            .find(|answer| answer.indicator().as_deref() == Some(indicator)))
    }

    /// Current indicators of all answers, without resolving.
    pub fn indicators(&self) -> Vec<Option<String>> {
        self.items.iter().map(Answer::indicator).collect()
    }

    /// Whether no two active answers share an indicator.
    pub fn has_unique_indicators(&self) -> bool {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .filter_map(Answer::indicator)
            .all(|indicator| seen.insert(indicator))
    }

    /// Render the choice string, e.g. `[a]bort, [ab]c`.
    ///
    /// Inactive answers are left out.
    pub fn render(&mut self) -> Result<String> {
        self.resolve_uniqueness()?;
        let rendered: Vec<String> = self.items.iter().filter_map(Answer::render).collect();
        Ok(rendered.join(", "))
    }

    /// Remove all answers.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of active answers.
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|a| a.is_active()).count()
    }

    pub fn get(&self, index: usize) -> Option<&Answer> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Answer> {
        self.items.iter()
    }

    /// Names of all answers, in order.
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(Answer::name).collect()
    }
}

impl<'a> IntoIterator for &'a AnswerSet {
    type Item = &'a Answer;
    type IntoIter = std::slice::Iter<'a, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
