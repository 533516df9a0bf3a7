//! The example list component
//!
//! Holds the ordered examples and the caller-supplied click handler. The
//! list never reorders, filters or mutates its examples; the handler is the
//! only thing a click can reach.

use std::borrow::Cow;
use std::fmt;

use super::item::Example;
use super::model::{EXAMPLES, ExampleModel};

/// Callback invoked with the clicked example's value
pub type ExampleClickHandler = Box<dyn FnMut(&str)>;

pub const DEFAULT_TITLE: &str = "Try asking";

pub struct ExampleList {
    examples: Cow<'static, [ExampleModel]>,
    title: Cow<'static, str>,
    on_example_clicked: Option<ExampleClickHandler>,
}

impl ExampleList {
    /// List over the built-in examples with no click handler
    pub fn new() -> Self {
        Self {
            examples: Cow::Borrowed(EXAMPLES),
            title: Cow::Borrowed(DEFAULT_TITLE),
            on_example_clicked: None,
        }
    }

    /// Replace the example sequence, keeping its order
    pub fn with_examples(mut self, examples: Vec<ExampleModel>) -> Self {
        self.examples = Cow::Owned(examples);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Cow::Owned(title.into());
        self
    }

    /// Install the handler called with an example's value when it is clicked
    pub fn on_example_clicked<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&str) + 'static,
    {
        self.on_example_clicked = Some(Box::new(handler));
        self
    }

    pub fn examples(&self) -> &[ExampleModel] {
        &self.examples
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// One entry per example, in declared order, keyed by position
    pub fn entries(&self) -> impl Iterator<Item = Example<'_>> + '_ {
        (0..self.examples.len()).filter_map(|key| example_at(&self.examples, key))
    }

    /// Click the entry at `index`
    ///
    /// Calls the handler exactly once with that entry's value. Returns
    /// `false` when no entry exists at `index`. Without a handler the click
    /// is a no-op but still reports the entry as present.
    pub fn click(&mut self, index: usize) -> bool {
        let Some(entry) = example_at(&self.examples, index) else {
            return false;
        };

        if let Some(handler) = self.on_example_clicked.as_mut() {
            entry.click(|value| handler(value));
        }
        true
    }
}

fn example_at(examples: &[ExampleModel], index: usize) -> Option<Example<'_>> {
    examples.get(index).map(|example| Example {
        key: index,
        text: &example.text,
        value: &example.value,
    })
}

impl Default for ExampleList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ExampleList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExampleList")
            .field("examples", &self.examples)
            .field("title", &self.title)
            .field("has_handler", &self.on_example_clicked.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod list_tests;
