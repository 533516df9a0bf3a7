//! Example data model
//!
//! An example pairs the label shown in the list with the query submitted
//! when the entry is clicked.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A single suggested query
///
/// `text` is what the user sees; `value` is what the click handler receives.
/// The built-in examples use the same string for both, but the two are kept
/// separate so a short label can submit a longer question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleModel {
    pub text: Cow<'static, str>,
    pub value: Cow<'static, str>,
}

impl ExampleModel {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: Cow::Owned(text.into()),
            value: Cow::Owned(value.into()),
        }
    }

    /// Build an example from static strings, usable in `const` context
    pub const fn from_static(text: &'static str, value: &'static str) -> Self {
        Self {
            text: Cow::Borrowed(text),
            value: Cow::Borrowed(value),
        }
    }
}

/// Built-in example questions, in display order
pub const EXAMPLES: &[ExampleModel] = &[
    ExampleModel::from_static(
        "Tell me about wellbore 1007?",
        "Tell me about wellbore 1007?",
    ),
    ExampleModel::from_static(
        "What are the coordinates of wellbore 1014?",
        "What are the coordinates of wellbore 1014?",
    ),
    ExampleModel::from_static(
        "What is the spud date of wellbore 1014?",
        "What is the spud date of wellbore 1014?",
    ),
];
