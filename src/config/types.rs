// Configuration type definitions

use serde::Deserialize;

use crate::example_list::{DEFAULT_TITLE, ExampleList, ExampleModel};

/// One configured example
///
/// `value` defaults to `text` when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExampleEntryConfig {
    pub text: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl ExampleEntryConfig {
    pub fn to_model(&self) -> ExampleModel {
        let value = self.value.clone().unwrap_or_else(|| self.text.clone());
        ExampleModel::new(self.text.clone(), value)
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// Example list configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExamplesConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// None keeps the built-in examples; an empty list shows no examples
    #[serde(default)]
    pub entries: Option<Vec<ExampleEntryConfig>>,
}

impl Default for ExamplesConfig {
    fn default() -> Self {
        ExamplesConfig {
            title: default_title(),
            entries: None,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub examples: ExamplesConfig,
}

impl Config {
    /// Build the example list this configuration describes, without a handler
    pub fn build_example_list(&self) -> ExampleList {
        let list = ExampleList::new().with_title(self.examples.title.clone());
        match &self.examples.entries {
            Some(entries) => {
                list.with_examples(entries.iter().map(ExampleEntryConfig::to_model).collect())
            }
            None => list,
        }
    }
}
