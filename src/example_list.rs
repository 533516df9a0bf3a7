//! Example question list
//!
//! Shows a fixed set of suggested questions and hands the chosen one to a
//! caller-supplied handler.

pub mod example_list_events;
pub mod example_list_render;
mod item;
mod list;
mod model;
mod selection;

pub use item::{EntryHighlight, Example, truncate_to_width};
pub use list::{DEFAULT_TITLE, ExampleClickHandler, ExampleList};
pub use model::{EXAMPLES, ExampleModel};
pub use selection::ExampleSelection;
