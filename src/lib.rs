pub mod app;
pub mod config;
pub mod error;
pub mod example_list;
pub mod layout;
pub mod logging;
pub mod terminal;
pub mod theme;

#[cfg(test)]
mod test_utils;
