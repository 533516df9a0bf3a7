mod events;
mod mouse_click;
mod mouse_hover;
mod render;
mod state;

pub use state::App;

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
