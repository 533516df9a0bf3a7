use std::sync::mpsc::{self, Receiver};

use crate::config::Config;
use crate::example_list::{ExampleList, ExampleSelection};
use crate::layout::LayoutRegions;

/// Application state
///
/// Hosts the example list and receives the picked query through the list's
/// click handler.
pub struct App {
    pub examples: ExampleList,
    pub selection: ExampleSelection,
    pub layout_regions: LayoutRegions,
    pub should_quit: bool,
    picked: Option<String>,
    picked_rx: Receiver<String>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let (picked_tx, picked_rx) = mpsc::channel();
        let examples = config.build_example_list().on_example_clicked(move |value| {
            // Receiver lives as long as the app, so a failed send means shutdown
            let _ = picked_tx.send(value.to_string());
        });
        log::debug!("Showing {} examples", examples.len());

        Self {
            examples,
            selection: ExampleSelection::new(),
            layout_regions: LayoutRegions::new(),
            should_quit: false,
            picked: None,
            picked_rx,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The query picked so far, if any
    pub fn picked(&self) -> Option<&str> {
        self.picked.as_deref()
    }

    pub fn take_picked(&mut self) -> Option<String> {
        self.picked.take()
    }

    /// Collect values sent by the click handler; a pick ends the session
    pub(super) fn poll_picked(&mut self) {
        while let Ok(value) = self.picked_rx.try_recv() {
            log::debug!("Example picked: {}", value);
            self.picked = Some(value);
            self.should_quit = true;
        }
    }
}
