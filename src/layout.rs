//! Layout module for tracking UI component regions
//!
//! Renderers record where they drew in `LayoutRegions`; mouse handlers use
//! `region_at()` and `entry_at()` to map a screen position back to the
//! component or example entry under it.

mod layout_regions;

pub use layout_hit_test::{entry_at, region_at};
pub use layout_regions::{EntryRegion, LayoutRegions, Region};
