//! Dashboard Views
//!
//! View state machines that sit between the stats client and the renderers.
//! Each view owns its result set and loading/error flags exclusively; none
//! of them share state with another.
//!
//! ## Lifecycle
//!
//! - `mount()` runs the initial fetch exactly once per view instance
//! - `teardown_handle()` returns a [`Teardown`]; after `unmount()` any
//!   in-flight response is dropped instead of applied
//!
//! Methods that fetch take `&mut self`, so a view is driven by one task and
//! its triggers never overlap.

mod lifecycle;
mod player_detail;
mod player_table;
mod top_scorers;

#[cfg(test)]
pub(crate) mod testing;

pub use lifecycle::{Teardown, ViewPhase};
pub use player_detail::{DetailState, PlayerDetail, PLAYER_FAILED_MESSAGE};
pub use player_table::{
    PlayerTable, TableDisplay, TableState, LOAD_FAILED_MESSAGE, SEARCH_FAILED_MESSAGE,
};
pub use top_scorers::{ChartState, TopScorersChart, LEADERS_FAILED_MESSAGE};
