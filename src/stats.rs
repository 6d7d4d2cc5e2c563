//! Stats module for summarizing the comic collection
//!
//! Computes total, mean, median and mode over one numeric attribute of the
//! loaded records and caches the result for the stats card.

mod compute;
pub mod stats_render;
mod stats_state;
mod types;

pub use compute::{compute_stats, mean, median, modes, summarize};
pub use stats_state::{StatsState, update_stats_from_app};
pub use types::{StatField, StatsError, StatsResult};
