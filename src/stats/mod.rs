//! The six statistic groups computed over a filtered trip dataset.
//!
//! Each group is independent: one group failing (empty selection, column
//! absent from the city's schema) never blocks its siblings. The
//! [`types::StatsReport`] rollup carries whatever succeeded plus one entry
//! per failure.

pub mod duration;
pub mod mode;
pub mod report;
pub mod station;
pub mod time;
pub mod types;
pub mod user;
