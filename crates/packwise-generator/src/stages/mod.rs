//! Stage implementations, grouped by concern.

pub mod clothing;
pub mod essentials;
pub mod injection;
pub mod resolution;
pub mod sizing;
