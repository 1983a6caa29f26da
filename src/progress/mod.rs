pub mod goals;
pub mod notes;
pub mod stats;
pub mod streak;
