pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod plan;
pub mod planner;
pub mod progress;
pub mod state;
pub mod storage;
pub mod subjects;
pub mod timetable;
pub mod week;

pub use error::HarmonyError;
pub use state::App;
