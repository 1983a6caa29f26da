pub mod store;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[default]
    #[serde(rename = "")]
    Unset,
}

/// One user-declared subject. The planner treats the subject list as a
/// read-only snapshot at generation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub credits: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub notes: String,
}

impl Subject {
    /// Placeholder substituted when the user has not declared any subjects.
    pub fn general_study() -> Self {
        Subject {
            name: "General Study".to_string(),
            code: "GEN".to_string(),
            credits: 0,
            difficulty: Difficulty::Unset,
            notes: String::new(),
        }
    }
}
