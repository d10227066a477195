use super::fields::ScopePrecedence;
use serde::{Deserialize, Serialize};

/// Assembly-time policy: which candidate scope wins ties and how many
/// leading entries each ranked section keeps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyConfig {
    pub scope_precedence: ScopePrecedence,
    pub interest_leaders: usize,
    pub personality_leaders: usize,
    pub academic_leaders: usize,
    pub sector_leaders: usize,
    pub language_leaders: usize,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            scope_precedence: ScopePrecedence::StepFirst,
            interest_leaders: 3,
            personality_leaders: 3,
            academic_leaders: 5,
            sector_leaders: 5,
            language_leaders: 3,
        }
    }
}
