use serde::{Deserialize, Serialize};

/// One stage of the multi-step orientation assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStep {
    InterestProfile,
    Personality,
    AcademicInterests,
    CareerCompatibility,
    Constraints,
    LanguageSkills,
}

impl AssessmentStep {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::InterestProfile,
            Self::Personality,
            Self::AcademicInterests,
            Self::CareerCompatibility,
            Self::Constraints,
            Self::LanguageSkills,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InterestProfile => "Interest Profile",
            Self::Personality => "Personality",
            Self::AcademicInterests => "Academic Interests",
            Self::CareerCompatibility => "Career Compatibility",
            Self::Constraints => "Constraints",
            Self::LanguageSkills => "Language Skills",
        }
    }
}

/// Scored taxonomy a category label belongs to. Tracked separately from
/// steps because the sector taxonomy is measured at two different stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreDomain {
    Interests,
    Personality,
    Academics,
    Sectors,
    Constraints,
    Languages,
}

impl ScoreDomain {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Interests => "Interests",
            Self::Personality => "Personality",
            Self::Academics => "Academics",
            Self::Sectors => "Sectors",
            Self::Constraints => "Constraints",
            Self::Languages => "Languages",
        }
    }
}
