use serde::{Deserialize, Serialize};

/// Where a candidate path enters the bundle: inside the `currentStep`
/// wrapper introduced by the newest exports, or at the document root as the
/// older generations stored it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathScope {
    Step,
    Root,
}

/// Which scope partition is tried first when a field declares candidates in
/// both. Declared order inside a partition never changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopePrecedence {
    #[default]
    StepFirst,
    RootFirst,
}

/// Structural kind a field resolves to; also decides its empty default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scores,
    TextList,
    Text,
}

/// One candidate location for a semantic field.
#[derive(Debug, Clone, Copy)]
pub struct FieldPath {
    pub scope: PathScope,
    pub keys: &'static [&'static str],
}

const fn step(keys: &'static [&'static str]) -> FieldPath {
    FieldPath {
        scope: PathScope::Step,
        keys,
    }
}

const fn root(keys: &'static [&'static str]) -> FieldPath {
    FieldPath {
        scope: PathScope::Root,
        keys,
    }
}

/// The semantic fields the assembler resolves out of raw bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticField {
    InterestScores,
    SectorAffinities,
    PersonalityTraits,
    AcademicInterests,
    SectorCompatibilities,
    ConstraintTolerances,
    RejectedConstraints,
    WorkEnvironment,
    LanguageLevels,
    AssessmentId,
    CompletedAt,
}

impl SemanticField {
    pub const fn all() -> [Self; 11] {
        [
            Self::InterestScores,
            Self::SectorAffinities,
            Self::PersonalityTraits,
            Self::AcademicInterests,
            Self::SectorCompatibilities,
            Self::ConstraintTolerances,
            Self::RejectedConstraints,
            Self::WorkEnvironment,
            Self::LanguageLevels,
            Self::AssessmentId,
            Self::CompletedAt,
        ]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::InterestScores => "interest_scores",
            Self::SectorAffinities => "sector_affinities",
            Self::PersonalityTraits => "personality_traits",
            Self::AcademicInterests => "academic_interests",
            Self::SectorCompatibilities => "sector_compatibilities",
            Self::ConstraintTolerances => "constraint_tolerances",
            Self::RejectedConstraints => "rejected_constraints",
            Self::WorkEnvironment => "work_environment",
            Self::LanguageLevels => "language_levels",
            Self::AssessmentId => "assessment_id",
            Self::CompletedAt => "completed_at",
        }
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            Self::InterestScores
            | Self::SectorAffinities
            | Self::PersonalityTraits
            | Self::AcademicInterests
            | Self::SectorCompatibilities
            | Self::ConstraintTolerances
            | Self::LanguageLevels => FieldKind::Scores,
            Self::RejectedConstraints => FieldKind::TextList,
            Self::WorkEnvironment | Self::AssessmentId | Self::CompletedAt => FieldKind::Text,
        }
    }

    /// Candidate locations in declared precedence order, newest schema
    /// generation first. Every known generation must be listed. Appending is
    /// the only allowed edit: the relative order of existing candidates is a
    /// compatibility contract.
    pub fn candidates(self) -> &'static [FieldPath] {
        const INTEREST_SCORES: &[FieldPath] = &[
            step(&["currentStep", "riasec", "riasec", "scores"]),
            step(&["currentStep", "riasec", "scores"]),
            root(&["riasec", "scores"]),
            root(&["riasec_scores"]),
        ];
        const SECTOR_AFFINITIES: &[FieldPath] = &[
            step(&["currentStep", "riasec", "riasec", "sector_affinities"]),
            step(&["currentStep", "riasec", "sector_affinities"]),
            root(&["riasec", "sector_affinities"]),
            root(&["sector_affinities"]),
        ];
        const PERSONALITY_TRAITS: &[FieldPath] = &[
            step(&["currentStep", "personality", "personality", "traits"]),
            step(&["currentStep", "personality", "traits"]),
            root(&["personality", "traits"]),
            root(&["personality_scores"]),
        ];
        const ACADEMIC_INTERESTS: &[FieldPath] = &[
            step(&["currentStep", "academics", "academics", "interests"]),
            step(&["currentStep", "academics", "interests"]),
            root(&["academics", "interests"]),
            root(&["academic_interests"]),
        ];
        const SECTOR_COMPATIBILITIES: &[FieldPath] = &[
            step(&["currentStep", "careers", "careers", "compatibilities"]),
            step(&["currentStep", "careers", "compatibilities"]),
            root(&["careers", "compatibilities"]),
            root(&["sector_scores"]),
        ];
        const CONSTRAINT_TOLERANCES: &[FieldPath] = &[
            step(&["currentStep", "constraints", "constraints", "tolerances"]),
            step(&["currentStep", "constraints", "tolerances"]),
            root(&["constraints", "tolerances"]),
            root(&["constraint_levels"]),
        ];
        const REJECTED_CONSTRAINTS: &[FieldPath] = &[
            step(&["currentStep", "constraints", "constraints", "rejected"]),
            step(&["currentStep", "constraints", "rejected"]),
            root(&["constraints", "rejected"]),
            root(&["rejected_constraints"]),
        ];
        const WORK_ENVIRONMENT: &[FieldPath] = &[
            step(&["currentStep", "constraints", "constraints", "environment"]),
            step(&["currentStep", "constraints", "environment"]),
            root(&["constraints", "environment"]),
            root(&["work_environment"]),
        ];
        const LANGUAGE_LEVELS: &[FieldPath] = &[
            step(&["currentStep", "languages", "languages", "levels"]),
            step(&["currentStep", "languages", "levels"]),
            root(&["languages", "levels"]),
            root(&["language_levels"]),
        ];
        const ASSESSMENT_ID: &[FieldPath] = &[
            step(&["currentStep", "assessment_id"]),
            root(&["assessment_id"]),
        ];
        const COMPLETED_AT: &[FieldPath] = &[
            step(&["currentStep", "completed_at"]),
            root(&["completed_at"]),
        ];

        match self {
            Self::InterestScores => INTEREST_SCORES,
            Self::SectorAffinities => SECTOR_AFFINITIES,
            Self::PersonalityTraits => PERSONALITY_TRAITS,
            Self::AcademicInterests => ACADEMIC_INTERESTS,
            Self::SectorCompatibilities => SECTOR_COMPATIBILITIES,
            Self::ConstraintTolerances => CONSTRAINT_TOLERANCES,
            Self::RejectedConstraints => REJECTED_CONSTRAINTS,
            Self::WorkEnvironment => WORK_ENVIRONMENT,
            Self::LanguageLevels => LANGUAGE_LEVELS,
            Self::AssessmentId => ASSESSMENT_ID,
            Self::CompletedAt => COMPLETED_AT,
        }
    }
}
