use super::steps::AssessmentStep;
use chrono::NaiveDate;
use serde::Serialize;

/// One ranked category as presented in a report section. `display_label`
/// rides along only when the host supplied a catalog that knows the key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedScoreView {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_label: Option<String>,
    pub score: f64,
    pub rank: usize,
}

/// A ranked section: every category in rank order plus the leading slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSectionView {
    pub entries: Vec<RankedScoreView>,
    pub leaders: Vec<RankedScoreView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstraintSectionView {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tolerances: Vec<RankedScoreView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_environment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeSourceView {
    pub stage: AssessmentStep,
    pub stage_label: &'static str,
    pub weight: f64,
}

/// Composite-index section; `sources` echoes the stages and weights that
/// entered the blend so consumers can audit a score back to its stages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeSectionView {
    pub entries: Vec<RankedScoreView>,
    pub leaders: Vec<RankedScoreView>,
    pub sources: Vec<CompositeSourceView>,
}

/// Assessment-level metadata. Fields stay optional: partial bundles are the
/// normal case while an assessment is in progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<NaiveDate>,
}

/// The canonical report handed to presentation. A section is omitted
/// entirely when the bundle held no data for it; absence means "not yet
/// available", never "empty result".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CanonicalReport {
    pub meta: ReportMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_profile: Option<ScoreSectionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personality: Option<ScoreSectionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_interests: Option<ScoreSectionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector_compatibility: Option<ScoreSectionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_skills: Option<ScoreSectionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<ConstraintSectionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector_fit: Option<CompositeSectionView>,
}
