use super::composite::{composite_of, CompositeError, StageWeightTable, StageWeighting};
use super::config::AssemblyConfig;
use super::fields::SemanticField;
use super::labels::LabelCatalog;
use super::ranking::{rank, top_n, RankedEntry};
use super::resolver::{resolve_field, ResolveError};
use super::scores::ScoreMap;
use super::sections::{
    CanonicalReport, CompositeSectionView, CompositeSourceView, ConstraintSectionView,
    RankedScoreView, ReportMeta, ScoreSectionView,
};
use super::steps::{AssessmentStep, ScoreDomain};
use chrono::{DateTime, NaiveDate};
use serde_json::Value;
use tracing::info;

/// A raw step-result bundle as fetched by the host. Its shape depends on the
/// schema generation that produced it, so the engine only reads it through
/// the declared candidate table.
pub type RawStepBundle = Value;

/// Failures that can escape a report build. Missing or malformed bundle data
/// never lands here; only declaration bugs do.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Composite(#[from] CompositeError),
}

/// Builds canonical reports from raw step bundles.
pub struct ReportAssembler {
    config: AssemblyConfig,
    weighting: Box<dyn StageWeighting>,
    catalog: Option<Box<dyn LabelCatalog>>,
}

impl ReportAssembler {
    pub fn new(config: AssemblyConfig) -> Self {
        Self {
            config,
            weighting: Box::new(StageWeightTable::default()),
            catalog: None,
        }
    }

    /// Replaces the default stage weighting with a host-supplied policy.
    pub fn with_weighting(mut self, weighting: impl StageWeighting + 'static) -> Self {
        self.weighting = Box::new(weighting);
        self
    }

    /// Attaches a display-label catalog; ranked views then carry display
    /// labels for the keys the catalog knows.
    pub fn with_catalog(mut self, catalog: impl LabelCatalog + 'static) -> Self {
        self.catalog = Some(Box::new(catalog));
        self
    }

    /// Assembles one canonical report from one bundle.
    ///
    /// Sections whose data did not resolve are omitted rather than emitted
    /// empty. The only failure mode is a declaration bug in the candidate
    /// table or the weighting policy; incomplete data just shrinks the
    /// report.
    pub fn assemble(&self, bundle: &RawStepBundle) -> Result<CanonicalReport, ReportError> {
        let precedence = self.config.scope_precedence;

        let interests =
            resolve_field(bundle, SemanticField::InterestScores, precedence)?.into_scores();
        let affinities =
            resolve_field(bundle, SemanticField::SectorAffinities, precedence)?.into_scores();
        let traits =
            resolve_field(bundle, SemanticField::PersonalityTraits, precedence)?.into_scores();
        let academics =
            resolve_field(bundle, SemanticField::AcademicInterests, precedence)?.into_scores();
        let compatibilities =
            resolve_field(bundle, SemanticField::SectorCompatibilities, precedence)?.into_scores();
        let tolerances =
            resolve_field(bundle, SemanticField::ConstraintTolerances, precedence)?.into_scores();
        let rejected =
            resolve_field(bundle, SemanticField::RejectedConstraints, precedence)?.into_texts();
        let environment =
            resolve_field(bundle, SemanticField::WorkEnvironment, precedence)?.into_text();
        let languages =
            resolve_field(bundle, SemanticField::LanguageLevels, precedence)?.into_scores();

        let report = CanonicalReport {
            meta: self.resolve_meta(bundle)?,
            interest_profile: self.score_section(
                ScoreDomain::Interests,
                &interests,
                self.config.interest_leaders,
            ),
            personality: self.score_section(
                ScoreDomain::Personality,
                &traits,
                self.config.personality_leaders,
            ),
            academic_interests: self.score_section(
                ScoreDomain::Academics,
                &academics,
                self.config.academic_leaders,
            ),
            sector_compatibility: self.score_section(
                ScoreDomain::Sectors,
                &compatibilities,
                self.config.sector_leaders,
            ),
            language_skills: self.score_section(
                ScoreDomain::Languages,
                &languages,
                self.config.language_leaders,
            ),
            constraints: self.constraint_section(&tolerances, rejected, environment),
            sector_fit: self.sector_fit_section(&affinities, &compatibilities)?,
        };

        info!(
            assessment = report.meta.assessment_id.as_deref().unwrap_or("unknown"),
            "assembled canonical report"
        );

        Ok(report)
    }

    fn resolve_meta(&self, bundle: &RawStepBundle) -> Result<ReportMeta, ReportError> {
        let precedence = self.config.scope_precedence;

        let assessment_id =
            resolve_field(bundle, SemanticField::AssessmentId, precedence)?.into_text();
        let completed_at =
            resolve_field(bundle, SemanticField::CompletedAt, precedence)?.into_text();

        Ok(ReportMeta {
            assessment_id: (!assessment_id.is_empty()).then_some(assessment_id),
            completed_on: parse_completion_date(&completed_at),
        })
    }

    fn score_section(
        &self,
        domain: ScoreDomain,
        scores: &ScoreMap,
        leaders: usize,
    ) -> Option<ScoreSectionView> {
        if scores.is_empty() {
            return None;
        }

        let ranked = rank(scores);
        let leading = top_n(&ranked, leaders);

        Some(ScoreSectionView {
            entries: self.views(domain, &ranked),
            leaders: self.views(domain, &leading),
        })
    }

    fn constraint_section(
        &self,
        tolerances: &ScoreMap,
        rejected: Vec<String>,
        environment: String,
    ) -> Option<ConstraintSectionView> {
        if tolerances.is_empty() && rejected.is_empty() && environment.is_empty() {
            return None;
        }

        let ranked = rank(tolerances);

        Some(ConstraintSectionView {
            tolerances: self.views(ScoreDomain::Constraints, &ranked),
            rejected,
            preferred_environment: (!environment.is_empty()).then_some(environment),
        })
    }

    fn sector_fit_section(
        &self,
        affinities: &ScoreMap,
        compatibilities: &ScoreMap,
    ) -> Result<Option<CompositeSectionView>, ReportError> {
        if affinities.is_empty() && compatibilities.is_empty() {
            return Ok(None);
        }

        let stages = [
            AssessmentStep::InterestProfile,
            AssessmentStep::CareerCompatibility,
        ];
        let weights = self.weighting.stage_weights(&stages);
        let sources = [affinities.clone(), compatibilities.clone()];
        let composite = composite_of(&sources, &weights)?;

        let ranked = rank(&composite);
        let leading = top_n(&ranked, self.config.sector_leaders);

        let sources = stages
            .iter()
            .zip(&weights)
            .map(|(stage, weight)| CompositeSourceView {
                stage: *stage,
                stage_label: stage.label(),
                weight: *weight,
            })
            .collect();

        Ok(Some(CompositeSectionView {
            entries: self.views(ScoreDomain::Sectors, &ranked),
            leaders: self.views(ScoreDomain::Sectors, &leading),
            sources,
        }))
    }

    fn views(&self, domain: ScoreDomain, entries: &[RankedEntry]) -> Vec<RankedScoreView> {
        entries
            .iter()
            .map(|entry| RankedScoreView {
                label: entry.label.clone(),
                display_label: self.display_label(domain, &entry.label),
                score: entry.score,
                rank: entry.rank,
            })
            .collect()
    }

    fn display_label(&self, domain: ScoreDomain, key: &str) -> Option<String> {
        self.catalog
            .as_ref()
            .and_then(|catalog| catalog.display_label(domain, key))
    }
}

fn parse_completion_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

#[cfg(test)]
pub(crate) fn parse_completion_date_for_tests(value: &str) -> Option<NaiveDate> {
    parse_completion_date(value)
}
