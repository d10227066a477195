use crate::report::{
    AssemblyConfig, AssessmentStep, InMemoryCatalog, RawStepBundle, ReportAssembler, ScoreDomain,
    StageWeighting,
};
use serde_json::json;

/// Bundle in the newest export shape: every step payload sits under the
/// `currentStep` wrapper with the step key doubled.
pub(super) fn wrapped_bundle() -> RawStepBundle {
    json!({
        "currentStep": {
            "assessment_id": "assess-7031",
            "completed_at": "2024-05-17T09:30:00Z",
            "riasec": {
                "riasec": {
                    "scores": {
                        "R": 80.0, "I": 60.0, "A": 40.0, "S": 55.0, "E": 65.0, "C": 35.0
                    },
                    "sector_affinities": {
                        "digital": 70.0, "health": 45.0, "trade": 80.0
                    }
                }
            },
            "personality": {
                "personality": {
                    "traits": { "openness": 72.0, "rigor": 64.0, "sociability": 58.0 }
                }
            },
            "academics": {
                "academics": {
                    "interests": {
                        "maths": 75.0, "biology": 62.0, "literature": 48.0, "history": 30.0
                    }
                }
            },
            "careers": {
                "careers": {
                    "compatibilities": {
                        "digital": 85.0, "health": 40.0, "trade": 66.0, "logistics": 52.0
                    }
                }
            },
            "constraints": {
                "constraints": {
                    "tolerances": { "commuting": 4.0, "night_shifts": 1.0, "teamwork": 5.0 },
                    "rejected": ["night_shifts"],
                    "environment": "outdoors"
                }
            },
            "languages": {
                "languages": {
                    "levels": { "fr": 5.0, "en": 3.0, "es": 2.0 }
                }
            }
        }
    })
}

/// The same assessment in the middle generation: step payloads keyed at the
/// document root, no wrapper.
pub(super) fn step_keyed_bundle() -> RawStepBundle {
    json!({
        "assessment_id": "assess-7031",
        "completed_at": "2024-05-17T09:30:00Z",
        "riasec": {
            "scores": { "R": 80.0, "I": 60.0, "A": 40.0, "S": 55.0, "E": 65.0, "C": 35.0 },
            "sector_affinities": { "digital": 70.0, "health": 45.0, "trade": 80.0 }
        },
        "personality": {
            "traits": { "openness": 72.0, "rigor": 64.0, "sociability": 58.0 }
        },
        "academics": {
            "interests": { "maths": 75.0, "biology": 62.0, "literature": 48.0, "history": 30.0 }
        },
        "careers": {
            "compatibilities": {
                "digital": 85.0, "health": 40.0, "trade": 66.0, "logistics": 52.0
            }
        },
        "constraints": {
            "tolerances": { "commuting": 4.0, "night_shifts": 1.0, "teamwork": 5.0 },
            "rejected": ["night_shifts"],
            "environment": "outdoors"
        },
        "languages": {
            "levels": { "fr": 5.0, "en": 3.0, "es": 2.0 }
        }
    })
}

/// The same assessment in the oldest generation: flattened compound keys at
/// the document root.
pub(super) fn flat_bundle() -> RawStepBundle {
    json!({
        "assessment_id": "assess-7031",
        "completed_at": "2024-05-17",
        "riasec_scores": { "R": 80.0, "I": 60.0, "A": 40.0, "S": 55.0, "E": 65.0, "C": 35.0 },
        "sector_affinities": { "digital": 70.0, "health": 45.0, "trade": 80.0 },
        "personality_scores": { "openness": 72.0, "rigor": 64.0, "sociability": 58.0 },
        "academic_interests": {
            "maths": 75.0, "biology": 62.0, "literature": 48.0, "history": 30.0
        },
        "sector_scores": { "digital": 85.0, "health": 40.0, "trade": 66.0, "logistics": 52.0 },
        "constraint_levels": { "commuting": 4.0, "night_shifts": 1.0, "teamwork": 5.0 },
        "rejected_constraints": ["night_shifts"],
        "work_environment": "outdoors",
        "language_levels": { "fr": 5.0, "en": 3.0, "es": 2.0 }
    })
}

pub(super) fn assembler() -> ReportAssembler {
    ReportAssembler::new(AssemblyConfig::default())
}

/// Catalog that knows a handful of keys, so tests can tell catalog hits from
/// misses.
pub(super) fn catalog() -> InMemoryCatalog {
    let mut catalog = InMemoryCatalog::new();
    catalog.insert(ScoreDomain::Interests, "R", "Realistic");
    catalog.insert(ScoreDomain::Interests, "E", "Enterprising");
    catalog.insert(ScoreDomain::Sectors, "digital", "Digital & IT");
    catalog
}

/// Weighting policy that favours the career stage over the interest stage.
pub(super) struct CareerHeavyWeighting;

impl StageWeighting for CareerHeavyWeighting {
    fn stage_weights(&self, stages: &[AssessmentStep]) -> Vec<f64> {
        stages
            .iter()
            .map(|stage| match stage {
                AssessmentStep::CareerCompatibility => 3.0,
                _ => 1.0,
            })
            .collect()
    }
}

/// Broken policy that never returns one weight per stage.
pub(super) struct MisalignedWeighting;

impl StageWeighting for MisalignedWeighting {
    fn stage_weights(&self, _stages: &[AssessmentStep]) -> Vec<f64> {
        vec![1.0]
    }
}
