//! Normalizes raw step-result bundles into one canonical report.
//!
//! Bundles arrive in whatever shape their schema generation used; the
//! resolver reads them through a declared candidate table, the ranking and
//! composite calculators derive the ordered views, and the assembler emits
//! the report record consumed by presentation.

mod assembler;
mod composite;
mod config;
mod fields;
mod labels;
mod ranking;
mod resolver;
mod scores;
mod sections;
mod steps;

#[cfg(test)]
mod tests;

pub use assembler::{RawStepBundle, ReportAssembler, ReportError};
pub use composite::{composite_of, CompositeError, StageWeightTable, StageWeighting};
pub use config::AssemblyConfig;
pub use fields::{FieldKind, FieldPath, PathScope, ScopePrecedence, SemanticField};
pub use labels::{CatalogError, InMemoryCatalog, LabelCatalog};
pub use ranking::{rank, top_n, RankedEntry};
pub use resolver::{resolve_field, FieldValue, ResolveError};
pub use scores::ScoreMap;
pub use sections::{
    CanonicalReport, CompositeSectionView, CompositeSourceView, ConstraintSectionView,
    RankedScoreView, ReportMeta, ScoreSectionView,
};
pub use steps::{AssessmentStep, ScoreDomain};
