use super::fields::{FieldKind, FieldPath, PathScope, ScopePrecedence, SemanticField};
use super::scores::ScoreMap;
use serde_json::{Map, Value};
use tracing::debug;

/// Raised only for declaration bugs in the candidate table. Data-driven
/// outcomes never error: absence and shape mismatches resolve to defaults.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("semantic field '{0}' declares no candidate paths")]
    EmptyCandidateList(&'static str),
}

/// A resolved field value, coerced to the field's declared kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Scores(ScoreMap),
    TextList(Vec<String>),
    Text(String),
}

impl FieldValue {
    fn empty_default(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Scores => Self::Scores(ScoreMap::new()),
            FieldKind::TextList => Self::TextList(Vec::new()),
            FieldKind::Text => Self::Text(String::new()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Scores(scores) => scores.is_empty(),
            Self::TextList(items) => items.is_empty(),
            Self::Text(text) => text.is_empty(),
        }
    }

    /// The contained score map, or an empty one for non-score values.
    pub fn into_scores(self) -> ScoreMap {
        match self {
            Self::Scores(scores) => scores,
            _ => ScoreMap::new(),
        }
    }

    /// The contained string list, or an empty one for non-list values.
    pub fn into_texts(self) -> Vec<String> {
        match self {
            Self::TextList(items) => items,
            _ => Vec::new(),
        }
    }

    /// The contained text, or an empty string for non-text values.
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            _ => String::new(),
        }
    }
}

/// Resolves one semantic field against a raw bundle.
///
/// Candidates are tried in declared order, with the scope partitions
/// reordered per `precedence`; the first whose full path reaches a non-null
/// value of the field's kind wins. An empty mapping or sequence counts as
/// resolved. When nothing resolves the typed empty default comes back, so
/// partial bundles shrink the report instead of failing it.
pub fn resolve_field(
    bundle: &Value,
    field: SemanticField,
    precedence: ScopePrecedence,
) -> Result<FieldValue, ResolveError> {
    let candidates = field.candidates();
    if candidates.is_empty() {
        return Err(ResolveError::EmptyCandidateList(field.name()));
    }

    for candidate in ordered_by_scope(candidates, precedence) {
        let Some(terminal) = walk(bundle, candidate.keys) else {
            continue;
        };

        match coerce(field, terminal) {
            Some(value) => return Ok(value),
            None => debug!(
                field = field.name(),
                path = %candidate.keys.join("."),
                "value at candidate path has the wrong shape, skipping"
            ),
        }
    }

    Ok(FieldValue::empty_default(field.kind()))
}

fn ordered_by_scope(
    candidates: &'static [FieldPath],
    precedence: ScopePrecedence,
) -> impl Iterator<Item = &'static FieldPath> {
    let (first, second) = match precedence {
        ScopePrecedence::StepFirst => (PathScope::Step, PathScope::Root),
        ScopePrecedence::RootFirst => (PathScope::Root, PathScope::Step),
    };

    candidates
        .iter()
        .filter(move |candidate| candidate.scope == first)
        .chain(
            candidates
                .iter()
                .filter(move |candidate| candidate.scope == second),
        )
}

/// Follows `keys` through nested objects. `None` when any hop is missing,
/// any intermediate is not an object, or the terminal is null.
fn walk<'a>(bundle: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let mut cursor = bundle;
    for key in keys {
        cursor = cursor.as_object()?.get(*key)?;
    }
    if cursor.is_null() {
        return None;
    }
    Some(cursor)
}

fn coerce(field: SemanticField, value: &Value) -> Option<FieldValue> {
    match field.kind() {
        FieldKind::Scores => value
            .as_object()
            .map(|object| FieldValue::Scores(scores_from(field, object))),
        FieldKind::TextList => value
            .as_array()
            .map(|items| FieldValue::TextList(texts_from(field, items))),
        FieldKind::Text => value.as_str().map(|text| FieldValue::Text(text.to_owned())),
    }
}

fn scores_from(field: SemanticField, object: &Map<String, Value>) -> ScoreMap {
    let mut scores = ScoreMap::new();
    for (label, value) in object {
        match value.as_f64() {
            Some(score) => scores.insert(label.as_str(), score),
            None => debug!(
                field = field.name(),
                category = %label,
                "skipping non-numeric score entry"
            ),
        }
    }
    scores
}

fn texts_from(field: SemanticField, items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| match item.as_str() {
            Some(text) => Some(text.to_owned()),
            None => {
                debug!(field = field.name(), "skipping non-string list entry");
                None
            }
        })
        .collect()
}
