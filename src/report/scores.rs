/// Insertion-ordered mapping from category label to numeric score.
///
/// Iteration yields entries in the order they were inserted, which for maps
/// built from raw bundles is the document order of the source object.
/// Ranking tie-breaks depend on that order, so a hash map is not a
/// substitute here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreMap {
    entries: Vec<(String, f64)>,
}

impl ScoreMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a category score. Re-inserting an existing label updates the
    /// score in place and keeps the label's original position.
    pub fn insert(&mut self, label: impl Into<String>, score: f64) {
        let label = label.into();
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| *existing == label)
        {
            Some((_, value)) => *value = score,
            None => self.entries.push((label, score)),
        }
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, score)| *score)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.iter().any(|(existing, _)| existing == label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(label, score)| (label.as_str(), *score))
    }
}

impl FromIterator<(String, f64)> for ScoreMap {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (label, score) in iter {
            map.insert(label, score);
        }
        map
    }
}
