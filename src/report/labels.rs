use super::steps::ScoreDomain;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Display-label lookup injected by the host. Implementations typically
/// front a locale dictionary; the engine itself carries no presentation
/// strings and treats a missing label as "render the raw key".
pub trait LabelCatalog: Send + Sync {
    fn display_label(&self, domain: ScoreDomain, key: &str) -> Option<String>;
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unable to read label dictionary: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed label dictionary: {0}")]
    Csv(#[from] csv::Error),
}

/// Map-backed catalog, loadable from `domain,key,label` CSV dictionaries.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    labels: HashMap<(ScoreDomain, String), String>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        domain: ScoreDomain,
        key: impl Into<String>,
        label: impl Into<String>,
    ) {
        self.labels.insert((domain, key.into()), label.into());
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut catalog = Self::new();
        for row in csv_reader.deserialize::<LabelRow>() {
            let row = row?;
            catalog.insert(row.domain, row.key, row.label);
        }

        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl LabelCatalog for InMemoryCatalog {
    fn display_label(&self, domain: ScoreDomain, key: &str) -> Option<String> {
        self.labels.get(&(domain, key.to_owned())).cloned()
    }
}

#[derive(Debug, Deserialize)]
struct LabelRow {
    domain: ScoreDomain,
    key: String,
    label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_rows_from_csv() {
        let dictionary = "domain,key,label\n\
                          interests,R,Realistic\n\
                          interests,I,Investigative\n\
                          sectors,health,Health & Care\n";

        let catalog =
            InMemoryCatalog::from_reader(dictionary.as_bytes()).expect("dictionary parses");

        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.display_label(ScoreDomain::Interests, "R"),
            Some("Realistic".to_string())
        );
        assert_eq!(
            catalog.display_label(ScoreDomain::Sectors, "health"),
            Some("Health & Care".to_string())
        );
        assert_eq!(catalog.display_label(ScoreDomain::Languages, "R"), None);
    }

    #[test]
    fn unknown_domain_tokens_are_rejected() {
        let dictionary = "domain,key,label\nplanets,mars,Mars\n";

        match InMemoryCatalog::from_reader(dictionary.as_bytes()) {
            Err(CatalogError::Csv(_)) => {}
            other => panic!("expected a csv error, got {other:?}"),
        }
    }

    #[test]
    fn manual_inserts_are_queryable() {
        let mut catalog = InMemoryCatalog::new();
        assert!(catalog.is_empty());

        catalog.insert(ScoreDomain::Constraints, "night_shifts", "Night shifts");
        assert_eq!(
            catalog.display_label(ScoreDomain::Constraints, "night_shifts"),
            Some("Night shifts".to_string())
        );
    }
}
