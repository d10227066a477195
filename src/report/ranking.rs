use super::scores::ScoreMap;
use serde::Serialize;
use std::cmp::Ordering;

/// One category of a ranked listing; `rank` is the 0-based position after
/// the descending sort.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub label: String,
    pub score: f64,
    pub rank: usize,
}

/// Orders categories by score, highest first.
///
/// The sort is stable: categories with equal scores keep the map's iteration
/// order. Callers rely on declaration order deciding ties, so this is a
/// contract, not an implementation detail.
pub fn rank(scores: &ScoreMap) -> Vec<RankedEntry> {
    let mut ordered: Vec<(String, f64)> = scores
        .iter()
        .map(|(label, score)| (label.to_owned(), score))
        .collect();
    ordered.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    ordered
        .into_iter()
        .enumerate()
        .map(|(rank, (label, score))| RankedEntry { label, score, rank })
        .collect()
}

/// First `n` entries of a ranked listing, in rank order. Returns the whole
/// listing when `n` exceeds its length and nothing when `n` is zero.
pub fn top_n(ranked: &[RankedEntry], n: usize) -> Vec<RankedEntry> {
    ranked.iter().take(n).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(entries: &[(&str, f64)]) -> ScoreMap {
        entries
            .iter()
            .map(|(label, score)| ((*label).to_owned(), *score))
            .collect()
    }

    #[test]
    fn ranks_descending_by_score() {
        let ranked = rank(&scores(&[("R", 80.0), ("I", 60.0), ("A", 40.0)]));

        let labels: Vec<&str> = ranked.iter().map(|entry| entry.label.as_str()).collect();
        assert_eq!(labels, vec!["R", "I", "A"]);
        assert_eq!(ranked[0].rank, 0);
        assert_eq!(ranked[2].rank, 2);
    }

    #[test]
    fn equal_scores_keep_declaration_order() {
        let ranked = rank(&scores(&[("X", 50.0), ("Y", 50.0), ("Z", 80.0)]));

        let labels: Vec<&str> = ranked.iter().map(|entry| entry.label.as_str()).collect();
        assert_eq!(labels, vec!["Z", "X", "Y"]);
    }

    #[test]
    fn top_n_caps_at_listing_length() {
        let ranked = rank(&scores(&[("A", 1.0), ("B", 2.0)]));
        let top = top_n(&ranked, 5);

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].label, "B");
    }

    #[test]
    fn top_zero_is_empty() {
        let ranked = rank(&scores(&[("A", 1.0)]));
        assert!(top_n(&ranked, 0).is_empty());
    }

    #[test]
    fn empty_map_ranks_to_nothing() {
        assert!(rank(&ScoreMap::new()).is_empty());
    }
}
