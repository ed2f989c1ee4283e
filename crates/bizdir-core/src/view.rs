//! Thin projection over the engine's output: the ordered matches plus
//! their count and a human-readable summary label.

use crate::types::Record;

/// The derived, ordered subset of the store for the current criteria.
///
/// Recomputed in full on every criteria change; it borrows the store's
/// records and is never patched incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView<'a> {
    records: Vec<&'a Record>,
}

impl<'a> ResultView<'a> {
    pub(crate) fn new(records: Vec<&'a Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    /// Always equal to the result sequence's length.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().copied()
    }

    /// Count label for the rendering collaborator: singular for exactly
    /// one match, plural otherwise (zero included).
    pub fn summary(&self) -> String {
        match self.count() {
            1 => "1 result found".to_string(),
            n => format!("{n} results found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record {
            name: name.to_string(),
            category: "Tech".to_string(),
            location: "SP".to_string(),
            size: "M".to_string(),
            rating: 4.0,
            premium: false,
        }
    }

    #[test]
    fn summary_pluralizes() {
        let a = record("Alpha");
        let b = record("Beta");
        assert_eq!(ResultView::new(vec![]).summary(), "0 results found");
        assert_eq!(ResultView::new(vec![&a]).summary(), "1 result found");
        assert_eq!(ResultView::new(vec![&a, &b]).summary(), "2 results found");
    }

    #[test]
    fn count_tracks_length() {
        let a = record("Alpha");
        let view = ResultView::new(vec![&a]);
        assert_eq!(view.count(), view.records().len());
        assert!(!view.is_empty());
    }
}
