//! Order-preserving owner of a session's validated records.

use crate::error::{Error, Result};
use crate::types::{RawRecord, Record, RATING_RANGE};

/// Holds the canonical record sequence for one session.
///
/// Loaded once, read-only afterwards; the engine borrows from it on
/// every recomputation and never mutates it.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Validates a raw batch in input order.
    ///
    /// The whole batch is rejected on the first invalid record: admitting
    /// a record with an unparseable rating would break every rating
    /// comparison downstream.
    pub fn load(raw: Vec<RawRecord>) -> Result<Self> {
        let mut records = Vec::with_capacity(raw.len());
        for (index, entry) in raw.into_iter().enumerate() {
            records.push(validate(index, entry)?);
        }
        Ok(Self { records })
    }

    /// Parses a JSON array of flat attribute maps, then validates it.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<RawRecord> = serde_json::from_str(json)?;
        Self::load(raw)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate(index: usize, raw: RawRecord) -> Result<Record> {
    if raw.name.trim().is_empty() {
        return Err(Error::MissingName { index });
    }
    // "NaN" parses as a float, so the range check below also rejects it.
    let rating: f64 = raw
        .rating
        .trim()
        .parse()
        .map_err(|_| Error::UnparseableRating {
            name: raw.name.clone(),
            value: raw.rating.clone(),
        })?;
    if !RATING_RANGE.contains(&rating) {
        return Err(Error::RatingOutOfRange {
            name: raw.name,
            value: rating,
        });
    }
    Ok(Record {
        name: raw.name,
        category: raw.category,
        location: raw.location,
        size: raw.size,
        rating,
        premium: raw.premium.trim() == "true",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, rating: &str, premium: &str) -> RawRecord {
        RawRecord {
            name: name.to_string(),
            category: "Tech".to_string(),
            location: "SP".to_string(),
            size: "M".to_string(),
            rating: rating.to_string(),
            premium: premium.to_string(),
        }
    }

    #[test]
    fn load_preserves_input_order() {
        let store = RecordStore::load(vec![
            raw("Gamma", "2.0", "false"),
            raw("Alpha", "4.5", "true"),
            raw("Beta", "3.0", "false"),
        ])
        .expect("valid batch");
        let names: Vec<&str> = store.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Gamma", "Alpha", "Beta"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn premium_is_coerced_strictly() {
        let store = RecordStore::load(vec![
            raw("A", "1.0", "true"),
            raw("B", "1.0", "yes"),
            raw("C", "1.0", ""),
        ])
        .expect("valid batch");
        let flags: Vec<bool> = store.records().iter().map(|r| r.premium).collect();
        assert_eq!(flags, [true, false, false]);
    }

    #[test]
    fn unparseable_rating_rejects_the_batch() {
        let err = RecordStore::load(vec![raw("A", "4.0", "true"), raw("B", "great", "false")])
            .expect_err("bad rating must be rejected");
        assert!(matches!(err, Error::UnparseableRating { .. }));
    }

    #[test]
    fn nan_rating_is_rejected() {
        let err = RecordStore::load(vec![raw("A", "NaN", "false")])
            .expect_err("NaN must not be admitted");
        assert!(matches!(err, Error::RatingOutOfRange { .. }));
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        let err = RecordStore::load(vec![raw("A", "5.1", "false")])
            .expect_err("rating above the scale must be rejected");
        assert!(matches!(err, Error::RatingOutOfRange { .. }));
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = RecordStore::load(vec![raw("  ", "4.0", "false")])
            .expect_err("nameless record must be rejected");
        assert!(matches!(err, Error::MissingName { index: 0 }));
    }

    #[test]
    fn from_json_parses_flat_attribute_maps() {
        let store = RecordStore::from_json(
            r#"[{"name":"Alpha","category":"Tech","location":"SP","size":"M","rating":"4.5","premium":"true"}]"#,
        )
        .expect("valid json");
        assert_eq!(store.records()[0].rating, 4.5);
        assert!(store.records()[0].premium);
    }
}
