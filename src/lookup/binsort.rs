use std::cmp::Ordering;

use crate::error::Result;
use crate::lookup::indexed::{id_table, IdEntry};
use crate::r#trait::{IdIndex, RecordIndex};
use crate::record::RecordTrait;

/// Answers id lookups with a binary search over a table of identifiers sorted once at build time.
#[derive(Debug, Clone)]
pub struct SortedIdIndex<'a, R: RecordTrait> {
    records: &'a [R],
    /// Sorted by id
    entries: Vec<IdEntry>,
}

impl<'a, R: RecordTrait> RecordIndex<'a, R> for SortedIdIndex<'a, R> {
    fn build(records: &'a [R]) -> Result<Self> {
        let mut entries = id_table(records)?;
        entries.sort_unstable_by(|a, b| a.id.cmp(&b.id));
        log::debug!("Built sorted id table over {} records", entries.len());
        Ok(Self { records, entries })
    }

    fn num_items(&self) -> usize {
        self.entries.len()
    }
}

impl<'a, R: RecordTrait> IdIndex<'a, R> for SortedIdIndex<'a, R> {
    fn lookup_by_id(&self, id: i64) -> Option<&'a R> {
        // entries[low..high] are still candidates
        let mut low = 0;
        let mut high = self.entries.len();

        while low < high {
            let mid = low + (high - low) / 2;
            let entry = self.entries[mid];
            match entry.id.cmp(&id) {
                Ordering::Equal => return Some(&self.records[entry.pos]),
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
            }
        }

        None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::record::Record;

    fn records() -> Vec<Record<f64>> {
        [42, -7, 1_000_000_000_000, 0, 13, i64::MAX, i64::MIN, 8]
            .into_iter()
            .enumerate()
            .map(|(i, id)| Record::new(id, i as f64, 0.).with_name(format!("r{i}")))
            .collect()
    }

    #[test]
    fn finds_every_present_id() {
        let records = records();
        let index = SortedIdIndex::build(&records).unwrap();
        for record in &records {
            let found = index.lookup_by_id(record.id).unwrap();
            assert!(std::ptr::eq(found, record));
        }
    }

    #[test]
    fn absent_ids_are_not_found() {
        let records = records();
        let index = SortedIdIndex::build(&records).unwrap();
        for id in [-8, -6, 1, 9, 12, 14, 41, 43, i64::MAX - 1, i64::MIN + 1] {
            assert!(index.lookup_by_id(id).is_none(), "found absent id {id}");
        }
    }

    #[test]
    fn does_not_reorder_callers_records() {
        let records = records();
        let before = records.clone();
        let index = SortedIdIndex::build(&records).unwrap();
        assert_eq!(index.lookup_by_id(0).unwrap().name, "r3");
        assert_eq!(records, before);
    }

    #[test]
    fn empty_and_single_tables() {
        let empty: Vec<Record<i16>> = vec![];
        let index = SortedIdIndex::build(&empty).unwrap();
        assert!(index.lookup_by_id(0).is_none());

        let single = vec![Record::new(5, 1_i16, 2_i16)];
        let index = SortedIdIndex::build(&single).unwrap();
        assert_eq!(index.lookup_by_id(5).unwrap().lat, 2);
        assert!(index.lookup_by_id(4).is_none());
        assert!(index.lookup_by_id(6).is_none());
    }
}
