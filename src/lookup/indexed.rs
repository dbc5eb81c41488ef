use crate::error::Result;
use crate::r#trait::{IdIndex, RecordIndex};
use crate::record::RecordTrait;

/// An identifier paired with the position of its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IdEntry {
    pub(crate) id: i64,
    pub(crate) pos: usize,
}

/// Collect the `(id, position)` table for `records`, in record order.
pub(crate) fn id_table<R: RecordTrait>(records: &[R]) -> Result<Vec<IdEntry>> {
    let mut entries = Vec::new();
    entries.try_reserve_exact(records.len())?;
    entries.extend(
        records
            .iter()
            .enumerate()
            .map(|(pos, record)| IdEntry { id: record.id(), pos }),
    );
    Ok(entries)
}

/// Answers id lookups by scanning a compact table of identifiers, built once.
#[derive(Debug, Clone)]
pub struct IndexedIdIndex<'a, R: RecordTrait> {
    records: &'a [R],
    entries: Vec<IdEntry>,
}

impl<'a, R: RecordTrait> RecordIndex<'a, R> for IndexedIdIndex<'a, R> {
    fn build(records: &'a [R]) -> Result<Self> {
        let entries = id_table(records)?;
        log::debug!("Built indexed id table over {} records", entries.len());
        Ok(Self { records, entries })
    }

    fn num_items(&self) -> usize {
        self.entries.len()
    }
}

impl<'a, R: RecordTrait> IdIndex<'a, R> for IndexedIdIndex<'a, R> {
    fn lookup_by_id(&self, id: i64) -> Option<&'a R> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &self.records[entry.pos])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::record::Record;

    #[test]
    fn finds_records_by_id() {
        let records: Vec<Record<f32>> = (0..20)
            .map(|i| Record::new(1000 - i, i as f32, -(i as f32)))
            .collect();
        let index = IndexedIdIndex::build(&records).unwrap();

        assert_eq!(index.num_items(), 20);
        assert_eq!(index.lookup_by_id(995).unwrap().lon, 5.);
        assert!(index.lookup_by_id(1000 - 20).is_none());
        assert!(index.lookup_by_id(i64::MIN).is_none());
    }
}
