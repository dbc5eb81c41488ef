use crate::error::Result;
use crate::r#trait::{CoordIndex, IdIndex, RecordIndex};
use crate::r#type::sq_dist;
use crate::record::RecordTrait;

/// Answers lookups by scanning the records in their original order.
#[derive(Debug, Clone, Copy)]
pub struct NaiveIndex<'a, R: RecordTrait> {
    records: &'a [R],
}

impl<'a, R: RecordTrait> RecordIndex<'a, R> for NaiveIndex<'a, R> {
    fn build(records: &'a [R]) -> Result<Self> {
        log::debug!("Built naive index over {} records", records.len());
        Ok(Self { records })
    }

    fn num_items(&self) -> usize {
        self.records.len()
    }
}

impl<'a, R: RecordTrait> IdIndex<'a, R> for NaiveIndex<'a, R> {
    /// The first record carrying `id` wins.
    fn lookup_by_id(&self, id: i64) -> Option<&'a R> {
        self.records.iter().find(|record| record.id() == id)
    }
}

impl<'a, R: RecordTrait> CoordIndex<'a, R> for NaiveIndex<'a, R> {
    /// Ties keep the earliest record.
    fn lookup_by_coord(&self, lon: R::T, lat: R::T) -> Option<&'a R> {
        let mut best: Option<(&'a R, f64)> = None;
        for record in self.records {
            let dist = sq_dist(record.lon(), record.lat(), lon, lat);
            if best.map_or(true, |(_, best_dist)| dist < best_dist) {
                best = Some((record, dist));
            }
        }
        best.map(|(record, _)| record)
    }
}
