
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::record::Record;

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `n` records with ids `0..n` spread uniformly over the given square.
pub(crate) fn random_records(seed: u64, n: usize, extent: f64) -> Vec<Record<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            Record::new(
                i as i64,
                rng.gen_range(-extent..extent),
                rng.gen_range(-extent..extent),
            )
        })
        .collect()
}

/// The minimum squared distance from `(qx, qy)` to any record, by exhaustive scan.
pub(crate) fn brute_force_sq_dist(records: &[Record<f64>], qx: f64, qy: f64) -> Option<f64> {
    records
        .iter()
        .map(|r| crate::r#type::sq_dist(r.lon, r.lat, qx, qy))
        .min_by(f64::total_cmp)
}
