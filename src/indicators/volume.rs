//! Volume surge detection against the trailing 20-day average.

use crate::models::price::PriceRow;

const TRAILING_DAYS: usize = 20;

/// Today's volume relative to the trailing 20-day average, today excluded.
///
/// `rows` are newest-first. Needs 21 observations with volume present;
/// a zero trailing average returns `None`.
pub fn volume_ratio(rows: &[PriceRow]) -> Option<f64> {
    let vols: Vec<f64> = rows.iter().filter_map(|r| r.volume()).collect();
    if vols.len() < TRAILING_DAYS + 1 {
        return None;
    }
    let avg20 = vols[1..=TRAILING_DAYS].iter().sum::<f64>() / TRAILING_DAYS as f64;
    if avg20 == 0.0 {
        return None;
    }
    Some(vols[0] / avg20)
}
