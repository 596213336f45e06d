use crate::models::WeightRecord;

/// Most recent record by date; ties resolve to the later row in input
/// order. `None` when the history is empty.
pub fn latest_weight(records: &[WeightRecord]) -> Option<&WeightRecord> {
    records.iter().max_by_key(|r| r.recorded_on)
}

/// `(min, max)` over the recorded weights, or `None` for an empty history.
pub fn weight_extremes(records: &[WeightRecord]) -> Option<(f64, f64)> {
    let mut iter = records.iter();
    let first = iter.next()?;
    let mut min = first.weight_kg;
    let mut max = first.weight_kg;
    for record in iter {
        min = min.min(record.weight_kg);
        max = max.max(record.weight_kg);
    }
    Some((min, max))
}

/// Signed difference between the newest and the oldest record. Input must
/// be sorted ascending by date, which is the order the weight-history read
/// shape guarantees. Zero when fewer than two records exist.
pub fn weight_net_change(records: &[WeightRecord]) -> f64 {
    if records.len() < 2 {
        return 0.0;
    }
    match (records.first(), records.last()) {
        (Some(first), Some(last)) => last.weight_kg - first.weight_kg,
        _ => 0.0,
    }
}
