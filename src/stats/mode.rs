/// Index of the most probable entry.
///
/// Scans left to right and only moves on a strictly greater value, so ties
/// keep the earliest index. NaN never compares greater, which leaves an empty
/// or all-NaN distribution at index 0.
pub fn optimal(distribution: &[f64]) -> usize {
    let mut best = 0;
    let mut chance = f64::NEG_INFINITY;

    for (index, &p) in distribution.iter().enumerate() {
        if p > chance {
            best = index;
            chance = p;
        }
    }

    best
}
