//! Summary-statistic helpers over solve-time samples.

/// Statistical median, 0.0 for an empty slice. Even-length input averages
/// the two middle values.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sorted = sorted_copy(values);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Lower and upper quartile using exclusive interpolation (quartile cut
/// points at the 25th/75th percentile of the n+1 positions). Undefined below
/// two samples.
pub fn quartiles(values: &[f64]) -> Option<(f64, f64)> {
    if values.len() < 2 {
        return None;
    }
    let sorted = sorted_copy(values);
    Some((quantile_exclusive(&sorted, 1), quantile_exclusive(&sorted, 3)))
}

/// Interquartile range, 0.0 when the quartiles are undefined.
pub fn iqr(values: &[f64]) -> f64 {
    match quartiles(values) {
        Some((lower, upper)) => upper - lower,
        None => 0.0,
    }
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

// i-th quartile cut point (i in 1..4) of sorted data, interpolating between
// neighbours when i*(len+1) does not land on a sample. When the cut point
// falls outside the sample positions, j is clamped and delta leaves [0, N],
// extrapolating past the outermost pair (e.g. two samples [10, 30] give
// quartiles 5 and 35).
fn quantile_exclusive(sorted: &[f64], i: usize) -> f64 {
    const N: i64 = 4;
    let len = sorted.len() as i64;
    let m = len + 1;
    let j = ((i as i64 * m) / N).clamp(1, len - 1);
    let delta = i as i64 * m - j * N;
    (sorted[(j - 1) as usize] * ((N - delta) as f64) + sorted[j as usize] * delta as f64)
        / N as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_empty_is_zero() {
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn median_odd_picks_middle() {
        assert_eq!(median(&[120.0, 60.0, 90.0]), 90.0);
    }

    #[test]
    fn median_even_averages_middle_pair() {
        assert_eq!(median(&[40.0, 10.0, 20.0, 30.0]), 25.0);
    }

    #[test]
    fn quartiles_need_two_samples() {
        assert!(quartiles(&[]).is_none());
        assert!(quartiles(&[42.0]).is_none());
    }

    #[test]
    fn quartiles_of_two_extrapolate_past_the_samples() {
        // cut points 1 and 3 of m=3 land outside the pair
        assert_eq!(quartiles(&[10.0, 30.0]), Some((5.0, 35.0)));
        assert_eq!(iqr(&[10.0, 30.0]), 30.0);
    }

    #[test]
    fn quartiles_of_three_land_on_samples() {
        // cut positions 1 and 3 of m=4 fall exactly on the outer samples
        assert_eq!(quartiles(&[60.0, 90.0, 120.0]), Some((60.0, 120.0)));
        assert_eq!(iqr(&[60.0, 90.0, 120.0]), 60.0);
    }

    #[test]
    fn quartiles_of_four_interpolate() {
        assert_eq!(quartiles(&[10.0, 20.0, 30.0, 40.0]), Some((12.5, 37.5)));
        assert_eq!(iqr(&[10.0, 20.0, 30.0, 40.0]), 25.0);
    }

    #[test]
    fn iqr_is_order_independent() {
        assert_eq!(iqr(&[40.0, 10.0, 30.0, 20.0]), iqr(&[10.0, 20.0, 30.0, 40.0]));
    }

    #[test]
    fn iqr_below_two_samples_is_zero() {
        assert_eq!(iqr(&[]), 0.0);
        assert_eq!(iqr(&[77.0]), 0.0);
    }
}
