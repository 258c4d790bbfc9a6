/// Arithmetic mean, `None` for an empty iterator
pub fn mean<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Clamp a value into `[lower, upper]`
#[inline]
pub fn clamp_to_range(value: f64, (lower, upper): (f64, f64)) -> f64 {
    value.max(lower).min(upper)
}

/// Drop leading zero coefficients of a polynomial given highest power first
pub fn trim_leading_zeros(coefficients: &[f64]) -> &[f64] {
    let first = coefficients
        .iter()
        .position(|c| *c != 0.0)
        .unwrap_or(coefficients.len());
    &coefficients[first..]
}
