/// Clamp `value` into the range spanned by `a` and `b`, in either order.
pub fn clamp(value: f64, a: f64, b: f64) -> f64 {
    let min = a.min(b);
    let max = a.max(b);
    value.max(min).min(max)
}

/// Linear interpolation where `progress == 1` yields `from` and
/// `progress == 0` yields `to`, clamped to the segment between them.
pub fn interpolate(progress: f64, from: f64, to: f64) -> f64 {
    clamp(progress * (from - to) + to, from, to)
}
