use num::Float;

/// Clamps `x` into `[0, 1]`, the same way `max(min(x, 1), 0)` would.
pub(crate) fn clamp_unit<F: Float>(x: F) -> F {
    F::max(F::min(x, F::one()), F::zero())
}

/// Fuzzy AND over any number of truth degrees. Empty input is true.
pub(crate) fn and_all<F: Float>(degrees: impl IntoIterator<Item = F>) -> F {
    degrees.into_iter().fold(F::one(), F::min)
}

/// Fuzzy OR over any number of truth degrees. Empty input is false.
pub(crate) fn or_all<F: Float>(degrees: impl IntoIterator<Item = F>) -> F {
    degrees.into_iter().fold(F::zero(), F::max)
}

#[test]
fn test_clamp_unit() {
    assert_eq!(clamp_unit(-0.5f64), 0.);
    assert_eq!(clamp_unit(0.25f64), 0.25);
    assert_eq!(clamp_unit(3.0f32), 1.);
}

#[test]
fn test_connectives() {
    assert_eq!(and_all([0.3, 0.9, 0.5]), 0.3);
    assert_eq!(or_all([0.3, 0.9, 0.5]), 0.9);
    assert_eq!(and_all(std::iter::empty::<f64>()), 1.);
    assert_eq!(or_all(std::iter::empty::<f64>()), 0.);
}
