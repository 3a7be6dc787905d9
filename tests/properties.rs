//! Property-based tests for the membership primitives and the engine using proptest

use fuzzy_premium::{InferenceEngine, Inputs, Membership, Rules, Variables};
use proptest::prelude::*;

/// A strictly increasing pair `(a, b)`
fn ramp_strategy() -> impl Strategy<Value = (f64, f64)> {
    (-1000.0..1000.0f64, 0.01..500.0f64).prop_map(|(a, width)| (a, a + width))
}

/// Strictly increasing `(a, b, c, d)` with a plateau that may be a single point
fn trapezoid_strategy() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    (-1000.0..1000.0f64, 0.01..200.0f64, 0.0..200.0f64, 0.01..200.0f64)
        .prop_map(|(a, rise, plateau, fall)| (a, a + rise, a + rise + plateau, a + rise + plateau + fall))
}

fn x_strategy() -> impl Strategy<Value = f64> {
    -2000.0..2000.0f64
}

#[cfg(test)]
mod membership_properties {
    use super::*;

    proptest! {
        #[test]
        fn test_inc_is_bounded_and_non_decreasing(
            (a, b) in ramp_strategy(),
            x1 in x_strategy(),
            x2 in x_strategy(),
        ) {
            let inc = Membership::inc(a, b).unwrap();
            let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };

            prop_assert!((0.0..=1.0).contains(&inc.degree(lo)));
            prop_assert!((0.0..=1.0).contains(&inc.degree(hi)));
            prop_assert!(inc.degree(lo) <= inc.degree(hi));
        }

        #[test]
        fn test_dec_mirrors_inc((a, b) in ramp_strategy(), x in x_strategy()) {
            let inc = Membership::inc(a, b).unwrap();
            let dec = Membership::dec(a, b).unwrap();

            prop_assert!((0.0..=1.0).contains(&dec.degree(x)));
            prop_assert!((inc.degree(x) + dec.degree(x) - 1.).abs() < 1e-9);
        }

        #[test]
        fn test_dec_is_non_increasing(
            (a, b) in ramp_strategy(),
            x1 in x_strategy(),
            x2 in x_strategy(),
        ) {
            let dec = Membership::dec(a, b).unwrap();
            let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };

            prop_assert!(dec.degree(lo) >= dec.degree(hi));
        }

        #[test]
        fn test_trapezoid_outside_and_plateau(
            (a, b, c, d) in trapezoid_strategy(),
            below in 0.001..100.0f64,
            t in 0.0..=1.0f64,
        ) {
            let trapezoid = Membership::trapezoid(a, b, c, d).unwrap();
            let on_plateau = (b + (c - b) * t).min(c);

            prop_assert_eq!(trapezoid.degree(a - below), 0.);
            prop_assert_eq!(trapezoid.degree(d + below), 0.);
            prop_assert_eq!(trapezoid.degree(on_plateau), 1.);
        }

        #[test]
        fn test_triangle_peak_never_exceeds_one(
            (a, b, c, _) in trapezoid_strategy().prop_filter("needs b < c", |(_, b, c, _)| b < c),
            x in x_strategy(),
        ) {
            let triangle = Membership::triangle(a, b, c, c).unwrap();
            let degree = triangle.degree(x);

            prop_assert!(degree >= 0.);
            prop_assert!(degree <= 1.);
        }
    }
}

fn inputs_strategy() -> impl Strategy<Value = Inputs> {
    (1.0..60.0f64, 40.0..220.0f64, 100.0..400.0f64, 0.0..60.0f64)
        .prop_map(|(bmi, bp, cho, cig)| Inputs::new(bmi, bp, cho, cig))
}

#[cfg(test)]
mod engine_properties {
    use super::*;

    proptest! {
        #[test]
        fn test_result_lies_between_rule_outputs(inputs in inputs_strategy()) {
            let engine = InferenceEngine::standard().unwrap();
            let outputs = engine.eval(&inputs).unwrap();
            let fired: Vec<_> = outputs.firings().iter().filter(|f| f.weight > 0.).collect();

            prop_assert!(!fired.is_empty());

            for firing in outputs.firings() {
                prop_assert!((0.0..=1.0).contains(&firing.weight));
            }

            let min = fired.iter().map(|f| f.output).fold(f64::INFINITY, f64::min);
            let max = fired.iter().map(|f| f.output).fold(f64::NEG_INFINITY, f64::max);

            prop_assert!(outputs.value() >= min - 1e-9);
            prop_assert!(outputs.value() <= max + 1e-9);
        }

        #[test]
        fn test_rule_order_invariance(inputs in inputs_strategy()) {
            let forward = InferenceEngine::standard().unwrap();
            let reversed = InferenceEngine::new(
                Variables::standard().unwrap(),
                Rules::standard().iter().rev().cloned().collect(),
            );
            let forward = forward.eval(&inputs).unwrap().value();
            let reversed = reversed.eval(&inputs).unwrap().value();

            prop_assert!((forward - reversed).abs() <= 1e-9 * forward.abs().max(1.));
        }
    }
}
