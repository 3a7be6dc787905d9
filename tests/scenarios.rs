//! End-to-end evaluations of the premium model

use approx::{assert_abs_diff_eq, assert_relative_eq};
use fuzzy_premium::{
    is, Consequent, InferenceEngine, InferenceError, Inputs, Rules, Smoking, Variables,
};

fn engine() -> InferenceEngine {
    InferenceEngine::standard().expect("standard model builds")
}

#[test]
fn test_healthy_non_smoker_pays_base_rate() {
    let outputs = engine().eval(&Inputs::new(22., 100., 180., 0.)).unwrap();
    let weights: Vec<_> = outputs.firings().iter().map(|f| f.weight).collect();

    assert_abs_diff_eq!(outputs.value(), 10., epsilon = 1e-9);
    assert_eq!(weights[..5], [0., 0., 0., 0., 0.]);
    assert_abs_diff_eq!(weights[5], 2. / 3., epsilon = 1e-12);
}

#[test]
fn test_high_risk_smoker() {
    let outputs = engine().eval(&Inputs::new(32., 160., 280., 10.)).unwrap();
    let weights: Vec<_> = outputs.firings().iter().map(|f| f.weight).collect();
    let expected = (40. + 482f64.ln() + 20. + 20. * 32f64.ln() + 20. + 4. * 160f64.ln() + 20. + 4. * 280f64.ln() + 40.) / 5.;

    assert_eq!(weights, vec![1., 1., 1., 1., 1., 0.]);
    assert!(outputs.value() > 40.);
    assert_relative_eq!(outputs.value(), expected, max_relative = 1e-12);
    assert_abs_diff_eq!(outputs.value(), 51.67, epsilon = 0.005);
}

#[test]
fn test_mixed_profiles() {
    let engine = engine();

    for (inputs, expected) in [
        (Inputs::new(28., 130., 250., 5.), 50.49),
        (Inputs::new(20., 125., 235., 0.), 42.5),
        (Inputs::new(17., 145., 210., 3.), 47.5),
    ] {
        let value = engine.eval(&inputs).unwrap().value();

        assert_abs_diff_eq!(value, expected, epsilon = 0.005);
    }
}

#[test]
fn test_zero_bmi_is_a_domain_error() {
    let result = engine().eval(&Inputs::new(0., 130., 250., 0.));

    assert_eq!(result, Err(InferenceError::Domain { rule: 2, argument: 0. }));
}

#[test]
fn test_negative_cholesterol_is_a_domain_error() {
    let result = engine().eval(&Inputs::new(22., 120., -5., 0.));

    assert_eq!(result, Err(InferenceError::Domain { rule: 4, argument: -5. }));
}

#[test]
fn test_non_finite_input() {
    let result = engine().eval(&Inputs::new(22., f64::NAN, 180., 0.));

    assert!(matches!(result, Err(InferenceError::NonFiniteInput { .. })));
}

#[test]
fn test_no_rule_fired_returns_zero() {
    let mut rules = Rules::new();

    rules.add(is(Smoking::Smoker), Consequent::Constant(40.));

    let engine = InferenceEngine::new(Variables::standard().unwrap(), rules);

    assert_eq!(engine.eval(&Inputs::new(22., 100., 180., 0.)).unwrap().value(), 0.);
    assert_eq!(engine.eval(&Inputs::new(22., 100., 180., 1.)).unwrap().value(), 40.);
}

#[test]
fn test_rule_order_does_not_matter() {
    let forward = engine();
    let reversed = InferenceEngine::new(
        Variables::standard().unwrap(),
        Rules::standard().iter().rev().cloned().collect(),
    );

    for inputs in [
        Inputs::new(22., 100., 180., 0.),
        Inputs::new(32., 160., 280., 10.),
        Inputs::new(28., 130., 250., 5.),
        Inputs::new(17., 145., 210., 3.),
    ] {
        let forward = forward.eval(&inputs).unwrap().value();
        let reversed = reversed.eval(&inputs).unwrap().value();

        assert_relative_eq!(forward, reversed, max_relative = 1e-12);
    }
}

#[test]
fn test_rebuilt_models_agree_bit_for_bit() {
    let inputs = Inputs::new(28., 130., 250., 5.);
    let first = engine().eval(&inputs).unwrap();
    let second = engine().eval(&inputs).unwrap();

    assert_eq!(first.value().to_bits(), second.value().to_bits());
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_evaluations_share_one_engine() {
    let engine = &engine();
    let inputs = &Inputs::new(32., 160., 280., 10.);
    let expected = engine.eval(inputs).unwrap().value();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(move || engine.eval(inputs).unwrap().value()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().to_bits(), expected.to_bits());
        }
    });
}
