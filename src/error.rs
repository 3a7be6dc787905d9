use thiserror::Error;

use crate::inputs::Feature;
use crate::membership::Shape;

/// Errors raised while building membership functions, variables or rules.
///
/// These are detected once, when the model is constructed, and no evaluation
/// can run on a model that failed to build.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{shape} membership has a non-finite parameter in {params:?}")]
    NonFinite { shape: Shape, params: Vec<f64> },

    #[error("{shape} membership parameters must satisfy {order}, got {params:?}")]
    Misordered {
        shape: Shape,
        order: &'static str,
        params: Vec<f64>,
    },

    #[error("a fuzzy union needs at least one membership function")]
    EmptyUnion,

    #[error("variable `{variable}` has no term for label `{label}`")]
    MissingTerm {
        variable: &'static str,
        label: &'static str,
    },
}

/// Errors raised while evaluating an input vector.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InferenceError {
    /// `rule` is the one-based number of the rule in the rule base.
    #[error("rule {rule} takes the logarithm of a non-positive value ({argument})")]
    Domain { rule: usize, argument: f64 },

    #[error("input `{feature}` is not a finite number ({value})")]
    NonFiniteInput { feature: Feature, value: f64 },
}

#[test]
fn test_error_messages() {
    let err = ConfigError::Misordered {
        shape: Shape::Inc,
        order: "a < b",
        params: vec![2., 1.],
    };

    assert_eq!(
        err.to_string(),
        "increasing ramp membership parameters must satisfy a < b, got [2.0, 1.0]"
    );

    let err = InferenceError::Domain { rule: 2, argument: 0. };

    assert_eq!(err.to_string(), "rule 2 takes the logarithm of a non-positive value (0)");
}
