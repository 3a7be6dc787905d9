use tracing::{debug, warn};

use crate::error::{ConfigError, InferenceError};
use crate::inputs::Inputs;
use crate::outputs::{Outputs, RuleFiring};
use crate::rules::{NonPositive, Rules};
use crate::variable::Variables;

/// Weighted-average (zero-order Sugeno style) defuzzification over a fixed
/// set of variables and rules.
///
/// The engine holds no mutable state. One instance can be shared by reference
/// between threads and evaluated concurrently.
pub struct InferenceEngine {
    variables: Variables,
    rules: Rules,
}

impl InferenceEngine {
    pub fn new(variables: Variables, rules: Rules) -> Self {
        Self { variables, rules }
    }

    /// The premium model: the four standard variables and the six rules.
    pub fn standard() -> Result<Self, ConfigError> {
        Ok(Self::new(Variables::standard()?, Rules::standard()))
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Evaluates every rule against `inputs` and returns
    /// `sum(weight * output) / sum(weight)`, or exactly 0 when no rule fires.
    ///
    /// Every consequent is computed, including those of rules whose weight
    /// is 0, so a non-positive logarithm argument always fails the call.
    pub fn eval(&self, inputs: &Inputs) -> Result<Outputs, InferenceError> {
        inputs.ensure_finite()?;

        let mut firings = Vec::with_capacity(self.rules.len());
        let mut products = 0.;
        let mut weights = 0.;

        for (i, rule) in self.rules.iter().enumerate() {
            let weight = rule.weight(&self.variables, inputs);
            let output = rule
                .output(inputs)
                .map_err(|NonPositive(argument)| InferenceError::Domain { rule: i + 1, argument })?;

            debug!(rule = i + 1, weight, output, "rule fired");

            products += weight * output;
            weights += weight;
            firings.push(RuleFiring { weight, output });
        }

        let value = if weights != 0. {
            products / weights
        } else {
            warn!(?inputs, "no rule fired, falling back to 0");
            0.
        };

        debug!(value, total_weight = weights, "defuzzificated");

        Ok(Outputs::new(value, weights, firings))
    }
}

#[test]
fn test_engine_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<InferenceEngine>();
}

#[test]
fn test_healthy_profile() {
    let engine = InferenceEngine::standard().unwrap();
    let outputs = engine.eval(&Inputs::new(22., 100., 180., 0.)).unwrap();

    assert!((outputs.value() - 10.).abs() < 1e-12);
    assert_eq!(outputs.firings().len(), 6);
    assert_eq!(outputs.total_weight(), outputs.firings()[5].weight);
}

#[test]
fn test_domain_error_names_rule() {
    let engine = InferenceEngine::standard().unwrap();

    assert_eq!(
        engine.eval(&Inputs::new(0., 130., 250., 0.)),
        Err(InferenceError::Domain { rule: 2, argument: 0. })
    );
    assert_eq!(
        engine.eval(&Inputs::new(22., 0., 180., 0.)),
        Err(InferenceError::Domain { rule: 3, argument: 0. })
    );
}

#[test]
fn test_zero_weight_falls_back_to_zero() {
    use crate::dsl::is;
    use crate::rules::Consequent;
    use crate::variable::Smoking;

    let mut rules = Rules::new();

    rules.add(is(Smoking::Smoker), Consequent::Constant(40.));

    let engine = InferenceEngine::new(Variables::standard().unwrap(), rules);
    let outputs = engine.eval(&Inputs::new(22., 100., 180., 0.)).unwrap();

    assert_eq!(outputs.value(), 0.);
    assert_eq!(outputs.total_weight(), 0.);
    assert_eq!(outputs.firings(), &[RuleFiring { weight: 0., output: 40. }]);
}

#[test]
fn test_empty_rule_base() {
    let engine = InferenceEngine::new(Variables::standard().unwrap(), Rules::new());
    let outputs = engine.eval(&Inputs::new(22., 100., 180., 0.)).unwrap();

    assert_eq!(outputs.value(), 0.);
    assert!(outputs.firings().is_empty());
}
