use std::fmt;

use crate::dsl::{is, Expr};
use crate::inputs::{Feature, Inputs};
use crate::variable::{BloodPressure, Bmi, Cholesterol, Smoking, Variables};

/// The argument a logarithmic consequent could not take.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NonPositive(pub f64);

/// Crisp conclusion of a rule, computed from the raw inputs.
#[derive(Clone, Debug, PartialEq)]
pub enum Consequent {
    Constant(f64),
    /// `intercept + slope * ln(sum of operands)`
    Logarithmic {
        intercept: f64,
        slope: f64,
        operands: Vec<Feature>,
    },
}

impl Consequent {
    pub fn log_of(intercept: f64, slope: f64, operands: impl IntoIterator<Item = Feature>) -> Self {
        Consequent::Logarithmic {
            intercept,
            slope,
            operands: operands.into_iter().collect(),
        }
    }

    pub fn output(&self, inputs: &Inputs) -> Result<f64, NonPositive> {
        match self {
            Consequent::Constant(value) => Ok(*value),
            Consequent::Logarithmic {
                intercept,
                slope,
                operands,
            } => {
                let argument: f64 = operands.iter().map(|feature| inputs.get(*feature)).sum();

                // Also catches NaN
                if !(argument > 0.) {
                    return Err(NonPositive(argument));
                }

                Ok(intercept + slope * argument.ln())
            },
        }
    }
}

impl fmt::Display for Consequent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Consequent::Constant(value) => write!(f, "{value}"),
            Consequent::Logarithmic {
                intercept,
                slope,
                operands,
            } => {
                let operands: Vec<_> = operands.iter().map(|feature| feature.name()).collect();

                if *slope == 1. {
                    write!(f, "{intercept} + ln({})", operands.join(" + "))
                } else {
                    write!(f, "{intercept} + {slope} * ln({})", operands.join(" + "))
                }
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub(crate) premise: Expr,
    pub(crate) consequence: Consequent,
}

impl Rule {
    pub fn new(premise: Expr, consequence: Consequent) -> Self {
        Rule { premise, consequence }
    }

    pub fn premise(&self) -> &Expr {
        &self.premise
    }

    pub fn consequence(&self) -> &Consequent {
        &self.consequence
    }

    /// Truth degree of the antecedent, used as this rule's weight.
    pub fn weight(&self, vars: &Variables, inputs: &Inputs) -> f64 {
        self.premise.truth(vars, inputs)
    }

    pub fn output(&self, inputs: &Inputs) -> Result<f64, NonPositive> {
        self.consequence.output(inputs)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if {} then {}", self.premise, self.consequence)
    }
}

/// An ordered rule base. Order does not change the result, only the order
/// rules are reported and checked in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rules(pub(crate) Vec<Rule>);

impl Rules {
    pub fn new() -> Self {
        Rules(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Rules(Vec::with_capacity(capacity))
    }

    pub fn add(&mut self, premise: Expr, consequence: Consequent) {
        self.0.push(Rule::new(premise, consequence));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.0.iter()
    }

    /// The six premium rules.
    pub fn standard() -> Self {
        let mut rules = Rules::with_capacity(6);

        // Unhealthy BMI, high blood pressure, high cholesterol and a smoker
        rules.add(
            Expr::And(vec![
                is(Bmi::Unhealthy),
                is(BloodPressure::High),
                is(Cholesterol::High),
                is(Smoking::Smoker),
            ]),
            Consequent::log_of(40., 1., Feature::ALL),
        );
        // Unhealthy BMI, or both high cholesterol and high blood pressure
        rules.add(
            is(Bmi::Unhealthy).or(is(Cholesterol::High).and(is(BloodPressure::High))),
            Consequent::log_of(20., 20., [Feature::Bmi]),
        );
        rules.add(
            is(BloodPressure::High).or(is(Bmi::Unhealthy).and(is(Cholesterol::High))),
            Consequent::log_of(20., 4., [Feature::BloodPressure]),
        );
        rules.add(
            is(Cholesterol::High).or(is(Bmi::Unhealthy).and(is(BloodPressure::High))),
            Consequent::log_of(20., 4., [Feature::Cholesterol]),
        );
        rules.add(is(Smoking::Smoker), Consequent::Constant(40.));
        rules.add(
            is(Bmi::Healthy).and2(is(BloodPressure::Low), is(Cholesterol::Low)),
            Consequent::Constant(10.),
        );

        rules
    }
}

impl FromIterator<Rule> for Rules {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Rules(iter.into_iter().collect())
    }
}

impl<'r> IntoIterator for &'r Rules {
    type Item = &'r Rule;
    type IntoIter = std::slice::Iter<'r, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[test]
fn test_consequents() {
    let inputs = Inputs::new(32., 160., 280., 10.);

    assert_eq!(Consequent::Constant(40.).output(&inputs), Ok(40.));
    assert_eq!(
        Consequent::log_of(20., 20., [Feature::Bmi]).output(&inputs),
        Ok(20. + 20. * 32f64.ln())
    );
    assert_eq!(
        Consequent::log_of(40., 1., Feature::ALL).output(&inputs),
        Ok(40. + 482f64.ln())
    );
}

#[test]
fn test_log_domain() {
    let log_bmi = Consequent::log_of(20., 20., [Feature::Bmi]);

    assert_eq!(log_bmi.output(&Inputs::new(0., 120., 200., 0.)), Err(NonPositive(0.)));
    assert_eq!(log_bmi.output(&Inputs::new(-4., 120., 200., 0.)), Err(NonPositive(-4.)));
    // The sum is what has to be positive, not each operand
    assert!(Consequent::log_of(40., 1., Feature::ALL)
        .output(&Inputs::new(-4., 120., 200., 0.))
        .is_ok());
}

#[test]
fn test_standard_rules_in_isolation() {
    let vars = Variables::standard().unwrap();
    let rules = Rules::standard();
    let healthy = Inputs::new(22., 100., 180., 0.);
    let weights: Vec<_> = rules.iter().map(|rule| rule.weight(&vars, &healthy)).collect();

    assert_eq!(rules.len(), 6);
    assert_eq!(weights[..5], [0., 0., 0., 0., 0.]);
    assert!(weights[5] > 0.6 && weights[5] < 0.7);
    assert_eq!(rules.0[5].output(&healthy), Ok(10.));
    assert_eq!(rules.0[4].output(&healthy), Ok(40.));
}

#[test]
fn test_standard_rule_weights_at_partial_degrees() {
    let vars = Variables::standard().unwrap();
    let rules = Rules::standard();
    let weights_at = |inputs: Inputs| -> Vec<f64> { rules.iter().map(|rule| rule.weight(&vars, &inputs)).collect() };

    // unhealthy 0.5, healthy 0, high bp 0.5, low bp 1/12, high cholesterol 0.5, low cholesterol 0
    assert_eq!(weights_at(Inputs::new(27.5, 135., 250., 0.)), vec![0., 0.5, 0.5, 0.5, 0., 0.]);

    // unhealthy 0.25, healthy 0.5, high bp 0.5, low bp 1/12, high cholesterol 0.75, low cholesterol 0
    assert_eq!(
        weights_at(Inputs::new(26.25, 135., 260., 2.)),
        vec![0.25, 0.5, 0.5, 0.75, 1., 0.]
    );

    // unhealthy 0, healthy 1, high bp 0.5, high cholesterol 0.75: the OR picks the AND branch for rule 2
    assert_eq!(
        weights_at(Inputs::new(22., 135., 260., 0.)),
        vec![0., 0.5, 0.5, 0.75, 0., 0.]
    );
}

#[test]
fn test_display() {
    let rules = Rules::standard();

    assert_eq!(
        rules.0[0].to_string(),
        "if bmi is unhealthy and blood pressure is high and cholesterol is high and smoker \
         then 40 + ln(bmi + blood_pressure + cholesterol + cigarettes_per_day)"
    );
    assert_eq!(
        rules.0[3].to_string(),
        "if cholesterol is high or (bmi is unhealthy and blood pressure is high) then 20 + 4 * ln(cholesterol)"
    );
}
