use std::fmt;

use crate::inputs::Inputs;
use crate::math::{and_all, or_all};
use crate::variable::{BloodPressure, Bmi, Cholesterol, Smoking, Variables};

/// A single "variable is label" statement.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Proposition {
    Bmi(Bmi),
    BloodPressure(BloodPressure),
    Cholesterol(Cholesterol),
    Smoking(Smoking),
}

impl From<Bmi> for Proposition {
    fn from(label: Bmi) -> Self {
        Self::Bmi(label)
    }
}

impl From<BloodPressure> for Proposition {
    fn from(label: BloodPressure) -> Self {
        Self::BloodPressure(label)
    }
}

impl From<Cholesterol> for Proposition {
    fn from(label: Cholesterol) -> Self {
        Self::Cholesterol(label)
    }
}

impl From<Smoking> for Proposition {
    fn from(label: Smoking) -> Self {
        Self::Smoking(label)
    }
}

impl fmt::Display for Proposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bmi(label) => write!(f, "bmi is {label}"),
            Self::BloodPressure(label) => write!(f, "blood pressure is {label}"),
            Self::Cholesterol(label) => write!(f, "cholesterol is {label}"),
            Self::Smoking(Smoking::Smoker) => f.write_str("smoker"),
            Self::Smoking(Smoking::NonSmoker) => f.write_str("non-smoker"),
        }
    }
}

/// Rule antecedent. AND is the minimum and OR the maximum of the children.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Is(Proposition),
    And(Vec<Expr>),
    Or(Vec<Expr>),
}

pub fn is(label: impl Into<Proposition>) -> Expr {
    Expr::Is(label.into())
}

impl Expr {
    pub fn or(self, rhs: Expr) -> Self {
        Expr::Or(vec![self, rhs])
    }

    pub fn and(self, rhs: Expr) -> Self {
        Expr::And(vec![self, rhs])
    }

    pub fn and2(self, rhs: Expr, rhs2: Expr) -> Self {
        Expr::And(vec![self, rhs, rhs2])
    }

    /// Combined truth degree against one input vector.
    pub fn truth(&self, vars: &Variables, inputs: &Inputs) -> f64 {
        match self {
            Expr::Is(proposition) => vars.degree(*proposition, inputs),
            Expr::And(exprs) => and_all(exprs.iter().map(|expr| expr.truth(vars, inputs))),
            Expr::Or(exprs) => or_all(exprs.iter().map(|expr| expr.truth(vars, inputs))),
        }
    }

    pub fn propositions(&self) -> Vec<Proposition> {
        let mut props = Vec::new();

        fn parse(expr: &Expr, out: &mut Vec<Proposition>) {
            match expr {
                Expr::Is(proposition) => out.push(*proposition),
                Expr::And(exprs) | Expr::Or(exprs) => {
                    for expr in exprs {
                        parse(expr, out);
                    }
                },
            }
        }

        parse(self, &mut props);

        props
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (exprs, op) = match self {
            Expr::Is(proposition) => return write!(f, "{proposition}"),
            Expr::And(exprs) => (exprs, " and "),
            Expr::Or(exprs) => (exprs, " or "),
        };

        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                f.write_str(op)?;
            }

            match expr {
                Expr::Is(_) => write!(f, "{expr}")?,
                _ => write!(f, "({expr})")?,
            }
        }

        Ok(())
    }
}

#[test]
fn test_truth() {
    let vars = Variables::standard().unwrap();
    let inputs = Inputs::new(27.5, 135., 250., 0.);
    // unhealthy = 0.5, high bp = 0.5, high cholesterol = 0.5, smoker = 0
    let expr = is(Bmi::Unhealthy).or(is(Cholesterol::High).and(is(BloodPressure::High)));

    assert_eq!(expr.truth(&vars, &inputs), 0.5);
    assert_eq!(is(Bmi::Unhealthy).and(is(Smoking::Smoker)).truth(&vars, &inputs), 0.);
    assert_eq!(is(Smoking::NonSmoker).or(is(Bmi::Healthy)).truth(&vars, &inputs), 1.);
    assert_eq!(Expr::And(Vec::new()).truth(&vars, &inputs), 1.);
    assert_eq!(Expr::Or(Vec::new()).truth(&vars, &inputs), 0.);
}

#[test]
fn test_display() {
    let expr = is(Bmi::Unhealthy).or(is(Cholesterol::High).and(is(BloodPressure::High)));

    assert_eq!(
        expr.to_string(),
        "bmi is unhealthy or (cholesterol is high and blood pressure is high)"
    );
    assert_eq!(
        expr.propositions(),
        vec![
            Proposition::Bmi(Bmi::Unhealthy),
            Proposition::Cholesterol(Cholesterol::High),
            Proposition::BloodPressure(BloodPressure::High),
        ]
    );
}
