/// How strongly one rule fired and what it concluded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RuleFiring {
    pub weight: f64,
    pub output: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Outputs {
    value: f64,
    total_weight: f64,
    firings: Vec<RuleFiring>,
}

impl Outputs {
    pub(crate) fn new(value: f64, total_weight: f64, firings: Vec<RuleFiring>) -> Self {
        Self {
            value,
            total_weight,
            firings,
        }
    }

    /// The defuzzificated crisp result.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// One entry per rule, in rule base order.
    pub fn firings(&self) -> &[RuleFiring] {
        &self.firings
    }
}
