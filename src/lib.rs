//! Fuzzy inference of a monthly insurance premium.
//!
//! Four crisp health indicators are fuzzified through linguistic variables,
//! six rules weigh their own crisp conclusions, and a weighted average turns
//! the fired rules back into one crisp premium.
//!
//! ```
//! use fuzzy_premium::{InferenceEngine, Inputs};
//!
//! let engine = InferenceEngine::standard()?;
//! let outputs = engine.eval(&Inputs::new(22., 100., 180., 0.))?;
//!
//! assert!((outputs.value() - 10.).abs() < 1e-9);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod dsl;
mod error;
mod inference;
mod inputs;
mod math;
mod membership;
mod outputs;
mod rules;
mod terms;
mod variable;

pub use dsl::{is, Expr, Proposition};
pub use error::{ConfigError, InferenceError};
pub use inference::InferenceEngine;
pub use inputs::{Feature, Inputs};
pub use membership::{Membership, Shape};
pub use outputs::{Outputs, RuleFiring};
pub use rules::{Consequent, NonPositive, Rule, Rules};
pub use terms::{Label, Term, Terms};
pub use variable::{BloodPressure, Bmi, Cholesterol, Labels, LinguisticVariable, Smoking, Variables};
