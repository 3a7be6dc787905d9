use std::fmt;

use tracing::trace;

use crate::dsl::Proposition;
use crate::error::ConfigError;
use crate::inputs::{Feature, Inputs};
use crate::membership::Membership;
use crate::terms::{Key, Label, Term, Terms};

/// The closed set of labels a linguistic variable is described with.
pub trait Labels: Label + Copy + fmt::Debug + fmt::Display + 'static {
    const ALL: &'static [Self];

    fn name(self) -> &'static str;
}

macro_rules! labels {
    ($(#[$meta:meta])* $ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Key, Ord, PartialEq, PartialOrd)]
        pub enum $ty {
            $($variant),+
        }

        impl Labels for $ty {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

labels! {
    /// Body-mass index
    Bmi { Healthy => "healthy", Unhealthy => "unhealthy" }
}

labels! {
    /// Blood pressure in mmHg
    BloodPressure { Low => "low", High => "high" }
}

labels! {
    /// Cholesterol level in mg/dL
    Cholesterol { Low => "low", High => "high" }
}

labels! {
    /// Cigarettes per day
    Smoking { Smoker => "smoker", NonSmoker => "non-smoker" }
}

/// A named crisp dimension whose labels each map to a [`Term`].
pub struct LinguisticVariable<K: Labels> {
    name: &'static str,
    terms: Terms<K>,
}

impl<K: Labels> LinguisticVariable<K> {
    /// Fails unless every label of `K` has a term.
    pub fn new(name: &'static str, terms: Terms<K>) -> Result<Self, ConfigError> {
        if let Some(label) = K::ALL.iter().find(|label| !terms.0.contains_key(**label)) {
            return Err(ConfigError::MissingTerm {
                variable: name,
                label: label.name(),
            });
        }

        Ok(Self { name, terms })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn term(&self, label: K) -> Option<&Term> {
        self.terms.0.get(label)
    }

    pub fn degree(&self, label: K, x: f64) -> f64 {
        // Every label has a term once constructed
        let degree = self.term(label).map_or(0., |term| term.degree(x));

        trace!(variable = self.name, %label, x, degree, "membership");

        degree
    }
}

/// The four linguistic variables the rule base reasons about.
pub struct Variables {
    bmi: LinguisticVariable<Bmi>,
    blood_pressure: LinguisticVariable<BloodPressure>,
    cholesterol: LinguisticVariable<Cholesterol>,
    smoking: LinguisticVariable<Smoking>,
}

impl Variables {
    pub fn new(
        bmi: LinguisticVariable<Bmi>,
        blood_pressure: LinguisticVariable<BloodPressure>,
        cholesterol: LinguisticVariable<Cholesterol>,
        smoking: LinguisticVariable<Smoking>,
    ) -> Self {
        Self {
            bmi,
            blood_pressure,
            cholesterol,
            smoking,
        }
    }

    pub fn standard() -> Result<Self, ConfigError> {
        let mut bmi = Terms::new();

        bmi.insert(Bmi::Healthy, Membership::trapezoid(16., 18.5, 25., 27.5)?);
        bmi.insert(
            Bmi::Unhealthy,
            Term::any_of([Membership::inc(25., 30.)?, Membership::dec(16., 18.5)?])?,
        );

        let mut blood_pressure = Terms::new();

        blood_pressure.insert(BloodPressure::Low, Membership::dec(80., 140.)?);
        blood_pressure.insert(BloodPressure::High, Membership::inc(120., 150.)?);

        let mut cholesterol = Terms::new();

        cholesterol.insert(Cholesterol::Low, Membership::dec(200., 240.)?);
        cholesterol.insert(Cholesterol::High, Membership::inc(230., 270.)?);

        let mut smoking = Terms::new();

        smoking.insert(Smoking::Smoker, Term::Above(0.));
        smoking.insert(Smoking::NonSmoker, Term::AtMost(0.));

        Ok(Self::new(
            LinguisticVariable::new("bmi", bmi)?,
            LinguisticVariable::new("blood pressure", blood_pressure)?,
            LinguisticVariable::new("cholesterol", cholesterol)?,
            LinguisticVariable::new("smoking", smoking)?,
        ))
    }

    pub fn bmi(&self) -> &LinguisticVariable<Bmi> {
        &self.bmi
    }

    pub fn blood_pressure(&self) -> &LinguisticVariable<BloodPressure> {
        &self.blood_pressure
    }

    pub fn cholesterol(&self) -> &LinguisticVariable<Cholesterol> {
        &self.cholesterol
    }

    pub fn smoking(&self) -> &LinguisticVariable<Smoking> {
        &self.smoking
    }

    /// Truth degree of `proposition` for the matching input.
    pub fn degree(&self, proposition: Proposition, inputs: &Inputs) -> f64 {
        match proposition {
            Proposition::Bmi(label) => self.bmi.degree(label, inputs.get(Feature::Bmi)),
            Proposition::BloodPressure(label) => self
                .blood_pressure
                .degree(label, inputs.get(Feature::BloodPressure)),
            Proposition::Cholesterol(label) => self.cholesterol.degree(label, inputs.get(Feature::Cholesterol)),
            Proposition::Smoking(label) => self.smoking.degree(label, inputs.get(Feature::CigarettesPerDay)),
        }
    }
}

#[test]
fn test_missing_term() {
    let mut terms = Terms::new();

    terms.insert(BloodPressure::Low, Membership::dec(80., 140.).unwrap());

    assert_eq!(terms.len(), 1);
    assert!(matches!(
        LinguisticVariable::new("blood pressure", terms),
        Err(ConfigError::MissingTerm {
            variable: "blood pressure",
            label: "high"
        })
    ));
}

#[test]
fn test_standard_variables() {
    let vars = Variables::standard().unwrap();

    assert_eq!(vars.bmi().degree(Bmi::Healthy, 22.), 1.);
    assert_eq!(vars.bmi().degree(Bmi::Unhealthy, 22.), 0.);
    assert_eq!(vars.bmi().degree(Bmi::Unhealthy, 32.), 1.);
    assert_eq!(vars.bmi().degree(Bmi::Unhealthy, 10.), 1.);
    assert_eq!(vars.blood_pressure().degree(BloodPressure::Low, 110.), 0.5);
    assert_eq!(vars.blood_pressure().degree(BloodPressure::High, 135.), 0.5);
    assert_eq!(vars.cholesterol().degree(Cholesterol::Low, 220.), 0.5);
    assert_eq!(vars.cholesterol().degree(Cholesterol::High, 250.), 0.5);
    assert_eq!(vars.smoking().degree(Smoking::Smoker, 0.), 0.);
    assert_eq!(vars.smoking().degree(Smoking::NonSmoker, 0.), 1.);
    assert_eq!(vars.smoking().name(), "smoking");
    assert!(matches!(vars.bmi().term(Bmi::Unhealthy), Some(Term::AnyOf(shapes)) if shapes.len() == 2));
}

#[test]
fn test_degree_by_proposition() {
    let vars = Variables::standard().unwrap();
    let inputs = Inputs::new(32., 100., 250., 5.);

    assert_eq!(vars.degree(Bmi::Unhealthy.into(), &inputs), 1.);
    assert_eq!(vars.degree(BloodPressure::High.into(), &inputs), 0.);
    assert_eq!(vars.degree(Cholesterol::High.into(), &inputs), 0.5);
    assert_eq!(vars.degree(Smoking::Smoker.into(), &inputs), 1.);
}

#[test]
fn test_label_names() {
    assert_eq!(Smoking::NonSmoker.to_string(), "non-smoker");
    assert_eq!(Bmi::ALL, &[Bmi::Healthy, Bmi::Unhealthy]);
}
