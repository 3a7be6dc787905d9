use std::fmt;

use crate::error::InferenceError;

/// One crisp dimension of the input vector.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Feature {
    Bmi,
    BloodPressure,
    Cholesterol,
    CigarettesPerDay,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::Bmi,
        Feature::BloodPressure,
        Feature::Cholesterol,
        Feature::CigarettesPerDay,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Bmi => "bmi",
            Self::BloodPressure => "blood_pressure",
            Self::Cholesterol => "cholesterol",
            Self::CigarettesPerDay => "cigarettes_per_day",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four crisp health indicators of a single evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Inputs {
    bmi: f64,
    blood_pressure: f64,
    cholesterol: f64,
    cigarettes_per_day: f64,
}

impl Inputs {
    pub fn new(bmi: f64, blood_pressure: f64, cholesterol: f64, cigarettes_per_day: f64) -> Self {
        Inputs {
            bmi,
            blood_pressure,
            cholesterol,
            cigarettes_per_day,
        }
    }

    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Bmi => self.bmi,
            Feature::BloodPressure => self.blood_pressure,
            Feature::Cholesterol => self.cholesterol,
            Feature::CigarettesPerDay => self.cigarettes_per_day,
        }
    }

    pub(crate) fn ensure_finite(&self) -> Result<(), InferenceError> {
        for feature in Feature::ALL {
            let value = self.get(feature);

            if !value.is_finite() {
                return Err(InferenceError::NonFiniteInput { feature, value });
            }
        }

        Ok(())
    }
}

#[test]
fn test_get() {
    let inputs = Inputs::new(22., 100., 180., 0.);

    assert_eq!(inputs.get(Feature::Bmi), 22.);
    assert_eq!(inputs.get(Feature::BloodPressure), 100.);
    assert_eq!(inputs.get(Feature::Cholesterol), 180.);
    assert_eq!(inputs.get(Feature::CigarettesPerDay), 0.);
}

#[test]
fn test_ensure_finite() {
    assert_eq!(Inputs::new(22., 100., 180., 0.).ensure_finite(), Ok(()));
    assert_eq!(
        Inputs::new(22., 100., f64::INFINITY, 0.).ensure_finite(),
        Err(InferenceError::NonFiniteInput {
            feature: Feature::Cholesterol,
            value: f64::INFINITY,
        })
    );
    assert!(Inputs::new(f64::NAN, 100., 180., 0.).ensure_finite().is_err());
}
