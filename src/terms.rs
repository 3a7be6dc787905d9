pub use fixed_map::Key as Label;
pub use fixed_map::Key;
use fixed_map::Map as FixedMap;

use crate::error::ConfigError;
use crate::math::or_all;
use crate::membership::Membership;

/// What a label of a linguistic variable means over its crisp dimension.
#[derive(Clone, Debug, PartialEq)]
pub enum Term {
    Shape(Membership),
    /// Fuzzy OR of several shapes.
    AnyOf(Vec<Membership>),
    /// Crisp step: 1 when `x > t`, otherwise 0.
    Above(f64),
    /// Crisp step: 1 when `x <= t`, otherwise 0.
    AtMost(f64),
}

impl Term {
    pub fn any_of(shapes: impl IntoIterator<Item = Membership>) -> Result<Self, ConfigError> {
        let shapes: Vec<_> = shapes.into_iter().collect();

        if shapes.is_empty() {
            return Err(ConfigError::EmptyUnion);
        }

        Ok(Self::AnyOf(shapes))
    }

    pub fn degree(&self, x: f64) -> f64 {
        match self {
            Self::Shape(membership) => membership.degree(x),
            Self::AnyOf(shapes) => or_all(shapes.iter().map(|m| m.degree(x))),
            Self::Above(t) => {
                if x > *t {
                    1.
                } else {
                    0.
                }
            },
            Self::AtMost(t) => {
                if x <= *t {
                    1.
                } else {
                    0.
                }
            },
        }
    }
}

impl From<Membership> for Term {
    fn from(membership: Membership) -> Self {
        Self::Shape(membership)
    }
}

pub struct Terms<K: Label>(pub(crate) FixedMap<K, Term>);

impl<K: Label> Default for Terms<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Label> Terms<K> {
    pub fn new() -> Self {
        Self(FixedMap::new())
    }

    pub fn insert(&mut self, key: K, term: impl Into<Term>) {
        self.0.insert(key, term.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[test]
fn test_union_takes_max() {
    let too_high = Membership::inc(25., 30.).unwrap();
    let too_low = Membership::dec(16., 18.5).unwrap();
    let unhealthy = Term::any_of([too_high, too_low]).unwrap();

    assert_eq!(unhealthy.degree(17.25), 0.5);
    assert_eq!(unhealthy.degree(22.), 0.);
    assert_eq!(unhealthy.degree(27.5), 0.5);
    assert_eq!(unhealthy.degree(40.), 1.);
    assert_eq!(Term::any_of(Vec::new()), Err(ConfigError::EmptyUnion));
}

#[test]
fn test_steps_are_exhaustive() {
    let smoker = Term::Above(0.);
    let non_smoker = Term::AtMost(0.);

    for cigarettes in [-3., 0., 0.5, 1., 20.] {
        assert_eq!(smoker.degree(cigarettes) + non_smoker.degree(cigarettes), 1.);
    }

    assert_eq!(smoker.degree(0.), 0.);
    assert_eq!(smoker.degree(1.), 1.);
}
