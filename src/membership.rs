use std::fmt;

use num::Float;

use crate::error::ConfigError;
use crate::math::clamp_unit;

/// The four shapes a membership function can take.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Shape {
    /// 0 below `a`, 1 above `b`
    Inc,
    /// 1 below `a`, 0 above `b`
    Dec,
    /// 0 outside `[a, d]`, 1 on `[b, c]`
    Trapezoid,
    /// Rises from `a` to a peak at `b`, falls until `c`
    Triangle,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Inc => "increasing ramp",
            Self::Dec => "decreasing ramp",
            Self::Trapezoid => "trapezoid",
            Self::Triangle => "triangle",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Kind<F> {
    Inc { a: F, b: F },
    Dec { a: F, b: F },
    Trapezoid { a: F, b: F, c: F, d: F },
    // d only exists so the signature lines up with Trapezoid
    Triangle { a: F, b: F, c: F, d: F },
}

/// A membership function mapping a crisp scalar to a truth degree.
///
/// Parameters are checked when the function is built, so a value of this type
/// never divides by zero when evaluated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Membership<F = f64>(Kind<F>);

impl<F: Float> Membership<F> {
    pub fn inc(a: F, b: F) -> Result<Self, ConfigError> {
        let params = [a, b];

        ensure_finite(Shape::Inc, &params)?;

        if a >= b {
            return Err(misordered(Shape::Inc, "a < b", &params));
        }

        Ok(Self(Kind::Inc { a, b }))
    }

    pub fn dec(a: F, b: F) -> Result<Self, ConfigError> {
        let params = [a, b];

        ensure_finite(Shape::Dec, &params)?;

        if a >= b {
            return Err(misordered(Shape::Dec, "a < b", &params));
        }

        Ok(Self(Kind::Dec { a, b }))
    }

    /// The plateau `[b, c]` may collapse to a single point, the ramps may not.
    pub fn trapezoid(a: F, b: F, c: F, d: F) -> Result<Self, ConfigError> {
        let params = [a, b, c, d];

        ensure_finite(Shape::Trapezoid, &params)?;

        if a >= b || b > c || c >= d {
            return Err(misordered(Shape::Trapezoid, "a < b <= c < d", &params));
        }

        Ok(Self(Kind::Trapezoid { a, b, c, d }))
    }

    /// `d` is accepted but never read.
    pub fn triangle(a: F, b: F, c: F, d: F) -> Result<Self, ConfigError> {
        let params = [a, b, c, d];

        ensure_finite(Shape::Triangle, &params)?;

        if a >= b || b >= c {
            return Err(misordered(Shape::Triangle, "a < b < c", &params));
        }

        Ok(Self(Kind::Triangle { a, b, c, d }))
    }

    pub fn shape(&self) -> Shape {
        match self.0 {
            Kind::Inc { .. } => Shape::Inc,
            Kind::Dec { .. } => Shape::Dec,
            Kind::Trapezoid { .. } => Shape::Trapezoid,
            Kind::Triangle { .. } => Shape::Triangle,
        }
    }

    pub fn params(&self) -> Vec<F> {
        match self.0 {
            Kind::Inc { a, b } | Kind::Dec { a, b } => vec![a, b],
            Kind::Trapezoid { a, b, c, d } | Kind::Triangle { a, b, c, d } => vec![a, b, c, d],
        }
    }

    /// Truth degree of `x`.
    pub fn degree(&self, x: F) -> F {
        match self.0 {
            Kind::Inc { a, b } => clamp_unit((x - a) / (b - a)),
            Kind::Dec { a, b } => clamp_unit((x - b) / (a - b)),
            Kind::Trapezoid { a, b, c, d } => clamp_unit(F::min((x - a) / (b - a), (d - x) / (d - c))),
            // Only clamped from below. The min of the two ramps already peaks at 1 on b.
            Kind::Triangle { a, b, c, .. } => F::max(F::min((x - a) / (b - a), (c - x) / (c - b)), F::zero()),
        }
    }
}

fn to_f64s<F: Float>(params: &[F]) -> Vec<f64> {
    params.iter().map(|p| p.to_f64().unwrap_or(f64::NAN)).collect()
}

fn ensure_finite<F: Float>(shape: Shape, params: &[F]) -> Result<(), ConfigError> {
    if params.iter().all(|p| p.is_finite()) {
        Ok(())
    } else {
        Err(ConfigError::NonFinite {
            shape,
            params: to_f64s(params),
        })
    }
}

fn misordered<F: Float>(shape: Shape, order: &'static str, params: &[F]) -> ConfigError {
    ConfigError::Misordered {
        shape,
        order,
        params: to_f64s(params),
    }
}

#[test]
fn test_ramps() {
    let inc = Membership::inc(120., 150.).unwrap();
    let dec = Membership::dec(80., 140.).unwrap();

    assert_eq!(inc.degree(100.), 0.);
    assert_eq!(inc.degree(135.), 0.5);
    assert_eq!(inc.degree(200.), 1.);
    assert_eq!(dec.degree(50.), 1.);
    assert_eq!(dec.degree(110.), 0.5);
    assert_eq!(dec.degree(140.), 0.);
}

#[test]
fn test_trapezoid() {
    let healthy = Membership::trapezoid(16., 18.5, 25., 27.5).unwrap();

    assert_eq!(healthy.degree(15.), 0.);
    assert_eq!(healthy.degree(17.25), 0.5);
    assert_eq!(healthy.degree(18.5), 1.);
    assert_eq!(healthy.degree(22.), 1.);
    assert_eq!(healthy.degree(25.), 1.);
    assert_eq!(healthy.degree(26.25), 0.5);
    assert_eq!(healthy.degree(30.), 0.);
}

#[test]
fn test_triangle() {
    let tri = Membership::triangle(0.0f32, 2., 4., 4.).unwrap();

    assert_eq!(tri.degree(-1.), 0.);
    assert_eq!(tri.degree(1.), 0.5);
    assert_eq!(tri.degree(2.), 1.);
    assert_eq!(tri.degree(3.), 0.5);
    assert_eq!(tri.degree(5.), 0.);
    // d is ignored
    assert_eq!(Membership::triangle(0.0f32, 2., 4., -100.).unwrap().degree(3.), 0.5);
}

#[test]
fn test_inspection() {
    let tri = Membership::triangle(1., 2., 3., 4.).unwrap();

    assert_eq!(tri.shape(), Shape::Triangle);
    assert_eq!(tri.params(), vec![1., 2., 3., 4.]);
    assert_eq!(Membership::dec(1., 2.).unwrap().shape(), Shape::Dec);
}

#[test]
fn test_rejects_degenerate_params() {
    assert_eq!(
        Membership::inc(25., 25.),
        Err(ConfigError::Misordered {
            shape: Shape::Inc,
            order: "a < b",
            params: vec![25., 25.]
        })
    );
    assert!(Membership::dec(140., 80.).is_err());
    assert!(Membership::trapezoid(16., 18.5, 18., 27.5).is_err());
    assert!(Membership::trapezoid(16., 18.5, 25., 25.).is_err());
    assert!(Membership::triangle(0., 2., 2., 3.).is_err());
    assert!(matches!(
        Membership::inc(f64::NAN, 1.),
        Err(ConfigError::NonFinite { shape: Shape::Inc, .. })
    ));
    assert!(matches!(
        Membership::triangle(0., 1., 2., f64::INFINITY),
        Err(ConfigError::NonFinite { .. })
    ));
    assert_eq!(
        Membership::trapezoid(16., 18.5, 18., 27.5).unwrap_err().to_string(),
        "trapezoid membership parameters must satisfy a < b <= c < d, got [16.0, 18.5, 18.0, 27.5]"
    );
    assert_eq!(
        Membership::triangle(0., 2., 2., 3.).unwrap_err().to_string(),
        "triangle membership parameters must satisfy a < b < c, got [0.0, 2.0, 2.0, 3.0]"
    );
    // A collapsed plateau is still a valid trapezoid
    assert!(Membership::trapezoid(0., 1., 1., 2.).is_ok());
}
