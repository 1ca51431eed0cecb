//! Generate Spirograph (hypotrochoid and epitrochoid) curves.
//!
//! The traced point is at some distance from the center of a circle rolling along another circle.
//! For integer radii the curve closes after `2 * PI * outer_radius / gcd(inner_radius,
//! outer_radius)` radians, which is rounded up to a whole number of radians and then scaled by the
//! requested amount.

use crate::error::Error;
use crate::error::Result;
use crate::geometry::translate_polyline;
use crate::geometry::Point;
use crate::geometry::Polyline;
use log::debug;
use std::f64::consts::PI;
use std::mem::swap;

/// The angle (in radians) between consecutive sampled points.
pub const STEP: f64 = 0.01;

/// An ordered sequence of points, to be connected by straight lines (not automatically closed).
pub type CurvePath = Polyline;

/// Parameters of a Spirograph curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpirographParameters {
    /// The radius of the inner circle (must not be zero).
    pub inner_radius: usize,

    /// The radius of the outer circle (must not be zero).
    pub outer_radius: usize,

    /// The distance of the traced point from the center of the rolling circle.
    pub distance: i64,

    /// The fraction of the full curve to trace (0 - nothing, 1 - the whole closed curve).
    pub amount: f64,
}

impl Default for SpirographParameters {
    fn default() -> Self {
        SpirographParameters {
            inner_radius: 125,
            outer_radius: 75,
            distance: 25,
            amount: 1.0,
        }
    }
}

impl SpirographParameters {
    /// Ensure the parameters are valid.
    pub fn validate(&self) -> Result<()> {
        if self.inner_radius == 0 {
            return Err(Error::invalid_parameter("inner-radius", "is zero"));
        }

        if self.outer_radius == 0 {
            return Err(Error::invalid_parameter("outer-radius", "is zero"));
        }

        if !self.amount.is_finite() {
            return Err(Error::invalid_parameter(
                "amount",
                format!("{} is not finite", self.amount),
            ));
        }

        Ok(())
    }

    /// The greatest common divisor of the radii, which determines the period of the curve.
    pub fn divisor(&self) -> usize {
        gcd(self.inner_radius, self.outer_radius)
    }

    /// The signed difference between the radii.
    pub fn difference(&self) -> f64 {
        self.inner_radius as f64 - self.outer_radius as f64
    }

    /// The angle (in radians) at which to stop sampling the curve.
    pub fn end_theta(&self) -> f64 {
        let period = 2.0 * PI * self.outer_radius as f64 / self.divisor() as f64;
        period.ceil() * self.amount
    }
}

/// Compute the greatest common divisor of two numbers.
pub fn gcd(mut n: usize, mut m: usize) -> usize {
    while m > 0 {
        n %= m;
        swap(&mut n, &mut m);
    }
    n
}

#[cfg(test)]
#[test]
fn test_gcd() {
    assert_eq!(gcd(125, 75), 25);
    assert_eq!(gcd(75, 125), 25);
    assert_eq!(gcd(10, 10), 10);
    assert_eq!(gcd(17, 5), 1);
    assert_eq!(gcd(12, 0), 12);

    for n in 1..40 {
        for m in 1..40 {
            let divisor = gcd(n, m);
            assert_eq!(divisor, gcd(m, n));
            assert!(divisor >= 1);
            assert_eq!(n % divisor, 0);
            assert_eq!(m % divisor, 0);
        }
    }
}

/// Generate the points of a Spirograph curve, centered in a `width` by `height` rectangle.
pub fn generate(params: &SpirographParameters, width: f64, height: f64) -> Result<CurvePath> {
    params.validate()?;

    let difference = params.difference();
    let distance = params.distance as f64;
    let ratio = difference / params.outer_radius as f64;
    let end_theta = params.end_theta();
    debug!(
        "spirograph: divisor: {} difference: {} end theta: {}",
        params.divisor(),
        difference,
        end_theta
    );

    let mut path: CurvePath = Vec::new();
    for index in 0_usize.. {
        let theta = index as f64 * STEP;
        if theta >= end_theta {
            break;
        }
        path.push(Point {
            x: difference * theta.cos() + distance * (ratio * theta).cos(),
            y: difference * theta.sin() - distance * (ratio * theta).sin(),
        });
    }

    translate_polyline(&mut path, width / 2.0, height / 2.0);
    Ok(path)
}

#[cfg(test)]
fn parameters(
    inner_radius: usize,
    outer_radius: usize,
    distance: i64,
    amount: f64,
) -> SpirographParameters {
    SpirographParameters {
        inner_radius,
        outer_radius,
        distance,
        amount,
    }
}

#[cfg(test)]
#[test]
fn test_default_curve() {
    let params = SpirographParameters::default();
    assert_eq!(params.divisor(), 25);
    assert_float_absolute_eq!(params.difference(), 50.0, 1e-12);
    assert_float_absolute_eq!(params.end_theta(), 19.0, 1e-12);

    let path = generate(&params, 300.0, 300.0).unwrap();
    assert_eq!(path.len(), 1900);
    assert_float_absolute_eq!(path[0].x, 225.0, 1e-9);
    assert_float_absolute_eq!(path[0].y, 150.0, 1e-9);

    let theta = 1899.0 * STEP;
    let ratio = 50.0 / 75.0;
    assert_float_absolute_eq!(
        path[1899].x,
        50.0 * theta.cos() + 25.0 * (ratio * theta).cos() + 150.0,
        1e-9
    );
    assert_float_absolute_eq!(
        path[1899].y,
        50.0 * theta.sin() - 25.0 * (ratio * theta).sin() + 150.0,
        1e-9
    );
}

#[cfg(test)]
#[test]
fn test_deterministic() {
    let params = parameters(97, 41, 60, 0.75);
    let first = generate(&params, 400.0, 200.0).unwrap();
    let second = generate(&params, 400.0, 200.0).unwrap();
    assert_eq!(first.len(), second.len());
    for (first_point, second_point) in first.iter().zip(second.iter()) {
        assert_eq!(first_point.x.to_bits(), second_point.x.to_bits());
        assert_eq!(first_point.y.to_bits(), second_point.y.to_bits());
    }
}

#[cfg(test)]
#[test]
fn test_no_amount() {
    assert!(generate(&parameters(125, 75, 25, 0.0), 300.0, 300.0)
        .unwrap()
        .is_empty());
    assert!(generate(&parameters(125, 75, 25, -0.5), 300.0, 300.0)
        .unwrap()
        .is_empty());
}

#[cfg(test)]
#[test]
fn test_more_than_full_amount() {
    let full = generate(&parameters(125, 75, 25, 1.0), 300.0, 300.0).unwrap();
    let double = generate(&parameters(125, 75, 25, 2.0), 300.0, 300.0).unwrap();
    assert_eq!(double.len(), 3800);
    assert_float_absolute_eq!(double[0].x, full[0].x, 1e-9);
    assert_float_absolute_eq!(double[0].y, full[0].y, 1e-9);

    // The curve repeats after its true period of 6 * PI radians.
    let period_steps = 6.0 * PI / STEP;
    for index in (0..1900).step_by(97) {
        let theta = index as f64 * STEP + 6.0 * PI;
        let later = (theta / STEP).round() as usize;
        assert!(later < double.len());
        let drift = (later as f64 - index as f64 - period_steps).abs() * STEP;
        let max_step_length = (50.0 + 25.0 * 50.0 / 75.0) * (drift + 1e-9);
        assert!(crate::geometry::distance(double[later], full[index]) <= max_step_length);
    }
}

#[cfg(test)]
#[test]
fn test_non_finite_amount() {
    for amount in vec![f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        match generate(&parameters(125, 75, 25, amount), 300.0, 300.0) {
            Err(Error::InvalidParameter { name, .. }) => assert_eq!(name, "amount"),
            result => panic!("unexpected result for {}: {:?}", amount, result),
        }
    }
}

#[cfg(test)]
#[test]
fn test_full_curve_closes() {
    let path = generate(&parameters(125, 75, 25, 1.0), 300.0, 300.0).unwrap();
    let start = path[0];

    // Bounds the movement of the traced point over a single step.
    let max_step_length = (50.0 + 25.0 * 50.0 / 75.0) * STEP;

    let closest = path[path.len() / 2..]
        .iter()
        .map(|point| crate::geometry::distance(*point, start))
        .fold(f64::INFINITY, f64::min);
    assert!(closest < max_step_length);
}

#[cfg(test)]
#[test]
fn test_partial_curve_does_not_close() {
    let path = generate(&parameters(125, 75, 25, 0.5), 300.0, 300.0).unwrap();
    assert_eq!(path.len(), 950);
    let start = path[0];
    assert!(path[1..]
        .iter()
        .all(|point| crate::geometry::distance(*point, start) > 0.1));
}

#[cfg(test)]
#[test]
fn test_size_only_translates() {
    let params = parameters(80, 30, 45, 1.0);
    let small = generate(&params, 100.0, 50.0).unwrap();
    let large = generate(&params, 500.0, 650.0).unwrap();
    assert_eq!(small.len(), large.len());
    for (small_point, large_point) in small.iter().zip(large.iter()) {
        assert_float_absolute_eq!(large_point.x - small_point.x, 200.0, 1e-9);
        assert_float_absolute_eq!(large_point.y - small_point.y, 300.0, 1e-9);
    }
}

#[cfg(test)]
#[test]
fn test_equal_radii() {
    let params = parameters(10, 10, 5, 0.5);
    assert_eq!(params.divisor(), 10);
    assert_float_absolute_eq!(params.end_theta(), 3.5, 1e-12);

    let path = generate(&params, 40.0, 60.0).unwrap();
    assert_eq!(path.len(), 350);
    let center = Point { x: 20.0, y: 30.0 };
    for point in path.iter() {
        assert_float_absolute_eq!(crate::geometry::distance(*point, center), 5.0, 1e-9);
    }
}

#[cfg(test)]
#[test]
fn test_negative_difference_and_distance() {
    let path = generate(&parameters(30, 90, -40, 1.0), 0.0, 0.0).unwrap();
    assert_float_absolute_eq!(path[0].x, -60.0 - 40.0, 1e-9);
    assert_float_absolute_eq!(path[0].y, 0.0, 1e-9);
}

#[cfg(test)]
#[test]
fn test_zero_radius() {
    match generate(&parameters(0, 75, 25, 1.0), 300.0, 300.0) {
        Err(Error::InvalidParameter { name, .. }) => assert_eq!(name, "inner-radius"),
        result => panic!("unexpected result: {:?}", result),
    }
    match generate(&parameters(125, 0, 25, 1.0), 300.0, 300.0) {
        Err(Error::InvalidParameter { name, .. }) => assert_eq!(name, "outer-radius"),
        result => panic!("unexpected result: {:?}", result),
    }
}
