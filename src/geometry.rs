//! Basic operations on points and polylines.

use ordered_float::OrderedFloat;
use std::f64::consts::PI;

pub use svg2polylines::CoordinatePair as Point;
pub use svg2polylines::Polyline;

/// Return the distance between two points.
pub fn distance(left_point: Point, right_point: Point) -> f64 {
    let delta_x = left_point.x - right_point.x;
    let delta_y = left_point.y - right_point.y;
    delta_x.hypot(delta_y)
}

/// Move a point by an offset.
pub fn translate_point(point: &mut Point, x_offset: f64, y_offset: f64) {
    point.x += x_offset;
    point.y += y_offset;
}

/// Move all the points of a polyline by an offset.
pub fn translate_polyline(polyline: &mut Polyline, x_offset: f64, y_offset: f64) {
    for point in polyline.iter_mut() {
        translate_point(point, x_offset, y_offset);
    }
}

/// Rotate a point around the origin (positive angles turn clockwise when Y points down).
pub fn rotate_point(point: Point, radians: f64) -> Point {
    let cosine = radians.cos();
    let sine = radians.sin();
    Point {
        x: point.x * cosine - point.y * sine,
        y: point.x * sine + point.y * cosine,
    }
}

#[cfg(test)]
fn assert_point(point: Point, x: f64, y: f64) {
    assert_float_absolute_eq!(point.x, x, 1e-6);
    assert_float_absolute_eq!(point.y, y, 1e-6);
}

#[cfg(test)]
#[test]
fn test_translate_and_rotate() {
    let mut square = vec![
        Point { x: 0.0, y: 0.0 },
        Point { x: 1.0, y: 0.0 },
        Point { x: 1.0, y: 1.0 },
        Point { x: 0.0, y: 1.0 },
    ];
    translate_polyline(&mut square, 2.0, -1.0);
    assert_point(square[0], 2.0, -1.0);
    assert_point(square[2], 3.0, 0.0);
    assert_float_absolute_eq!(distance(square[0], square[2]), 2.0_f64.sqrt(), 1e-9);

    assert_point(rotate_point(Point { x: 1.0, y: 0.0 }, PI / 2.0), 0.0, 1.0);
    assert_point(rotate_point(Point { x: 0.0, y: 1.0 }, PI), 0.0, -1.0);
}

/// Return the minimal and maximal coordinates in some paths, if there are any points at all.
pub fn bounding_box(polylines: &[Polyline]) -> Option<(Point, Point)> {
    let points = || polylines.iter().flat_map(|polyline| polyline.iter());
    let minimal_x = points().map(|point| OrderedFloat(point.x)).min()?;
    let minimal_y = points().map(|point| OrderedFloat(point.y)).min()?;
    let maximal_x = points().map(|point| OrderedFloat(point.x)).max()?;
    let maximal_y = points().map(|point| OrderedFloat(point.y)).max()?;
    Some((
        Point {
            x: *minimal_x,
            y: *minimal_y,
        },
        Point {
            x: *maximal_x,
            y: *maximal_y,
        },
    ))
}

#[cfg(test)]
#[test]
fn test_bounding_box() {
    assert!(bounding_box(&[]).is_none());
    assert!(bounding_box(&[vec![]]).is_none());

    let polylines = vec![
        vec![Point { x: -1.0, y: 0.0 }, Point { x: 0.0, y: -2.0 }],
        vec![],
        vec![Point { x: 3.0, y: 0.5 }],
    ];
    let (minimal_point, maximal_point) = bounding_box(&polylines).unwrap();
    assert_point(minimal_point, -1.0, -2.0);
    assert_point(maximal_point, 3.0, 0.5);
}

/// The number of linear segments needed to approximate a circular sweep of some radius, such that
/// no segment strays from the circle by more than the tolerance.
pub fn steps_count(radius: f64, sweep: f64, tolerance: f64) -> usize {
    let max_step_angle = 2.0 * (1.0 - tolerance / radius.abs()).max(-1.0).acos();
    let steps_amount = (sweep.abs() / max_step_angle).ceil();
    if steps_amount.is_finite() && steps_amount >= 1.0 {
        steps_amount as usize
    } else {
        1
    }
}

#[cfg(test)]
#[test]
fn test_steps_count() {
    // A chord deviates by r * (1 - cos(step / 2)) from the circle.
    let steps = steps_count(100.0, 2.0 * PI, 0.1);
    let step_angle = 2.0 * PI / steps as f64;
    assert!(100.0 * (1.0 - (step_angle / 2.0).cos()) <= 0.1);
    let coarser_angle = 2.0 * PI / (steps - 1) as f64;
    assert!(100.0 * (1.0 - (coarser_angle / 2.0).cos()) > 0.1);

    assert!(steps_count(0.0, 2.0 * PI, 0.1) == 1);
    assert!(steps_count(100.0, 0.0, 0.1) == 1);
    assert!(steps_count(100.0, -PI, 0.1) == steps_count(100.0, PI, 0.1));
}
