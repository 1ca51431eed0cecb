//! Simple shape outlines: a triangle, an arc and a flower made of elliptic petals.
//!
//! All shapes are placed in a `width` by `height` rectangle whose origin is the top-left corner,
//! with Y pointing down. Curved outlines are approximated by polylines whose segments stray from
//! the true curve by at most a tolerance.

use crate::error::Error;
use crate::error::Result;
use crate::geometry::rotate_point;
use crate::geometry::steps_count;
use crate::geometry::translate_point;
use crate::geometry::Point;
use crate::geometry::Polyline;
use std::f64::consts::PI;

fn validate_tolerance(tolerance: f64) -> Result<()> {
    if tolerance > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_parameter(
            "tolerance",
            format!("{} is not positive", tolerance),
        ))
    }
}

/// A triangle with its apex at the top middle of the rectangle and its base at the bottom.
///
/// The last point repeats the first, so the outline is closed even if it is not filled.
pub fn triangle(width: f64, height: f64) -> Polyline {
    let apex = Point {
        x: width / 2.0,
        y: 0.0,
    };
    vec![
        apex,
        Point { x: 0.0, y: height },
        Point {
            x: width,
            y: height,
        },
        apex,
    ]
}

/// An arc of the circle inscribed in the width of the rectangle.
#[derive(Clone, Copy, Debug)]
pub struct Arc {
    /// The start angle in degrees, where zero is at the top.
    pub start_angle: f64,

    /// The end angle in degrees, where zero is at the top.
    pub end_angle: f64,

    /// Whether to go from the start to the end in the (visually) clockwise direction.
    pub clockwise: bool,

    /// How much to shrink the radius by (e.g. to keep a thick stroke inside the rectangle).
    pub inset: f64,
}

impl Default for Arc {
    fn default() -> Self {
        Arc {
            start_angle: 0.0,
            end_angle: 110.0,
            clockwise: true,
            inset: 0.0,
        }
    }
}

impl Arc {
    /// Return a copy of the arc with its radius reduced by an additional amount.
    pub fn inset(&self, amount: f64) -> Self {
        Arc {
            inset: self.inset + amount,
            ..*self
        }
    }

    /// The signed angle (in radians) swept from the start to the end.
    pub fn sweep(&self) -> f64 {
        let delta = self.end_angle - self.start_angle;
        let degrees = if delta.abs() >= 360.0 {
            360.0
        } else if self.clockwise {
            delta.rem_euclid(360.0)
        } else {
            (-delta).rem_euclid(360.0)
        };
        if self.clockwise {
            degrees.to_radians()
        } else {
            -degrees.to_radians()
        }
    }

    /// Generate the points of the arc.
    pub fn polyline(&self, width: f64, height: f64, tolerance: f64) -> Result<Polyline> {
        validate_tolerance(tolerance)?;

        let radius = width / 2.0 - self.inset;
        if radius < 0.0 {
            return Err(Error::invalid_parameter(
                "inset",
                format!("{} is larger than half the width {}", self.inset, width / 2.0),
            ));
        }

        let start = (self.start_angle - 90.0).to_radians();
        let sweep = self.sweep();
        let steps = if sweep == 0.0 {
            0
        } else {
            steps_count(radius, sweep, tolerance)
        };

        let polyline = (0..=steps)
            .map(|step| {
                let angle = if steps == 0 {
                    start
                } else {
                    start + sweep * step as f64 / steps as f64
                };
                Point {
                    x: width / 2.0 + radius * angle.cos(),
                    y: height / 2.0 + radius * angle.sin(),
                }
            })
            .collect();
        Ok(polyline)
    }
}

/// A flower made of elliptic petals arranged around the center of the rectangle.
#[derive(Clone, Copy, Debug)]
pub struct Flower {
    /// How far the petals are from the center (negative values overlap the center).
    pub petal_offset: f64,

    /// How wide each petal is.
    pub petal_width: f64,
}

impl Default for Flower {
    fn default() -> Self {
        Flower {
            petal_offset: -20.0,
            petal_width: 100.0,
        }
    }
}

impl Flower {
    /// The number of petals.
    pub const PETALS: usize = 16;

    /// Generate a closed polyline for each petal (meant to be filled using the even-odd rule).
    pub fn polylines(&self, width: f64, height: f64, tolerance: f64) -> Result<Vec<Polyline>> {
        validate_tolerance(tolerance)?;

        let x_radius = self.petal_width / 2.0;
        let y_radius = width / 4.0;
        let center = Point {
            x: self.petal_offset + x_radius,
            y: y_radius,
        };
        let steps = steps_count(x_radius.abs().max(y_radius.abs()), 2.0 * PI, tolerance).max(8);

        let polylines = (0..Flower::PETALS)
            .map(|petal| {
                let rotation = petal as f64 * 2.0 * PI / Flower::PETALS as f64;
                (0..steps)
                    .map(|step| {
                        let angle = 2.0 * PI * step as f64 / steps as f64;
                        let petal_point = Point {
                            x: center.x + x_radius * angle.cos(),
                            y: center.y + y_radius * angle.sin(),
                        };
                        let mut point = rotate_point(petal_point, rotation);
                        translate_point(&mut point, width / 2.0, height / 2.0);
                        point
                    })
                    .collect()
            })
            .collect();
        Ok(polylines)
    }
}
