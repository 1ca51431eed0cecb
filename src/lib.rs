// Copyright (C) 2021 Oren Ben-Kiki
//
// This program is free software: you can redistribute it and/or modify it under the terms of the
// GNU Affero General Public License as published by the Free Software Foundation, either version 3
// of the License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without
// even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License along with this program.
// If not, see <https://www.gnu.org/licenses/>.

//! Generate Spirograph curves and other simple shape outlines as polylines.

#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

pub mod error;
pub mod geometry;
pub mod program;
pub mod shapes;
pub mod spirograph;
pub mod svg;

pub use error::Error;
pub use error::Result;
pub use geometry::Point;
pub use spirograph::generate;
pub use spirograph::CurvePath;
pub use spirograph::SpirographParameters;
