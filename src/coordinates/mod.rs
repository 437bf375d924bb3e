//! Angular coordinates: unit-preserving angles and the catalog angle parser.

pub mod angle;
pub mod parse;

pub use angle::{Angle, AngleFormat, AngleUnit, Sexagesimal};
pub use parse::{parse_angle, parse_dms, parse_hms, ParseAngleError};
