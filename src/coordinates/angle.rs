//! # Angle Representation Module
//!
//! This module provides exact angle representation that preserves the original
//! precision and unit (degrees, hours or radians) of angular measurements.
//!
//! ## Design Philosophy
//!
//! Catalog coordinates arrive in mixed units: right ascension is usually
//! written in hours, declination in degrees. The `Angle` type keeps the
//! numerical value in the unit it was written in and only converts when a
//! caller asks for a specific unit via `to_degrees()`, `to_hours()` or
//! `to_radians()`.
//!
//! ## Sexagesimal Values
//!
//! [`Sexagesimal`] splits an angle into base-60 components
//! (whole hours/degrees, minutes, seconds) and can rebuild the angle from
//! them. Its `Display` implementation writes the colon notation accepted by
//! the parser in [`super::parse`], e.g. `+05:30:00.000`.
//!
//! ## Examples
//!
//! ```rust
//! use brightstar::coordinates::angle::{Angle, AngleUnit};
//!
//! // Ten hours of right ascension is 150 degrees
//! let ra = Angle::from_hours(10.0);
//! assert_eq!(ra.to_degrees(), 150.0);
//!
//! // Degrees are stored exactly as provided
//! let dec = Angle::from_degrees(-5.5);
//! assert_eq!(dec.to_unit(AngleUnit::Degrees), -5.5);
//! ```

use std::f64::consts::PI;
use std::fmt;

/// Unit an angle value is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    /// Degrees, 360 per turn
    Degrees,
    /// Hours of arc, 24 per turn (1h = 15 degrees)
    Hours,
    /// Radians, 2π per turn
    Radians,
}

impl AngleUnit {
    /// Number of degrees in one of this unit
    pub fn degrees_per_unit(self) -> f64 {
        match self {
            AngleUnit::Degrees => 1.0,
            AngleUnit::Hours => 15.0,
            AngleUnit::Radians => 180.0 / PI,
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AngleUnit::Degrees => "degrees",
            AngleUnit::Hours => "hours",
            AngleUnit::Radians => "radians",
        };
        f.write_str(name)
    }
}

/// Internal representation format for angle values
///
/// This enum allows the `Angle` struct to maintain the exact numerical
/// value in its original unit, preventing precision loss from unnecessary
/// conversions during construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleFormat {
    /// Angle stored in degrees
    Degrees(f64),
    /// Angle stored in hours
    Hours(f64),
    /// Angle stored in radians
    Radians(f64),
}

/// Represents an angular measurement with exact precision preservation
///
/// The `Angle` type stores angular values in their original unit to
/// maintain maximum precision. Conversion only occurs when explicitly
/// requested.
///
/// # Precision Guarantees
///
/// - Values read back in their original unit are returned exactly
/// - Hours and degrees convert through the exact factor 15
/// - Radian conversions use `std::f64::consts::PI`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    /// Internal storage maintaining original unit and value
    angle: AngleFormat,
}

impl Angle {
    /// Creates an angle from a value in degrees
    ///
    /// # Examples
    ///
    /// ```rust
    /// use brightstar::coordinates::angle::Angle;
    ///
    /// let right_angle = Angle::from_degrees(90.0);
    /// assert_eq!(right_angle.to_degrees(), 90.0);
    /// ```
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            angle: AngleFormat::Degrees(degrees),
        }
    }

    /// Creates an angle from a value in hours of arc
    ///
    /// # Examples
    ///
    /// ```rust
    /// use brightstar::coordinates::angle::Angle;
    ///
    /// let six_hours = Angle::from_hours(6.0);
    /// assert_eq!(six_hours.to_degrees(), 90.0);
    /// ```
    pub fn from_hours(hours: f64) -> Self {
        Angle {
            angle: AngleFormat::Hours(hours),
        }
    }

    /// Creates an angle from a value in radians
    pub fn from_radians(radians: f64) -> Self {
        Angle {
            angle: AngleFormat::Radians(radians),
        }
    }

    /// Creates an angle from a value expressed in `unit`
    pub fn from_value(value: f64, unit: AngleUnit) -> Self {
        match unit {
            AngleUnit::Degrees => Self::from_degrees(value),
            AngleUnit::Hours => Self::from_hours(value),
            AngleUnit::Radians => Self::from_radians(value),
        }
    }

    /// Returns the angle value in degrees
    ///
    /// # Precision Notes
    ///
    /// - Angles stored as degrees return exact original values
    /// - Hours convert with `hours * 15.0`
    /// - Radians convert with `radians * (180.0 / π)`
    pub fn to_degrees(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg,
            AngleFormat::Hours(hours) => hours * 15.0,
            AngleFormat::Radians(rad) => rad * (180.0 / PI),
        }
    }

    /// Returns the angle value in hours of arc
    pub fn to_hours(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg / 15.0,
            AngleFormat::Hours(hours) => hours,
            AngleFormat::Radians(rad) => rad * (12.0 / PI),
        }
    }

    /// Returns the angle value in radians
    pub fn to_radians(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg * (PI / 180.0),
            AngleFormat::Hours(hours) => hours * (PI / 12.0),
            AngleFormat::Radians(rad) => rad,
        }
    }

    /// Returns the angle value expressed in `unit`
    pub fn to_unit(&self, unit: AngleUnit) -> f64 {
        match unit {
            AngleUnit::Degrees => self.to_degrees(),
            AngleUnit::Hours => self.to_hours(),
            AngleUnit::Radians => self.to_radians(),
        }
    }

    /// Returns the internal format of this angle
    ///
    /// # Examples
    ///
    /// ```rust
    /// use brightstar::coordinates::angle::{Angle, AngleFormat};
    ///
    /// let angle = Angle::from_hours(2.5);
    /// match angle.format() {
    ///     AngleFormat::Hours(val) => assert_eq!(val, 2.5),
    ///     _ => panic!("Expected hours format"),
    /// }
    /// ```
    pub fn format(&self) -> AngleFormat {
        self.angle
    }

    /// Returns the unit the angle was created in
    pub fn unit(&self) -> AngleUnit {
        match self.angle {
            AngleFormat::Degrees(_) => AngleUnit::Degrees,
            AngleFormat::Hours(_) => AngleUnit::Hours,
            AngleFormat::Radians(_) => AngleUnit::Radians,
        }
    }

    /// Splits the angle into hours, minutes and seconds of time
    pub fn to_hms(&self) -> Sexagesimal {
        Sexagesimal::split(self.to_hours(), AngleUnit::Hours)
    }

    /// Splits the angle into degrees, arcminutes and arcseconds
    pub fn to_dms(&self) -> Sexagesimal {
        Sexagesimal::split(self.to_degrees(), AngleUnit::Degrees)
    }
}

/// Base-60 decomposition of an angle
///
/// The sign applies to the whole value, so `-00:30:00` is half a degree
/// south of the equator even though every component is zero or positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sexagesimal {
    /// Whether the angle is negative
    pub negative: bool,
    /// Whole hours or degrees
    pub whole: u64,
    /// Minutes, 0..60
    pub minutes: u32,
    /// Seconds including the fractional part, 0.0..60.0
    pub seconds: f64,
    /// Unit of the `whole` component (hours or degrees)
    pub unit: AngleUnit,
}

impl Sexagesimal {
    fn split(value: f64, unit: AngleUnit) -> Self {
        let magnitude = value.abs();
        let whole = magnitude.trunc();
        let minutes = (magnitude - whole) * 60.0;
        let whole_minutes = minutes.trunc();
        let seconds = (minutes - whole_minutes) * 60.0;

        Sexagesimal {
            negative: value < 0.0,
            whole: whole as u64,
            minutes: whole_minutes as u32,
            seconds,
            unit,
        }
    }

    /// Recombines the components into an [`Angle`] in `self.unit`
    pub fn to_angle(&self) -> Angle {
        let magnitude =
            self.whole as f64 + f64::from(self.minutes) / 60.0 + self.seconds / 3600.0;
        let value = if self.negative { -magnitude } else { magnitude };
        Angle::from_value(value, self.unit)
    }
}

/// Writes `±WW:MM:SS.sss`; the formatter precision sets the number of
/// fractional second digits (default 3). Rounding carries into minutes and
/// the whole component.
impl fmt::Display for Sexagesimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(3);
        let scale = 10f64.powi(digits as i32);

        let total = ((self.whole as f64 * 3600.0 + f64::from(self.minutes) * 60.0 + self.seconds)
            * scale)
            .round();
        let whole = (total / (3600.0 * scale)).floor();
        let rest = total - whole * 3600.0 * scale;
        let minutes = (rest / (60.0 * scale)).floor();
        let seconds = (rest - minutes * 60.0 * scale) / scale;

        let sign = if self.negative { '-' } else { '+' };
        let width = if digits == 0 { 2 } else { digits + 3 };
        write!(
            f,
            "{}{:02}:{:02}:{:0w$.p$}",
            sign,
            whole as u64,
            minutes as u64,
            seconds,
            w = width,
            p = digits
        )
    }
}
