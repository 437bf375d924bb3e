//! Angle parsing from catalog text.
//!
//! Catalog files write coordinates in a handful of notations:
//!
//! ```text
//! Colon-separated:  10:00:00      -05:30:00     10:30
//! Space-separated:  10 00 00      -05 30 00
//! Letter markers:   10h30m15s     45d30m15s     12ʰ30ᵐ15ˢ
//! Symbol notation:  45°30′15″     45°30'15"
//! Decimal + unit:   150.5d        150.5deg      10.5h         2.6rad
//! Bare decimal:     150.5
//! ```
//!
//! Notations with a unit marker fix the unit themselves. Colon, space and
//! bare decimal notations carry no unit, so the caller supplies one: hours
//! for right ascension, degrees for declination.
//!
//! A sign may only appear at the start and applies to the whole value:
//! `-00:30:00` is -0.5 degrees.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use thiserror::Error;

use super::angle::{Angle, AngleUnit};

/// Errors produced while parsing an angle expression
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseAngleError {
    /// The expression is empty or only whitespace
    #[error("empty angle expression")]
    Empty,

    /// The expression matches none of the supported notations
    #[error("unrecognized angle notation")]
    Unrecognized,

    /// A minutes or seconds component is outside 0..60
    #[error("{component} component {value} must be below 60")]
    ComponentOutOfRange {
        /// Either "minutes" or "seconds"
        component: &'static str,
        /// The offending value
        value: f64,
    },

    /// A fractional component is followed by further components
    #[error("only the last component may have a fractional part")]
    FractionalComponent,
}

lazy_static! {
    /// Up to three unmarked components separated by colons or whitespace
    static ref UNMARKED: Regex = Regex::new(
        r"^(\d+(?:\.\d*)?|\.\d+)(?:[:\s]+(\d+(?:\.\d*)?))?(?:[:\s]+(\d+(?:\.\d*)?))?$"
    )
    .unwrap();

    /// Leading component with an h/d marker, optional minutes and seconds
    static ref MARKED: Regex = Regex::new(
        r#"(?x)
        ^(\d+(?:\.\d*)?|\.\d+)\s*([hd])           # whole component and its unit
        \s*(?:
            (\d+(?:\.\d*)?)\s*                    # minutes
            (?:[m']\s*
                (?:(\d+(?:\.\d*)?)\s*(?:s|")?)?   # seconds
            )?
        )?$
        "#
    )
    .unwrap();

    /// Decimal radians
    static ref RADIANS: Regex =
        Regex::new(r"^(\d+(?:\.\d*)?|\.\d+)\s*rad(?:ians?)?$").unwrap();
}

/// Parse an angle expression, using `default_unit` for notations without
/// a unit marker.
///
/// # Examples
///
/// ```rust
/// use brightstar::coordinates::angle::AngleUnit;
/// use brightstar::coordinates::parse::parse_angle;
///
/// let ra = parse_angle("10:00:00", AngleUnit::Hours).unwrap();
/// assert_eq!(ra.to_degrees(), 150.0);
///
/// let dec = parse_angle("-05:30:00", AngleUnit::Degrees).unwrap();
/// assert_eq!(dec.to_degrees(), -5.5);
/// ```
pub fn parse_angle(input: &str, default_unit: AngleUnit) -> Result<Angle, ParseAngleError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseAngleError::Empty);
    }

    let (negative, body) = split_sign(trimmed);
    let body = normalize(body);
    if body.is_empty() {
        return Err(ParseAngleError::Unrecognized);
    }

    let (unit, magnitude) = if let Some(caps) = RADIANS.captures(&body) {
        (AngleUnit::Radians, parse_component(&caps[1])?)
    } else if let Some(caps) = UNMARKED.captures(&body) {
        (default_unit, combine(&caps, 1)?)
    } else if let Some(caps) = MARKED.captures(&body) {
        let unit = if &caps[2] == "h" {
            AngleUnit::Hours
        } else {
            AngleUnit::Degrees
        };
        (unit, combine_marked(&caps)?)
    } else {
        return Err(ParseAngleError::Unrecognized);
    };

    let value = if negative { -magnitude } else { magnitude };
    Ok(Angle::from_value(value, unit))
}

/// Parse an hours-minutes-seconds expression (right ascension)
pub fn parse_hms(input: &str) -> Result<Angle, ParseAngleError> {
    parse_angle(input, AngleUnit::Hours)
}

/// Parse a degrees-minutes-seconds expression (declination)
pub fn parse_dms(input: &str) -> Result<Angle, ParseAngleError> {
    parse_angle(input, AngleUnit::Degrees)
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest.trim_start())
    } else if let Some(rest) = s.strip_prefix('\u{2212}') {
        (true, rest.trim_start())
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest.trim_start())
    } else {
        (false, s)
    }
}

/// Lower-cases and folds unit words and typographic markers into the
/// single-letter forms the patterns expect.
fn normalize(s: &str) -> String {
    let mut result = s.trim().to_lowercase();

    for (from, to) in [
        ("degrees", "d"),
        ("degree", "d"),
        ("deg", "d"),
        ("hours", "h"),
        ("hour", "h"),
        ("\u{b0}", "d"),  // °
        ("\u{2b0}", "h"), // ʰ
        ("\u{1d50}", "m"), // ᵐ
        ("\u{2e2}", "s"), // ˢ
        ("\u{2032}", "'"), // ′
        ("\u{2033}", "\""), // ″
        ("''", "\""),
    ] {
        result = result.replace(from, to);
    }

    result
}

fn parse_component(s: &str) -> Result<f64, ParseAngleError> {
    s.parse::<f64>().map_err(|_| ParseAngleError::Unrecognized)
}

/// Sums whole/minutes/seconds captures starting at group `first`.
fn combine(caps: &Captures, first: usize) -> Result<f64, ParseAngleError> {
    let parts: Vec<&str> = (first..first + 3)
        .filter_map(|i| caps.get(i).map(|m| m.as_str()))
        .collect();
    sum_components(&parts)
}

fn combine_marked(caps: &Captures) -> Result<f64, ParseAngleError> {
    let parts: Vec<&str> = [1, 3, 4]
        .iter()
        .filter_map(|&i| caps.get(i).map(|m| m.as_str()))
        .collect();
    sum_components(&parts)
}

fn sum_components(parts: &[&str]) -> Result<f64, ParseAngleError> {
    if parts[..parts.len().saturating_sub(1)]
        .iter()
        .any(|p| p.contains('.'))
    {
        return Err(ParseAngleError::FractionalComponent);
    }

    let mut total = 0.0;
    for (i, part) in parts.iter().enumerate() {
        let value = parse_component(part)?;
        match i {
            0 => total += value,
            1 => {
                check_range("minutes", value)?;
                total += value / 60.0;
            }
            _ => {
                check_range("seconds", value)?;
                total += value / 3600.0;
            }
        }
    }

    Ok(total)
}

fn check_range(component: &'static str, value: f64) -> Result<(), ParseAngleError> {
    if value >= 60.0 {
        return Err(ParseAngleError::ComponentOutOfRange { component, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    const EPSILON: f64 = 1e-10;

    #[rstest]
    #[case("10:00:00", 150.0)]
    #[case("10 00 00", 150.0)]
    #[case("10:30", 157.5)]
    #[case("10", 150.0)]
    #[case("10.5", 157.5)]
    #[case("  00:05:09.9  ", 1.29125)]
    #[case("10h30m00s", 157.5)]
    #[case("10h 30m", 157.5)]
    #[case("10H30M", 157.5)]
    #[case("12ʰ30ᵐ00ˢ", 187.5)]
    #[case("10 hours", 150.0)]
    #[case("150d", 150.0)]
    #[case("150.5deg", 150.5)]
    fn test_right_ascension_notations(#[case] input: &str, #[case] expected_deg: f64) {
        let angle = parse_hms(input).unwrap();
        assert_relative_eq!(angle.to_degrees(), expected_deg, epsilon = EPSILON);
    }

    #[rstest]
    #[case("+20:00:00", 20.0)]
    #[case("-05:30:00", -5.5)]
    #[case("-00:30:00", -0.5)]
    #[case("- 05 30 00", -5.5)]
    #[case("\u{2212}05:30:00", -5.5)]
    #[case("+45°13′45″", 45.229_166_666_666_67)]
    #[case("+45°13'45\"", 45.229_166_666_666_67)]
    #[case("45° 13' 45''", 45.229_166_666_666_67)]
    #[case("45d13m45s", 45.229_166_666_666_67)]
    #[case("45 degrees 13'", 45.216_666_666_666_67)]
    #[case("-12.25", -12.25)]
    #[case("1h", 15.0)]
    fn test_declination_notations(#[case] input: &str, #[case] expected_deg: f64) {
        let angle = parse_dms(input).unwrap();
        assert_relative_eq!(angle.to_degrees(), expected_deg, epsilon = EPSILON);
    }

    #[test]
    fn test_radians_suffix() {
        let angle = parse_dms("1.5rad").unwrap();
        assert_eq!(angle.unit(), AngleUnit::Radians);
        assert_eq!(angle.to_radians(), 1.5);
    }

    #[test]
    fn test_explicit_unit_overrides_default() {
        let angle = parse_angle("45d30m", AngleUnit::Hours).unwrap();
        assert_eq!(angle.unit(), AngleUnit::Degrees);
        assert_relative_eq!(angle.to_degrees(), 45.5, epsilon = EPSILON);
    }

    #[test]
    fn test_right_ascension_is_not_range_limited() {
        let angle = parse_hms("-01:00:00").unwrap();
        assert_eq!(angle.to_degrees(), -15.0);

        let angle = parse_hms("25:00:00").unwrap();
        assert_eq!(angle.to_degrees(), 375.0);
    }

    #[rstest]
    #[case("", ParseAngleError::Empty)]
    #[case("   ", ParseAngleError::Empty)]
    #[case("-", ParseAngleError::Unrecognized)]
    #[case("abc", ParseAngleError::Unrecognized)]
    #[case("10:-30:00", ParseAngleError::Unrecognized)]
    #[case("10:00:00:00", ParseAngleError::Unrecognized)]
    #[case("10.5:30", ParseAngleError::FractionalComponent)]
    #[case("10:75:00", ParseAngleError::ComponentOutOfRange { component: "minutes", value: 75.0 })]
    #[case("10h00m60s", ParseAngleError::ComponentOutOfRange { component: "seconds", value: 60.0 })]
    fn test_rejects_malformed(#[case] input: &str, #[case] expected: ParseAngleError) {
        assert_eq!(parse_dms(input).unwrap_err(), expected);
    }

    #[rstest]
    #[case(150.0)]
    #[case(-5.5)]
    #[case(0.000_123)]
    #[case(271.234_567_89)]
    #[case(-89.999_999)]
    fn test_formatted_sexagesimal_reparses(#[case] degrees: f64) {
        let angle = Angle::from_degrees(degrees);

        let dms_text = format!("{:.4}", angle.to_dms());
        assert_relative_eq!(parse_dms(&dms_text).unwrap().to_degrees(), degrees, epsilon = 1e-6);

        let hms_text = format!("{:.4}", angle.to_hms());
        assert_relative_eq!(parse_hms(&hms_text).unwrap().to_degrees(), degrees, epsilon = 1e-6);
    }
}
