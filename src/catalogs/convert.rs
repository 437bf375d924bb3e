//! Record conversion: catalog text fields to numeric star entries

use log::{debug, trace};

use super::record::StarRecord;
use crate::coordinates::{parse_angle, AngleUnit};
use crate::{BrightStarError, Result};

/// Sentinel written for a star without a class code
pub const MISSING_CLASS: i64 = -1;

/// Number of decimal places used for floating point output
pub const DEFAULT_PRECISION: usize = 6;

/// A star with its position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertedStar {
    /// Right ascension in degrees
    pub ra_deg: f64,
    /// Declination in degrees
    pub dec_deg: f64,
    /// Class code, if the record had one
    pub class: Option<i64>,
    /// Visual magnitude (lower is brighter)
    pub magnitude: f64,
}

impl ConvertedStar {
    /// Class code with absent values replaced by `sentinel`
    pub fn class_or(&self, sentinel: i64) -> i64 {
        self.class.unwrap_or(sentinel)
    }
}

/// Conversion and output settings
///
/// The defaults reproduce the legacy star table: RA without a unit marker
/// is read as hours, Dec as degrees, a missing class is written as `-1`
/// and floats carry six decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterConfig {
    /// Unit for RA expressions that carry no unit marker
    pub ra_unit: AngleUnit,
    /// Unit for Dec expressions that carry no unit marker
    pub dec_unit: AngleUnit,
    /// Value written in place of an absent class code
    pub missing_class: i64,
    /// Decimal places for floating point fields
    pub precision: usize,
}

impl ConverterConfig {
    /// Create a configuration with the legacy defaults
    pub fn new() -> Self {
        Self {
            ra_unit: AngleUnit::Hours,
            dec_unit: AngleUnit::Degrees,
            missing_class: MISSING_CLASS,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Set the unit assumed for unmarked RA expressions
    pub fn with_ra_unit(mut self, unit: AngleUnit) -> Self {
        self.ra_unit = unit;
        self
    }

    /// Set the unit assumed for unmarked Dec expressions
    pub fn with_dec_unit(mut self, unit: AngleUnit) -> Self {
        self.dec_unit = unit;
        self
    }

    /// Set the sentinel written for stars without a class code
    pub fn with_missing_class(mut self, sentinel: i64) -> Self {
        self.missing_class = sentinel;
        self
    }

    /// Set the number of decimals for floating point fields
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a single catalog record
pub fn convert_record(record: &StarRecord, config: &ConverterConfig) -> Result<ConvertedStar> {
    let ra = parse_angle(&record.ra, config.ra_unit).map_err(|source| BrightStarError::Angle {
        field: "RA",
        input: record.ra.clone(),
        source,
    })?;
    let dec = parse_angle(&record.dec, config.dec_unit).map_err(|source| {
        BrightStarError::Angle {
            field: "Dec",
            input: record.dec.clone(),
            source,
        }
    })?;

    let class = record.k.as_ref().map(|k| k.to_i64("K")).transpose()?;
    let magnitude = record.v.to_f64("V")?;

    Ok(ConvertedStar {
        ra_deg: ra.to_degrees(),
        dec_deg: dec.to_degrees(),
        class,
        magnitude,
    })
}

/// Convert every record, keeping catalog order
///
/// Stops at the first failing record; the error carries its index.
pub fn convert_catalog(records: &[StarRecord], config: &ConverterConfig) -> Result<Vec<ConvertedStar>> {
    let stars = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let star = convert_record(record, config).map_err(|e| BrightStarError::Record {
                index,
                source: Box::new(e),
            })?;
            trace!("Record {}: {:?} -> {:?}", index, record, star);
            Ok(star)
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Converted {} records", stars.len());
    Ok(stars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogs::record::Scalar;
    use crate::coordinates::ParseAngleError;
    use approx::assert_relative_eq;

    fn record(ra: &str, dec: &str, v: Scalar, k: Option<Scalar>) -> StarRecord {
        StarRecord {
            ra: ra.to_string(),
            dec: dec.to_string(),
            v,
            k,
        }
    }

    #[test]
    fn test_convert_record_with_class() {
        let star = convert_record(
            &record(
                "10:00:00",
                "+20:00:00",
                Scalar::Text("5.5".to_string()),
                Some(Scalar::Text("2".to_string())),
            ),
            &ConverterConfig::default(),
        )
        .unwrap();

        assert_eq!(star.ra_deg, 150.0);
        assert_eq!(star.dec_deg, 20.0);
        assert_eq!(star.class, Some(2));
        assert_eq!(star.magnitude, 5.5);
    }

    #[test]
    fn test_convert_record_without_class() {
        let star = convert_record(
            &record("06:45:08.9", "-16:42:58", Scalar::Float(-1.46), None),
            &ConverterConfig::default(),
        )
        .unwrap();

        assert_relative_eq!(star.ra_deg, 101.287_083_333, epsilon = 1e-6);
        assert_relative_eq!(star.dec_deg, -16.716_111_111, epsilon = 1e-6);
        assert_eq!(star.class, None);
        assert_eq!(star.class_or(MISSING_CLASS), -1);
    }

    #[test]
    fn test_explicit_minus_one_class_stays_present() {
        let star = convert_record(
            &record("0:0:0", "0:0:0", Scalar::Int(1), Some(Scalar::Int(-1))),
            &ConverterConfig::default(),
        )
        .unwrap();
        assert_eq!(star.class, Some(-1));
    }

    #[test]
    fn test_config_units_apply_to_unmarked_expressions() {
        let config = ConverterConfig::default().with_ra_unit(AngleUnit::Degrees);
        let star = convert_record(
            &record("150:00:00", "+20:00:00", Scalar::Int(1), None),
            &config,
        )
        .unwrap();
        assert_eq!(star.ra_deg, 150.0);

        let config = ConverterConfig::default().with_dec_unit(AngleUnit::Hours);
        let star = convert_record(&record("0", "1", Scalar::Int(1), None), &config).unwrap();
        assert_eq!(star.dec_deg, 15.0);
    }

    #[test]
    fn test_bad_dec_reports_field() {
        let err = convert_record(
            &record("10:00:00", "north", Scalar::Int(1), None),
            &ConverterConfig::default(),
        )
        .unwrap_err();

        match err {
            BrightStarError::Angle {
                field,
                input,
                source,
            } => {
                assert_eq!(field, "Dec");
                assert_eq!(input, "north");
                assert_eq!(source, ParseAngleError::Unrecognized);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_magnitude_reports_field() {
        let err = convert_record(
            &record("10:00:00", "+20:00:00", Scalar::Text("n/a".to_string()), None),
            &ConverterConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, BrightStarError::Number { field: "V", .. }));
    }

    #[test]
    fn test_convert_catalog_stops_at_first_bad_record() {
        let records = vec![
            record("10:00:00", "+20:00:00", Scalar::Int(1), None),
            record("10:00:00", "+20:00:00", Scalar::Int(1), Some(Scalar::Text("x".to_string()))),
            record("bad", "+20:00:00", Scalar::Int(1), None),
        ];

        let err = convert_catalog(&records, &ConverterConfig::default()).unwrap_err();
        match err {
            BrightStarError::Record { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(*source, BrightStarError::Number { field: "K", .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_convert_catalog_empty() {
        let stars = convert_catalog(&[], &ConverterConfig::default()).unwrap();
        assert!(stars.is_empty());
    }
}
