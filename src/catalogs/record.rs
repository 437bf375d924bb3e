//! Bright Star Catalog JSON records
//!
//! The catalog is a JSON array of objects. Each object carries the keys
//! `RA`, `Dec`, `V` and optionally `K`; any other keys are ignored.

use flate2::read::GzDecoder;
use log::debug;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::{io_err, BrightStarError, Result};

/// A single star as written in the catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StarRecord {
    /// Right ascension expression, e.g. `"00h 05m 09.9s"`
    #[serde(rename = "RA")]
    pub ra: String,
    /// Declination expression, e.g. `"+45° 13′ 45″"`
    #[serde(rename = "Dec")]
    pub dec: String,
    /// Visual magnitude
    #[serde(rename = "V")]
    pub v: Scalar,
    /// Class code; `None` only when the key is absent
    #[serde(rename = "K", default, deserialize_with = "present")]
    pub k: Option<Scalar>,
}

/// A JSON field that may be written as a number or as numeric text
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Integer JSON number
    Int(i64),
    /// Non-integer JSON number (or an integer too large for i64)
    Float(f64),
    /// JSON string, parsed on demand
    Text(String),
}

impl Scalar {
    /// Interpret the value as a floating point number
    pub fn to_f64(&self, field: &'static str) -> Result<f64> {
        match self {
            Scalar::Int(v) => Ok(*v as f64),
            Scalar::Float(v) => Ok(*v),
            Scalar::Text(s) => s.trim().parse::<f64>().map_err(|_| BrightStarError::Number {
                field,
                input: s.clone(),
                expected: "a number",
            }),
        }
    }

    /// Interpret the value as an integer
    ///
    /// Fractional numbers are truncated toward zero; numeric text must be
    /// a plain base-10 integer.
    pub fn to_i64(&self, field: &'static str) -> Result<i64> {
        let invalid = || BrightStarError::Number {
            field,
            input: self.to_string(),
            expected: "an integer",
        };

        match self {
            Scalar::Int(v) => Ok(*v),
            Scalar::Float(v) => {
                let truncated = v.trunc();
                if truncated.is_finite()
                    && truncated >= i64::MIN as f64
                    && truncated < i64::MAX as f64
                {
                    Ok(truncated as i64)
                } else {
                    Err(invalid())
                }
            }
            Scalar::Text(s) => s.trim().parse::<i64>().map_err(|_| invalid()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl<'de> Visitor<'de> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number or a numeric string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Scalar, E> {
                Ok(Scalar::Int(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Scalar, E> {
                Ok(i64::try_from(v).map_or(Scalar::Float(v as f64), Scalar::Int))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Scalar, E> {
                Ok(Scalar::Float(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Scalar, E> {
                Ok(Scalar::Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Scalar, E> {
                Ok(Scalar::Text(v))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

/// A key that is present must hold a valid scalar, even when it is `null`
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Scalar>, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(Some)
}

/// Parse catalog records from JSON text
pub fn parse_catalog(text: &str) -> Result<Vec<StarRecord>> {
    let records: Vec<StarRecord> = serde_json::from_str(text)?;
    debug!("Parsed {} catalog records", records.len());
    Ok(records)
}

/// Parse catalog records from a reader
pub fn read_catalog<R: Read>(reader: R) -> Result<Vec<StarRecord>> {
    let records: Vec<StarRecord> = serde_json::from_reader(BufReader::new(reader))?;
    debug!("Read {} catalog records", records.len());
    Ok(records)
}

/// Load catalog records from a file
///
/// Files ending in `.gz` are decompressed first. The whole file is read
/// before parsing so that read failures and JSON failures stay distinct.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<StarRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_err(path, e))?;

    let is_gzipped = path.to_string_lossy().ends_with(".gz");
    let mut reader: Box<dyn Read> = if is_gzipped {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| io_err(path, e))?;
    debug!("Read {} bytes from {}", text.len(), path.display());

    parse_catalog(&text)
}
