//! Brightstar: converts Bright Star Catalog records into compact star tables
//!
//! Catalog records carry right ascension and declination as sexagesimal
//! text, a visual magnitude and an optional class code. This crate parses
//! those records, converts the coordinates to decimal degrees and writes
//! the array-of-tuples text consumed by star-field renderers:
//!
//! ```text
//! [[ra,dec,class,mag],
//! [ra,dec,class,mag]]
//! ```
//!
//! ```rust
//! use brightstar::{convert_text, ConverterConfig};
//!
//! let input = r#"[{"RA":"10:00:00","Dec":"+20:00:00","V":"5.5","K":"2"}]"#;
//! let output = convert_text(input, &ConverterConfig::default()).unwrap();
//! assert_eq!(output, "[[150.000000,20.000000,2,5.500000]]");
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod catalogs;
pub mod coordinates;

// Re-export commonly used types
pub use catalogs::{ConvertedStar, ConverterConfig, Scalar, StarRecord};
pub use coordinates::{Angle, AngleUnit, ParseAngleError};

/// Main error type for the brightstar library
#[derive(Debug, Error)]
pub enum BrightStarError {
    /// Error when the catalog file cannot be read
    #[error("I/O error on {path:?}: {source}")]
    Io {
        /// The path of the file that caused the error
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Malformed JSON, or a document that is not a list of star records
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record failed to convert
    #[error("record {index}: {source}")]
    Record {
        /// Zero-based position of the record in the catalog
        index: usize,
        /// What went wrong with it
        source: Box<BrightStarError>,
    },

    /// An RA or Dec expression could not be parsed
    #[error("invalid {field} angle {input:?}: {source}")]
    Angle {
        /// Field name as written in the catalog ("RA" or "Dec")
        field: &'static str,
        /// The offending expression
        input: String,
        /// Why the parser rejected it
        source: ParseAngleError,
    },

    /// A magnitude or class field is not a valid number
    #[error("invalid {field} value {input:?}: expected {expected}")]
    Number {
        /// Field name as written in the catalog ("V" or "K")
        field: &'static str,
        /// The offending value as text
        input: String,
        /// What the field should contain
        expected: &'static str,
    },
}

/// Result type for brightstar operations
pub type Result<T> = std::result::Result<T, BrightStarError>;

/// Helper function to convert a std::io::Error to BrightStarError
pub fn io_err(path: impl Into<PathBuf>, err: std::io::Error) -> BrightStarError {
    BrightStarError::Io {
        path: path.into(),
        source: err,
    }
}

/// Convert catalog JSON text into the star table text
///
/// The whole catalog is converted before any text is produced, so an error
/// in any record yields no output at all.
pub fn convert_text(text: &str, config: &ConverterConfig) -> Result<String> {
    let records = catalogs::parse_catalog(text)?;
    let stars = catalogs::convert_catalog(&records, config)?;
    Ok(catalogs::format_catalog(&stars, config))
}

/// Load a catalog file (optionally gzip-compressed) and convert it into
/// the star table text
pub fn process_file<P: AsRef<Path>>(path: P, config: &ConverterConfig) -> Result<String> {
    let records = catalogs::load_catalog(path)?;
    let stars = catalogs::convert_catalog(&records, config)?;
    Ok(catalogs::format_catalog(&stars, config))
}
