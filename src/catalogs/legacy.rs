//! Legacy star table text
//!
//! The renderer side reads the converted catalog as one bracketed list of
//! `[ra,dec,class,mag]` tuples separated by a comma and a newline:
//!
//! ```text
//! [[1.291250,45.229167,11000,6.700000],
//! [1.265833,-0.503056,-1,6.290000]]
//! ```
//!
//! Floats use fixed notation with `precision` decimals and the class is a
//! plain integer. The text is assembled by hand rather than by a JSON
//! serializer so the exact shape stays stable.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use super::convert::{ConvertedStar, ConverterConfig};
use crate::{io_err, Result};

/// Fixed-point float text; non-finite values are written as `nan`, `inf`
/// and `-inf`.
fn format_float(value: f64, precision: usize) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        String::from(if value > 0.0 { "inf" } else { "-inf" })
    } else {
        format!("{:.*}", precision, value)
    }
}

/// Format one star as `[ra,dec,class,mag]`
pub fn format_star(star: &ConvertedStar, config: &ConverterConfig) -> String {
    format!(
        "[{},{},{},{}]",
        format_float(star.ra_deg, config.precision),
        format_float(star.dec_deg, config.precision),
        star.class_or(config.missing_class),
        format_float(star.magnitude, config.precision)
    )
}

/// Format the whole table, without a trailing newline
pub fn format_catalog(stars: &[ConvertedStar], config: &ConverterConfig) -> String {
    let entries: Vec<String> = stars.iter().map(|star| format_star(star, config)).collect();
    format!("[{}]", entries.join(",\n"))
}

/// Write the table followed by a newline
///
/// The text is built in memory first and written with a single call.
pub fn write_catalog<W: Write>(
    writer: &mut W,
    stars: &[ConvertedStar],
    config: &ConverterConfig,
) -> io::Result<()> {
    let text = format_catalog(stars, config);
    writeln!(writer, "{}", text)?;
    writer.flush()
}

/// Read a star table back into converted stars
///
/// Class values equal to `missing_class` come back as `None`.
pub fn parse_converted(text: &str, missing_class: i64) -> Result<Vec<ConvertedStar>> {
    let rows: Vec<(f64, f64, i64, f64)> = serde_json::from_str(text)?;

    Ok(rows
        .into_iter()
        .map(|(ra_deg, dec_deg, class, magnitude)| ConvertedStar {
            ra_deg,
            dec_deg,
            class: (class != missing_class).then_some(class),
            magnitude,
        })
        .collect())
}

/// Load a star table file
pub fn load_converted<P: AsRef<Path>>(path: P, missing_class: i64) -> Result<Vec<ConvertedStar>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    parse_converted(&text, missing_class)
}
