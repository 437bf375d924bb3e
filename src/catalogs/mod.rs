//! Star catalogs module
//!
//! This module loads Bright Star Catalog records, converts them into
//! numeric star entries and reads or writes the compact star table format.

pub mod convert;
pub mod legacy;
pub mod record;

pub use convert::{
    convert_catalog, convert_record, ConvertedStar, ConverterConfig, DEFAULT_PRECISION,
    MISSING_CLASS,
};
pub use legacy::{format_catalog, format_star, load_converted, parse_converted, write_catalog};
pub use record::{load_catalog, parse_catalog, read_catalog, Scalar, StarRecord};

/// Trait for accessing star position data
pub trait StarPosition {
    /// Get star right ascension in degrees
    fn ra(&self) -> f64;

    /// Get star declination in degrees
    fn dec(&self) -> f64;
}

impl StarPosition for ConvertedStar {
    fn ra(&self) -> f64 {
        self.ra_deg
    }

    fn dec(&self) -> f64 {
        self.dec_deg
    }
}

/// Stars at or brighter than `magnitude`, keeping catalog order
pub fn brighter_than(stars: &[ConvertedStar], magnitude: f64) -> Vec<ConvertedStar> {
    stars
        .iter()
        .filter(|star| star.magnitude <= magnitude)
        .copied()
        .collect()
}
