//! # Fixed-Point NMEA 0183 Parser
//!
//! This library parses NMEA 0183 GPS sentences of the format
//! `$HHH,D1,D2,...,Dn*CC\r\n` into typed, fixed-point numeric records.
//!
//! Numeric fields are decoded losslessly: a coordinate like `3011.29994`
//! becomes the exact [`Fixed`] value `301129994 / 100000`, with conversion
//! to floating point left to the caller. The parser is configurable to
//! handle:
//! - Strict or lenient checksum validation
//! - RMC, GGA, GSA and GSV sentence content
//! - Custom sentence layouts via the reusable [`FieldScanner`]
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_fixed::{Rmc, SentenceKind, identify};
//!
//! let line = "$GNRMC,074733.000,A,3011.29994,N,12012.34471,E,0.00,0.00,210422,,,A*7A";
//!
//! match identify(line, false) {
//!     SentenceKind::Rmc => {
//!         let rmc = Rmc::parse(line)?;
//!         assert!(rmc.valid);
//!         // exact fixed-point: 3011.29994 as 301129994 / 100000
//!         assert_eq!(rmc.latitude.value, 301129994);
//!         assert_eq!(rmc.latitude.scale, 100000);
//!         // scaled integer and floating-point views on demand
//!         assert_eq!(rmc.latitude.rescale(1000), 3011300);
//!         assert!((rmc.latitude.to_coordinate() - 30.188332).abs() < 1e-5);
//!     }
//!     _ => unreachable!(),
//! }
//! # Ok::<(), nmea0183_fixed::Error>(())
//! ```
//!
//! Parsing keeps no state between sentences and touches nothing outside its
//! arguments, so the same functions may be called concurrently on
//! independent lines without synchronization.

pub mod error;
mod frame;
mod scan;
mod sentences;
mod types;

pub use error::Error;
pub use frame::{MAX_LENGTH, check, checksum, validate};
pub use scan::{FieldScanner, SentenceCode};
pub use sentences::{Gga, Gsa, Gsv, Rmc, Satellite, Sentence, SentenceKind, identify};
pub use types::{Date, Fixed, Time};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;

#[cfg(test)]
mod tests {
    mod properties;
    mod sentences;
}
