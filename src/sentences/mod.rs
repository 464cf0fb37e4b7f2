//! # Sentence Records
//!
//! One strongly-typed record per supported sentence kind, plus the sentence
//! identifier and a unified dispatch enum.
//!
//! The intended flow mirrors a receiver read loop: [`identify`] validates
//! the envelope and names the kind, the caller picks the matching record
//! parser (or lets [`Sentence::parse`] do both), and the record owns every
//! decoded value — nothing borrows from the source line.

mod gga;
mod gsa;
mod gsv;
mod rmc;

pub use gga::Gga;
pub use gsa::Gsa;
pub use gsv::Gsv;
pub use rmc::Rmc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, FieldScanner, check};

/// The kind of a sentence, as reported by [`identify`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceKind {
    /// Failed envelope validation or carries no readable sentence code
    Invalid,
    /// Valid envelope, but a type suffix this crate does not model
    Unknown,
    /// Recommended Minimum Navigation Information
    Rmc,
    /// Global Positioning System Fix Data
    Gga,
    /// GPS DOP and active satellites
    Gsa,
    /// Satellites in View
    Gsv,
}

impl SentenceKind {
    fn from_suffix(suffix: &str) -> Self {
        match suffix {
            "RMC" => SentenceKind::Rmc,
            "GGA" => SentenceKind::Gga,
            "GSA" => SentenceKind::Gsa,
            "GSV" => SentenceKind::Gsv,
            _ => SentenceKind::Unknown,
        }
    }
}

/// Validates a sentence's envelope and reports its kind.
///
/// Runs [`check`] first and reports [`SentenceKind::Invalid`] if it fails,
/// then reads the talker+type code and maps the three-character type suffix.
/// The two-character talker prefix is not interpreted.
///
/// ```rust
/// use nmea0183_fixed::{SentenceKind, identify};
///
/// let sentence = "$GNRMC,074733.000,A,3011.29994,N,12012.34471,E,0.00,0.00,210422,,,A*7A";
/// assert_eq!(identify(sentence, true), SentenceKind::Rmc);
///
/// assert_eq!(identify("$GPZDA,123519,04,07,2025,,", false), SentenceKind::Unknown);
/// assert_eq!(identify("no dollar sign", false), SentenceKind::Invalid);
/// ```
pub fn identify(sentence: &str, strict: bool) -> SentenceKind {
    if check(sentence, strict).is_err() {
        return SentenceKind::Invalid;
    }

    let mut fields = FieldScanner::new(sentence);
    match fields.code() {
        Ok(code) => SentenceKind::from_suffix(&code[2..]),
        Err(_) => SentenceKind::Invalid,
    }
}

/// One observed satellite's tracking data, reported by [`Gsv`].
///
/// All members are zero when the satellite slot was present but blank.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Satellite {
    /// Satellite PRN number
    pub nr: i32,
    /// Elevation in degrees
    pub elevation: i32,
    /// Azimuth in degrees
    pub azimuth: i32,
    /// Signal-to-noise ratio in dB
    pub snr: i32,
}

/// A parsed sentence of any supported kind.
///
/// [`Sentence::parse`] is the one-call form of the identify-then-parse flow:
/// it validates the envelope under the given strictness, dispatches on the
/// type suffix, and returns the typed record.
///
/// ```rust
/// use nmea0183_fixed::Sentence;
///
/// let line = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
/// match Sentence::parse(line, true)? {
///     Sentence::Gga(gga) => {
///         assert_eq!(gga.fix_quality, 1);
///         assert!((gga.latitude.to_coordinate() - 48.1173).abs() < 1e-4);
///     }
///     _ => unreachable!(),
/// }
/// # Ok::<(), nmea0183_fixed::Error>(())
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Sentence {
    /// Recommended Minimum Navigation Information
    Rmc(Rmc),
    /// Global Positioning System Fix Data
    Gga(Gga),
    /// GPS DOP and active satellites
    Gsa(Gsa),
    /// Satellites in View
    Gsv(Gsv),
}

impl Sentence {
    /// Validates the envelope, identifies the sentence and parses it.
    pub fn parse(sentence: &str, strict: bool) -> Result<Self, Error> {
        check(sentence, strict)?;

        let mut fields = FieldScanner::new(sentence);
        let code = fields.code()?;
        match &code[2..] {
            "RMC" => Rmc::parse(sentence).map(Sentence::Rmc),
            "GGA" => Gga::parse(sentence).map(Sentence::Gga),
            "GSA" => Gsa::parse(sentence).map(Sentence::Gsa),
            "GSV" => Gsv::parse(sentence).map(Sentence::Gsv),
            _ => Err(Error::UnknownSentence),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identify() {
        let cases = [
            (
                "$GNRMC,074733.000,A,3011.29994,N,12012.34471,E,0.00,0.00,210422,,,A*7A",
                SentenceKind::Rmc,
            ),
            (
                "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47",
                SentenceKind::Gga,
            ),
            (
                "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39",
                SentenceKind::Gsa,
            ),
            (
                "$GPGSV,3,1,11,03,03,111,00,04,15,270,00,06,01,010,00,13,06,292,00*74",
                SentenceKind::Gsv,
            ),
            ("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48", SentenceKind::Unknown),
        ];

        for (sentence, expected) in cases {
            assert_eq!(identify(sentence, true), expected, "{sentence}");
        }
    }

    #[test]
    fn test_identify_rejects_bad_envelope() {
        // corrupted checksum digit
        assert_eq!(
            identify("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*38", false),
            SentenceKind::Invalid
        );
        // strict mode without a checksum
        assert_eq!(
            identify("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1", true),
            SentenceKind::Invalid
        );
        assert_eq!(
            identify("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1", false),
            SentenceKind::Gsa
        );
    }

    #[test]
    fn test_dispatch() {
        let log = [
            "$GNRMC,074733.000,A,3011.29994,N,12012.34471,E,0.00,0.00,210422,,,A*7A",
            "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47",
            "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39",
            "$GPGSV,3,1,11,03,03,111,00,04,15,270,00,06,01,010,00,13,06,292,00*74",
        ];

        let mut kinds = Vec::new();
        for line in log {
            kinds.push(match Sentence::parse(line, true).unwrap() {
                Sentence::Rmc(_) => SentenceKind::Rmc,
                Sentence::Gga(_) => SentenceKind::Gga,
                Sentence::Gsa(_) => SentenceKind::Gsa,
                Sentence::Gsv(_) => SentenceKind::Gsv,
            });
        }
        assert_eq!(
            kinds,
            [
                SentenceKind::Rmc,
                SentenceKind::Gga,
                SentenceKind::Gsa,
                SentenceKind::Gsv
            ]
        );

        assert_eq!(
            Sentence::parse("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48", true),
            Err(Error::UnknownSentence)
        );
    }
}
