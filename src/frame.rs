//! # Sentence Envelope Validation
//!
//! Length, prefix and checksum checks over a complete NMEA 0183 line:
//! `$<body>[*CC][\r\n]`. The checksum is the XOR of every byte between `$`
//! and `*`, rendered as two hexadecimal digits.
//!
//! Validation is a pure predicate over the line; it reads no fields and
//! keeps no state. Content decoding lives in [`scan`](crate::scan) and the
//! sentence parsers.

use nom::{Parser, bytes::complete::take_while_m_n, combinator::map_res};

use crate::Error;

/// Maximum sentence length in characters as limited by the NMEA 0183
/// standard, counting from `$` up to and excluding the line terminator.
pub const MAX_LENGTH: usize = 80;

/// Calculates the NMEA 0183 checksum for the given sentence body.
///
/// The body is everything between the `$` prefix and the `*` delimiter,
/// excluding both.
///
/// ```rust
/// use nmea0183_fixed::checksum;
///
/// assert_eq!(checksum("GPGGA,123456,data"), 0x41);
/// ```
pub fn checksum(data: &str) -> u8 {
    data.bytes().fold(0u8, |acc, byte| acc ^ byte)
}

/// Parses the two-hex-digit checksum byte that follows a `*` delimiter.
fn checksum_byte(i: &str) -> nom::IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        |cc: &str| u8::from_str_radix(cc, 16),
    )
    .parse(i)
}

/// Validates the envelope of a sentence, reporting why it was rejected.
///
/// The sentence must fit the protocol line-length limit (with three
/// characters of slack for `$` and the terminator), start with `$`, and
/// carry nothing after the checksum region except an optional `"\n"` or
/// `"\r\n"`. If a `*` delimiter is present the two hex digits after it must
/// match the XOR of the body; a mismatch is rejected regardless of `strict`.
/// A sentence without any checksum is accepted only when `strict` is false.
///
/// ```rust
/// use nmea0183_fixed::{check, Error};
///
/// assert!(check("$GPGLL,4916.45,N,12311.12,W,225444,A*31", false).is_ok());
/// assert_eq!(
///     check("$GPGLL,4916.45,N,12311.12,W,225444,A", true),
///     Err(Error::MissingChecksum)
/// );
/// ```
pub fn check(sentence: &str, strict: bool) -> Result<(), Error> {
    if sentence.len() > MAX_LENGTH + 3 {
        return Err(Error::TooLong {
            length: sentence.len(),
        });
    }

    let body = sentence.strip_prefix('$').ok_or(Error::MissingPrefix)?;

    // The checksum region covers every printable character up to '*'.
    let end = body
        .find(|c: char| c == '*' || !matches!(c, ' '..='~'))
        .unwrap_or(body.len());
    let (data, rest) = body.split_at(end);
    let expected = checksum(data);

    let rest = match rest.strip_prefix('*') {
        Some(cc) => {
            let (rest, found) = checksum_byte(cc).map_err(|_| Error::InvalidChecksum)?;
            if found != expected {
                return Err(Error::ChecksumMismatch { expected, found });
            }
            rest
        }
        None if strict => return Err(Error::MissingChecksum),
        None => rest,
    };

    match rest {
        "" | "\n" | "\r\n" => Ok(()),
        _ => Err(Error::TrailingData),
    }
}

/// Boolean form of [`check`].
///
/// ```rust
/// use nmea0183_fixed::validate;
///
/// assert!(validate("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39", true));
/// assert!(!validate("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*38", false));
/// ```
pub fn validate(sentence: &str, strict: bool) -> bool {
    check(sentence, strict).is_ok()
}
