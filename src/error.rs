//! # Error Types
//!
//! This module defines the error type used throughout the NMEA parsing library.

use std::fmt;

/// Represents all possible errors that can occur during NMEA sentence parsing.
///
/// Variants fall into four groups: envelope errors raised by
/// [`check`](crate::check), field errors raised by the
/// [`FieldScanner`](crate::FieldScanner), the missing-mandatory-field error,
/// and dispatch errors raised when a sentence reaches the wrong parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The sentence exceeds the NMEA 0183 line-length limit.
    ///
    /// Sentences longer than [`MAX_LENGTH`](crate::MAX_LENGTH) plus three
    /// characters of framing slack are rejected before any content is read.
    TooLong {
        /// Length of the rejected sentence in bytes
        length: usize,
    },

    /// The sentence does not start with `$`.
    MissingPrefix,

    /// A `*` delimiter was present but not followed by two hexadecimal digits.
    InvalidChecksum,

    /// The checksum of the sentence was corrupt or incorrect.
    ///
    /// Contains both the expected checksum (calculated from the sentence body)
    /// and the actual checksum found in the sentence.
    ChecksumMismatch {
        /// The checksum calculated from the sentence body
        expected: u8,
        /// The checksum found in the sentence
        found: u8,
    },

    /// No checksum was appended and strict validation was requested.
    MissingChecksum,

    /// Unexpected characters after the checksum region.
    ///
    /// Only an empty remainder, `"\n"`, or `"\r\n"` may follow the checksum.
    TrailingData,

    /// A mandatory field was requested but the sentence ran out of fields.
    MissingField,

    /// A field did not conform to the character class its type requires.
    InvalidField,

    /// A numeric field overflowed before a decimal point was seen.
    Overflow,

    /// The sentence's type suffix does not match the parser invoked.
    SentenceMismatch,

    /// The sentence has a valid envelope but an unrecognized type suffix.
    UnknownSentence,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TooLong { length } => {
                write!(f, "sentence of {length} bytes exceeds the line-length limit")
            }
            Error::MissingPrefix => write!(f, "sentence does not start with '$'"),
            Error::InvalidChecksum => write!(f, "checksum is not two hexadecimal digits"),
            Error::ChecksumMismatch { expected, found } => {
                write!(f, "checksum mismatch: expected {expected:02X}, found {found:02X}")
            }
            Error::MissingChecksum => write!(f, "checksum required but not present"),
            Error::TrailingData => write!(f, "unexpected data after checksum"),
            Error::MissingField => write!(f, "ran out of fields before the optional marker"),
            Error::InvalidField => write!(f, "malformed field"),
            Error::Overflow => write!(f, "numeric field overflow"),
            Error::SentenceMismatch => write!(f, "sentence type does not match this parser"),
            Error::UnknownSentence => write!(f, "unrecognized sentence type"),
        }
    }
}

impl std::error::Error for Error {}
