//! # Core Value Types
//!
//! Fixed-point numbers, dates and times as they appear in NMEA 0183 fields.
//!
//! Numeric fields are kept exact during ingestion: a [`Fixed`] value is an
//! integer numerator over a power-of-ten denominator, so `3011.29994` is
//! stored as `301129994 / 100000` with no floating-point rounding. Conversion
//! to floating point is explicit and happens only when the caller asks for it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An exact decimal number: `value / scale`.
///
/// `scale` is a power of ten when the value is known, and `0` when the source
/// field was empty or absent. An unknown value converts to NaN via
/// [`to_f32`](Fixed::to_f32) and [`to_coordinate`](Fixed::to_coordinate).
///
/// ```rust
/// use nmea0183_fixed::Fixed;
///
/// let speed = Fixed::new(25, 10); // "2.5"
/// assert!(speed.is_known());
/// assert_eq!(speed.to_f32(), 2.5);
///
/// assert!(Fixed::UNKNOWN.to_f32().is_nan());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fixed {
    /// Signed numerator
    pub value: i32,
    /// Power-of-ten denominator, or 0 for unknown
    pub scale: i32,
}

impl Fixed {
    /// The absent/unknown value.
    pub const UNKNOWN: Fixed = Fixed { value: 0, scale: 0 };

    /// Creates a fixed-point value representing `value / scale`.
    pub const fn new(value: i32, scale: i32) -> Self {
        Fixed { value, scale }
    }

    /// Returns `true` unless this value came from an empty or absent field.
    pub const fn is_known(&self) -> bool {
        self.scale != 0
    }

    /// Converts to floating point. Returns NaN for unknown values.
    pub fn to_f32(&self) -> f32 {
        if self.scale == 0 {
            return f32::NAN;
        }
        self.value as f32 / self.scale as f32
    }

    /// Converts a raw `DDMM.MMMM`-style latitude or longitude to decimal
    /// degrees. Returns NaN for unknown values.
    ///
    /// The two integer digits above the fraction are minutes, everything
    /// higher is whole degrees:
    ///
    /// ```rust
    /// use nmea0183_fixed::Fixed;
    ///
    /// // 3011.29994 = 30 degrees, 11.29994 minutes
    /// let lat = Fixed::new(301129994, 100000);
    /// assert!((lat.to_coordinate() - 30.188332).abs() < 1e-5);
    /// ```
    pub fn to_coordinate(&self) -> f32 {
        if self.scale == 0 {
            return f32::NAN;
        }
        let split = self.scale as i64 * 100;
        let degrees = self.value as i64 / split;
        let minutes = self.value as i64 % split;
        degrees as f32 + minutes as f32 / (60.0 * self.scale as f32)
    }

    /// Rescales the value to a different power-of-ten scale and returns the
    /// new numerator, rounding to nearest when precision shrinks.
    ///
    /// ```rust
    /// use nmea0183_fixed::Fixed;
    ///
    /// let lat = Fixed::new(301129994, 100000);
    /// assert_eq!(lat.rescale(1000), 3011300);
    /// assert_eq!(lat.rescale(100000), lat.value);
    /// ```
    ///
    /// An unknown value rescales to the literal `0`, which is
    /// indistinguishable from a genuine zero result; call
    /// [`is_known`](Fixed::is_known) first if that matters. A non-positive
    /// `new_scale` also yields `0`.
    pub fn rescale(&self, new_scale: i32) -> i32 {
        if self.scale == 0 || new_scale <= 0 {
            return 0;
        }
        if self.scale == new_scale {
            return self.value;
        }
        if self.scale > new_scale {
            let step = self.scale / new_scale;
            return self.value.saturating_add(self.value.signum() * (step / 2)) / step;
        }
        self.value.saturating_mul(new_scale / self.scale)
    }
}

/// A calendar date with a two-digit century-less year.
///
/// Members are `-1` when the source field was empty. Ranges are deliberately
/// not validated: the scanner only checks that six ASCII digits are present,
/// so a receiver reporting month 13 passes through unchanged.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    /// Day of month, `1..31` or -1
    pub day: i32,
    /// Month, `1..12` or -1
    pub month: i32,
    /// Two-digit year, `0..99` or -1
    pub year: i32,
}

impl Date {
    pub(crate) const NONE: Date = Date {
        day: -1,
        month: -1,
        year: -1,
    };
}

/// A UTC time of day.
///
/// Hours, minutes and seconds are `-1` when the whole field was empty, and
/// otherwise unchecked two-digit integers (see [`Date`] for the
/// non-validating contract). `microseconds` comes from the optional
/// fractional suffix: `0` when the integer time is present without a
/// fraction, `-1` only when the whole field is absent.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time {
    pub hours: i32,
    pub minutes: i32,
    pub seconds: i32,
    pub microseconds: i32,
}

impl Time {
    pub(crate) const NONE: Time = Time {
        hours: -1,
        minutes: -1,
        seconds: -1,
        microseconds: -1,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_f32() {
        assert_eq!(Fixed::new(25, 10).to_f32(), 2.5);
        assert_eq!(Fixed::new(-130, 100).to_f32(), -1.3);
        assert!(Fixed::UNKNOWN.to_f32().is_nan());
    }

    #[test]
    fn test_to_coordinate() {
        // 4807.038 N from the classic GGA example
        let lat = Fixed::new(4807038, 1000);
        assert!((lat.to_coordinate() - 48.1173).abs() < 1e-4);

        // 12012.34471 E
        let lon = Fixed::new(1201234471, 100000);
        assert!((lon.to_coordinate() - 120.205745).abs() < 1e-4);

        let south = Fixed::new(-375165, 100);
        assert!((south.to_coordinate() + 37.860832).abs() < 1e-4);

        assert!(Fixed::UNKNOWN.to_coordinate().is_nan());
    }

    #[test]
    fn test_rescale_identity() {
        for value in [0, 1, -1, 42, -42, 301129994] {
            let f = Fixed::new(value, 1000);
            assert_eq!(f.rescale(1000), value);
        }
    }

    #[test]
    fn test_rescale_shrink_rounds_to_nearest() {
        assert_eq!(Fixed::new(25, 10).rescale(1), 3);
        assert_eq!(Fixed::new(24, 10).rescale(1), 2);
        assert_eq!(Fixed::new(-25, 10).rescale(1), -3);
        assert_eq!(Fixed::new(-24, 10).rescale(1), -2);
        assert_eq!(Fixed::new(301129994, 100000).rescale(1000), 3011300);
    }

    #[test]
    fn test_rescale_grow_is_exact() {
        assert_eq!(Fixed::new(25, 10).rescale(1000), 2500);
        assert_eq!(Fixed::new(-7, 1).rescale(100), -700);
    }

    #[test]
    fn test_rescale_round_trip() {
        // shrinking then growing back recovers the value within one step
        let f = Fixed::new(301129994, 100000);
        let shrunk = f.rescale(1000);
        let back = Fixed::new(shrunk, 1000).rescale(100000);
        assert!((back - f.value).abs() <= 100 / 2);
    }

    #[test]
    fn test_rescale_unknown() {
        // unknown rescales to a literal zero, same as the original library
        assert_eq!(Fixed::UNKNOWN.rescale(1000), 0);
        assert_eq!(Fixed::new(5, 10).rescale(0), 0);
    }
}
