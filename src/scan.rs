//! # Field Scanner
//!
//! A typed cursor over the comma-delimited fields of one sentence.
//!
//! The scanner walks fields strictly left to right: each decoding method
//! consumes exactly one field and advances to the next, whether or not the
//! field was empty. A field is a maximal run of printable characters other
//! than `,` and `*`, so the walk stops advancing once it reaches the
//! checksum delimiter or the end of the line. Calling [`rest_optional`]
//! makes every later field optional; a missing optional field decodes to its
//! type's absent value instead of failing.
//!
//! Each method is one field type. The sequence of calls a parser makes is
//! its field format, checked at compile time against the record it builds,
//! and a failed decode propagates before any record exists, so callers never
//! observe a half-written record.
//!
//! [`rest_optional`]: FieldScanner::rest_optional
//!
//! ```rust
//! use nmea0183_fixed::FieldScanner;
//!
//! // $GPGLL: latitude, N/S, longitude, E/W, time, status
//! let mut fields = FieldScanner::new("$GPGLL,4916.45,N,12311.12,W,225444,A*31");
//! let code = fields.code()?;
//! let mut latitude = fields.fixed()?;
//! latitude.value *= fields.direction()?;
//! let mut longitude = fields.fixed()?;
//! longitude.value *= fields.direction()?;
//! let time = fields.time()?;
//! let status = fields.character()?;
//!
//! assert_eq!(&code[..], "GPGLL");
//! assert_eq!(latitude.value, 491645);
//! assert_eq!(longitude.value, -1231112);
//! assert_eq!((time.hours, time.minutes, time.seconds), (22, 54, 44));
//! assert_eq!(status, 'A');
//! # Ok::<(), nmea0183_fixed::Error>(())
//! ```

use nom::{
    Parser,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit0},
    combinator::{map_res, opt},
    sequence::preceded,
};

use crate::{Date, Error, Fixed, Time};

/// A talker plus sentence-type code, e.g. `GPRMC`: two characters of talker
/// id followed by the three-character sentence type.
pub type SentenceCode = heapless::String<5>;

/// Returns true for characters that may appear inside a field: printable
/// ASCII excluding the field and checksum delimiters.
fn is_field(byte: u8) -> bool {
    matches!(byte, b' '..=b'~') && byte != b',' && byte != b'*'
}

/// Decodes exactly two ASCII digits.
fn digit_pair(i: &str) -> nom::IResult<&str, i32> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
        |s: &str| s.parse::<i32>(),
    )
    .parse(i)
}

/// Decodes a `DDMMYY` date field. Characters past the six digits are left
/// unconsumed and ignored by the caller.
fn date_body(i: &str) -> nom::IResult<&str, Date> {
    (digit_pair, digit_pair, digit_pair)
        .map(|(day, month, year)| Date { day, month, year })
        .parse(i)
}

/// Decodes an `HHMMSS[.ssssss]` time field. The fraction is kept to
/// microsecond precision: right-padded with zeros when shorter than six
/// digits, truncated when longer.
fn time_body(i: &str) -> nom::IResult<&str, Time> {
    let (i, (hours, minutes, seconds)) = (digit_pair, digit_pair, digit_pair).parse(i)?;
    let (i, fraction) = opt(preceded(char('.'), digit0)).parse(i)?;

    let mut value = 0i32;
    let mut scale = 1_000_000i32;
    for byte in fraction.unwrap_or("").bytes() {
        if scale <= 1 {
            break;
        }
        value = value * 10 + (byte - b'0') as i32;
        scale /= 10;
    }

    Ok((
        i,
        Time {
            hours,
            minutes,
            seconds,
            microseconds: value * scale,
        },
    ))
}

/// Typed field cursor over one sentence.
///
/// Starts at the beginning of the sentence, so the first field is the
/// `$`-prefixed sentence code. See the [module docs](self) for the walk and
/// optionality rules.
#[derive(Debug)]
pub struct FieldScanner<'a> {
    sentence: &'a str,
    cursor: usize,
    field: Option<usize>,
    optional: bool,
}

impl<'a> FieldScanner<'a> {
    /// Creates a scanner positioned on the sentence's first field.
    pub fn new(sentence: &'a str) -> Self {
        FieldScanner {
            sentence,
            cursor: 0,
            field: Some(0),
            optional: false,
        }
    }

    /// Marks all further fields as optional.
    ///
    /// Sentences like GSV legitimately end early when they report fewer
    /// entries than their full field layout allows; decoding past the end
    /// then yields absent values rather than [`Error::MissingField`].
    /// [`code`](FieldScanner::code) stays mandatory regardless.
    pub fn rest_optional(&mut self) {
        self.optional = true;
    }

    fn field_slice(&self, start: usize) -> &'a str {
        let bytes = self.sentence.as_bytes();
        let mut end = start;
        while end < bytes.len() && is_field(bytes[end]) {
            end += 1;
        }
        &self.sentence[start..end]
    }

    /// Takes the current field, then advances the cursor: past the field's
    /// characters and, if a `,` follows, onto the start of the next field;
    /// otherwise there is no next field. Advancing happens even when the
    /// current field is absent.
    fn next_field(&mut self) -> Result<Option<&'a str>, Error> {
        let field = match self.field {
            Some(start) => Some(self.field_slice(start)),
            None if self.optional => None,
            None => return Err(Error::MissingField),
        };

        let bytes = self.sentence.as_bytes();
        while self.cursor < bytes.len() && is_field(bytes[self.cursor]) {
            self.cursor += 1;
        }
        if bytes.get(self.cursor) == Some(&b',') {
            self.cursor += 1;
            self.field = Some(self.cursor);
        } else {
            self.field = None;
        }

        Ok(field)
    }

    /// Single character field. Absent or empty decodes to NUL.
    pub fn character(&mut self) -> Result<char, Error> {
        let field = self.next_field()?;
        Ok(field.and_then(|f| f.chars().next()).unwrap_or('\0'))
    }

    /// Direction field: `N`/`E` is +1, `S`/`W` is -1, absent or empty is 0.
    /// Any other character fails.
    pub fn direction(&mut self) -> Result<i32, Error> {
        let field = self.next_field()?;
        match field.and_then(|f| f.chars().next()) {
            Some('N' | 'E') => Ok(1),
            Some('S' | 'W') => Ok(-1),
            Some(_) => Err(Error::InvalidField),
            None => Ok(0),
        }
    }

    /// Fixed-point numeric field: optional leading spaces, optional single
    /// sign, digits with at most one decimal point. Absent or empty decodes
    /// to [`Fixed::UNKNOWN`].
    ///
    /// Digits beyond the representable precision are dropped once the
    /// decimal point has been seen; running out of bits before the decimal
    /// point is [`Error::Overflow`].
    pub fn fixed(&mut self) -> Result<Fixed, Error> {
        let field = self.next_field()?;

        let mut sign = 0i32;
        let mut value = -1i32;
        let mut scale = 0i32;

        for byte in field.unwrap_or("").bytes() {
            match byte {
                b'+' if sign == 0 && value == -1 => sign = 1,
                b'-' if sign == 0 && value == -1 => sign = -1,
                b'0'..=b'9' => {
                    let digit = (byte - b'0') as i32;
                    if value == -1 {
                        value = 0;
                    }
                    if value > (i32::MAX - digit) / 10 {
                        if scale != 0 {
                            // truncate extra precision
                            break;
                        }
                        return Err(Error::Overflow);
                    }
                    if scale != 0 && scale > i32::MAX / 10 {
                        // the scale would outrun i32 before the value does
                        break;
                    }
                    value = 10 * value + digit;
                    if scale != 0 {
                        scale *= 10;
                    }
                }
                b'.' if scale == 0 => scale = 1,
                // Padding spaces ahead of the number. Not NMEA conformant,
                // but some receivers emit them.
                b' ' if sign == 0 && value == -1 && scale == 0 => {}
                _ => return Err(Error::InvalidField),
            }
        }

        if (sign != 0 || scale != 0) && value == -1 {
            return Err(Error::InvalidField);
        }

        if value == -1 {
            return Ok(Fixed::UNKNOWN);
        }
        if scale == 0 {
            scale = 1;
        }
        if sign != 0 {
            value *= sign;
        }
        Ok(Fixed { value, scale })
    }

    /// Integer field: optional leading spaces, optional sign, base-10
    /// digits reaching the end of the field. Absent or empty decodes to 0;
    /// magnitudes beyond `i32` saturate.
    pub fn integer(&mut self) -> Result<i32, Error> {
        let Some(field) = self.next_field()? else {
            return Ok(0);
        };
        if field.is_empty() {
            return Ok(0);
        }

        let trimmed = field.trim_start_matches(' ');
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidField);
        }

        let mut value = 0i64;
        for byte in digits.bytes() {
            value = value.saturating_mul(10).saturating_add((byte - b'0') as i64);
        }
        if negative {
            value = -value;
        }
        Ok(value.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
    }

    /// Raw string field, borrowed from the sentence. Absent decodes to `""`.
    pub fn string(&mut self) -> Result<&'a str, Error> {
        Ok(self.next_field()?.unwrap_or(""))
    }

    /// The `$`-prefixed talker plus sentence-type code.
    ///
    /// This field is mandatory even after [`rest_optional`]: without it the
    /// sentence cannot be attributed to any type. Exactly five characters
    /// after `$` are taken.
    ///
    /// [`rest_optional`]: FieldScanner::rest_optional
    pub fn code(&mut self) -> Result<SentenceCode, Error> {
        let field = self.next_field()?.ok_or(Error::MissingField)?;
        let code = field.strip_prefix('$').ok_or(Error::InvalidField)?;
        if code.len() < 5 {
            return Err(Error::InvalidField);
        }
        SentenceCode::try_from(&code[..5]).map_err(|_| Error::InvalidField)
    }

    /// `DDMMYY` date field. Absent or empty decodes to all `-1`. Component
    /// ranges are not validated.
    pub fn date(&mut self) -> Result<Date, Error> {
        match self.next_field()? {
            Some(field) if !field.is_empty() => {
                let (_, date) = date_body(field).map_err(|_| Error::InvalidField)?;
                Ok(date)
            }
            _ => Ok(Date::NONE),
        }
    }

    /// `HHMMSS[.ssssss]` time field. Absent or empty decodes to all `-1`;
    /// an integer time without a fraction has 0 microseconds. Component
    /// ranges are not validated.
    pub fn time(&mut self) -> Result<Time, Error> {
        match self.next_field()? {
            Some(field) if !field.is_empty() => {
                let (_, time) = time_body(field).map_err(|_| Error::InvalidField)?;
                Ok(time)
            }
            _ => Ok(Time::NONE),
        }
    }

    /// Consumes and ignores one field.
    pub fn skip(&mut self) -> Result<(), Error> {
        self.next_field()?;
        Ok(())
    }
}
