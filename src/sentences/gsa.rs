#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, FieldScanner, Fixed};

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                      15 16  17
///         | | |                       | |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Gsa {
    /// Selection mode: `A` automatic, `M` manual
    pub mode: char,
    /// Fix type: 1 none, 2 2D, 3 3D
    pub fix_type: i32,
    /// PRN numbers of the satellites used in the fix; unused slots are 0
    pub satellites: [i32; 12],
    /// Position dilution of precision
    pub pdop: Fixed,
    /// Horizontal dilution of precision
    pub hdop: Fixed,
    /// Vertical dilution of precision
    pub vdop: Fixed,
}

impl Gsa {
    /// Parses a GSA sentence.
    ///
    /// The checksum is not re-validated here; run [`check`](crate::check) or
    /// [`identify`](crate::identify) first when integrity matters.
    ///
    /// ```rust
    /// use nmea0183_fixed::Gsa;
    ///
    /// let gsa = Gsa::parse("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39")?;
    ///
    /// assert_eq!(gsa.fix_type, 3);
    /// assert_eq!(gsa.satellites[0], 4);
    /// assert_eq!(gsa.pdop.to_f32(), 2.5);
    /// # Ok::<(), nmea0183_fixed::Error>(())
    /// ```
    pub fn parse(sentence: &str) -> Result<Self, Error> {
        let mut fields = FieldScanner::new(sentence);

        let code = fields.code()?;
        let mode = fields.character()?;
        let fix_type = fields.integer()?;
        let mut satellites = [0i32; 12];
        for satellite in &mut satellites {
            *satellite = fields.integer()?;
        }
        let pdop = fields.fixed()?;
        let hdop = fields.fixed()?;
        let vdop = fields.fixed()?;

        if &code[2..] != "GSA" {
            return Err(Error::SentenceMismatch);
        }

        Ok(Gsa {
            mode,
            fix_type,
            satellites,
            pdop,
            hdop,
            vdop,
        })
    }
}
