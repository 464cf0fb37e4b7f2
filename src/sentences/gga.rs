#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, FieldScanner, Fixed, Time};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
///
/// The trailing DGPS age (13) and reference station id (14) must be present
/// in the sentence but are not retained in the record.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Gga {
    /// Fix time in UTC
    pub time: Time,
    /// Latitude in packed `DDMM.MMMM` form, negative south
    pub latitude: Fixed,
    /// Longitude in packed `DDDMM.MMMM` form, negative west
    pub longitude: Fixed,
    /// Fix quality indicator: 0 no fix, 1 GPS, 2 DGPS
    pub fix_quality: i32,
    /// Number of satellites being tracked
    pub satellites_tracked: i32,
    /// Horizontal dilution of precision
    pub hdop: Fixed,
    /// Altitude above mean sea level
    pub altitude: Fixed,
    /// Unit of the altitude, normally `M`
    pub altitude_units: char,
    /// Height of the geoid above the WGS-84 ellipsoid
    pub geoid_separation: Fixed,
    /// Unit of the geoid separation, normally `M`
    pub geoid_separation_units: char,
}

impl Gga {
    /// Parses a GGA sentence.
    ///
    /// The checksum is not re-validated here; run [`check`](crate::check) or
    /// [`identify`](crate::identify) first when integrity matters.
    ///
    /// ```rust
    /// use nmea0183_fixed::Gga;
    ///
    /// let gga = Gga::parse("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47")?;
    ///
    /// assert_eq!(gga.fix_quality, 1);
    /// assert_eq!(gga.satellites_tracked, 8);
    /// assert_eq!(gga.altitude.to_f32(), 545.4);
    /// assert_eq!(gga.altitude_units, 'M');
    /// # Ok::<(), nmea0183_fixed::Error>(())
    /// ```
    pub fn parse(sentence: &str) -> Result<Self, Error> {
        let mut fields = FieldScanner::new(sentence);

        let code = fields.code()?;
        let time = fields.time()?;
        let mut latitude = fields.fixed()?;
        let lat_direction = fields.direction()?;
        let mut longitude = fields.fixed()?;
        let lon_direction = fields.direction()?;
        let fix_quality = fields.integer()?;
        let satellites_tracked = fields.integer()?;
        let hdop = fields.fixed()?;
        let altitude = fields.fixed()?;
        let altitude_units = fields.character()?;
        let geoid_separation = fields.fixed()?;
        let geoid_separation_units = fields.character()?;
        // DGPS age and station id
        fields.skip()?;
        fields.skip()?;

        if &code[2..] != "GGA" {
            return Err(Error::SentenceMismatch);
        }

        latitude.value *= lat_direction;
        longitude.value *= lon_direction;

        Ok(Gga {
            time,
            latitude,
            longitude,
            fix_quality,
            satellites_tracked,
            hdop,
            altitude,
            altitude_units,
            geoid_separation,
            geoid_separation_units,
        })
    }
}
