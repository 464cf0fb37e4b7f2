#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Date, Error, FieldScanner, Fixed, Time};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 11
///         |         | |       | |        |  |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Rmc {
    /// Fix time in UTC
    pub time: Time,
    /// Receiver warning flag: true when the fix is valid (`A`)
    pub valid: bool,
    /// Latitude in packed `DDMM.MMMM` form, negative south
    pub latitude: Fixed,
    /// Longitude in packed `DDDMM.MMMM` form, negative west
    pub longitude: Fixed,
    /// Speed over ground in knots
    pub speed: Fixed,
    /// Course over ground in degrees true
    pub course: Fixed,
    /// Fix date in UTC
    pub date: Date,
    /// Magnetic variation in degrees, negative west
    pub variation: Fixed,
}

impl Rmc {
    /// Parses an RMC sentence.
    ///
    /// The checksum is not re-validated here; run [`check`](crate::check) or
    /// [`identify`](crate::identify) first when integrity matters.
    ///
    /// ```rust
    /// use nmea0183_fixed::Rmc;
    ///
    /// let rmc =
    ///     Rmc::parse("$GNRMC,074733.000,A,3011.29994,N,12012.34471,E,0.00,0.00,210422,,,A*7A")?;
    ///
    /// assert!(rmc.valid);
    /// assert_eq!(rmc.latitude, nmea0183_fixed::Fixed::new(301129994, 100000));
    /// assert_eq!((rmc.date.day, rmc.date.month, rmc.date.year), (21, 4, 22));
    /// # Ok::<(), nmea0183_fixed::Error>(())
    /// ```
    pub fn parse(sentence: &str) -> Result<Self, Error> {
        let mut fields = FieldScanner::new(sentence);

        let code = fields.code()?;
        let time = fields.time()?;
        let validity = fields.character()?;
        let mut latitude = fields.fixed()?;
        let lat_direction = fields.direction()?;
        let mut longitude = fields.fixed()?;
        let lon_direction = fields.direction()?;
        let speed = fields.fixed()?;
        let course = fields.fixed()?;
        let date = fields.date()?;
        let mut variation = fields.fixed()?;
        let var_direction = fields.direction()?;

        if &code[2..] != "RMC" {
            return Err(Error::SentenceMismatch);
        }

        latitude.value *= lat_direction;
        longitude.value *= lon_direction;
        variation.value *= var_direction;

        Ok(Rmc {
            time,
            valid: validity == 'A',
            latitude,
            longitude,
            speed,
            course,
            date,
            variation,
        })
    }
}
