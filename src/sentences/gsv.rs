#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, FieldScanner, Satellite, SentenceCode};

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// A group of sentences carries up to four satellites each; the final
/// sentence of a group may report fewer, leaving its trailing satellite
/// slots zeroed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Gsv {
    /// The raw talker+type code of the sentence, e.g. `GPGSV`
    pub code: SentenceCode,
    /// Total number of GSV sentences in this group
    pub total_messages: i32,
    /// Number of this sentence within the group, starting at 1
    pub message_number: i32,
    /// Total number of satellites in view
    pub satellites_in_view: i32,
    /// Up to four satellites; absent slots are all zero
    pub satellites: [Satellite; 4],
}

impl Gsv {
    /// Parses a GSV sentence.
    ///
    /// The checksum is not re-validated here; run [`check`](crate::check) or
    /// [`identify`](crate::identify) first when integrity matters.
    ///
    /// ```rust
    /// use nmea0183_fixed::Gsv;
    ///
    /// let gsv = Gsv::parse(
    ///     "$GPGSV,3,1,11,03,03,111,00,04,15,270,00,06,01,010,00,13,06,292,00*74",
    /// )?;
    ///
    /// assert_eq!(&gsv.code[..], "GPGSV");
    /// assert_eq!(gsv.message_number, 1);
    /// assert_eq!(gsv.satellites_in_view, 11);
    /// assert_eq!(gsv.satellites[0].nr, 3);
    /// assert_eq!(gsv.satellites[0].azimuth, 111);
    /// # Ok::<(), nmea0183_fixed::Error>(())
    /// ```
    pub fn parse(sentence: &str) -> Result<Self, Error> {
        let mut fields = FieldScanner::new(sentence);

        let code = fields.code()?;
        let total_messages = fields.integer()?;
        let message_number = fields.integer()?;
        let satellites_in_view = fields.integer()?;

        // the last sentence of a group may carry fewer than four satellites
        fields.rest_optional();

        let mut satellites = [Satellite::default(); 4];
        for satellite in &mut satellites {
            satellite.nr = fields.integer()?;
            satellite.elevation = fields.integer()?;
            satellite.azimuth = fields.integer()?;
            satellite.snr = fields.integer()?;
        }

        if &code[2..] != "GSV" {
            return Err(Error::SentenceMismatch);
        }

        Ok(Gsv {
            code,
            total_messages,
            message_number,
            satellites_in_view,
            satellites,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gsv_full_message() {
        let gsv = Gsv::parse(
            "$GPGSV,3,1,11,03,03,111,00,04,15,270,00,06,01,010,00,13,06,292,00*74",
        )
        .unwrap();

        assert_eq!(&gsv.code[..], "GPGSV");
        assert_eq!(gsv.total_messages, 3);
        assert_eq!(gsv.message_number, 1);
        assert_eq!(gsv.satellites_in_view, 11);
        assert_eq!(
            gsv.satellites[0],
            Satellite {
                nr: 3,
                elevation: 3,
                azimuth: 111,
                snr: 0
            }
        );
        assert_eq!(
            gsv.satellites[3],
            Satellite {
                nr: 13,
                elevation: 6,
                azimuth: 292,
                snr: 0
            }
        );
    }

    #[test]
    fn test_gsv_short_final_message() {
        // three satellites reported, fourth slot legitimately absent
        let gsv =
            Gsv::parse("$GPGSV,3,3,11,09,40,060,22,10,60,150,33,11,75,240,38*4E").unwrap();

        assert_eq!(gsv.total_messages, 3);
        assert_eq!(gsv.message_number, 3);
        assert_eq!(gsv.satellites[2].nr, 11);
        assert_eq!(gsv.satellites[2].snr, 38);
        assert_eq!(gsv.satellites[3], Satellite::default());
    }

    #[test]
    fn test_gsv_single_satellite() {
        let gsv = Gsv::parse("$GPGSV,1,1,01,01,90,100,50*44").unwrap();

        assert_eq!(gsv.satellites_in_view, 1);
        assert_eq!(
            gsv.satellites[0],
            Satellite {
                nr: 1,
                elevation: 90,
                azimuth: 100,
                snr: 50
            }
        );
        assert_eq!(gsv.satellites[1], Satellite::default());
    }

    #[test]
    fn test_gsv_mandatory_header_fields() {
        // the header fields come before the optional marker
        assert_eq!(Gsv::parse("$GPGSV,3,1"), Err(Error::MissingField));
    }
}
