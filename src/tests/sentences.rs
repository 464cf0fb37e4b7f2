//! Table-driven sweeps over complete sentences, valid and invalid.

use crate::{Error, Satellite, Sentence, SentenceKind, identify};

#[test]
fn test_valid_sentence_sweep() {
    let sentences = [
        "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A",
        "$GPRMC,092725.00,A,4717.11437,N,00833.91522,E,0.004,77.52,091202,,,A*5E",
        "$GPRMC,081836,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E*62",
        "$GNRMC,074733.000,A,3011.29994,N,12012.34471,E,0.00,0.00,210422,,,A*7A",
        "$GNRMC,,V,,,,,,,,,,N*4D",
        "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47",
        "$GPGGA,092725.00,4717.11399,N,00833.91590,E,1,08,1.01,499.6,M,48.0,M,,*5B",
        "$GPGGA,092750.000,5321.6802,N,00630.3372,W,1,8,1.03,61.7,M,55.2,M,,*76",
        "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39",
        "$GPGSA,A,3,23,29,07,08,09,18,26,28,,,,,1.94,1.18,1.54*0D",
        "$GPGSA,A,2,10,20,30,,,,,,,,,,2.0,1.5,2.5*32",
        "$GPGSA,M,1,,,,,,,,,,,,,99.9,99.9,99.9*05",
        "$GPGSV,3,1,11,03,03,111,00,04,15,270,00,06,01,010,00,13,06,292,00*74",
        "$GPGSV,3,3,11,09,40,060,22,10,60,150,33,11,75,240,38*4E",
        "$GPGSV,2,2,04,05,20,150,10,06,50,070,28,07,85,240,42*4B",
        "$GPGSV,1,1,01,01,90,100,50*44",
    ];

    for sentence in sentences {
        let result = Sentence::parse(sentence, true);
        assert!(result.is_ok(), "failed to parse {sentence}: {result:?}");
    }
}

#[test]
fn test_lenient_sweep_without_checksums() {
    let sentences = [
        "$GPRMC,081836,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E",
        "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1",
        "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,",
    ];

    for sentence in sentences {
        assert!(Sentence::parse(sentence, false).is_ok(), "{sentence}");
        assert_eq!(Sentence::parse(sentence, true), Err(Error::MissingChecksum));
    }
}

#[test]
fn test_invalid_content_sweep() {
    // valid envelopes whose content does not scan
    let sentences = [
        // non-numeric PDOP
        (
            "$GPGSA,A,3,01,02,03,04,05,06,07,08,09,10,11,12,A,1.0,2.0*5D",
            Error::InvalidField,
        ),
        // direction that is not one of NESW
        (
            "$GPRMC,123519,A,4807.038,Q,01131.000,E,0.20,0.83,230394,004.2,W*74",
            Error::InvalidField,
        ),
        // non-digit inside the time field
        (
            "$GPRMC,12x519,A,4807.038,N,01131.000,E,0.20,0.83,230394,004.2,W*20",
            Error::InvalidField,
        ),
        // GGA truncated before the DGPS fields
        (
            "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M*47",
            Error::MissingField,
        ),
        // GSV truncated inside the mandatory header
        ("$GPGSV,3,1*57", Error::MissingField),
    ];

    for (sentence, expected) in sentences {
        assert_eq!(Sentence::parse(sentence, true), Err(expected), "{sentence}");
    }
}

#[test]
fn test_invalid_envelope_sweep() {
    let sentences = [
        "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*38",
        "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*3",
        "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39x",
        "GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39",
    ];

    for sentence in sentences {
        assert_eq!(identify(sentence, false), SentenceKind::Invalid, "{sentence}");
        assert!(Sentence::parse(sentence, false).is_err(), "{sentence}");
    }
}

#[test]
fn test_gsv_with_trailing_empty_snr() {
    let sentence = "$GPGSV,4,1,13,02,28,259,33,04,12,212,27,05,34,305,30,07,79,138,*7F";

    match Sentence::parse(sentence, true).unwrap() {
        Sentence::Gsv(gsv) => {
            assert_eq!(gsv.total_messages, 4);
            assert_eq!(
                gsv.satellites[3],
                Satellite {
                    nr: 7,
                    elevation: 79,
                    azimuth: 138,
                    snr: 0
                }
            );
        }
        other => panic!("expected a GSV record, got {other:?}"),
    }
}
