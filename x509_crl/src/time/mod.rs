// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Time values for CRL processing.
//!
//! Both ASN.1 time types decode into a single calendar representation,
//! [`GeneralizedTime`], so that `thisUpdate`, `nextUpdate` and the
//! verification time can be compared field by field without converting
//! through epoch arithmetic.
//!
//! # UTCTime Y2K Conversion
//!
//! UTCTime values are interpreted according to RFC 5280:
//! - Years 50-99 are interpreted as 1950-1999
//! - Years 00-49 are interpreted as 2000-2049

extern crate alloc;

mod revocation_date;

use alloc::string::ToString;

use crate::asn1::{ByteReader, Input};
use crate::error::{Error, ParseError, Result, TimeError};

pub use self::revocation_date::check_revocation_date_valid;

/// Length of an encoded UTCTime (`YYMMDDHHMMSSZ`)
pub const UTC_TIME_LENGTH: usize = 13;

/// Length of an encoded GeneralizedTime (`YYYYMMDDHHMMSSZ`)
pub const GENERALIZED_TIME_LENGTH: usize = 15;

/// A UTC calendar time with one-second resolution.
///
/// Field order makes the derived `Ord` a calendar comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GeneralizedTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl GeneralizedTime {
    /// Whether this time can be written as a UTCTime (1950 <= year < 2050)
    pub fn in_utc_time_range(&self) -> bool {
        (1950..2050).contains(&self.year)
    }
}

// ============================================================================
// Decoding
// ============================================================================

fn invalid_time(msg: &str) -> Error {
    Error::ParseError(ParseError::InvalidTimeEncoding(msg.to_string()))
}

fn read_decimal(reader: &mut ByteReader<'_>, digits: usize) -> Result<u16> {
    let mut value = 0u16;
    for _ in 0..digits {
        let digit = reader
            .read_byte()
            .ok_or_else(|| invalid_time("truncated"))?;
        if !digit.is_ascii_digit() {
            return Err(invalid_time("non-digit character"));
        }
        value = value * 10 + u16::from(digit - b'0');
    }
    Ok(value)
}

fn read_two_digits(reader: &mut ByteReader<'_>) -> Result<u8> {
    // two digits never exceed 99
    read_decimal(reader, 2).map(|v| v as u8)
}

fn expect_zulu_end(reader: &mut ByteReader<'_>) -> Result<()> {
    match reader.read_byte() {
        Some(b'Z') if !reader.has_more() => Ok(()),
        _ => Err(invalid_time("missing trailing 'Z'")),
    }
}

fn utc_century(two_digit_year: u16) -> u16 {
    if two_digit_year < 50 {
        2000 + two_digit_year
    } else {
        1900 + two_digit_year
    }
}

fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Check that `time` names a real calendar instant (leap seconds allowed).
fn validate(time: GeneralizedTime) -> Result<GeneralizedTime> {
    if !(1..=12).contains(&time.month) {
        return Err(invalid_time("month out of range"));
    }
    if time.hours > 23 || time.minutes > 59 || time.seconds > 60 {
        return Err(invalid_time("time of day out of range"));
    }
    let days_in_month = match time.month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(time.year) => 29,
        2 => 28,
        _ => 31,
    };
    if time.day < 1 || time.day > days_in_month {
        return Err(invalid_time("day out of range"));
    }
    Ok(time)
}

/// Decode a DER UTCTime value (`YYMMDDHHMMSSZ`).
pub fn parse_utc_time(input: Input<'_>) -> Result<GeneralizedTime> {
    let mut reader = ByteReader::new(input);
    let year = utc_century(read_decimal(&mut reader, 2)?);
    let month = read_two_digits(&mut reader)?;
    let day = read_two_digits(&mut reader)?;
    let hours = read_two_digits(&mut reader)?;
    let minutes = read_two_digits(&mut reader)?;
    let seconds = read_two_digits(&mut reader)?;
    expect_zulu_end(&mut reader)?;

    validate(GeneralizedTime {
        year,
        month,
        day,
        hours,
        minutes,
        seconds,
    })
}

/// Decode a BER UTCTime value, which may omit seconds (`YYMMDDHHMMZ`).
pub fn parse_utc_time_relaxed(input: Input<'_>) -> Result<GeneralizedTime> {
    let mut reader = ByteReader::new(input);
    let year = utc_century(read_decimal(&mut reader, 2)?);
    let month = read_two_digits(&mut reader)?;
    let day = read_two_digits(&mut reader)?;
    let hours = read_two_digits(&mut reader)?;
    let minutes = read_two_digits(&mut reader)?;

    let seconds = if reader.peek_byte() == Some(b'Z') && reader.bytes_left() == 1 {
        0
    } else {
        read_two_digits(&mut reader)?
    };
    expect_zulu_end(&mut reader)?;

    validate(GeneralizedTime {
        year,
        month,
        day,
        hours,
        minutes,
        seconds,
    })
}

/// Decode a DER GeneralizedTime value (`YYYYMMDDHHMMSSZ`).
///
/// Fractional seconds and local time offsets are not accepted.
pub fn parse_generalized_time(input: Input<'_>) -> Result<GeneralizedTime> {
    let mut reader = ByteReader::new(input);
    let year = read_decimal(&mut reader, 4)?;
    let month = read_two_digits(&mut reader)?;
    let day = read_two_digits(&mut reader)?;
    let hours = read_two_digits(&mut reader)?;
    let minutes = read_two_digits(&mut reader)?;
    let seconds = read_two_digits(&mut reader)?;
    expect_zulu_end(&mut reader)?;

    validate(GeneralizedTime {
        year,
        month,
        day,
        hours,
        minutes,
        seconds,
    })
}

// ============================================================================
// Encoding
// ============================================================================

fn write_digits(out: &mut [u8], value: u16) -> Result<()> {
    let mut rest = value;
    for slot in out.iter_mut().rev() {
        *slot = b'0' + (rest % 10) as u8;
        rest /= 10;
    }
    if rest != 0 {
        return Err(Error::TimeError(TimeError::InvalidTime));
    }
    Ok(())
}

/// Encode `time` as GeneralizedTime value bytes.
///
/// Fields are written as-is; calendar validity is not rechecked.
pub fn encode_generalized_time(time: &GeneralizedTime) -> Result<[u8; GENERALIZED_TIME_LENGTH]> {
    let mut out = [0u8; GENERALIZED_TIME_LENGTH];
    write_digits(&mut out[0..4], time.year)?;
    write_digits(&mut out[4..6], u16::from(time.month))?;
    write_digits(&mut out[6..8], u16::from(time.day))?;
    write_digits(&mut out[8..10], u16::from(time.hours))?;
    write_digits(&mut out[10..12], u16::from(time.minutes))?;
    write_digits(&mut out[12..14], u16::from(time.seconds))?;
    out[14] = b'Z';
    Ok(out)
}

/// Encode `time` as UTCTime value bytes; fails outside 1950..2050.
pub fn encode_utc_time(time: &GeneralizedTime) -> Result<[u8; UTC_TIME_LENGTH]> {
    if !time.in_utc_time_range() {
        return Err(Error::TimeError(TimeError::InvalidTime));
    }
    let mut out = [0u8; UTC_TIME_LENGTH];
    write_digits(&mut out[0..2], time.year % 100)?;
    write_digits(&mut out[2..4], u16::from(time.month))?;
    write_digits(&mut out[4..6], u16::from(time.day))?;
    write_digits(&mut out[6..8], u16::from(time.hours))?;
    write_digits(&mut out[8..10], u16::from(time.minutes))?;
    write_digits(&mut out[10..12], u16::from(time.seconds))?;
    out[12] = b'Z';
    Ok(out)
}

/// 0000-01-01T00:00:00Z
const MIN_EPOCH_SECONDS: i64 = -62_167_219_200;
/// 9999-12-31T23:59:59Z
const MAX_EPOCH_SECONDS: i64 = 253_402_300_799;

const SECONDS_PER_DAY: i64 = 86_400;
const DAYS_PER_ERA: i64 = 146_097;

/// Proleptic Gregorian (year, month, day) for a day count relative to
/// 1970-01-01, computed in 400-year eras starting on March 1st.
fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z.rem_euclid(DAYS_PER_ERA);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Convert seconds since the Unix epoch into a [`GeneralizedTime`].
///
/// Supports 0000-01-01 through 9999-12-31, so negative epochs map to
/// calendar times before 1970.
pub fn encode_time_as_generalized_time(epoch_seconds: i64) -> Result<GeneralizedTime> {
    if !(MIN_EPOCH_SECONDS..=MAX_EPOCH_SECONDS).contains(&epoch_seconds) {
        return Err(Error::TimeError(TimeError::OutOfRange(epoch_seconds)));
    }
    let (year, month, day) = civil_from_days(epoch_seconds.div_euclid(SECONDS_PER_DAY));
    let secs_of_day = epoch_seconds.rem_euclid(SECONDS_PER_DAY);
    Ok(GeneralizedTime {
        year: u16::try_from(year)
            .map_err(|_| Error::TimeError(TimeError::OutOfRange(epoch_seconds)))?,
        month,
        day,
        hours: (secs_of_day / 3600) as u8,
        minutes: (secs_of_day % 3600 / 60) as u8,
        seconds: (secs_of_day % 60) as u8,
    })
}

/// Seconds since the Unix epoch according to the system clock.
#[cfg(feature = "std")]
pub fn current_epoch_seconds() -> Result<i64> {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_err(|_| Error::TimeError(TimeError::InvalidTime))?;
    i64::try_from(now.as_secs()).map_err(|_| Error::TimeError(TimeError::InvalidTime))
}

/// Gets current time as a [`GeneralizedTime`].
#[cfg(feature = "std")]
pub fn current_time() -> Result<GeneralizedTime> {
    encode_time_as_generalized_time(current_epoch_seconds()?)
}

impl core::fmt::Display for GeneralizedTime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    fn gt(s: &str) -> Result<GeneralizedTime> {
        parse_generalized_time(Input::new(s.as_bytes()))
    }

    fn utc(s: &str) -> Result<GeneralizedTime> {
        parse_utc_time(Input::new(s.as_bytes()))
    }

    #[test]
    fn test_parse_generalized_time() {
        let t = gt("20140218161200Z").unwrap();
        assert_eq!(
            t,
            GeneralizedTime {
                year: 2014,
                month: 2,
                day: 18,
                hours: 16,
                minutes: 12,
                seconds: 0
            }
        );
    }

    #[test]
    fn test_leap_years() {
        assert!(gt("20000229000000Z").is_ok());
        assert!(gt("21000229000000Z").is_err());
        assert!(gt("20160229000000Z").is_ok());
        assert!(gt("20150229000000Z").is_err());
        assert!(gt("19000229000000Z").is_err());
    }

    #[test]
    fn test_leap_second() {
        assert_eq!(gt("20140218161260Z").unwrap().seconds, 60);
        assert!(gt("20140218161261Z").is_err());
    }

    #[test]
    fn test_calendar_bounds() {
        assert!(gt("20140018000000Z").is_err());
        assert!(gt("20141318000000Z").is_err());
        assert!(gt("20140100000000Z").is_err());
        assert!(gt("20140131000000Z").is_ok());
        assert!(gt("20140132000000Z").is_err());
        assert!(gt("20140431000000Z").is_err());
        assert!(gt("20140430235959Z").is_ok());
        assert!(gt("20140430240000Z").is_err());
        assert!(gt("20140430236000Z").is_err());
    }

    #[test]
    fn test_generalized_time_format() {
        assert!(gt("20140218161200").is_err());
        assert!(gt("20140218161200Z0").is_err());
        assert!(gt("2014021816120Z").is_err());
        assert!(gt("20140218161200.5Z").is_err());
        assert!(gt("20140218161200+0100").is_err());
        assert!(gt("2014-2-18161200Z").is_err());
        assert!(gt("").is_err());
    }

    #[test]
    fn test_parse_utc_time_century() {
        assert_eq!(utc("491231235959Z").unwrap().year, 2049);
        assert_eq!(utc("500101000000Z").unwrap().year, 1950);
        assert_eq!(utc("000229000000Z").unwrap().year, 2000);
        assert!(utc("1402181612Z").is_err());
        assert!(utc("140218161200").is_err());
    }

    #[test]
    fn test_parse_utc_time_relaxed() {
        let relaxed = |s: &str| parse_utc_time_relaxed(Input::new(s.as_bytes()));

        let t = relaxed("1402181612Z").unwrap();
        assert_eq!((t.year, t.minutes, t.seconds), (2014, 12, 0));
        assert_eq!(relaxed("140218161259Z").unwrap().seconds, 59);
        assert!(relaxed("1402181612").is_err());
        assert!(relaxed("14021816125Z").is_err());
        assert!(relaxed("140218161259ZZ").is_err());
        assert!(relaxed("1402301612Z").is_err());
    }

    #[test]
    fn test_ordering() {
        let a = gt("20140218161200Z").unwrap();
        let b = gt("20140218161201Z").unwrap();
        let c = gt("20150101000000Z").unwrap();
        assert!(a < b && b < c);
        assert_eq!(a.max(c), c);
        assert_eq!(utc("140218161200Z").unwrap(), a);
    }

    #[test]
    fn test_in_utc_time_range() {
        assert!(gt("19500101000000Z").unwrap().in_utc_time_range());
        assert!(gt("20491231235959Z").unwrap().in_utc_time_range());
        assert!(!gt("20500101000000Z").unwrap().in_utc_time_range());
        assert!(!gt("19491231235959Z").unwrap().in_utc_time_range());
    }

    #[test]
    fn test_encode() {
        let t = gt("20140218161260Z").unwrap();
        assert_eq!(&encode_generalized_time(&t).unwrap(), b"20140218161260Z");
        assert_eq!(&encode_utc_time(&t).unwrap(), b"140218161260Z");

        let late = gt("20500101000000Z").unwrap();
        assert!(encode_utc_time(&late).is_err());
        assert_eq!(&encode_generalized_time(&late).unwrap(), b"20500101000000Z");

        let bad = GeneralizedTime {
            year: 2014,
            month: 100,
            ..Default::default()
        };
        assert!(encode_generalized_time(&bad).is_err());
    }

    #[test]
    fn test_encode_time_as_generalized_time() {
        assert_eq!(
            encode_time_as_generalized_time(0).unwrap(),
            gt("19700101000000Z").unwrap()
        );
        // 2014-02-18T16:12:00Z
        assert_eq!(
            encode_time_as_generalized_time(1_392_739_920).unwrap(),
            gt("20140218161200Z").unwrap()
        );
        assert_eq!(
            encode_time_as_generalized_time(-1).unwrap(),
            gt("19691231235959Z").unwrap()
        );
        // 1900-03-01, just after a non-leap February
        assert_eq!(
            encode_time_as_generalized_time(-2_203_891_200).unwrap(),
            gt("19000301000000Z").unwrap()
        );
        // 1960-02-29
        assert_eq!(
            encode_time_as_generalized_time(-310_521_600).unwrap(),
            gt("19600229000000Z").unwrap()
        );
        assert_eq!(
            encode_time_as_generalized_time(MIN_EPOCH_SECONDS).unwrap(),
            gt("00000101000000Z").unwrap()
        );
        assert_eq!(
            encode_time_as_generalized_time(MAX_EPOCH_SECONDS).unwrap(),
            gt("99991231235959Z").unwrap()
        );
        assert!(encode_time_as_generalized_time(MIN_EPOCH_SECONDS - 1).is_err());
        assert!(encode_time_as_generalized_time(MAX_EPOCH_SECONDS + 1).is_err());
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_current_time() {
        let now = current_time().unwrap();
        assert!(now.year >= 2024);
    }

    #[test]
    fn test_display() {
        let t = gt("20140218161200Z").unwrap();
        assert_eq!(format!("{}", t), "2014-02-18T16:12:00Z");
    }
}
