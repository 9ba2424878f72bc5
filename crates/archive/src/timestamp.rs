use crate::consts;
use crate::error::{Error, ErrorKind, Result};
use exn::ResultExt;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use time::{Date, Month};

/// An archive timestamp in `YYYYMMDD` or `YYYYMMDDHHMMSS` form.
///
/// Validated on construction: the digits must form a real calendar date
/// (and, in the long form, a real time of day). The raw digit string is kept
/// verbatim, since snapshot URLs embed it as-is.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(String);
impl Timestamp {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(raw: &str) -> Result<()> {
        if !consts::TIMESTAMP_REGEX.is_match(raw) {
            exn::bail!(ErrorKind::InvalidTimestamp(raw.to_string()));
        }
        let invalid = || ErrorKind::InvalidTimestamp(raw.to_string());
        // The regex guarantees ASCII digits, so the slices below are safe.
        let year: i32 = raw[0..4].parse::<i32>().or_raise(invalid)?;
        let month: u8 = raw[4..6].parse::<u8>().or_raise(invalid)?;
        let month = Month::try_from(month).or_raise(invalid)?;
        let day: u8 = raw[6..8].parse::<u8>().or_raise(invalid)?;
        Date::from_calendar_date(year, month, day).or_raise(invalid)?;
        if raw.len() == 14 {
            let hour: u8 = raw[8..10].parse::<u8>().or_raise(invalid)?;
            let minute: u8 = raw[10..12].parse::<u8>().or_raise(invalid)?;
            let second: u8 = raw[12..14].parse::<u8>().or_raise(invalid)?;
            time::Time::from_hms(hour, minute, second).or_raise(invalid)?;
        }
        Ok(())
    }
}
impl FromStr for Timestamp {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let raw = s.trim();
        Self::validate(raw)?;
        Ok(Self(raw.to_string()))
    }
}
impl TryFrom<String> for Timestamp {
    type Error = Error;
    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}
impl From<Date> for Timestamp {
    /// Day-precision timestamp for a calendar date.
    fn from(date: Date) -> Self {
        Self(format!("{:04}{:02}{:02}", date.year(), u8::from(date.month()), date.day()))
    }
}
impl From<Timestamp> for String {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}
impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}
