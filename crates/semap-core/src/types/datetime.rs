use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Debug, Display},
    sync::OnceLock,
};
use time::{Date as TimeDate, Month, PrimitiveDateTime, Time, format_description::FormatItem};

static FORMAT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();

fn format() -> &'static [FormatItem<'static>] {
    FORMAT.get_or_init(|| {
        time::format_description::parse("[year]-[month]-[day]T[hour]:[minute]:[second]")
            .expect("datetime format description is valid")
    })
}

///
/// DateTime
///
/// CMS date-time value with second precision and no offset, as published in
/// content fields (`2024-01-01T00:00:00`).
///

#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct DateTime(PrimitiveDateTime);

impl DateTime {
    #[must_use]
    pub fn new_checked(y: i32, mo: u8, d: u8, h: u8, mi: u8, s: u8) -> Option<Self> {
        let month = Month::try_from(mo).ok()?;
        let date = TimeDate::from_calendar_date(y, month, d).ok()?;
        let time = Time::from_hms(h, mi, s).ok()?;
        Some(Self(PrimitiveDateTime::new(date, time)))
    }

    /// Parse an ISO `YYYY-MM-DDTHH:MM:SS` string.
    pub fn parse(s: &str) -> Option<Self> {
        PrimitiveDateTime::parse(s, format()).ok().map(Self)
    }

    #[must_use]
    pub const fn year(self) -> i32 {
        self.0.year()
    }

    #[must_use]
    pub fn month(self) -> u8 {
        self.0.month().into()
    }

    #[must_use]
    pub const fn day(self) -> u8 {
        self.0.day()
    }

    #[must_use]
    pub const fn hour(self) -> u8 {
        self.0.hour()
    }

    #[must_use]
    pub const fn minute(self) -> u8 {
        self.0.minute()
    }

    #[must_use]
    pub const fn second(self) -> u8 {
        self.0.second()
    }
}

impl Debug for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DateTime({self})")
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month: u8 = self.0.month().into();
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.0.year(),
            month,
            self.0.day(),
            self.0.hour(),
            self.0.minute(),
            self.0.second()
        )
    }
}

impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid datetime: {s}")))
    }
}

///
/// TESTS
///
