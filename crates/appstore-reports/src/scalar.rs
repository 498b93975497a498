//! Typed wrappers for report table cells.
//!
//! Every wrapper accepts a blank cell and decodes it to its zero value. Dates
//! and timestamps serialize their zero value as an empty string.

use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime};

use crate::error::DecodeError;

pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
pub const DATE_FORMAT_SLASH: &[BorrowedFormatItem<'static>] =
    format_description!("[month]/[day]/[year]");
pub const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

fn is_blank(cell: &str) -> bool {
    cell.trim().is_empty()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ReportInteger(i64);

impl ReportInteger {
    pub fn parse(cell: &str) -> Result<Self, DecodeError> {
        if is_blank(cell) {
            return Ok(Self::default());
        }
        cell.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| DecodeError::Scalar {
                kind: "integer",
                value: cell.to_owned(),
            })
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

/// Monetary and unit amounts.
///
/// Cells are parsed at 32-bit precision and widened, so `209.3` decodes to
/// `209.3000030517578`. Report consumers rely on these exact values.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ReportFloat(f64);

impl ReportFloat {
    pub fn parse(cell: &str) -> Result<Self, DecodeError> {
        if is_blank(cell) {
            return Ok(Self::default());
        }
        let text = cell.trim();
        let invalid = || DecodeError::Scalar {
            kind: "float",
            value: cell.to_owned(),
        };
        let value = text.parse::<f32>().map_err(|_| invalid())?;
        // Finite text that overflows f32 is out of range, not infinity.
        if value.is_infinite() && !text.to_ascii_lowercase().contains("inf") {
            return Err(invalid());
        }
        Ok(Self(f64::from(value)))
    }

    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Calendar date in `YYYY-MM-DD` or `MM/DD/YYYY` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ReportDate(Option<Date>);

impl ReportDate {
    pub fn parse(cell: &str) -> Result<Self, DecodeError> {
        if is_blank(cell) {
            return Ok(Self::default());
        }
        let cell = cell.trim();
        let format = if cell.contains('/') {
            DATE_FORMAT_SLASH
        } else {
            DATE_FORMAT
        };
        Date::parse(cell, format)
            .map(|date| Self(Some(date)))
            .map_err(|_| DecodeError::Scalar {
                kind: "date",
                value: cell.to_owned(),
            })
    }

    pub const fn new(date: Date) -> Self {
        Self(Some(date))
    }

    pub const fn value(self) -> Option<Date> {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0.is_none()
    }
}

impl Display for ReportDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(date) => f.write_str(&date.format(DATE_FORMAT).map_err(|_| std::fmt::Error)?),
            None => Ok(()),
        }
    }
}

/// Timestamp in `YYYY-MM-DD HH:MM:SS` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ReportTimestamp(Option<PrimitiveDateTime>);

impl ReportTimestamp {
    pub fn parse(cell: &str) -> Result<Self, DecodeError> {
        if is_blank(cell) {
            return Ok(Self::default());
        }
        PrimitiveDateTime::parse(cell.trim(), TIMESTAMP_FORMAT)
            .map(|timestamp| Self(Some(timestamp)))
            .map_err(|_| DecodeError::Scalar {
                kind: "timestamp",
                value: cell.to_owned(),
            })
    }

    pub const fn value(self) -> Option<PrimitiveDateTime> {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0.is_none()
    }
}

impl Display for ReportTimestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(timestamp) => f.write_str(
                &timestamp
                    .format(TIMESTAMP_FORMAT)
                    .map_err(|_| std::fmt::Error)?,
            ),
            None => Ok(()),
        }
    }
}

/// `true`/`false` in any case; anything else reads as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReportBoolean(bool);

impl ReportBoolean {
    pub fn parse(cell: &str) -> Self {
        Self(cell.trim().eq_ignore_ascii_case("true"))
    }

    pub const fn value(self) -> bool {
        self.0
    }
}

macro_rules! deserialize_from_cell {
    ($($wrapper:ty),+ $(,)?) => {
        $(
            impl<'de> Deserialize<'de> for $wrapper {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let cell = String::deserialize(deserializer)?;
                    Self::parse(&cell).map_err(D::Error::custom)
                }
            }
        )+
    };
}

deserialize_from_cell!(ReportInteger, ReportFloat, ReportDate, ReportTimestamp);

impl<'de> Deserialize<'de> for ReportBoolean {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let cell = String::deserialize(deserializer)?;
        Ok(Self::parse(&cell))
    }
}

impl Serialize for ReportInteger {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl Serialize for ReportFloat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

impl Serialize for ReportBoolean {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bool(self.0)
    }
}

impl Serialize for ReportDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl Serialize for ReportTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
