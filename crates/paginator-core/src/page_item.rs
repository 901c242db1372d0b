use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PaginatorError;

/// Text form of the collapsed-range marker.
pub const ELLIPSIS: &str = "...";

/// One entry in a condensed page sequence: a page number, or a marker
/// standing in for a collapsed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Number(i64),
    Ellipsis,
}

impl PageItem {
    /// The page number, if this entry is one.
    pub fn number(&self) -> Option<i64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

impl From<i64> for PageItem {
    fn from(number: i64) -> Self {
        Self::Number(number)
    }
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{}", number),
            Self::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

impl FromStr for PageItem {
    type Err = PaginatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ELLIPSIS {
            return Ok(Self::Ellipsis);
        }
        s.parse::<i64>()
            .map(Self::Number)
            .map_err(|_| PaginatorError::InvalidPageItem(s.to_string()))
    }
}

// The page sequence crosses the API boundary as a mixed array: bare
// integers with "..." strings for collapsed ranges. That shape cannot be
// derived, so both directions are spelled out.
impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(number) => serializer.serialize_i64(*number),
            Self::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

struct PageItemVisitor;

impl Visitor<'_> for PageItemVisitor {
    type Value = PageItem;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a page number or {:?}", ELLIPSIS)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(PageItem::Number(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        i64::try_from(value)
            .map(PageItem::Number)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value
            .parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

impl<'de> Deserialize<'de> for PageItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PageItemVisitor)
    }
}
