//! `serde` support: dates as ISO 8601 strings, months and weekdays as their
//! English names, durations as day counts.

use std::fmt;

use serde::{de, ser};

use crate::date::Date;
use crate::duration::Duration;
use crate::month::Month;
use crate::weekday::Weekday;

impl ser::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

struct DateVisitor;

impl de::Visitor<'_> for DateVisitor {
    type Value = Date;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a date string of the form YYYY-MM-DD")
    }

    fn visit_str<E>(self, value: &str) -> Result<Date, E>
    where
        E: de::Error,
    {
        value.parse().map_err(E::custom)
    }
}

impl<'de> de::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(DateVisitor)
    }
}

impl ser::Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_i32(self.as_days())
    }
}

impl<'de> de::Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        <i32 as de::Deserialize>::deserialize(deserializer).map(Duration::days)
    }
}

/// Deserializes one of a fixed set of names, ignoring ASCII case.
struct NameVisitor<T: 'static> {
    expecting: &'static str,
    table: &'static [T],
    name: fn(T) -> &'static str,
}

impl<T: Copy + 'static> de::Visitor<'_> for NameVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.expecting)
    }

    fn visit_str<E>(self, value: &str) -> Result<T, E>
    where
        E: de::Error,
    {
        self.table
            .iter()
            .copied()
            .find(|&item| (self.name)(item).eq_ignore_ascii_case(value))
            .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

impl ser::Serialize for Month {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> de::Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(NameVisitor {
            expecting: "an English month name",
            table: &Month::ALL,
            name: Month::name,
        })
    }
}

impl ser::Serialize for Weekday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> de::Deserialize<'de> for Weekday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(NameVisitor {
            expecting: "an English weekday name",
            table: &Weekday::ALL,
            name: Weekday::name,
        })
    }
}
