//! Entity ID - database-assigned 64-bit identifier

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier of a persisted row (users, bottles, stations, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(i64);

impl Id {
    /// Create a new Id from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Accept a raw value as an id. Only positive values are ids.
    pub fn checked(value: i64) -> Result<Self, IdParseError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(IdParseError::NotPositive)
        }
    }

    /// Parse from string representation. Only positive ids are accepted.
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| IdParseError::InvalidFormat)?;
        Self::checked(value)
    }
}

/// Error when parsing an Id from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid id format")]
    InvalidFormat,

    #[error("id must be positive")]
    NotPositive,
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Id {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Id> for i64 {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl std::str::FromStr for Id {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Id::parse(s)
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

// Clients send ids either as numbers or as numeric strings; both must be positive
impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = Id;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer representing an id")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Id, E>
            where
                E: de::Error,
            {
                Id::checked(value).map_err(de::Error::custom)
            }

            fn visit_u64<E>(self, value: u64) -> Result<Id, E>
            where
                E: de::Error,
            {
                let value =
                    i64::try_from(value).map_err(|_| de::Error::custom("id out of range"))?;
                self.visit_i64(value)
            }

            fn visit_str<E>(self, value: &str) -> Result<Id, E>
            where
                E: de::Error,
            {
                Id::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}
