//! Seat winds and the fixed per-wind container.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::domain::{DomainError, StateKind, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Wind {
    East,
    South,
    West,
    North,
}

impl Wind {
    /// All winds in seating order.
    pub const ALL: [Wind; 4] = [Wind::East, Wind::South, Wind::West, Wind::North];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Wind::East => 0,
            Wind::South => 1,
            Wind::West => 2,
            Wind::North => 3,
        }
    }

    /// Next wind in East → South → West → North order. North has none.
    #[inline]
    pub const fn next(self) -> Option<Wind> {
        match self {
            Wind::East => Some(Wind::South),
            Wind::South => Some(Wind::West),
            Wind::West => Some(Wind::North),
            Wind::North => None,
        }
    }

    /// Like [`Wind::next`], but advancing past North is a state error.
    pub fn successor(self) -> Result<Wind, DomainError> {
        self.next().ok_or_else(|| {
            DomainError::state(
                StateKind::RoundWindExhausted,
                "North has no successor wind",
            )
        })
    }

    pub const fn label(self) -> &'static str {
        match self {
            Wind::East => "East",
            Wind::South => "South",
            Wind::West => "West",
            Wind::North => "North",
        }
    }

    const fn code(self) -> &'static str {
        match self {
            Wind::East => "EAST",
            Wind::South => "SOUTH",
            Wind::West => "WEST",
            Wind::North => "NORTH",
        }
    }

    fn from_code(s: &str) -> Option<Wind> {
        match s.to_ascii_uppercase().as_str() {
            "EAST" => Some(Wind::East),
            "SOUTH" => Some(Wind::South),
            "WEST" => Some(Wind::West),
            "NORTH" => Some(Wind::North),
            _ => None,
        }
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Wind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Wind::from_code(s.trim())
            .ok_or_else(|| DomainError::validation_other(format!("Invalid wind: {s}")))
    }
}

impl Serialize for Wind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Wind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Wind::from_code(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid wind: {s}")))
    }
}

/// Exactly one value per wind, indexed by [`Wind`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct WindTable<T>([T; 4]);

impl<T> WindTable<T> {
    pub fn new(values: [T; 4]) -> Self {
        Self(values)
    }

    pub fn from_fn(mut f: impl FnMut(Wind) -> T) -> Self {
        Self([
            f(Wind::East),
            f(Wind::South),
            f(Wind::West),
            f(Wind::North),
        ])
    }

    /// Like [`WindTable::from_fn`], stopping at the first error.
    pub fn try_from_fn<E>(mut f: impl FnMut(Wind) -> Result<T, E>) -> Result<Self, E> {
        Ok(Self([
            f(Wind::East)?,
            f(Wind::South)?,
            f(Wind::West)?,
            f(Wind::North)?,
        ]))
    }

    /// Build from `(wind, value)` pairs; every wind must appear exactly once.
    pub fn try_from_entries(
        entries: impl IntoIterator<Item = (Wind, T)>,
    ) -> Result<Self, DomainError> {
        let mut slots: [Option<T>; 4] = [None, None, None, None];
        let mut count = 0usize;
        for (wind, value) in entries {
            count += 1;
            let slot = &mut slots[wind.index()];
            if slot.is_some() {
                return Err(DomainError::validation(
                    ValidationKind::DuplicateWind,
                    format!("More than one entry for {wind}"),
                ));
            }
            *slot = Some(value);
        }
        if count != 4 {
            return Err(DomainError::validation(
                ValidationKind::WrongScoreCount,
                format!("Expected 4 entries, got {count}"),
            ));
        }
        let [east, south, west, north] = slots;
        match (east, south, west, north) {
            (Some(e), Some(s), Some(w), Some(n)) => Ok(Self([e, s, w, n])),
            _ => Err(DomainError::validation(
                ValidationKind::MissingWind,
                "Every wind needs an entry",
            )),
        }
    }

    pub fn get(&self, wind: Wind) -> &T {
        &self.0[wind.index()]
    }

    pub fn get_mut(&mut self, wind: Wind) -> &mut T {
        &mut self.0[wind.index()]
    }

    /// Iterate `(wind, value)` in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (Wind, &T)> {
        Wind::ALL.into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    pub fn map<U>(&self, mut f: impl FnMut(Wind, &T) -> U) -> WindTable<U> {
        WindTable::from_fn(|wind| f(wind, self.get(wind)))
    }

    pub fn into_array(self) -> [T; 4] {
        self.0
    }
}

impl<T> Index<Wind> for WindTable<T> {
    type Output = T;

    fn index(&self, wind: Wind) -> &T {
        self.get(wind)
    }
}

impl<T> IndexMut<Wind> for WindTable<T> {
    fn index_mut(&mut self, wind: Wind) -> &mut T {
        self.get_mut(wind)
    }
}
