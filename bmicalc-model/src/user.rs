use std::{fmt, str::FromStr};

use crate::error::Error;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn is_female(&self) -> bool {
        matches!(self, Gender::Female)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "m"),
            Gender::Female => write!(f, "f"),
        }
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("m") {
            Ok(Gender::Male)
        } else if s.eq_ignore_ascii_case("f") {
            Ok(Gender::Female)
        } else {
            Err(Error::invalid_argument(format!("Invalid gender \"{}\"", s)))
        }
    }
}

/// Biometric data of a single person, gathered for one calculation.
///
/// Weight is kept in kilograms and height in centimeters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserData {
    weight: f64,
    height: f64,
    age: u32,
    gender: Gender,
}

impl UserData {
    pub fn new(weight: f64, height: f64, age: u32, gender: Gender) -> Self {
        Self {
            weight,
            height,
            age,
            gender,
        }
    }
    pub fn weight(&self) -> f64 {
        self.weight
    }
    pub fn height_cm(&self) -> f64 {
        self.height
    }
    pub fn age(&self) -> u32 {
        self.age
    }
    pub fn gender(&self) -> Gender {
        self.gender
    }
}
