use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use strum::{Display, EnumIter, EnumString};

use crate::error::Error;

/// Physical activity level, selected by the options 1 to 6.
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, FromPrimitive, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivityLevel {
    #[strum(to_string = "Bed rest")]
    BedRest = 1,
    #[strum(to_string = "Sedentary")]
    Sedentary = 2,
    #[strum(to_string = "Light exercise")]
    LightExercise = 3,
    #[strum(to_string = "Moderate")]
    ModerateExercise = 4,
    #[strum(to_string = "Heavy")]
    HeavyExercise = 5,
    #[strum(to_string = "Very heavy")]
    VeryHeavyExercise = 6,
}

impl ActivityLevel {
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::BedRest => 1.0,
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightExercise => 1.375,
            ActivityLevel::ModerateExercise => 1.55,
            ActivityLevel::HeavyExercise => 1.725,
            ActivityLevel::VeryHeavyExercise => 1.9,
        }
    }

    pub fn option(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for ActivityLevel {
    type Error = Error;

    fn try_from(option: u8) -> Result<Self, Self::Error> {
        ActivityLevel::from_u8(option)
            .ok_or_else(|| Error::invalid_argument(format!("Invalid activity option {}", option)))
    }
}

/// Body weight goal, applied on top of the caloric demand.
#[derive(Clone, Copy, Debug, Default, Display, EnumIter, EnumString, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Goal {
    #[default]
    #[strum(to_string = "Maintain weight", serialize = "maintain")]
    MaintainWeight,
    #[strum(to_string = "Weight loss", serialize = "loss")]
    WeightLoss,
    #[strum(to_string = "Weight gain", serialize = "gain")]
    WeightGain,
}

impl Goal {
    pub fn factor(&self) -> f64 {
        match self {
            Goal::MaintainWeight => 1.0,
            Goal::WeightLoss => 0.8,
            Goal::WeightGain => 1.1,
        }
    }

    pub fn adjust(&self, tdee: f64) -> f64 {
        tdee * self.factor()
    }
}
