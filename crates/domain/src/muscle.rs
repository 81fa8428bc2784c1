use std::{fmt, str::FromStr};

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::advice::{self, AdviceRecord};

#[derive(
    Clone, Copy, Debug, EnumIter, Eq, Hash, IntoStaticStr, PartialEq, PartialOrd, Ord,
)]
#[strum(serialize_all = "kebab-case")]
pub enum MuscleID {
    // Legs
    Quadriceps,
    Hamstrings,
    Glutes,
    Calves,
    HipFlexors,
    Adductors,
    // Trunk
    LowerBack,
    Core,
    Trapezius,
    UpperBack,
    Chest,
    // Arms
    Biceps,
    Triceps,
    Forearm,
    Deltoids,
    // Hips
    Abductors,
    // Neck
    Neck,
    // Joints
    Knee,
}

impl MuscleID {
    /// Stable identifier used by the diagram and the backend, e.g. `hip-flexors`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MuscleID::Quadriceps => "Quadriceps",
            MuscleID::Hamstrings => "Hamstrings",
            MuscleID::Glutes => "Glutes",
            MuscleID::Calves => "Calves",
            MuscleID::HipFlexors => "Hip Flexors",
            MuscleID::Adductors => "Adductors",
            MuscleID::LowerBack => "Lower Back",
            MuscleID::Core => "Core",
            MuscleID::Trapezius => "Trapezius",
            MuscleID::UpperBack => "Upper Back",
            MuscleID::Chest => "Chest",
            MuscleID::Biceps => "Biceps",
            MuscleID::Triceps => "Triceps",
            MuscleID::Forearm => "Forearm",
            MuscleID::Deltoids => "Deltoids",
            MuscleID::Abductors => "Abductors",
            MuscleID::Neck => "Neck",
            MuscleID::Knee => "Knee",
        }
    }

    /// Joints are selectable like muscles but are not part of the vendor diagram.
    #[must_use]
    pub fn is_joint(self) -> bool {
        matches!(self, MuscleID::Knee)
    }

    #[must_use]
    pub fn advice(self) -> &'static AdviceRecord {
        advice::record(self)
    }
}

impl fmt::Display for MuscleID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for MuscleID {
    type Err = MuscleIDError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        MuscleID::iter()
            .find(|muscle| muscle.slug() == value)
            .ok_or_else(|| MuscleIDError::Invalid(value.to_string()))
    }
}

impl TryFrom<&str> for MuscleID {
    type Error = MuscleIDError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MuscleIDError {
    #[error("Invalid muscle ID: {0}")]
    Invalid(String),
}
