use strum::{Display, EnumIter, IntoStaticStr};

use crate::Reps;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Intensity {
    #[strum(serialize = "Too Heavy")]
    TooHeavy,
    #[strum(serialize = "Moderate Heavy")]
    ModerateHeavy,
    #[strum(serialize = "Light Weight")]
    LightWeight,
}

impl From<Reps> for Intensity {
    fn from(value: Reps) -> Self {
        classify_intensity(u32::from(value))
    }
}

#[must_use]
pub fn classify_intensity(reps: u32) -> Intensity {
    match reps {
        0..6 => Intensity::TooHeavy,
        6..=12 => Intensity::ModerateHeavy,
        _ => Intensity::LightWeight,
    }
}
