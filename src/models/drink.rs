use crate::errors::AppError;
use serde::Serialize;

/// Cup sizes offered by the hydration game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DrinkSize {
    Small,  // 200 ml
    Medium, // 300 ml
    Large,  // 500 ml
}

impl DrinkSize {
    pub const ALL: [DrinkSize; 3] = [DrinkSize::Small, DrinkSize::Medium, DrinkSize::Large];

    pub fn ml(&self) -> u32 {
        match self {
            DrinkSize::Small => 200,
            DrinkSize::Medium => 300,
            DrinkSize::Large => 500,
        }
    }

    pub fn from_ml(ml: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.ml() == ml)
    }
}

impl TryFrom<u32> for DrinkSize {
    type Error = AppError;

    fn try_from(ml: u32) -> Result<Self, Self::Error> {
        DrinkSize::from_ml(ml).ok_or(AppError::InvalidDrinkSize(ml))
    }
}
