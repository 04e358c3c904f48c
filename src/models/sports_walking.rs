use super::training::{Session, Training, MIN_IN_H};
use crate::package::WorkoutCode;

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Sports walking workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub session: Session,
    pub height: f64, // cm
}

impl SportsWalking {
    pub fn new(action: u64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            session: Session::new(action, duration, weight),
            height,
        }
    }
}

impl Training for SportsWalking {
    fn code(&self) -> WorkoutCode {
        WorkoutCode::SportsWalking
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        // speed squared is floor-divided by height, not divided
        let speed_by_height = self.mean_speed().powi(2).div_euclid(self.height);

        (CALORIES_WEIGHT_MULTIPLIER * self.session.weight
            + speed_by_height * CALORIES_SPEED_HEIGHT_MULTIPLIER * self.session.weight)
            * (self.session.duration * MIN_IN_H)
    }

    fn divisors(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("duration", self.session.duration),
            ("height", self.height),
        ]
    }
}
