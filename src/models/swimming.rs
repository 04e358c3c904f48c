use super::training::{Session, Training, M_IN_KM};
use crate::package::WorkoutCode;

/// Stroke length in metres
pub const LEN_STROKE: f64 = 1.38;

const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Pool swimming workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub session: Session,
    pub length_pool: f64, // metres
    pub count_pool: f64,  // laps
}

impl Swimming {
    pub fn new(action: u64, duration: f64, weight: f64, length_pool: f64, count_pool: f64) -> Self {
        Self {
            session: Session::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    fn code(&self) -> WorkoutCode {
        WorkoutCode::Swimming
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn step_length(&self) -> f64 {
        LEN_STROKE
    }

    /// Speed from pool laps rather than stroke count
    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.session.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.session.weight
    }
}
