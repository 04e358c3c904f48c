use crate::error::WorkoutError;
use crate::models::InfoMessage;
use crate::package::WorkoutCode;

/// Metres in a kilometre
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Step length in metres for running and walking
pub const LEN_STEP: f64 = 0.65;

/// Sensor readings shared by every activity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    pub action: u64,   // steps or strokes
    pub duration: f64, // hours
    pub weight: f64,   // kg
}

impl Session {
    pub fn new(action: u64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

/// Distance, speed and calorie formulas for one activity.
///
/// Distance and mean speed have default implementations driven by the step
/// length; every activity supplies its own calorie formula.
pub trait Training: std::fmt::Debug {
    /// Activity code this training was read from
    fn code(&self) -> WorkoutCode;

    /// Raw readings common to all activities
    fn session(&self) -> &Session;

    /// Display name used in the report
    fn name(&self) -> &'static str {
        self.code().training_name()
    }

    /// Distance covered by one step or stroke, in metres
    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in km
    fn distance(&self) -> f64 {
        self.session().action as f64 * self.step_length() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.session().duration
    }

    fn spent_calories(&self) -> f64;

    /// Values the formulas divide by, checked before a report is built
    fn divisors(&self) -> Vec<(&'static str, f64)> {
        vec![("duration", self.session().duration)]
    }

    /// Build the summary for this workout.
    ///
    /// Fails when a divisor is zero or negative, rather than reporting
    /// infinite or meaningless figures.
    fn show_training_info(&self) -> Result<InfoMessage, WorkoutError> {
        for (field, value) in self.divisors() {
            if value.is_nan() || value <= 0.0 {
                return Err(WorkoutError::NonPositiveDivisor { field, value });
            }
        }

        Ok(InfoMessage::new(
            self.name(),
            self.session().duration,
            self.distance(),
            self.mean_speed(),
            self.spent_calories(),
        ))
    }
}
