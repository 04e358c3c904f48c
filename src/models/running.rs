use super::training::{Session, Training, MIN_IN_H, M_IN_KM};
use crate::package::WorkoutCode;

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

/// Running workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub session: Session,
}

impl Running {
    pub fn new(action: u64, duration: f64, weight: f64) -> Self {
        Self {
            session: Session::new(action, duration, weight),
        }
    }
}

impl Training for Running {
    fn code(&self) -> WorkoutCode {
        WorkoutCode::Running
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() - CALORIES_MEAN_SPEED_SHIFT)
            * self.session.weight
            / M_IN_KM
            * self.session.duration
            * MIN_IN_H
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_sample() {
        let running = Running::new(15000, 1.0, 75.0);

        assert!((running.distance() - 9.75).abs() < 1e-9);
        assert!((running.mean_speed() - 9.75).abs() < 1e-9);
        assert!((running.spent_calories() - 699.75).abs() < 1e-6);
    }

    #[test]
    fn test_running_half_hour() {
        // 5000 steps in 30 minutes: 3.25 km at 6.5 km/h
        let running = Running::new(5000, 0.5, 60.0);
        let expected = (18.0 * 6.5 - 20.0) * 60.0 / 1000.0 * 0.5 * 60.0;

        assert!((running.mean_speed() - 6.5).abs() < 1e-9);
        assert!((running.spent_calories() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_running_report() {
        let info = Running::new(15000, 1.0, 75.0).show_training_info().unwrap();

        assert_eq!(info.training_type, "Running");
        assert_eq!(info.duration, 1.0);
    }
}
