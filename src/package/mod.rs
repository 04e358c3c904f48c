use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::WorkoutError;
use crate::models::{Running, SportsWalking, Swimming, Training};

/// Activity codes sent by the sensor unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    Running,
    SportsWalking,
    Swimming,
}

/// Every code the dispatcher accepts
pub const WORKOUT_CODES: [WorkoutCode; 3] = [
    WorkoutCode::Swimming,
    WorkoutCode::Running,
    WorkoutCode::SportsWalking,
];

impl WorkoutCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCode::Running => "RUN",
            WorkoutCode::SportsWalking => "WLK",
            WorkoutCode::Swimming => "SWM",
        }
    }

    /// Name of the training variant the code selects
    pub fn training_name(&self) -> &'static str {
        match self {
            WorkoutCode::Running => "Running",
            WorkoutCode::SportsWalking => "SportsWalking",
            WorkoutCode::Swimming => "Swimming",
        }
    }

    /// Sensor fields in the order they arrive in a package
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            WorkoutCode::Running => &["action", "duration", "weight"],
            WorkoutCode::SportsWalking => &["action", "duration", "weight", "height"],
            WorkoutCode::Swimming => &[
                "action",
                "duration",
                "weight",
                "length_pool",
                "count_pool",
            ],
        }
    }
}

impl std::fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WorkoutCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WORKOUT_CODES
            .iter()
            .find(|code| code.as_str() == s)
            .copied()
            .ok_or_else(|| WorkoutError::UnknownCode(s.to_string()))
    }
}

/// One raw reading from the sensor unit.
///
/// `data` stays untyped until it is read, so a value of the wrong JSON type
/// is reported against its field like any other invalid workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub code: String,
    pub data: Vec<Value>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data: data.into_iter().map(Value::from).collect(),
        }
    }

    /// Readings used when no input is given
    pub fn samples() -> Vec<Package> {
        vec![
            Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
            Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ]
    }

    pub fn read(&self) -> Result<Box<dyn Training>, WorkoutError> {
        let code: WorkoutCode = self.code.parse()?;
        let fields = code.field_names();

        if self.data.len() != fields.len() {
            return Err(WorkoutError::WrongValueCount {
                code,
                expected: fields.len(),
                actual: self.data.len(),
            });
        }

        let values = fields
            .iter()
            .zip(&self.data)
            .map(|(field, value)| {
                value.as_f64().ok_or_else(|| WorkoutError::NonNumericValue {
                    code,
                    field: *field,
                    value: value.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        read_package(code.as_str(), &values)
    }
}

/// Build the training selected by `code`, assigning `data` to its fields in
/// declaration order.
pub fn read_package(code: &str, data: &[f64]) -> Result<Box<dyn Training>, WorkoutError> {
    let code: WorkoutCode = code.parse()?;
    let fields = code.field_names();

    if data.len() != fields.len() {
        return Err(WorkoutError::WrongValueCount {
            code,
            expected: fields.len(),
            actual: data.len(),
        });
    }

    for (field, value) in fields.iter().zip(data) {
        if !value.is_finite() {
            return Err(WorkoutError::InvalidValue {
                code,
                field: *field,
                value: *value,
            });
        }
    }

    let action = whole_count(code, data[0])?;
    let (duration, weight) = (data[1], data[2]);

    tracing::debug!("Dispatching {} package with {} values", code, data.len());

    let training: Box<dyn Training> = match code {
        WorkoutCode::Running => Box::new(Running::new(action, duration, weight)),
        WorkoutCode::SportsWalking => {
            Box::new(SportsWalking::new(action, duration, weight, data[3]))
        }
        WorkoutCode::Swimming => Box::new(Swimming::new(
            action, duration, weight, data[3], data[4],
        )),
    };

    Ok(training)
}

fn whole_count(code: WorkoutCode, value: f64) -> Result<u64, WorkoutError> {
    if value < 0.0 || value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(WorkoutError::InvalidValue {
            code,
            field: "action",
            value,
        });
    }
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!("RUN".parse::<WorkoutCode>().unwrap(), WorkoutCode::Running);
        assert_eq!(
            "WLK".parse::<WorkoutCode>().unwrap(),
            WorkoutCode::SportsWalking
        );
        assert_eq!("SWM".parse::<WorkoutCode>().unwrap(), WorkoutCode::Swimming);
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert_eq!(
            "run".parse::<WorkoutCode>(),
            Err(WorkoutError::UnknownCode("run".to_string()))
        );
    }

    #[test]
    fn test_read_samples() {
        let names: Vec<&str> = Package::samples()
            .iter()
            .map(|package| package.read().unwrap().name())
            .collect();

        assert_eq!(names, vec!["Swimming", "Running", "SportsWalking"]);
    }

    #[test]
    fn test_read_unknown_code() {
        let result = read_package("XYZ", &[1.0, 1.0, 1.0]);
        assert_eq!(
            result.unwrap_err(),
            WorkoutError::UnknownCode("XYZ".to_string())
        );
    }

    #[test]
    fn test_read_wrong_value_count() {
        let err = read_package("WLK", &[9000.0, 1.0, 75.0]).unwrap_err();

        assert_eq!(
            err,
            WorkoutError::WrongValueCount {
                code: WorkoutCode::SportsWalking,
                expected: 4,
                actual: 3,
            }
        );
        assert!(err.is_invalid_workout());
    }

    #[test]
    fn test_read_fractional_action() {
        let err = read_package("RUN", &[150.5, 1.0, 75.0]).unwrap_err();

        assert_eq!(
            err,
            WorkoutError::InvalidValue {
                code: WorkoutCode::Running,
                field: "action",
                value: 150.5,
            }
        );
    }

    #[test]
    fn test_read_non_finite_value() {
        let err = read_package("SWM", &[720.0, 1.0, 80.0, f64::INFINITY, 40.0]).unwrap_err();

        assert!(matches!(
            err,
            WorkoutError::InvalidValue {
                field: "length_pool",
                ..
            }
        ));
    }

    #[test]
    fn test_package_deserialization() {
        let json = r#"{"code": "RUN", "data": [15000, 1, 75]}"#;
        let package: Package = serde_json::from_str(json).unwrap();

        let training = package.read().unwrap();

        assert_eq!(package.code, "RUN");
        assert_eq!(training.code(), WorkoutCode::Running);
        assert!((training.distance() - 9.75).abs() < 1e-9);
    }

    #[test]
    fn test_package_non_numeric_value() {
        let json = r#"{"code": "RUN", "data": ["fast", 1, 75]}"#;
        let package: Package = serde_json::from_str(json).unwrap();
        let err = package.read().unwrap_err();

        assert_eq!(
            err,
            WorkoutError::NonNumericValue {
                code: WorkoutCode::Running,
                field: "action",
                value: "\"fast\"".to_string(),
            }
        );
        assert!(err.is_invalid_workout());
    }

    #[test]
    fn test_package_wrong_count_wins_over_type() {
        let json = r#"{"code": "SWM", "data": [720, null]}"#;
        let package: Package = serde_json::from_str(json).unwrap();

        assert_eq!(
            package.read().unwrap_err(),
            WorkoutError::WrongValueCount {
                code: WorkoutCode::Swimming,
                expected: 5,
                actual: 2,
            }
        );
    }

    #[test]
    fn test_read_action_beyond_counter_range() {
        let too_many = 2f64.powi(64);
        let err = read_package("RUN", &[too_many, 1.0, 75.0]).unwrap_err();

        assert_eq!(
            err,
            WorkoutError::InvalidValue {
                code: WorkoutCode::Running,
                field: "action",
                value: too_many,
            }
        );
    }
}
