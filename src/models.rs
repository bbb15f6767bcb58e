use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// Workout codes emitted by the sensor unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutCode {
    #[serde(rename = "SWM")]
    Swimming,
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    SportsWalking,
}

impl WorkoutCode {
    /// Short tag as sent by the sensor
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCode::Swimming => "SWM",
            WorkoutCode::Running => "RUN",
            WorkoutCode::SportsWalking => "WLK",
        }
    }
}

impl FromStr for WorkoutCode {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(WorkoutCode::Swimming),
            "RUN" => Ok(WorkoutCode::Running),
            "WLK" => Ok(WorkoutCode::SportsWalking),
            _ => Err(TrackerError::UnknownWorkoutType {
                code: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw package received from the sensor unit
///
/// The code is kept as a plain string so that unrecognised codes surface as
/// [`TrackerError::UnknownWorkoutType`] at dispatch time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Workout code ("SWM", "RUN", "WLK")
    pub workout_type: String,

    /// Positional sensor values: action, duration (h), weight (kg), extras
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

/// Computed results of a single training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    /// Display name of the training type
    pub training_type: String,

    /// Duration in hours
    pub duration: f64,

    /// Distance in kilometres
    pub distance: f64,

    /// Mean speed in km/h
    pub speed: f64,

    /// Calories burned (kcal)
    pub calories: f64,
}

impl InfoMessage {
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Summary line shown to the user
    pub fn get_message(&self) -> String {
        format!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_code_parsing() {
        assert_eq!("SWM".parse::<WorkoutCode>().unwrap(), WorkoutCode::Swimming);
        assert_eq!("RUN".parse::<WorkoutCode>().unwrap(), WorkoutCode::Running);
        assert_eq!(
            "WLK".parse::<WorkoutCode>().unwrap(),
            WorkoutCode::SportsWalking
        );
    }

    #[test]
    fn test_workout_code_is_case_sensitive() {
        let err = "run".parse::<WorkoutCode>().unwrap_err();
        assert!(matches!(err, TrackerError::UnknownWorkoutType { code } if code == "run"));
    }

    #[test]
    fn test_message_three_decimals() {
        let info = InfoMessage::new("Running", 1.0, 0.468, 0.468, 100.0);
        assert_eq!(
            info.get_message(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 0.468 км; \
             Ср. скорость: 0.468 км/ч; Потрачено ккал: 100.000."
        );
        assert_eq!(info.to_string(), info.get_message());
    }

    #[test]
    fn test_message_rounds_to_three_places() {
        let info = InfoMessage::new("Swimming", 1.0, 0.9936, 1.0, 336.0);
        assert!(info.get_message().contains("Дистанция: 0.994 км"));
    }

    #[test]
    fn test_package_serialization() {
        let package = SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]);
        let json = serde_json::to_string(&package).unwrap();
        let restored: SensorPackage = serde_json::from_str(&json).unwrap();
        assert_eq!(package, restored);
    }
}
