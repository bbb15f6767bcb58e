//! Workout model and sensor package dispatch
//!
//! Each training type implements the [`Training`] capability set. Distance and
//! mean speed come with default implementations shared by all types, while
//! the calorie formula is required from every implementor. [`Workout`] is the
//! closed set of types produced by [`read_package`].

use tracing::debug;

use crate::error::{Result, TrackerError};
use crate::models::{InfoMessage, WorkoutCode};

/// Metres in a kilometre
pub const M_IN_KM: f64 = 1000.0;
/// Step length in metres for running and walking
pub const LEN_STEP: f64 = 0.65;
/// Stroke length in metres for swimming
pub const LEN_STROKE: f64 = 1.38;
/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Sensor fields common to every training type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    /// Steps or strokes registered by the sensor
    pub action: u32,
    /// Duration in hours, always positive
    pub duration: f64,
    /// Body weight in kilograms
    pub weight: f64,
}

impl TrainingBase {
    fn new(workout: &str, action: u32, duration: f64, weight: f64) -> Result<Self> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(TrackerError::InvalidDuration { duration });
        }
        non_negative(workout, "weight", weight)?;

        Ok(Self {
            action,
            duration,
            weight,
        })
    }
}

/// Capability set shared by all training types
pub trait Training {
    /// Display name used in the summary
    fn training_type(&self) -> &'static str;

    /// Sensor fields shared by every training type
    fn base(&self) -> &TrainingBase;

    /// Distance covered by one action, in metres
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in kilometres
    fn distance(&self) -> f64 {
        self.base().action as f64 * self.len_step() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.base().duration
    }

    /// Calories burned during the session
    fn spent_calories(&self) -> f64;

    /// Assemble the summary of the session
    fn show_training_info(&self) -> InfoMessage {
        InfoMessage::new(
            self.training_type(),
            self.base().duration,
            self.distance(),
            self.mean_speed(),
            self.spent_calories(),
        )
    }

    /// Assemble the summary, rejecting results that overflowed to a
    /// non-finite value
    ///
    /// A duration small enough to blow the speed up is reported as
    /// [`TrackerError::InvalidDuration`]; any other overflow names the
    /// offending metric.
    fn try_training_info(&self) -> Result<InfoMessage> {
        let info = self.show_training_info();

        if !info.speed.is_finite() {
            return Err(TrackerError::InvalidDuration {
                duration: info.duration,
            });
        }
        for (metric, value) in [("distance", info.distance), ("calories", info.calories)] {
            if !value.is_finite() {
                return Err(TrackerError::invalid_parameter(
                    self.training_type(),
                    metric,
                    value,
                ));
            }
        }

        Ok(info)
    }
}

/// Running session
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    base: TrainingBase,
}

impl Running {
    const NAME: &'static str = "Running";
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self> {
        Ok(Self {
            base: TrainingBase::new(Self::NAME, action, duration, weight)?,
        })
    }

    /// Build from positional values `[action, duration, weight]`
    pub fn from_sensor_data(data: &[f64]) -> Result<Self> {
        let [action, duration, weight] = positional::<3>(Self::NAME, data)?;
        Self::new(whole_number(Self::NAME, "action", action)?, duration, weight)
    }
}

impl Training for Running {
    fn training_type(&self) -> &'static str {
        Self::NAME
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_SPEED_MULTIPLIER * self.mean_speed() - Self::CALORIES_SPEED_SHIFT)
            * self.base.weight
            / M_IN_KM
            * (self.base.duration * MIN_IN_H)
    }
}

/// Sports walking session
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    base: TrainingBase,
    /// Height in centimetres
    height: f64,
}

impl SportsWalking {
    const NAME: &'static str = "SportsWalking";
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Result<Self> {
        let base = TrainingBase::new(Self::NAME, action, duration, weight)?;
        if !height.is_finite() || height <= 0.0 {
            return Err(TrackerError::invalid_parameter(Self::NAME, "height", height));
        }

        Ok(Self { base, height })
    }

    /// Build from positional values `[action, duration, weight, height]`
    pub fn from_sensor_data(data: &[f64]) -> Result<Self> {
        let [action, duration, weight, height] = positional::<4>(Self::NAME, data)?;
        Self::new(
            whole_number(Self::NAME, "action", action)?,
            duration,
            weight,
            height,
        )
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn training_type(&self) -> &'static str {
        Self::NAME
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        // The squared speed is floor-divided by height, not truly divided.
        (Self::CALORIES_WEIGHT_MULTIPLIER * self.base.weight
            + floor_div(self.mean_speed().powi(2), self.height)
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.base.weight)
            * (MIN_IN_H * self.base.duration)
    }
}

/// Pool swimming session
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    base: TrainingBase,
    /// Pool length in metres
    length_pool: f64,
    /// Number of pool lengths swum
    count_pool: u32,
}

impl Swimming {
    const NAME: &'static str = "Swimming";
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> Result<Self> {
        let base = TrainingBase::new(Self::NAME, action, duration, weight)?;
        non_negative(Self::NAME, "length_pool", length_pool)?;

        Ok(Self {
            base,
            length_pool,
            count_pool,
        })
    }

    /// Build from positional values `[action, duration, weight, length_pool, count_pool]`
    pub fn from_sensor_data(data: &[f64]) -> Result<Self> {
        let [action, duration, weight, length_pool, count_pool] =
            positional::<5>(Self::NAME, data)?;
        Self::new(
            whole_number(Self::NAME, "action", action)?,
            duration,
            weight,
            length_pool,
            whole_number(Self::NAME, "count_pool", count_pool)?,
        )
    }

    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn training_type(&self) -> &'static str {
        Self::NAME
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn len_step(&self) -> f64 {
        LEN_STROKE
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.base.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight
    }
}

/// Any training produced from a sensor package
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(t) => t,
            Workout::SportsWalking(t) => t,
            Workout::Swimming(t) => t,
        }
    }
}

impl Training for Workout {
    fn training_type(&self) -> &'static str {
        self.as_training().training_type()
    }

    fn base(&self) -> &TrainingBase {
        self.as_training().base()
    }

    fn len_step(&self) -> f64 {
        self.as_training().len_step()
    }

    fn distance(&self) -> f64 {
        self.as_training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_training().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }
}

/// Build the training described by a sensor package
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout> {
    let code: WorkoutCode = workout_type.parse()?;
    debug!(code = %code, values = data.len(), "Dispatching sensor package");

    let workout = match code {
        WorkoutCode::Swimming => Workout::Swimming(Swimming::from_sensor_data(data)?),
        WorkoutCode::Running => Workout::Running(Running::from_sensor_data(data)?),
        WorkoutCode::SportsWalking => {
            Workout::SportsWalking(SportsWalking::from_sensor_data(data)?)
        }
    };

    Ok(workout)
}

/// Floor division of floats, rounding the quotient towards negative infinity
///
/// Computed through the float remainder so that quotients lying just below
/// an integer are not rounded up by the division itself.
pub fn floor_div(dividend: f64, divisor: f64) -> f64 {
    let rem = dividend % divisor;
    let mut div = (dividend - rem) / divisor;
    if rem != 0.0 && (divisor < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div != 0.0 {
        let mut floor = div.floor();
        if div - floor > 0.5 {
            floor += 1.0;
        }
        floor
    } else {
        0.0_f64.copysign(dividend / divisor)
    }
}

fn positional<const N: usize>(workout: &str, data: &[f64]) -> Result<[f64; N]> {
    <[f64; N]>::try_from(data).map_err(|_| TrackerError::ArityMismatch {
        workout: workout.to_string(),
        expected: N,
        actual: data.len(),
    })
}

fn whole_number(workout: &str, parameter: &str, value: f64) -> Result<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(TrackerError::invalid_parameter(workout, parameter, value))
    }
}

fn non_negative(workout: &str, parameter: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TrackerError::invalid_parameter(workout, parameter, value))
    }
}
