use chrono::Duration;
use derive_more::{Display, Into};
use strum::{EnumIter, EnumString};
use thiserror::Error;

use crate::{DistanceUnit, MeasurementSystem, convert_distance, convert_weight};

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if value > 999 {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weight {
    value: f64,
    system: MeasurementSystem,
}

impl Weight {
    pub fn new(value: f64, system: MeasurementSystem) -> Result<Self, WeightError> {
        if !value.is_finite() {
            return Err(WeightError::NotFinite);
        }

        if value < 0.0 {
            return Err(WeightError::Negative);
        }

        Ok(Self { value, system })
    }

    pub fn parse(value: &str, system: MeasurementSystem) -> Result<Self, WeightError> {
        match value.trim().parse::<f64>() {
            Ok(parsed_value) => Weight::new(parsed_value, system),
            Err(_) => Err(WeightError::ParseError),
        }
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn system(&self) -> MeasurementSystem {
        self.system
    }

    #[must_use]
    pub fn convert_to(self, system: MeasurementSystem) -> Self {
        if self.system == system {
            return self;
        }

        Self {
            value: convert_weight(self.value, system),
            system,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must not be negative")]
    Negative,
    #[error("Weight must be a finite number")]
    NotFinite,
    #[error("Weight must be a decimal")]
    ParseError,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance {
    value: f64,
    unit: DistanceUnit,
}

impl Distance {
    pub fn new(value: f64, unit: DistanceUnit) -> Result<Self, DistanceError> {
        if !value.is_finite() {
            return Err(DistanceError::NotFinite);
        }

        if value < 0.0 {
            return Err(DistanceError::Negative);
        }

        Ok(Self { value, unit })
    }

    pub fn parse(value: &str, unit: DistanceUnit) -> Result<Self, DistanceError> {
        match value.trim().parse::<f64>() {
            Ok(parsed_value) => Distance::new(parsed_value, unit),
            Err(_) => Err(DistanceError::ParseError),
        }
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    #[must_use]
    pub fn convert_to(self, unit: DistanceUnit) -> Self {
        Self {
            value: convert_distance(self.value, self.unit, unit),
            unit,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum DistanceError {
    #[error("Distance must not be negative")]
    Negative,
    #[error("Distance must be a finite number")]
    NotFinite,
    #[error("Distance must be a decimal")]
    ParseError,
}

/// Duration of a timed exercise split into its displayed components.
///
/// `show_milliseconds` only affects formatting, two times with the same components but
/// different flags still describe the same duration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseTime {
    hours: u32,
    minutes: u8,
    seconds: u8,
    milliseconds: u16,
    show_milliseconds: bool,
}

impl ExerciseTime {
    pub fn new(
        hours: u32,
        minutes: u8,
        seconds: u8,
        milliseconds: u16,
    ) -> Result<Self, ExerciseTimeError> {
        if minutes > 59 {
            return Err(ExerciseTimeError::MinutesOutOfRange);
        }

        if seconds > 59 {
            return Err(ExerciseTimeError::SecondsOutOfRange);
        }

        if milliseconds > 999 {
            return Err(ExerciseTimeError::MillisecondsOutOfRange);
        }

        Ok(Self {
            hours,
            minutes,
            seconds,
            milliseconds,
            show_milliseconds: false,
        })
    }

    pub fn from_duration(duration: Duration) -> Result<Self, ExerciseTimeError> {
        let total = duration.num_milliseconds();

        if total < 0 {
            return Err(ExerciseTimeError::Negative);
        }

        let hours = u32::try_from(total / 3_600_000).map_err(|_| ExerciseTimeError::TooLong)?;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (minutes, seconds, milliseconds) = (
            (total / 60_000 % 60) as u8,
            (total / 1_000 % 60) as u8,
            (total % 1_000) as u16,
        );

        Ok(Self {
            hours,
            minutes,
            seconds,
            milliseconds,
            show_milliseconds: false,
        })
    }

    #[must_use]
    pub fn with_milliseconds_shown(mut self, show_milliseconds: bool) -> Self {
        self.show_milliseconds = show_milliseconds;
        self
    }

    #[must_use]
    pub fn hours(&self) -> u32 {
        self.hours
    }

    #[must_use]
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    #[must_use]
    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    #[must_use]
    pub fn milliseconds(&self) -> u16 {
        self.milliseconds
    }

    #[must_use]
    pub fn show_milliseconds(&self) -> bool {
        self.show_milliseconds
    }

    #[must_use]
    pub fn total_milliseconds(&self) -> i64 {
        i64::from(self.hours) * 3_600_000
            + i64::from(self.minutes) * 60_000
            + i64::from(self.seconds) * 1_000
            + i64::from(self.milliseconds)
    }

    #[must_use]
    pub fn to_duration(&self) -> Duration {
        Duration::milliseconds(self.total_milliseconds())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ExerciseTimeError {
    #[error("Minutes must be in the range 0 to 59")]
    MinutesOutOfRange,
    #[error("Seconds must be in the range 0 to 59")]
    SecondsOutOfRange,
    #[error("Milliseconds must be in the range 0 to 999")]
    MillisecondsOutOfRange,
    #[error("Time must not be negative")]
    Negative,
    #[error("Time is too long")]
    TooLong,
}

#[derive(Debug, strum::Display, EnumString, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "kebab-case")]
pub enum ExerciseType {
    WeightedReps,
    WeightedTime,
    DistanceTime,
    Reps,
    Time,
    Distance,
}

/// Performance values of an exercise, one variant per exercise type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExerciseValues {
    WeightedReps { reps: Reps, weight: Weight },
    WeightedTime { weight: Weight, time: ExerciseTime },
    DistanceTime { distance: Distance, time: ExerciseTime },
    Reps { reps: Reps },
    Time { time: ExerciseTime },
    Distance { distance: Distance },
}

impl ExerciseValues {
    /// Zeroed values for a pending entry of the given type.
    #[must_use]
    pub fn empty(exercise_type: ExerciseType, system: MeasurementSystem) -> Self {
        let weight = Weight {
            value: 0.0,
            system,
        };
        let distance = Distance {
            value: 0.0,
            unit: system.distance_unit(),
        };
        let time = ExerciseTime::default();
        match exercise_type {
            ExerciseType::WeightedReps => ExerciseValues::WeightedReps {
                reps: Reps::default(),
                weight,
            },
            ExerciseType::WeightedTime => ExerciseValues::WeightedTime { weight, time },
            ExerciseType::DistanceTime => ExerciseValues::DistanceTime { distance, time },
            ExerciseType::Reps => ExerciseValues::Reps {
                reps: Reps::default(),
            },
            ExerciseType::Time => ExerciseValues::Time { time },
            ExerciseType::Distance => ExerciseValues::Distance { distance },
        }
    }

    #[must_use]
    pub fn exercise_type(&self) -> ExerciseType {
        match self {
            ExerciseValues::WeightedReps { .. } => ExerciseType::WeightedReps,
            ExerciseValues::WeightedTime { .. } => ExerciseType::WeightedTime,
            ExerciseValues::DistanceTime { .. } => ExerciseType::DistanceTime,
            ExerciseValues::Reps { .. } => ExerciseType::Reps,
            ExerciseValues::Time { .. } => ExerciseType::Time,
            ExerciseValues::Distance { .. } => ExerciseType::Distance,
        }
    }

    #[must_use]
    pub fn reps(&self) -> Option<Reps> {
        match self {
            ExerciseValues::WeightedReps { reps, .. } | ExerciseValues::Reps { reps } => {
                Some(*reps)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn weight(&self) -> Option<Weight> {
        match self {
            ExerciseValues::WeightedReps { weight, .. }
            | ExerciseValues::WeightedTime { weight, .. } => Some(*weight),
            _ => None,
        }
    }

    #[must_use]
    pub fn distance(&self) -> Option<Distance> {
        match self {
            ExerciseValues::DistanceTime { distance, .. } | ExerciseValues::Distance { distance } => {
                Some(*distance)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn time(&self) -> Option<ExerciseTime> {
        match self {
            ExerciseValues::WeightedTime { time, .. }
            | ExerciseValues::DistanceTime { time, .. }
            | ExerciseValues::Time { time } => Some(*time),
            _ => None,
        }
    }

    /// Expresses weights and distances in the given measurement system.
    #[must_use]
    pub fn convert_to(self, system: MeasurementSystem) -> Self {
        let unit = system.distance_unit();
        match self {
            ExerciseValues::WeightedReps { reps, weight } => ExerciseValues::WeightedReps {
                reps,
                weight: weight.convert_to(system),
            },
            ExerciseValues::WeightedTime { weight, time } => ExerciseValues::WeightedTime {
                weight: weight.convert_to(system),
                time,
            },
            ExerciseValues::DistanceTime { distance, time } => ExerciseValues::DistanceTime {
                distance: distance.convert_to(unit),
                time,
            },
            ExerciseValues::Distance { distance } => ExerciseValues::Distance {
                distance: distance.convert_to(unit),
            },
            ExerciseValues::Reps { .. } | ExerciseValues::Time { .. } => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[rstest]
    #[case("12", Ok(Reps(12)))]
    #[case(" 0 ", Ok(Reps(0)))]
    #[case("1000", Err(RepsError::OutOfRange))]
    #[case("1.5", Err(RepsError::ParseError))]
    #[case("", Err(RepsError::ParseError))]
    fn test_reps_try_from(#[case] value: &str, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::try_from(value), expected);
    }

    #[rstest]
    #[case("135", MeasurementSystem::Imperial, Ok(135.0))]
    #[case("62.5", MeasurementSystem::Metric, Ok(62.5))]
    #[case("-5", MeasurementSystem::Metric, Err(WeightError::Negative))]
    #[case("inf", MeasurementSystem::Metric, Err(WeightError::NotFinite))]
    #[case("heavy", MeasurementSystem::Imperial, Err(WeightError::ParseError))]
    fn test_weight_parse(
        #[case] value: &str,
        #[case] system: MeasurementSystem,
        #[case] expected: Result<f64, WeightError>,
    ) {
        assert_eq!(
            Weight::parse(value, system).map(|weight| weight.value()),
            expected
        );
    }

    #[test]
    fn test_weight_convert_to() {
        let weight = Weight::new(100.0, MeasurementSystem::Imperial).unwrap();
        let converted = weight.convert_to(MeasurementSystem::Metric);
        assert_eq!(converted.system(), MeasurementSystem::Metric);
        assert_approx_eq!(converted.value(), 45.36);
        assert_eq!(weight.convert_to(MeasurementSystem::Imperial), weight);
    }

    #[rstest]
    #[case("5", DistanceUnit::Kilometer, Ok(5.0))]
    #[case("-1", DistanceUnit::Mile, Err(DistanceError::Negative))]
    #[case("NaN", DistanceUnit::Mile, Err(DistanceError::NotFinite))]
    #[case("far", DistanceUnit::Foot, Err(DistanceError::ParseError))]
    fn test_distance_parse(
        #[case] value: &str,
        #[case] unit: DistanceUnit,
        #[case] expected: Result<f64, DistanceError>,
    ) {
        assert_eq!(
            Distance::parse(value, unit).map(|distance| distance.value()),
            expected
        );
    }

    #[test]
    fn test_distance_convert_to() {
        let distance = Distance::new(1.0, DistanceUnit::Kilometer).unwrap();
        let converted = distance.convert_to(DistanceUnit::Foot);
        assert_eq!(converted.unit(), DistanceUnit::Foot);
        assert_approx_eq!(converted.value(), 3_280.84);
    }

    #[rstest]
    #[case((0, 60, 0, 0), Err(ExerciseTimeError::MinutesOutOfRange))]
    #[case((0, 0, 60, 0), Err(ExerciseTimeError::SecondsOutOfRange))]
    #[case((0, 0, 0, 1000), Err(ExerciseTimeError::MillisecondsOutOfRange))]
    #[case((1, 2, 3, 4), Ok(3_723_004))]
    fn test_exercise_time_new(
        #[case] components: (u32, u8, u8, u16),
        #[case] expected: Result<i64, ExerciseTimeError>,
    ) {
        let (hours, minutes, seconds, milliseconds) = components;
        assert_eq!(
            ExerciseTime::new(hours, minutes, seconds, milliseconds)
                .map(|time| time.total_milliseconds()),
            expected
        );
    }

    #[test]
    fn test_exercise_time_duration() {
        let time = ExerciseTime::new(0, 25, 30, 250).unwrap();
        assert_eq!(time.to_duration(), Duration::milliseconds(1_530_250));
        assert_eq!(ExerciseTime::from_duration(time.to_duration()), Ok(time));
        assert_eq!(
            ExerciseTime::from_duration(Duration::seconds(-1)),
            Err(ExerciseTimeError::Negative)
        );
    }

    #[test]
    fn test_exercise_time_with_milliseconds_shown() {
        let time = ExerciseTime::new(0, 0, 12, 340)
            .unwrap()
            .with_milliseconds_shown(true);
        assert!(time.show_milliseconds());
        assert_eq!(time.milliseconds(), 340);
    }

    #[test]
    fn test_exercise_values_empty() {
        for exercise_type in ExerciseType::iter() {
            let values = ExerciseValues::empty(exercise_type, MeasurementSystem::Metric);
            assert_eq!(values.exercise_type(), exercise_type);
        }
        assert_eq!(
            ExerciseValues::empty(ExerciseType::Distance, MeasurementSystem::Metric)
                .distance()
                .map(|distance| distance.unit()),
            Some(DistanceUnit::Kilometer)
        );
    }

    #[test]
    fn test_exercise_values_accessors() {
        let values = ExerciseValues::WeightedReps {
            reps: Reps(5),
            weight: Weight::new(225.0, MeasurementSystem::Imperial).unwrap(),
        };
        assert_eq!(values.reps(), Some(Reps(5)));
        assert_eq!(values.weight().map(|weight| weight.value()), Some(225.0));
        assert_eq!(values.distance(), None);
        assert_eq!(values.time(), None);

        let values = ExerciseValues::DistanceTime {
            distance: Distance::new(5.0, DistanceUnit::Kilometer).unwrap(),
            time: ExerciseTime::new(0, 25, 0, 0).unwrap(),
        };
        assert_eq!(values.reps(), None);
        assert_eq!(values.weight(), None);
        assert_eq!(values.time().map(|time| time.minutes()), Some(25));
    }

    #[test]
    fn test_exercise_values_convert_to() {
        let values = ExerciseValues::DistanceTime {
            distance: Distance::new(5.0, DistanceUnit::Kilometer).unwrap(),
            time: ExerciseTime::new(0, 25, 0, 0).unwrap(),
        }
        .convert_to(MeasurementSystem::Imperial);
        let distance = values.distance().unwrap();
        assert_eq!(distance.unit(), DistanceUnit::Mile);
        assert_approx_eq!(distance.value(), 3.1);

        let reps = ExerciseValues::Reps { reps: Reps(12) };
        assert_eq!(reps.convert_to(MeasurementSystem::Metric), reps);
    }

    #[rstest]
    #[case("weighted-reps", ExerciseType::WeightedReps)]
    #[case("distance-time", ExerciseType::DistanceTime)]
    #[case("time", ExerciseType::Time)]
    fn test_exercise_type_from_str(#[case] value: &str, #[case] expected: ExerciseType) {
        assert_eq!(ExerciseType::from_str(value), Ok(expected));
        assert_eq!(expected.to_string(), value);
    }
}
