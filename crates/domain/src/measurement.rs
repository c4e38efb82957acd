use strum::{Display, EnumIter, EnumString};

pub const POUNDS_PER_KILOGRAM: f64 = 2.204_62;

const MILES_PER_KILOMETER: f64 = 0.62;
const KILOMETERS_PER_MILE: f64 = 1.61;
const FEET_PER_KILOMETER: f64 = 3_280.84;
const FEET_PER_MILE: f64 = 5_280.0;
const FEET_PER_METER: f64 = 3.280_84;
const METERS_PER_KILOMETER: f64 = 1_000.0;
const METERS_PER_MILE: f64 = 1_609.34;

#[derive(Debug, Default, Display, EnumString, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum MeasurementSystem {
    #[default]
    Imperial,
    Metric,
}

impl MeasurementSystem {
    #[must_use]
    pub fn weight_unit(self) -> &'static str {
        match self {
            MeasurementSystem::Imperial => "lb",
            MeasurementSystem::Metric => "kg",
        }
    }

    /// The unit used for distances when nothing more specific was chosen.
    #[must_use]
    pub fn distance_unit(self) -> DistanceUnit {
        match self {
            MeasurementSystem::Imperial => DistanceUnit::Mile,
            MeasurementSystem::Metric => DistanceUnit::Kilometer,
        }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            MeasurementSystem::Imperial => MeasurementSystem::Metric,
            MeasurementSystem::Metric => MeasurementSystem::Imperial,
        }
    }
}

#[derive(Debug, Display, EnumString, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum DistanceUnit {
    #[strum(to_string = "m", serialize = "meter")]
    Meter,
    #[strum(to_string = "km", serialize = "kilometer")]
    Kilometer,
    #[strum(to_string = "mi", serialize = "mile")]
    Mile,
    #[strum(to_string = "ft", serialize = "foot")]
    Foot,
}

impl DistanceUnit {
    #[must_use]
    pub fn system(self) -> MeasurementSystem {
        match self {
            DistanceUnit::Meter | DistanceUnit::Kilometer => MeasurementSystem::Metric,
            DistanceUnit::Mile | DistanceUnit::Foot => MeasurementSystem::Imperial,
        }
    }
}

#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

/// Converts a distance between units.
///
/// Kilometers to miles, feet to miles and miles to kilometers are rounded to two decimal places.
/// All other directions use the exact ratio.
#[must_use]
pub fn convert_distance(value: f64, from: DistanceUnit, to: DistanceUnit) -> f64 {
    match (from, to) {
        (DistanceUnit::Meter, DistanceUnit::Meter)
        | (DistanceUnit::Kilometer, DistanceUnit::Kilometer)
        | (DistanceUnit::Mile, DistanceUnit::Mile)
        | (DistanceUnit::Foot, DistanceUnit::Foot) => value,
        (DistanceUnit::Kilometer, DistanceUnit::Mile) => round_to(value * MILES_PER_KILOMETER, 2),
        (DistanceUnit::Kilometer, DistanceUnit::Foot) => value * FEET_PER_KILOMETER,
        (DistanceUnit::Kilometer, DistanceUnit::Meter) => value * METERS_PER_KILOMETER,
        (DistanceUnit::Mile, DistanceUnit::Kilometer) => round_to(value * KILOMETERS_PER_MILE, 2),
        (DistanceUnit::Mile, DistanceUnit::Foot) => value * FEET_PER_MILE,
        (DistanceUnit::Mile, DistanceUnit::Meter) => value * METERS_PER_MILE,
        (DistanceUnit::Foot, DistanceUnit::Mile) => round_to(value / FEET_PER_MILE, 2),
        (DistanceUnit::Foot, DistanceUnit::Kilometer) => value / FEET_PER_KILOMETER,
        (DistanceUnit::Foot, DistanceUnit::Meter) => value / FEET_PER_METER,
        (DistanceUnit::Meter, DistanceUnit::Kilometer) => value / METERS_PER_KILOMETER,
        (DistanceUnit::Meter, DistanceUnit::Mile) => value / METERS_PER_MILE,
        (DistanceUnit::Meter, DistanceUnit::Foot) => value * FEET_PER_METER,
    }
}

/// Converts a weight given in the other measurement system into `to`, rounded to two decimal
/// places.
#[must_use]
pub fn convert_weight(value: f64, to: MeasurementSystem) -> f64 {
    match to {
        MeasurementSystem::Metric => round_to(value / POUNDS_PER_KILOGRAM, 2),
        MeasurementSystem::Imperial => round_to(value * POUNDS_PER_KILOGRAM, 2),
    }
}
