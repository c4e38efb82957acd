use log::debug;

use crate::{MeasurementSystem, Weight};

pub const IMPERIAL_BAR_WEIGHT: f64 = 45.0;
pub const METRIC_BAR_WEIGHT: f64 = 20.0;

pub const IMPERIAL_PLATES: [f64; 5] = [45.0, 25.0, 10.0, 5.0, 2.5];
pub const METRIC_PLATES: [f64; 4] = [20.0, 10.0, 5.0, 2.5];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImperialPlates {
    pub forty_five: u32,
    pub twenty_five: u32,
    pub ten: u32,
    pub five: u32,
    pub two_pt_five: u32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MetricPlates {
    pub twenty: u32,
    pub ten: u32,
    pub five: u32,
    pub two_pt_five: u32,
}

/// Plates needed on each side of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlateCount {
    Imperial(ImperialPlates),
    Metric(MetricPlates),
}

impl PlateCount {
    #[must_use]
    pub fn system(&self) -> MeasurementSystem {
        match self {
            PlateCount::Imperial(_) => MeasurementSystem::Imperial,
            PlateCount::Metric(_) => MeasurementSystem::Metric,
        }
    }

    #[must_use]
    pub fn bar_weight(&self) -> f64 {
        bar_weight(self.system())
    }

    /// Pairs of plate weight and count, heaviest plate first.
    #[must_use]
    pub fn plates(&self) -> Vec<(f64, u32)> {
        match self {
            PlateCount::Imperial(p) => IMPERIAL_PLATES
                .into_iter()
                .zip([p.forty_five, p.twenty_five, p.ten, p.five, p.two_pt_five])
                .collect(),
            PlateCount::Metric(p) => METRIC_PLATES
                .into_iter()
                .zip([p.twenty, p.ten, p.five, p.two_pt_five])
                .collect(),
        }
    }

    #[must_use]
    pub fn per_side_weight(&self) -> f64 {
        self.plates()
            .iter()
            .map(|(plate, count)| plate * f64::from(*count))
            .sum()
    }

    /// Total weight on the bar including the bar itself.
    #[must_use]
    pub fn loaded_weight(&self) -> f64 {
        self.bar_weight() + 2.0 * self.per_side_weight()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plates().iter().all(|(_, count)| *count == 0)
    }
}

#[must_use]
pub fn bar_weight(system: MeasurementSystem) -> f64 {
    match system {
        MeasurementSystem::Imperial => IMPERIAL_BAR_WEIGHT,
        MeasurementSystem::Metric => METRIC_BAR_WEIGHT,
    }
}

/// Greedily loads plates onto one side of the bar to reach `total_weight`.
///
/// Targets at or below the bar weight, as well as non-finite targets, need no plates. If the
/// target cannot be reached exactly, the result is the heaviest loadable weight below it.
#[must_use]
pub fn compute_plates(total_weight: f64, system: MeasurementSystem) -> PlateCount {
    let unit = system.weight_unit();
    let per_side = if total_weight.is_finite() {
        (total_weight - bar_weight(system)) / 2.0
    } else {
        debug!("no plates for non-finite weight {total_weight} {unit}");
        0.0
    };

    let (plate_count, remaining) = match system {
        MeasurementSystem::Imperial => {
            let (counts, remaining) = load(per_side, IMPERIAL_PLATES);
            (
                PlateCount::Imperial(ImperialPlates {
                    forty_five: counts[0],
                    twenty_five: counts[1],
                    ten: counts[2],
                    five: counts[3],
                    two_pt_five: counts[4],
                }),
                remaining,
            )
        }
        MeasurementSystem::Metric => {
            let (counts, remaining) = load(per_side, METRIC_PLATES);
            (
                PlateCount::Metric(MetricPlates {
                    twenty: counts[0],
                    ten: counts[1],
                    five: counts[2],
                    two_pt_five: counts[3],
                }),
                remaining,
            )
        }
    };

    if remaining > 0.0 {
        debug!("{remaining} {unit} per side cannot be loaded for {total_weight} {unit}");
    }

    plate_count
}

#[must_use]
pub fn compute_plates_for(weight: Weight) -> PlateCount {
    compute_plates(weight.value(), weight.system())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn load<const N: usize>(per_side: f64, plates: [f64; N]) -> ([u32; N], f64) {
    let mut remaining = per_side;
    let counts = plates.map(|plate| {
        if remaining < plate {
            return 0;
        }

        let count = (remaining / plate).floor().min(f64::from(u32::MAX));
        remaining -= count * plate;
        count as u32
    });
    (counts, remaining)
}
