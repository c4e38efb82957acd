use std::fmt::{self, Display};

use crate::{Distance, ExerciseTime, ExerciseValues, PlateCount, Weight, round_to};

#[must_use]
pub fn pluralize<'a>(count: u32, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

impl Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            round_to(self.value(), 2),
            self.system().weight_unit()
        )
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", round_to(self.value(), 2), self.unit())
    }
}

/// `h:mm:ss` or `m:ss`, followed by `.SSS` if milliseconds are shown.
impl Display for ExerciseTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours() > 0 {
            write!(
                f,
                "{}:{:02}:{:02}",
                self.hours(),
                self.minutes(),
                self.seconds()
            )?;
        } else {
            write!(f, "{}:{:02}", self.minutes(), self.seconds())?;
        }

        if self.show_milliseconds() {
            write!(f, ".{:03}", self.milliseconds())?;
        }

        Ok(())
    }
}

impl Display for ExerciseValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseValues::WeightedReps { reps, weight } => write!(f, "{reps} × {weight}"),
            ExerciseValues::WeightedTime { weight, time } => write!(f, "{weight} for {time}"),
            ExerciseValues::DistanceTime { distance, time } => write!(f, "{distance} in {time}"),
            ExerciseValues::Reps { reps } => {
                write!(f, "{reps} {}", pluralize(u32::from(*reps), "rep", "reps"))
            }
            ExerciseValues::Time { time } => write!(f, "{time}"),
            ExerciseValues::Distance { distance } => write!(f, "{distance}"),
        }
    }
}

impl Display for PlateCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.system().weight_unit();
        let plates = self
            .plates()
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(plate, count)| format!("{count} × {plate} {unit}"))
            .collect::<Vec<_>>();

        if plates.is_empty() {
            write!(f, "bar only")
        } else {
            write!(f, "{} per side", plates.join(", "))
        }
    }
}
