use std::iter;

use chrono::{DateTime, Utc};
use derive_more::{AsRef, Display};
use uuid::Uuid;

use crate::{ExerciseType, ExerciseValues};

#[derive(Debug, Default, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryID(Uuid);

impl EntryID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for EntryID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for EntryID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }
}

/// Exercise name, compared exactly and case-sensitively.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub const MAX_LEN: usize = 64;

    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.chars().count();

        if len > Self::MAX_LEN {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

/// Fields shared by primary entries and the supersets attached to them.
pub trait ExerciseRecord {
    fn name(&self) -> &Name;
    fn added_at(&self) -> DateTime<Utc>;
    fn values(&self) -> &ExerciseValues;
    fn performed(&self) -> bool;

    fn exercise_type(&self) -> ExerciseType {
        self.values().exercise_type()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseEntry {
    id: EntryID,
    name: Name,
    added_at: DateTime<Utc>,
    values: ExerciseValues,
    performed: bool,
    additional_exercises: Vec<AdditionalExercise>,
}

impl ExerciseEntry {
    #[must_use]
    pub fn new(id: EntryID, name: Name, added_at: DateTime<Utc>, values: ExerciseValues) -> Self {
        Self {
            id,
            name,
            added_at,
            values,
            performed: false,
            additional_exercises: vec![],
        }
    }

    #[must_use]
    pub fn with_additional_exercise(mut self, additional_exercise: AdditionalExercise) -> Self {
        self.additional_exercises.push(additional_exercise);
        self
    }

    #[must_use]
    pub fn id(&self) -> EntryID {
        self.id
    }

    #[must_use]
    pub fn additional_exercises(&self) -> &[AdditionalExercise] {
        &self.additional_exercises
    }

    pub fn additional_exercises_mut(&mut self) -> &mut [AdditionalExercise] {
        &mut self.additional_exercises
    }

    #[must_use]
    pub fn is_superset(&self) -> bool {
        !self.additional_exercises.is_empty()
    }

    pub fn mark_performed(&mut self, performed: bool) {
        self.performed = performed;
    }

    pub fn set_values(&mut self, values: ExerciseValues) {
        self.values = values;
    }

    /// The entry itself followed by its supersets in order.
    pub fn records(&self) -> impl Iterator<Item = EntryKind<'_>> {
        iter::once(EntryKind::Primary(self))
            .chain(self.additional_exercises.iter().map(EntryKind::Additional))
    }
}

impl ExerciseRecord for ExerciseEntry {
    fn name(&self) -> &Name {
        &self.name
    }

    fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    fn values(&self) -> &ExerciseValues {
        &self.values
    }

    fn performed(&self) -> bool {
        self.performed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdditionalExercise {
    name: Name,
    added_at: DateTime<Utc>,
    values: ExerciseValues,
    performed: bool,
}

impl AdditionalExercise {
    #[must_use]
    pub fn new(name: Name, added_at: DateTime<Utc>, values: ExerciseValues) -> Self {
        Self {
            name,
            added_at,
            values,
            performed: false,
        }
    }

    pub fn mark_performed(&mut self, performed: bool) {
        self.performed = performed;
    }

    pub fn set_values(&mut self, values: ExerciseValues) {
        self.values = values;
    }
}

impl ExerciseRecord for AdditionalExercise {
    fn name(&self) -> &Name {
        &self.name
    }

    fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    fn values(&self) -> &ExerciseValues {
        &self.values
    }

    fn performed(&self) -> bool {
        self.performed
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryKind<'a> {
    Primary(&'a ExerciseEntry),
    Additional(&'a AdditionalExercise),
}

impl ExerciseRecord for EntryKind<'_> {
    fn name(&self) -> &Name {
        match self {
            EntryKind::Primary(entry) => entry.name(),
            EntryKind::Additional(entry) => entry.name(),
        }
    }

    fn added_at(&self) -> DateTime<Utc> {
        match self {
            EntryKind::Primary(entry) => entry.added_at(),
            EntryKind::Additional(entry) => entry.added_at(),
        }
    }

    fn values(&self) -> &ExerciseValues {
        match self {
            EntryKind::Primary(entry) => entry.values(),
            EntryKind::Additional(entry) => entry.values(),
        }
    }

    fn performed(&self) -> bool {
        match self {
            EntryKind::Primary(entry) => entry.performed(),
            EntryKind::Additional(entry) => entry.performed(),
        }
    }
}
