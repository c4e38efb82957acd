use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::{ExerciseEntry, ExerciseRecord, Name};

/// Entries sharing one exercise name, ordered by the time they were added.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedExercise<'a> {
    name: &'a Name,
    added_at: DateTime<Utc>,
    entries: Vec<&'a ExerciseEntry>,
}

impl<'a> GroupedExercise<'a> {
    #[must_use]
    pub fn name(&self) -> &'a Name {
        self.name
    }

    /// Time the earliest entry of the group was added.
    #[must_use]
    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    #[must_use]
    pub fn entries(&self) -> &[&'a ExerciseEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn performed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.performed()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|e| e.performed())
    }

    #[must_use]
    pub fn next_incomplete(&self) -> Option<&'a ExerciseEntry> {
        self.entries.iter().find(|e| !e.performed()).copied()
    }
}

/// Partitions entries by name.
///
/// Groups appear in the order their names are first seen. Entries inside a group are sorted by
/// `added_at`, entries with equal timestamps keep their input order.
pub fn group_by_name<'a, I>(entries: I) -> Vec<GroupedExercise<'a>>
where
    I: IntoIterator<Item = &'a ExerciseEntry>,
{
    let mut groups: Vec<GroupedExercise<'a>> = vec![];
    let mut group_idx: HashMap<&'a Name, usize> = HashMap::new();

    for entry in entries {
        if let Some(&idx) = group_idx.get(entry.name()) {
            groups[idx].entries.push(entry);
        } else {
            group_idx.insert(entry.name(), groups.len());
            groups.push(GroupedExercise {
                name: entry.name(),
                added_at: entry.added_at(),
                entries: vec![entry],
            });
        }
    }

    for group in &mut groups {
        group.entries.sort_by_key(|e| e.added_at());
        if let Some(first) = group.entries.first() {
            group.added_at = first.added_at();
        }
    }

    groups
}

/// Returns the earliest unperformed entry of the first group that has one.
///
/// Only top-level entries are considered, supersets attached to a performed entry are not
/// inspected.
pub fn next_incomplete<'a, I>(entries: I) -> Option<&'a ExerciseEntry>
where
    I: IntoIterator<Item = &'a ExerciseEntry>,
{
    group_by_name(entries)
        .iter()
        .find_map(GroupedExercise::next_incomplete)
}

#[must_use]
pub fn flatten<'a>(groups: &[GroupedExercise<'a>]) -> Vec<&'a ExerciseEntry> {
    groups
        .iter()
        .flat_map(|group| group.entries.iter().copied())
        .collect()
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub performed: usize,
    pub total: usize,
}

impl Progress {
    #[must_use]
    pub fn ratio(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let ratio = self.performed as f64 / self.total as f64;

        Some(ratio)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.performed == self.total
    }
}

/// Counts performed top-level entries.
pub fn progress<'a, I>(entries: I) -> Progress
where
    I: IntoIterator<Item = &'a ExerciseEntry>,
{
    entries
        .into_iter()
        .fold(Progress::default(), |mut progress, entry| {
            progress.total += 1;
            if entry.performed() {
                progress.performed += 1;
            }
            progress
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{AdditionalExercise, EntryID, ExerciseTime, ExerciseValues, Reps};

    use super::*;

    fn entry(id: u128, name: &str, added_at: i64, performed: bool) -> ExerciseEntry {
        let mut entry = ExerciseEntry::new(
            id.into(),
            Name::new(name).unwrap(),
            DateTime::from_timestamp(added_at, 0).unwrap(),
            ExerciseValues::Reps {
                reps: Reps::new(10).unwrap(),
            },
        );
        entry.mark_performed(performed);
        entry
    }

    static ENTRIES: std::sync::LazyLock<Vec<ExerciseEntry>> = std::sync::LazyLock::new(|| {
        vec![
            entry(1, "Squat", 30, true),
            entry(2, "Bench Press", 20, false),
            entry(3, "Squat", 10, true),
            entry(4, "squat", 5, false),
            entry(5, "Bench Press", 15, true),
            entry(6, "Squat", 40, false),
        ]
    });

    fn ids(entries: &[&ExerciseEntry]) -> Vec<EntryID> {
        entries.iter().map(|e| e.id()).collect()
    }

    #[test]
    fn test_group_by_name() {
        let groups = group_by_name(ENTRIES.iter());

        assert_eq!(
            groups
                .iter()
                .map(|g| g.name().to_string())
                .collect::<Vec<_>>(),
            vec!["Squat", "Bench Press", "squat"]
        );
        assert_eq!(
            groups.iter().map(|g| ids(g.entries())).collect::<Vec<_>>(),
            vec![
                vec![EntryID::from(3), EntryID::from(1), EntryID::from(6)],
                vec![EntryID::from(5), EntryID::from(2)],
                vec![EntryID::from(4)],
            ]
        );
        assert_eq!(
            groups.iter().map(|g| g.added_at().timestamp()).collect::<Vec<_>>(),
            vec![10, 15, 5]
        );
    }

    #[test]
    fn test_group_by_name_empty() {
        assert_eq!(group_by_name(&Vec::<ExerciseEntry>::new()), vec![]);
    }

    #[test]
    fn test_group_by_name_equal_timestamps_keep_input_order() {
        let entries = vec![
            entry(1, "Row", 10, false),
            entry(2, "Row", 5, false),
            entry(3, "Row", 10, false),
            entry(4, "Row", 10, false),
        ];
        let groups = group_by_name(&entries);
        assert_eq!(
            ids(groups[0].entries()),
            [2, 1, 3, 4].map(EntryID::from).to_vec()
        );
    }

    #[test]
    fn test_group_by_name_partitions_input() {
        let groups = group_by_name(ENTRIES.iter());
        let grouped = flatten(&groups);

        assert_eq!(grouped.len(), ENTRIES.len());
        assert_eq!(
            grouped.iter().map(|e| e.id()).collect::<HashSet<_>>(),
            ENTRIES.iter().map(ExerciseEntry::id).collect::<HashSet<_>>()
        );
        for group in &groups {
            assert!(group.entries().iter().all(|e| e.name() == group.name()));
            assert!(
                group
                    .entries()
                    .windows(2)
                    .all(|w| w[0].added_at() <= w[1].added_at())
            );
        }
    }

    #[test]
    fn test_group_by_name_idempotent() {
        let groups = group_by_name(ENTRIES.iter());
        let regrouped = group_by_name(flatten(&groups));
        assert_eq!(regrouped, groups);
    }

    #[rstest]
    #[case(&ENTRIES[..], Some(6))]
    #[case(&[entry(1, "Squat", 10, true), entry(2, "Squat", 20, true)], None)]
    #[case(&[entry(1, "Squat", 10, true), entry(2, "Lunge", 5, false), entry(3, "Squat", 20, false)], Some(3))]
    #[case(&[entry(1, "Squat", 30, false), entry(2, "Squat", 20, false)], Some(2))]
    #[case(&[], None)]
    fn test_next_incomplete(#[case] entries: &[ExerciseEntry], #[case] expected: Option<u128>) {
        assert_eq!(
            next_incomplete(entries).map(ExerciseEntry::id),
            expected.map(EntryID::from)
        );
    }

    #[test]
    fn test_next_incomplete_ignores_additional_exercises() {
        let mut superset = entry(1, "Bench Press", 10, true).with_additional_exercise(
            AdditionalExercise::new(
                Name::new("Plank").unwrap(),
                DateTime::from_timestamp(11, 0).unwrap(),
                ExerciseValues::Time {
                    time: ExerciseTime::new(0, 1, 0, 0).unwrap(),
                },
            ),
        );
        assert!(!superset.additional_exercises()[0].performed());
        assert_eq!(next_incomplete(&[superset.clone()]), None);

        superset.mark_performed(false);
        assert_eq!(
            next_incomplete(&[superset]).map(ExerciseEntry::id),
            Some(EntryID::from(1))
        );
    }

    #[test]
    fn test_grouped_exercise_progress() {
        let groups = group_by_name(ENTRIES.iter());
        assert_eq!(groups[0].len(), 3);
        assert_eq!(groups[0].performed_count(), 2);
        assert!(!groups[0].is_complete());
        assert_eq!(groups[0].next_incomplete().map(ExerciseEntry::id), Some(EntryID::from(6)));
        assert!(!groups[1].is_empty());
    }

    #[rstest]
    #[case(&ENTRIES[..], Progress { performed: 3, total: 6 }, Some(0.5))]
    #[case(&[entry(1, "Squat", 10, true)], Progress { performed: 1, total: 1 }, Some(1.0))]
    #[case(&[], Progress { performed: 0, total: 0 }, None)]
    fn test_progress(
        #[case] entries: &[ExerciseEntry],
        #[case] expected: Progress,
        #[case] ratio: Option<f64>,
    ) {
        assert_eq!(progress(entries), expected);
        assert_eq!(progress(entries).ratio(), ratio);
    }

    #[test]
    fn test_progress_is_complete() {
        assert!(Progress::default().is_complete());
        assert!(
            !Progress {
                performed: 1,
                total: 2
            }
            .is_complete()
        );
    }
}
