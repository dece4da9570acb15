use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use log::debug;

use crate::{WorkoutSet, fuzz};

/// Minimum score a logged exercise name must reach to be considered the same exercise.
pub const MATCH_THRESHOLD: u8 = 85;

/// Number of most recent training days considered as history.
pub const SESSION_COUNT: usize = 2;

/// Find the sets of the two most recent days on which the given exercise was logged.
///
/// The logged exercise name most similar to the given name is taken as the match, provided it
/// reaches [`MATCH_THRESHOLD`]. Names are compared ignoring case. If several names share the
/// highest score, the one logged first wins. The returned sets are ordered by date, most
/// recent first.
#[must_use]
pub fn find_recent_logs(exercise_name: &str, log: &[WorkoutSet]) -> Vec<WorkoutSet> {
    let Some((matched_name, score)) = fuzz::extract_one(
        &exercise_name.to_lowercase(),
        distinct_exercise_names(log),
    ) else {
        return vec![];
    };

    if score < MATCH_THRESHOLD {
        debug!("no history for \"{exercise_name}\" (best match \"{matched_name}\", score {score})");
        return vec![];
    }

    debug!("history for \"{exercise_name}\" found as \"{matched_name}\" (score {score})");

    let mut sets = log
        .iter()
        .filter(|s| s.exercise.eq_ignore_case(matched_name))
        .cloned()
        .collect::<Vec<_>>();
    sets.sort_by(|a, b| b.date.cmp(&a.date));

    let recent_dates = sets
        .iter()
        .map(|s| s.date)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .take(SESSION_COUNT)
        .collect::<BTreeSet<_>>();

    sets.retain(|s| recent_dates.contains(&s.date));
    sets
}

/// Group sets by date, oldest date first, and order the sets of each date by set number.
#[must_use]
pub fn previous_sessions(history: &[WorkoutSet]) -> BTreeMap<NaiveDate, Vec<WorkoutSet>> {
    let mut sessions: BTreeMap<NaiveDate, Vec<WorkoutSet>> = BTreeMap::new();
    for set in history {
        sessions.entry(set.date).or_default().push(set.clone());
    }
    for sets in sessions.values_mut() {
        sets.sort_by_key(|s| s.set);
    }
    sessions
}

fn distinct_exercise_names(log: &[WorkoutSet]) -> Vec<&str> {
    let mut names: Vec<&str> = vec![];
    for set in log {
        let name = set.exercise.as_str();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{BodyPart, Name, Reps, Weight};

    #[test]
    fn test_find_recent_logs_empty_log() {
        assert!(find_recent_logs("Bench Press", &[]).is_empty());
        assert!(find_recent_logs("", &[]).is_empty());
    }

    #[test]
    fn test_find_recent_logs_two_most_recent_dates() {
        let log = vec![
            set(1, "Bench press", 1, 60.0, 8),
            set(1, "Bench press", 2, 60.0, 7),
            set(3, "Squat", 1, 100.0, 5),
            set(5, "Bench press", 1, 60.0, 8),
            set(8, "Bench press", 1, 62.5, 6),
            set(8, "Bench press", 2, 62.5, 5),
        ];

        assert_eq!(
            find_recent_logs("Bench Press", &log),
            vec![
                set(8, "Bench press", 1, 62.5, 6),
                set(8, "Bench press", 2, 62.5, 5),
                set(5, "Bench press", 1, 60.0, 8),
            ]
        );
    }

    #[test]
    fn test_find_recent_logs_single_date() {
        let log = vec![set(1, "Squat", 1, 100.0, 5), set(1, "Squat", 2, 100.0, 4)];

        assert_eq!(
            find_recent_logs("squat", &log),
            vec![set(1, "Squat", 1, 100.0, 5), set(1, "Squat", 2, 100.0, 4)]
        );
    }

    #[test]
    fn test_find_recent_logs_merges_names_differing_in_case() {
        let log = vec![
            set(1, "Bench press", 1, 60.0, 8),
            set(2, "Bench Press", 1, 60.0, 9),
        ];

        assert_eq!(
            find_recent_logs("bench press", &log),
            vec![
                set(2, "Bench Press", 1, 60.0, 9),
                set(1, "Bench press", 1, 60.0, 8),
            ]
        );
    }

    #[test]
    fn test_find_recent_logs_below_threshold() {
        let log = vec![set(1, "Deadlift", 1, 140.0, 5)];

        assert!(find_recent_logs("Leg Press", &log).is_empty());
    }

    #[test]
    fn test_find_recent_logs_partial_name() {
        let log = vec![
            set(1, "Incline Bench Press", 1, 50.0, 10),
            set(2, "Squat", 1, 100.0, 5),
        ];

        assert_eq!(
            find_recent_logs("Bench Press", &log),
            vec![set(1, "Incline Bench Press", 1, 50.0, 10)]
        );
    }

    #[test]
    fn test_find_recent_logs_first_logged_name_wins_tie() {
        let log = vec![
            set(1, "Curl", 1, 20.0, 10),
            set(2, "Hammer Curl", 1, 16.0, 12),
        ];

        assert_eq!(
            find_recent_logs("Curl", &log),
            vec![set(1, "Curl", 1, 20.0, 10)]
        );
    }

    #[test]
    fn test_previous_sessions() {
        let history = vec![
            set(8, "Bench Press", 2, 62.5, 5),
            set(8, "Bench Press", 1, 62.5, 6),
            set(5, "Bench Press", 1, 60.0, 8),
        ];

        assert_eq!(
            previous_sessions(&history),
            BTreeMap::from([
                (date(5), vec![set(5, "Bench Press", 1, 60.0, 8)]),
                (
                    date(8),
                    vec![
                        set(8, "Bench Press", 1, 62.5, 6),
                        set(8, "Bench Press", 2, 62.5, 5)
                    ]
                ),
            ])
        );
    }

    fn set(day: u32, exercise: &str, set: u32, weight: f32, reps: u32) -> WorkoutSet {
        WorkoutSet {
            date: date(day),
            exercise: Name::new(exercise).unwrap(),
            body_part: BodyPart::Other,
            set,
            weight: Weight::new(weight).unwrap(),
            reps: Reps::from(reps),
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }
}
