use std::{cmp::Ordering, fmt};

use chrono::NaiveDate;

use crate::{Reps, Weight, WorkoutSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Regression,
    Match,
    Improvement,
}

/// Comparison of a new set with the latest logged set of the same number and weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Advice {
    pub set: u32,
    pub weight: Weight,
    pub reps: Reps,
    pub last_date: NaiveDate,
    pub last_reps: Reps,
    pub progress: Progress,
}

impl Advice {
    #[must_use]
    pub fn target_reps(&self) -> u32 {
        u32::from(self.last_reps).saturating_add(1)
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.progress {
            Progress::Regression => write!(
                f,
                "Push harder! Last time Set {} at {}kg → {} reps. Try for {}!",
                self.set,
                self.weight,
                self.last_reps,
                self.target_reps()
            ),
            Progress::Match => write!(
                f,
                "Match achieved: {} reps. Next time aim for {}!",
                self.reps,
                self.target_reps()
            ),
            Progress::Improvement => write!(
                f,
                "Great! You beat your last Set {} at {}kg with {} reps!",
                self.set, self.weight, self.reps
            ),
        }
    }
}

/// Compare a new set with the history of the exercise.
///
/// Only logged sets with the same set number and exactly the same weight are comparable. If
/// there are none, no advice is given. Otherwise the set logged on the latest date is used.
#[must_use]
pub fn advise(set: u32, weight: Weight, reps: Reps, history: &[WorkoutSet]) -> Option<Advice> {
    let last = history
        .iter()
        .filter(|s| s.set == set && s.weight == weight)
        .max_by_key(|s| s.date)?;

    Some(Advice {
        set,
        weight,
        reps,
        last_date: last.date,
        last_reps: last.reps,
        progress: match reps.cmp(&last.reps) {
            Ordering::Less => Progress::Regression,
            Ordering::Equal => Progress::Match,
            Ordering::Greater => Progress::Improvement,
        },
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{BodyPart, Name};

    static HISTORY: std::sync::LazyLock<Vec<WorkoutSet>> = std::sync::LazyLock::new(|| {
        vec![
            set(8, 1, 60.0, 8),
            set(8, 2, 60.0, 7),
            set(5, 1, 60.0, 10),
            set(5, 2, 57.5, 9),
        ]
    });

    #[rstest]
    #[case::improvement(9, Progress::Improvement)]
    #[case::regression(7, Progress::Regression)]
    #[case::matched(8, Progress::Match)]
    fn test_advise(#[case] reps: u32, #[case] progress: Progress) {
        let advice = advise(1, weight(60.0), Reps::from(reps), &HISTORY).unwrap();
        assert_eq!(advice.progress, progress);
        assert_eq!(advice.last_date, date(8));
        assert_eq!(advice.last_reps, Reps::from(8));
        assert_eq!(advice.target_reps(), 9);
    }

    #[test]
    fn test_advise_requires_same_weight() {
        assert_eq!(advise(1, weight(62.5), Reps::from(8), &HISTORY), None);
        assert_eq!(advise(1, weight(60.01), Reps::from(8), &HISTORY), None);
    }

    #[test]
    fn test_advise_requires_same_set() {
        assert_eq!(advise(3, weight(60.0), Reps::from(8), &HISTORY), None);
    }

    #[test]
    fn test_advise_uses_latest_comparable_set() {
        let advice = advise(2, weight(57.5), Reps::from(9), &HISTORY).unwrap();
        assert_eq!(advice.last_date, date(5));
        assert_eq!(advice.progress, Progress::Match);
        assert_eq!(advice.target_reps(), 10);
    }

    #[test]
    fn test_advise_without_history() {
        assert_eq!(advise(1, weight(60.0), Reps::from(8), &[]), None);
    }

    #[rstest]
    #[case::regression(7, "Push harder! Last time Set 1 at 60kg → 8 reps. Try for 9!")]
    #[case::matched(8, "Match achieved: 8 reps. Next time aim for 9!")]
    #[case::improvement(9, "Great! You beat your last Set 1 at 60kg with 9 reps!")]
    fn test_advice_display(#[case] reps: u32, #[case] expected: &str) {
        assert_eq!(
            advise(1, weight(60.0), Reps::from(reps), &HISTORY)
                .unwrap()
                .to_string(),
            expected
        );
    }

    fn set(day: u32, set: u32, weight: f32, reps: u32) -> WorkoutSet {
        WorkoutSet {
            date: date(day),
            exercise: Name::new("Bench Press").unwrap(),
            body_part: BodyPart::Chest,
            set,
            weight: Weight::new(weight).unwrap(),
            reps: Reps::from(reps),
        }
    }

    fn weight(value: f32) -> Weight {
        Weight::new(value).unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }
}
