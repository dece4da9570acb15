//! Plain text presentation of evaluated workout forms.

use liftlog_domain::{BodyPart, BodyPartChoice, EvaluatedExercise, WorkoutSet, previous_sessions};
use strum::IntoEnumIterator;

#[must_use]
pub fn body_part(choice: Option<BodyPartChoice>) -> String {
    match choice {
        Some(BodyPartChoice::Detected(body_part)) => {
            format!("Detected Muscle Group: {body_part}")
        }
        Some(BodyPartChoice::Manual(body_part)) => format!("Muscle Group: {body_part}"),
        None => format!("Couldn't detect, select manually: {}", body_parts()),
    }
}

/// All selectable body parts in declaration order.
#[must_use]
pub fn body_parts() -> String {
    BodyPart::iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Previous sessions ordered by date, oldest first.
#[must_use]
pub fn history(history: &[WorkoutSet]) -> String {
    if history.is_empty() {
        return String::new();
    }

    let sessions = previous_sessions(history)
        .into_iter()
        .map(|(date, sets)| {
            let sets = sets
                .iter()
                .map(|set| format!("- Set {}: {} kg × {} reps\n", set.set, set.weight, set.reps))
                .collect::<String>();
            format!("{date}\n{sets}")
        })
        .collect::<String>();

    format!("Previous Logs (Last 2 sessions)\n{sessions}")
}

#[must_use]
pub fn exercise(number: usize, exercise: &EvaluatedExercise) -> String {
    let mut text = format!(
        "Exercise #{number}: {}\n{}\n",
        exercise.exercise,
        body_part(exercise.body_part)
    );
    text.push_str(&history(&exercise.history));
    text
}
