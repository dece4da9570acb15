use log::debug;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::fuzz;

/// Minimum score a keyword must reach for a body part to be detected.
pub const DETECTION_THRESHOLD: u8 = 80;

#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum BodyPart {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Forearms,
    Legs,
    Core,
    Other,
}

// The order of entries determines which body part wins if several keywords reach the same score.
static KEYWORDS: [(BodyPart, &[&str]); 8] = [
    (
        BodyPart::Chest,
        &["bench", "press", "pec", "fly", "incline", "decline"],
    ),
    (BodyPart::Back, &["row", "pull", "lat", "deadlift"]),
    (
        BodyPart::Shoulders,
        &["shoulder", "overhead", "military", "lateral", "raise"],
    ),
    (BodyPart::Biceps, &["curl", "biceps", "preacher"]),
    (
        BodyPart::Triceps,
        &["triceps", "dips", "pushdown", "extension"],
    ),
    (
        BodyPart::Forearms,
        &["reverse", "wrist", "hammer", "forearm"],
    ),
    (
        BodyPart::Legs,
        &["squat", "leg", "lunge", "hamstring", "quad", "calf"],
    ),
    (BodyPart::Core, &["abs", "crunch", "plank", "sit-up", "core"]),
];

impl BodyPart {
    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        KEYWORDS
            .iter()
            .find(|(body_part, _)| *body_part == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or_default()
    }
}

/// Detect the body part trained by an exercise.
///
/// Every keyword is compared to the lower-cased exercise name and the body part of the best
/// scoring keyword is returned, provided its score reaches [`DETECTION_THRESHOLD`]. If several
/// keywords share the best score, the first one in declaration order wins.
#[must_use]
pub fn classify(exercise_name: &str) -> Option<BodyPart> {
    let name = exercise_name.to_lowercase();
    let mut best: Option<(BodyPart, &str, u8)> = None;

    for (body_part, keywords) in &KEYWORDS {
        for keyword in *keywords {
            let score = fuzz::partial_ratio(keyword, &name);
            if score >= DETECTION_THRESHOLD && best.is_none_or(|(_, _, s)| score > s) {
                best = Some((*body_part, *keyword, score));
            }
        }
    }

    match best {
        Some((body_part, keyword, score)) => {
            debug!(
                "detected {body_part} for \"{exercise_name}\" (keyword \"{keyword}\", score {score})"
            );
            Some(body_part)
        }
        None => {
            debug!("no body part detected for \"{exercise_name}\"");
            None
        }
    }
}
