#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod body_part;
mod error;
pub mod form;
pub mod fuzz;
mod history;
mod intensity;
mod name;
mod progress;
mod service;
mod workout;

pub use body_part::{BodyPart, DETECTION_THRESHOLD, classify};
pub use error::{AppendError, ReadError, SaveError, StorageError};
pub use form::{
    BlockID, BodyPartChoice, EvaluatedExercise, EvaluatedSet, Evaluation, ExerciseBlock,
    InputWarning, SetInput, WorkoutForm,
};
pub use history::{MATCH_THRESHOLD, SESSION_COUNT, find_recent_logs, previous_sessions};
pub use intensity::{Intensity, classify_intensity};
pub use name::{Name, NameError};
pub use progress::{Advice, Progress, advise};
pub use service::{Service, WorkoutLogRepository, WorkoutLogService};
pub use workout::{Reps, RepsError, Weight, WeightError, WorkoutSet};
