use log::{error, info, warn};

use crate::{
    AppendError, Evaluation, ReadError, SaveError, WorkoutForm, WorkoutSet, find_recent_logs,
};

pub trait WorkoutLogService {
    fn get_workout_log(&self) -> Result<Vec<WorkoutSet>, ReadError>;
    fn append_workout_log(&self, batch: &[WorkoutSet]) -> Result<(), AppendError>;

    fn get_recent_logs(&self, exercise_name: &str) -> Result<Vec<WorkoutSet>, ReadError> {
        Ok(find_recent_logs(exercise_name, &self.get_workout_log()?))
    }

    fn evaluate_workout(&self, form: &WorkoutForm) -> Result<Evaluation, ReadError> {
        Ok(form.evaluate(&self.get_workout_log()?))
    }

    /// Append all sets of the evaluated form to the log and return them.
    ///
    /// Nothing is saved while any exercise lacks a body part.
    fn save_workout(&self, evaluation: &Evaluation) -> Result<Vec<WorkoutSet>, SaveError> {
        if let Some(exercise) = evaluation.missing_body_part() {
            warn!("no body part for {exercise}, nothing saved");
            return Err(SaveError::BodyPartRequired(exercise.clone()));
        }
        let batch = evaluation.batch();
        if batch.is_empty() {
            warn!("no sets to save for {}", evaluation.date);
            return Err(SaveError::NothingToSave);
        }
        self.append_workout_log(&batch)?;
        info!("saved {} sets for {}", batch.len(), evaluation.date);
        Ok(batch)
    }
}

pub trait WorkoutLogRepository {
    fn read_workout_log(&self) -> Result<Vec<WorkoutSet>, ReadError>;
    /// Append all sets or none of them.
    fn append_workout_log(&self, batch: &[WorkoutSet]) -> Result<(), AppendError>;
}

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func;
        if let Err(ref err) = result {
            error!("failed to {} {}: {err}", $action, $entity);
        }
        result
    }};
}

impl<R: WorkoutLogRepository> WorkoutLogService for Service<R> {
    fn get_workout_log(&self) -> Result<Vec<WorkoutSet>, ReadError> {
        log_on_error!(self.repository.read_workout_log(), "get", "workout log")
    }

    fn append_workout_log(&self, batch: &[WorkoutSet]) -> Result<(), AppendError> {
        log_on_error!(
            self.repository.append_workout_log(batch),
            "append",
            "workout log"
        )
    }
}
