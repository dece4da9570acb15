use std::fmt;

use chrono::NaiveDate;
use derive_more::{Deref, Display};
use log::warn;

use crate::{
    Advice, BodyPart, Name, Reps, RepsError, Weight, WeightError, WorkoutSet, advise, classify,
    find_recent_logs,
};

pub const DEFAULT_SET_COUNT: usize = 3;
pub const MAX_SET_COUNT: usize = 10;

/// State of a workout form during one interactive session.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutForm {
    pub date: NaiveDate,
    blocks: Vec<ExerciseBlock>,
    next_id: usize,
}

impl WorkoutForm {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            blocks: vec![ExerciseBlock::new(BlockID(0))],
            next_id: 1,
        }
    }

    #[must_use]
    pub fn blocks(&self) -> &[ExerciseBlock] {
        &self.blocks
    }

    pub fn block_mut(&mut self, id: BlockID) -> Option<&mut ExerciseBlock> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    pub fn add_block(&mut self) -> BlockID {
        let id = BlockID(self.next_id);
        self.next_id += 1;
        self.blocks.push(ExerciseBlock::new(id));
        id
    }

    /// Remove a block. The first block is never removed.
    pub fn remove_block(&mut self, id: BlockID) -> bool {
        if self.blocks.first().is_some_and(|b| b.id == id) {
            return false;
        }
        let len = self.blocks.len();
        self.blocks.retain(|b| b.id != id);
        self.blocks.len() != len
    }

    #[must_use]
    pub fn evaluate(&self, log: &[WorkoutSet]) -> Evaluation {
        let mut warnings = vec![];
        let exercises = self
            .blocks
            .iter()
            .filter_map(|block| block.evaluate(log, &mut warnings))
            .collect();

        Evaluation {
            date: self.date,
            exercises,
            warnings,
        }
    }
}

/// Identifier of an exercise block, unique within a form. The first block has the default ID.
#[derive(Deref, Display, Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockID(usize);

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseBlock {
    pub id: BlockID,
    pub name: String,
    pub body_part: Option<BodyPart>,
    pub sets: Vec<SetInput>,
}

impl ExerciseBlock {
    fn new(id: BlockID) -> Self {
        Self {
            id,
            name: String::new(),
            body_part: None,
            sets: vec![SetInput::default(); DEFAULT_SET_COUNT],
        }
    }

    pub fn set_count(&mut self, count: usize) {
        self.sets
            .resize(count.clamp(1, MAX_SET_COUNT), SetInput::default());
    }

    fn evaluate(
        &self,
        log: &[WorkoutSet],
        warnings: &mut Vec<InputWarning>,
    ) -> Option<EvaluatedExercise> {
        let exercise = Name::canonical(&self.name).ok()?;

        let body_part = match self.body_part {
            Some(body_part) => Some(BodyPartChoice::Manual(body_part)),
            None => classify(exercise.as_str()).map(BodyPartChoice::Detected),
        };

        if body_part.is_none() {
            warnings.push(InputWarning::BodyPartRequired {
                exercise: exercise.clone(),
            });
        }

        let history = find_recent_logs(exercise.as_str(), log);

        let sets = (1..)
            .zip(&self.sets)
            .map(|(set, input)| {
                let weight = parse_weight(&input.weight).unwrap_or_else(|err| {
                    warn!(
                        "invalid weight \"{}\" for set {set} of {exercise}: {err}",
                        input.weight
                    );
                    warnings.push(InputWarning::InvalidWeight {
                        exercise: exercise.clone(),
                        set,
                    });
                    Weight::default()
                });
                let reps = parse_reps(&input.reps).unwrap_or_else(|err| {
                    warn!(
                        "invalid reps \"{}\" for set {set} of {exercise}: {err}",
                        input.reps
                    );
                    warnings.push(InputWarning::InvalidReps {
                        exercise: exercise.clone(),
                        set,
                    });
                    Reps::default()
                });
                EvaluatedSet {
                    set,
                    weight,
                    reps,
                    advice: advise(set, weight, reps, &history),
                }
            })
            .collect();

        Some(EvaluatedExercise {
            block: self.id,
            exercise,
            body_part,
            history,
            sets,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetInput {
    pub weight: String,
    pub reps: String,
}

impl SetInput {
    #[must_use]
    pub fn new(weight: &str, reps: &str) -> Self {
        Self {
            weight: weight.to_string(),
            reps: reps.to_string(),
        }
    }
}

fn parse_weight(input: &str) -> Result<Weight, WeightError> {
    if input.trim().is_empty() {
        return Ok(Weight::default());
    }
    Weight::try_from(input)
}

fn parse_reps(input: &str) -> Result<Reps, RepsError> {
    if input.trim().is_empty() {
        return Ok(Reps::default());
    }
    Reps::try_from(input)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPartChoice {
    Detected(BodyPart),
    Manual(BodyPart),
}

impl BodyPartChoice {
    #[must_use]
    pub fn body_part(self) -> BodyPart {
        match self {
            BodyPartChoice::Detected(body_part) | BodyPartChoice::Manual(body_part) => body_part,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub date: NaiveDate,
    pub exercises: Vec<EvaluatedExercise>,
    pub warnings: Vec<InputWarning>,
}

impl Evaluation {
    /// The first exercise whose body part was neither detected nor chosen.
    #[must_use]
    pub fn missing_body_part(&self) -> Option<&Name> {
        self.exercises
            .iter()
            .find(|e| e.body_part.is_none())
            .map(|e| &e.exercise)
    }

    /// The sets of all exercises with a known body part.
    #[must_use]
    pub fn batch(&self) -> Vec<WorkoutSet> {
        self.exercises
            .iter()
            .filter_map(|e| e.body_part.map(|body_part| (e, body_part.body_part())))
            .flat_map(|(e, body_part)| {
                e.sets.iter().map(move |s| WorkoutSet {
                    date: self.date,
                    exercise: e.exercise.clone(),
                    body_part,
                    set: s.set,
                    weight: s.weight,
                    reps: s.reps,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedExercise {
    pub block: BlockID,
    pub exercise: Name,
    pub body_part: Option<BodyPartChoice>,
    pub history: Vec<WorkoutSet>,
    pub sets: Vec<EvaluatedSet>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedSet {
    pub set: u32,
    pub weight: Weight,
    pub reps: Reps,
    pub advice: Option<Advice>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputWarning {
    InvalidWeight { exercise: Name, set: u32 },
    InvalidReps { exercise: Name, set: u32 },
    BodyPartRequired { exercise: Name },
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputWarning::InvalidWeight { exercise, set } => {
                write!(f, "{exercise}: Invalid weight for Set {set}. Using 0.0.")
            }
            InputWarning::InvalidReps { exercise, set } => {
                write!(f, "{exercise}: Invalid reps for Set {set}. Using 0.")
            }
            InputWarning::BodyPartRequired { exercise } => {
                write!(f, "{exercise}: Couldn't detect muscle group, select manually.")
            }
        }
    }
}
