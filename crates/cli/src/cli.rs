use std::{path::PathBuf, str::FromStr};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use liftlog_domain::{BodyPart, ExerciseBlock, SetInput, form::MAX_SET_COUNT};

#[derive(Parser, Debug)]
#[command(name = "liftlog")]
#[command(author, version, about = "Log workouts and compare them with previous sessions", long_about = None)]
pub struct Cli {
    /// Path to settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to workout log (overrides settings)
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    /// Print debug output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Detect the muscle group trained by an exercise
    Classify {
        /// Exercise name
        #[arg(required = true)]
        name: String,
    },

    /// Show the last two sessions of an exercise
    History {
        /// Exercise name
        #[arg(required = true)]
        name: String,
    },

    /// Log a workout
    Log {
        /// Workout date (default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Exercise as NAME[@MUSCLE_GROUP]:WEIGHTxREPS,WEIGHTxREPS,...
        #[arg(short, long = "exercise", required = true)]
        exercises: Vec<ExerciseSpec>,

        /// Export the logged sets as CSV to PATH or to the export directory
        #[arg(long, value_name = "PATH")]
        export: Option<Option<PathBuf>>,
    },
}

/// Exercise given on the command line, standing in for one exercise block of the form.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSpec {
    pub name: String,
    pub body_part: Option<BodyPart>,
    pub sets: Vec<SetInput>,
}

impl ExerciseSpec {
    pub fn fill(&self, block: &mut ExerciseBlock) {
        block.name.clone_from(&self.name);
        block.body_part = self.body_part;
        block.sets.clone_from(&self.sets);
    }
}

impl FromStr for ExerciseSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((head, sets)) = s.split_once(':') else {
            return Err("expected NAME[@MUSCLE_GROUP]:WEIGHTxREPS,...".to_string());
        };

        let (name, body_part) = match head.rsplit_once('@') {
            Some((name, body_part)) => (
                name,
                Some(
                    body_part
                        .trim()
                        .parse::<BodyPart>()
                        .map_err(|_| format!("unknown muscle group \"{}\"", body_part.trim()))?,
                ),
            ),
            None => (head, None),
        };

        if name.trim().is_empty() {
            return Err("exercise name must not be empty".to_string());
        }

        let sets = sets
            .split(',')
            .map(|set| match set.trim().rsplit_once(['x', 'X', '×']) {
                Some((weight, reps)) => Ok(SetInput::new(weight.trim(), reps.trim())),
                None => Err(format!("expected WEIGHTxREPS, got \"{}\"", set.trim())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if sets.len() > MAX_SET_COUNT {
            return Err(format!(
                "at most {MAX_SET_COUNT} sets per exercise ({} > {MAX_SET_COUNT})",
                sets.len()
            ));
        }

        Ok(Self {
            name: name.to_string(),
            body_part,
            sets,
        })
    }
}
