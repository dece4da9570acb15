#![warn(clippy::pedantic)]

use std::{fs, path::PathBuf, thread};

use anyhow::{Context, Result, anyhow};
use chrono::{Local, NaiveDate};
use clap::Parser;
use liftlog_app::{Settings, SettingsService, render};
use liftlog_domain::{
    BlockID, SaveError, Service, WorkoutForm, WorkoutLogRepository, WorkoutLogService, classify,
    classify_intensity,
};
use liftlog_storage::{CsvLog, SettingsFile, export_csv, export_file_name};
use log::{LevelFilter, info};

use cli::{Cli, Command, ExerciseSpec};

mod cli;

fn setup_logging(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let settings_file = SettingsFile::new(
        cli.config
            .or_else(SettingsFile::default_path)
            .unwrap_or_else(|| PathBuf::from("liftlog.json")),
    );
    let mut settings = settings_file
        .get_settings()
        .map_err(|err| anyhow!(err))
        .context("Failed to load settings")?;
    if let Some(log_file) = cli.log_file {
        settings.log_file = log_file;
    }

    info!("using workout log {}", settings.log_file.display());
    let service = Service::new(CsvLog::new(&settings.log_file));

    match cli.command {
        Command::Classify { name } => match classify(&name) {
            Some(body_part) => println!("{body_part}"),
            None => println!("{}", render::body_part(None)),
        },
        Command::History { name } => {
            let history = service
                .get_recent_logs(&name)
                .map_err(|err| anyhow!("{err}"))
                .context("Failed to read workout log")?;
            if history.is_empty() {
                println!("No previous logs for {name}");
            } else {
                print!("{}", render::history(&history));
            }
        }
        Command::Log {
            date,
            exercises,
            export,
        } => log_workout(
            &service,
            &settings,
            date.unwrap_or_else(|| Local::now().date_naive()),
            &exercises,
            export,
        )?,
    }

    Ok(())
}

fn log_workout<R: WorkoutLogRepository>(
    service: &Service<R>,
    settings: &Settings,
    date: NaiveDate,
    exercises: &[ExerciseSpec],
    export: Option<Option<PathBuf>>,
) -> Result<()> {
    let mut form = WorkoutForm::new(date);
    for (i, exercise) in exercises.iter().enumerate() {
        let id = if i == 0 {
            BlockID::default()
        } else {
            form.add_block()
        };
        if let Some(block) = form.block_mut(id) {
            exercise.fill(block);
        }
    }

    let evaluation = service
        .evaluate_workout(&form)
        .map_err(|err| anyhow!("{err}"))
        .context("Failed to read workout log")?;

    for (number, exercise) in (1..).zip(&evaluation.exercises) {
        print!("{}", render::exercise(number, exercise));
        for set in &exercise.sets {
            println!(
                "Set {}: {} kg × {} reps ({})",
                set.set,
                set.weight,
                set.reps,
                classify_intensity(u32::from(set.reps))
            );
            if let Some(advice) = &set.advice {
                println!("  {advice}");
                if !settings.verdict_delay().is_zero() {
                    thread::sleep(settings.verdict_delay());
                }
            }
        }
    }

    for warning in &evaluation.warnings {
        eprintln!("Warning: {warning}");
    }

    let saved = service.save_workout(&evaluation);

    if let Some(path) = export {
        let batch = evaluation.batch();
        if !batch.is_empty() && evaluation.missing_body_part().is_none() {
            let path = path.unwrap_or_else(|| settings.export_path(&export_file_name(date)));
            let data = export_csv(&batch)
                .map_err(|err| anyhow!("{err}"))
                .context("Failed to export workout log")?;
            fs::write(&path, data)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Exported workout log to {}", path.display());
        }
    }

    match saved {
        Ok(batch) => {
            println!("Workout log saved! ({} sets)", batch.len());
            Ok(())
        }
        Err(SaveError::NothingToSave) => {
            eprintln!("Please log at least one exercise.");
            Ok(())
        }
        Err(SaveError::BodyPartRequired(exercise)) => {
            eprintln!(
                "Nothing saved. Select a muscle group for {exercise} with \"{exercise}@GROUP:...\" ({}).",
                render::body_parts()
            );
            Ok(())
        }
        Err(err) => Err(anyhow!("{err}")).context("Failed to save workout log"),
    }
}
