use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use liftlog_domain::{
    AppendError, BodyPart, Name, ReadError, Reps, StorageError, Weight, WorkoutLogRepository,
    WorkoutSet,
};
use log::{debug, error, warn};

pub const HEADER: [&str; 8] = [
    "date",
    "exercise",
    "body_part",
    "set",
    "weight",
    "reps",
    "volume",
    "intensity",
];

/// Workout log stored as an append-only CSV file.
pub struct CsvLog {
    path: PathBuf,
}

impl CsvLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WorkoutLogRepository for CsvLog {
    fn read_workout_log(&self) -> Result<Vec<WorkoutSet>, ReadError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no workout log at {}", self.path.display());
                return Ok(vec![]);
            }
            Err(err) => return Err(StorageError::Io(err).into()),
        };
        Ok(decode(file)?)
    }

    fn append_workout_log(&self, batch: &[WorkoutSet]) -> Result<(), AppendError> {
        if batch.is_empty() {
            return Ok(());
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(StorageError::Io)?;
        let len = file.metadata().map_err(StorageError::Io)?.len();
        let data = encode(batch, len == 0)?;

        append_or_restore(&mut file, len, &data).map_err(StorageError::Io)?;

        debug!("appended {} sets to {}", batch.len(), self.path.display());
        Ok(())
    }
}

/// File that can be synced and cut back to a previous length.
trait AppendTarget: Write {
    fn sync_data(&self) -> io::Result<()>;
    fn set_len(&self, size: u64) -> io::Result<()>;
}

impl AppendTarget for File {
    fn sync_data(&self) -> io::Result<()> {
        File::sync_data(self)
    }

    fn set_len(&self, size: u64) -> io::Result<()> {
        File::set_len(self, size)
    }
}

/// Write all data or restore the target to `len` bytes.
fn append_or_restore(target: &mut impl AppendTarget, len: u64, data: &[u8]) -> io::Result<()> {
    if let Err(err) = target.write_all(data).and_then(|()| target.sync_data()) {
        if let Err(truncate_err) = target.set_len(len) {
            error!("failed to restore workout log after incomplete append: {truncate_err}");
        }
        return Err(err);
    }
    Ok(())
}

/// Serialize sets as a standalone CSV table including the header.
pub fn export_csv(batch: &[WorkoutSet]) -> Result<Vec<u8>, StorageError> {
    encode(batch, true)
}

#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{date}_workout_log.csv")
}

#[derive(serde::Serialize)]
struct Row<'a> {
    date: NaiveDate,
    exercise: &'a str,
    body_part: &'static str,
    set: u32,
    weight: f32,
    reps: u32,
    volume: f32,
    intensity: &'static str,
}

impl<'a> From<&'a WorkoutSet> for Row<'a> {
    fn from(value: &'a WorkoutSet) -> Self {
        Row {
            date: value.date,
            exercise: value.exercise.as_str(),
            body_part: value.body_part.into(),
            set: value.set,
            weight: f32::from(value.weight),
            reps: u32::from(value.reps),
            volume: value.volume(),
            intensity: value.intensity().into(),
        }
    }
}

#[derive(serde::Deserialize)]
struct Record {
    date: NaiveDate,
    exercise: String,
    body_part: String,
    set: u32,
    weight: f32,
    reps: u32,
}

impl TryFrom<Record> for WorkoutSet {
    type Error = Box<dyn std::error::Error>;

    fn try_from(value: Record) -> Result<Self, Self::Error> {
        Ok(WorkoutSet {
            date: value.date,
            exercise: Name::new(&value.exercise)?,
            body_part: value.body_part.parse().unwrap_or(BodyPart::Other),
            set: value.set,
            weight: Weight::new(value.weight)?,
            reps: Reps::from(value.reps),
        })
    }
}

fn encode(batch: &[WorkoutSet], header: bool) -> Result<Vec<u8>, StorageError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(vec![]);

    if header {
        writer.write_record(HEADER).map_err(csv_error)?;
    }
    for set in batch {
        writer.serialize(Row::from(set)).map_err(csv_error)?;
    }

    writer
        .into_inner()
        .map_err(|err| StorageError::Other(err.to_string().into()))
}

fn decode(reader: impl io::Read) -> Result<Vec<WorkoutSet>, StorageError> {
    let mut reader = csv::Reader::from_reader(reader);

    if !reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .any(|h| h == "exercise")
    {
        return Ok(vec![]);
    }

    let mut sets = vec![];
    for (record, number) in reader.deserialize::<Record>().zip(1..) {
        let set = match record {
            Ok(record) => WorkoutSet::try_from(record),
            Err(err) if err.is_io_error() => return Err(csv_error(err)),
            Err(err) => Err(err.into()),
        };
        match set {
            Ok(set) => sets.push(set),
            Err(err) => warn!("skipping invalid record {number} in workout log: {err}"),
        }
    }
    Ok(sets)
}

fn csv_error(err: csv::Error) -> StorageError {
    StorageError::Other(Box::new(err))
}
