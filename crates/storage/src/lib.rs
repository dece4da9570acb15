#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod csv_log;
pub mod settings_file;

pub use csv_log::{CsvLog, export_csv, export_file_name};
pub use settings_file::SettingsFile;
