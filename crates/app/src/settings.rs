use std::{path::PathBuf, time::Duration};

use log::error;

pub trait SettingsService {
    fn get_settings(&self) -> Result<Settings, String>;
    fn set_settings(&self, settings: &Settings) -> Result<(), String>;
}

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, String>;
    fn write_settings(&self, settings: &Settings) -> Result<(), String>;
}

impl<R: SettingsRepository> SettingsService for R {
    fn get_settings(&self) -> Result<Settings, String> {
        self.read_settings().inspect_err(|err| {
            error!("failed to get settings: {err}");
        })
    }

    fn set_settings(&self, settings: &Settings) -> Result<(), String> {
        self.write_settings(settings).inspect_err(|err| {
            error!("failed to set settings: {err}");
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub log_file: PathBuf,
    pub verdict_delay_ms: u64,
    pub export_dir: Option<PathBuf>,
}

impl Settings {
    #[must_use]
    pub fn verdict_delay(&self) -> Duration {
        Duration::from_millis(self.verdict_delay_ms)
    }

    #[must_use]
    pub fn export_path(&self, file_name: &str) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_default()
            .join(file_name)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("workout_log.csv"),
            verdict_delay_ms: 0,
            export_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    struct Memory(RefCell<Option<Settings>>);

    impl SettingsRepository for Memory {
        fn read_settings(&self) -> Result<Settings, String> {
            Ok(self.0.borrow().clone().unwrap_or_default())
        }

        fn write_settings(&self, settings: &Settings) -> Result<(), String> {
            *self.0.borrow_mut() = Some(settings.clone());
            Ok(())
        }
    }

    #[test]
    fn test_settings_service() {
        let repository = Memory(RefCell::new(None));
        assert_eq!(repository.get_settings(), Ok(Settings::default()));

        let settings = Settings {
            verdict_delay_ms: 4000,
            ..Settings::default()
        };
        repository.set_settings(&settings).unwrap();
        assert_eq!(repository.get_settings(), Ok(settings));
    }

    #[test]
    fn test_settings_verdict_delay() {
        let settings = Settings {
            verdict_delay_ms: 1500,
            ..Settings::default()
        };
        assert_eq!(settings.verdict_delay(), Duration::from_millis(1500));
        assert_eq!(Settings::default().verdict_delay(), Duration::ZERO);
    }

    #[test]
    fn test_settings_export_path() {
        assert_eq!(
            Settings::default().export_path("2025-06-02_workout_log.csv"),
            PathBuf::from("2025-06-02_workout_log.csv")
        );
        assert_eq!(
            Settings {
                export_dir: Some(PathBuf::from("exports")),
                ..Settings::default()
            }
            .export_path("2025-06-02_workout_log.csv"),
            PathBuf::from("exports/2025-06-02_workout_log.csv")
        );
    }
}
