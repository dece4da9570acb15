use crate::Name;

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum AppendError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl From<ReadError> for AppendError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Storage(storage) => AppendError::Storage(storage),
            ReadError::Other(other) => AppendError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error("Please log at least one exercise")]
    NothingToSave,
    #[error("Please select a muscle group for {0}")]
    BodyPartRequired(Name),
    #[error(transparent)]
    Append(#[from] AppendError),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_error_from_read_error() {
        assert!(matches!(
            AppendError::from(ReadError::Storage(StorageError::Other("foo".into()))),
            AppendError::Storage(StorageError::Other(error)) if error.to_string() == "foo"
        ));
        assert!(matches!(
            AppendError::from(ReadError::Other("foo".into())),
            AppendError::Other(error) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_save_error_display() {
        assert_eq!(
            SaveError::NothingToSave.to_string(),
            "Please log at least one exercise"
        );
        assert_eq!(
            SaveError::BodyPartRequired(Name::new("Farmer Walk").unwrap()).to_string(),
            "Please select a muscle group for Farmer Walk"
        );
    }
}
