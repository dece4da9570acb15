use derive_more::{AsRef, Display};

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        Ok(Name(trimmed_name.to_string()))
    }

    /// Create the display form of a free-text exercise name.
    ///
    /// Every letter following a non-letter is upper-cased and all other letters are
    /// lower-cased.
    pub fn canonical(name: &str) -> Result<Self, NameError> {
        let mut title = String::with_capacity(name.len());
        let mut previous_is_letter = false;

        for c in name.trim().chars() {
            if c.is_alphabetic() {
                if previous_is_letter {
                    title.extend(c.to_lowercase());
                } else {
                    title.extend(c.to_uppercase());
                }
                previous_is_letter = true;
            } else {
                title.push(c);
                previous_is_letter = false;
            }
        }

        Name::new(&title)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Bench press", Ok(Name("Bench press".to_string())))]
    #[case("  Squat  ", Ok(Name("Squat".to_string())))]
    #[case("", Err(NameError::Empty))]
    #[case("   ", Err(NameError::Empty))]
    fn test_name_new(#[case] name: &str, #[case] expected: Result<Name, NameError>) {
        assert_eq!(Name::new(name), expected);
    }

    #[rstest]
    #[case("bench press", Ok(Name("Bench Press".to_string())))]
    #[case("  INCLINE dumbbell FLY ", Ok(Name("Incline Dumbbell Fly".to_string())))]
    #[case("sit-up", Ok(Name("Sit-Up".to_string())))]
    #[case("3rd set drop", Ok(Name("3Rd Set Drop".to_string())))]
    #[case("überzug", Ok(Name("Überzug".to_string())))]
    #[case(" ", Err(NameError::Empty))]
    fn test_name_canonical(#[case] name: &str, #[case] expected: Result<Name, NameError>) {
        assert_eq!(Name::canonical(name), expected);
    }

    #[test]
    fn test_name_eq_ignore_case() {
        let name = Name::new("Bench press").unwrap();
        assert!(name.eq_ignore_case("Bench Press"));
        assert!(name.eq_ignore_case("BENCH PRESS"));
        assert!(!name.eq_ignore_case("Bench"));
    }
}
