use chrono::NaiveDateTime;
use derive_more::{AsRef, Display};

const MAX_LEN: usize = 64;

/// Display name of a runner.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.chars().count();

        if len > MAX_LEN {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }

    /// Name given to runners who never chose one, e.g. `Runner_1700000000000`.
    #[must_use]
    pub fn anonymous(now: NaiveDateTime) -> Self {
        Name(format!("Runner_{}", now.and_utc().timestamp_millis()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Paula", Ok(Name("Paula".to_string())))]
    #[case("  Eliud  ", Ok(Name("Eliud".to_string())))]
    #[case(" \t ", Err(NameError::Empty))]
    #[case(&"R".repeat(64), Ok(Name("R".repeat(64))))]
    #[case(&"R".repeat(65), Err(NameError::TooLong(65)))]
    #[case(&"ü".repeat(64), Ok(Name("ü".repeat(64))))]
    fn test_name_new(#[case] name: &str, #[case] expected: Result<Name, NameError>) {
        assert_eq!(Name::new(name), expected);
    }

    #[test]
    fn test_name_anonymous() {
        let now = NaiveDate::from_ymd_opt(2023, 11, 14)
            .unwrap()
            .and_hms_milli_opt(22, 13, 20, 123)
            .unwrap();

        assert_eq!(Name::anonymous(now).to_string(), "Runner_1700000000123");
        assert!(Name::new(&Name::anonymous(now).to_string()).is_ok());
    }
}
