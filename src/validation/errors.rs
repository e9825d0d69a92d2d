use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Player,
    Match,
    Penalty,
    CashEntry,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Player => "player",
            RecordKind::Match => "match",
            RecordKind::Penalty => "penalty",
            RecordKind::CashEntry => "cash entry",
        };
        f.write_str(name)
    }
}

/// A single rule violated by one record
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{record} {id}: date '{value}' must be a valid YYYY-MM-DD date")]
    InvalidDate {
        record: RecordKind,
        id: String,
        value: String,
    },

    #[error("{record} {id}: player id '{value}' is not a valid UUID")]
    InvalidPlayerId {
        record: RecordKind,
        id: String,
        value: String,
    },

    #[error("{record} {id}: {field} must be between {min} and {max} characters, found {found}")]
    TextLength {
        record: RecordKind,
        id: String,
        field: &'static str,
        min: usize,
        max: usize,
        found: usize,
    },

    #[error("match {id}: team {team} must have between {min} and {max} players, found {found}")]
    RosterSize {
        id: String,
        team: char,
        min: usize,
        max: usize,
        found: usize,
    },

    #[error("match {id}: goals for team {team} must be at most {max}, found {found}")]
    GoalsOutOfRange {
        id: String,
        team: char,
        max: u32,
        found: u32,
    },

    #[error("penalty {id}: value {value} must be one of -1, -2, -3")]
    PenaltyValue { id: String, value: i32 },

    #[error("cash entry {id}: amount must be greater than 0 and at most {max}, found {amount}")]
    AmountOutOfRange { id: String, max: f64, amount: f64 },
}

/// Every issue found in one snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn push(&mut self, issue: ValidationError) {
        self.issues.push(issue);
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = ValidationError>) {
        self.issues.extend(issues);
    }

    pub fn into_result(self) -> anyhow::Result<()> {
        match self.issues.first() {
            None => Ok(()),
            Some(first) => anyhow::bail!(
                "Snapshot rejected with {} validation issue(s), first: {}",
                self.issues.len(),
                first
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_record() {
        let err = ValidationError::InvalidDate {
            record: RecordKind::CashEntry,
            id: "c1".to_string(),
            value: "20/01/2024".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "cash entry c1: date '20/01/2024' must be a valid YYYY-MM-DD date"
        );
    }

    #[test]
    fn test_report_into_result() {
        assert!(ValidationReport::default().into_result().is_ok());

        let mut report = ValidationReport::default();
        report.push(ValidationError::PenaltyValue {
            id: "x".to_string(),
            value: -5,
        });

        let err = report.into_result().unwrap_err();
        assert!(err.to_string().contains("1 validation issue(s)"));
    }
}
