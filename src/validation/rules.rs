use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::debug;
use regex::Regex;

use super::errors::{RecordKind, ValidationError, ValidationReport};
use crate::domain::{CashEntry, ClubSnapshot, Match, Penalty, Player};

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;
const ROSTER_MIN: usize = 1;
const ROSTER_MAX: usize = 15;
const GOALS_MAX: u32 = 50;
const PENALTY_VALUES: [i32; 3] = [-1, -2, -3];
const REASON_MIN: usize = 3;
const REASON_MAX: usize = 500;
const AMOUNT_MAX: f64 = 1_000_000.0;
const RECIPIENT_MAX: usize = 200;
const COMMENT_MAX: usize = 500;

/// Rejects malformed records before they reach the ranking engine
pub struct Validator {
    date_regex: Regex,
    uuid_regex: Regex,
}

impl Validator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            date_regex: Self::compile_regex(r"^\d{4}-\d{2}-\d{2}$")?,
            uuid_regex: Self::compile_regex(
                r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
            )?,
        })
    }

    fn compile_regex(pattern: &str) -> Result<Regex> {
        Regex::new(pattern).with_context(|| format!("Failed to compile regex: {}", pattern))
    }

    pub fn validate_snapshot(&self, snapshot: &ClubSnapshot) -> ValidationReport {
        let mut report = ValidationReport::default();

        for player in &snapshot.players {
            report.extend(self.validate_player(player));
        }
        for game in &snapshot.matches {
            report.extend(self.validate_match(game));
        }
        for penalty in &snapshot.penalties {
            report.extend(self.validate_penalty(penalty));
        }
        for entry in &snapshot.cash_entries {
            report.extend(self.validate_cash_entry(entry));
        }

        debug!("Snapshot validation found {} issue(s)", report.issues.len());
        report
    }

    pub fn validate_player(&self, player: &Player) -> Vec<ValidationError> {
        let mut issues = Vec::new();

        let name_len = player.name.trim().chars().count();
        if !(NAME_MIN..=NAME_MAX).contains(&name_len) {
            issues.push(ValidationError::TextLength {
                record: RecordKind::Player,
                id: player.id.clone(),
                field: "name",
                min: NAME_MIN,
                max: NAME_MAX,
                found: name_len,
            });
        }

        issues
    }

    pub fn validate_match(&self, game: &Match) -> Vec<ValidationError> {
        let mut issues = Vec::new();
        self.check_date(&mut issues, RecordKind::Match, &game.id, &game.date);

        for (team, roster, goals) in [
            ('A', &game.team_a, game.goals_team_a),
            ('B', &game.team_b, game.goals_team_b),
        ] {
            if !(ROSTER_MIN..=ROSTER_MAX).contains(&roster.len()) {
                issues.push(ValidationError::RosterSize {
                    id: game.id.clone(),
                    team,
                    min: ROSTER_MIN,
                    max: ROSTER_MAX,
                    found: roster.len(),
                });
            }
            for player_id in roster {
                self.check_player_id(&mut issues, RecordKind::Match, &game.id, player_id);
            }
            if goals > GOALS_MAX {
                issues.push(ValidationError::GoalsOutOfRange {
                    id: game.id.clone(),
                    team,
                    max: GOALS_MAX,
                    found: goals,
                });
            }
        }

        issues
    }

    pub fn validate_penalty(&self, penalty: &Penalty) -> Vec<ValidationError> {
        let mut issues = Vec::new();
        self.check_date(&mut issues, RecordKind::Penalty, &penalty.id, &penalty.date);
        self.check_player_id(&mut issues, RecordKind::Penalty, &penalty.id, &penalty.player_id);

        if !PENALTY_VALUES.contains(&penalty.value) {
            issues.push(ValidationError::PenaltyValue {
                id: penalty.id.clone(),
                value: penalty.value,
            });
        }

        let reason_len = penalty.reason.trim().chars().count();
        if !(REASON_MIN..=REASON_MAX).contains(&reason_len) {
            issues.push(ValidationError::TextLength {
                record: RecordKind::Penalty,
                id: penalty.id.clone(),
                field: "reason",
                min: REASON_MIN,
                max: REASON_MAX,
                found: reason_len,
            });
        }

        issues
    }

    pub fn validate_cash_entry(&self, entry: &CashEntry) -> Vec<ValidationError> {
        let mut issues = Vec::new();
        self.check_date(&mut issues, RecordKind::CashEntry, &entry.id, &entry.date);

        if !(entry.amount > 0.0 && entry.amount <= AMOUNT_MAX) {
            issues.push(ValidationError::AmountOutOfRange {
                id: entry.id.clone(),
                max: AMOUNT_MAX,
                amount: entry.amount,
            });
        }

        check_max_length(
            &mut issues,
            &entry.id,
            "playerOrRecipient",
            &entry.player_or_recipient,
            RECIPIENT_MAX,
        );
        if let Some(comment) = &entry.comment {
            check_max_length(&mut issues, &entry.id, "comment", comment, COMMENT_MAX);
        }

        issues
    }

    fn check_date(&self, issues: &mut Vec<ValidationError>, record: RecordKind, id: &str, value: &str) {
        let well_formed = self.date_regex.is_match(value)
            && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok();

        if !well_formed {
            issues.push(ValidationError::InvalidDate {
                record,
                id: id.to_string(),
                value: value.to_string(),
            });
        }
    }

    fn check_player_id(
        &self,
        issues: &mut Vec<ValidationError>,
        record: RecordKind,
        id: &str,
        player_id: &str,
    ) {
        if !self.uuid_regex.is_match(player_id) {
            issues.push(ValidationError::InvalidPlayerId {
                record,
                id: id.to_string(),
                value: player_id.to_string(),
            });
        }
    }
}

fn check_max_length(
    issues: &mut Vec<ValidationError>,
    id: &str,
    field: &'static str,
    value: &str,
    max: usize,
) {
    let found = value.chars().count();
    if found > max {
        issues.push(ValidationError::TextLength {
            record: RecordKind::CashEntry,
            id: id.to_string(),
            field,
            min: 0,
            max,
            found,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CashEntryType, MembershipType, MovementType, Position};

    const CARLOS: &str = "6f1c2a7e-3b4d-4c5e-8f90-1a2b3c4d5e6f";
    const JOAO: &str = "0a9b8c7d-6e5f-4a3b-9c2d-1e0f9a8b7c6d";

    fn validator() -> Validator {
        Validator::new().unwrap()
    }

    fn valid_match() -> Match {
        Match {
            id: "m1".to_string(),
            date: "2024-01-20".to_string(),
            team_a: vec![CARLOS.to_string()],
            team_b: vec![JOAO.to_string()],
            goals_team_a: 5,
            goals_team_b: 2,
        }
    }

    fn valid_penalty() -> Penalty {
        Penalty {
            id: "pen1".to_string(),
            date: "2024-01-20".to_string(),
            player_id: JOAO.to_string(),
            value: -1,
            reason: "Atraso na chegada".to_string(),
        }
    }

    #[test]
    fn test_valid_records_pass() {
        let v = validator();
        let player = Player {
            id: CARLOS.to_string(),
            name: "Carlos Silva".to_string(),
            membership_type: MembershipType::Monthly,
            position: Position::Goalkeeper,
            active: true,
            shirt_number: Some(1),
            phone: None,
            birth_date: None,
        };

        assert!(v.validate_player(&player).is_empty());
        assert!(v.validate_match(&valid_match()).is_empty());
        assert!(v.validate_penalty(&valid_penalty()).is_empty());
    }

    #[test]
    fn test_match_rules() {
        let v = validator();
        let mut game = valid_match();
        game.date = "2024-02-30".to_string();
        game.team_b = vec![];
        game.team_a.push("not-a-uuid".to_string());
        game.goals_team_a = 51;

        let issues = v.validate_match(&game);

        assert_eq!(issues.len(), 4);
        assert!(matches!(issues[0], ValidationError::InvalidDate { .. }));
        assert!(issues.iter().any(|i| matches!(i, ValidationError::RosterSize { team: 'B', found: 0, .. })));
        assert!(issues.iter().any(|i| matches!(i, ValidationError::InvalidPlayerId { .. })));
        assert!(issues.iter().any(|i| matches!(i, ValidationError::GoalsOutOfRange { team: 'A', found: 51, .. })));
    }

    #[test]
    fn test_oversized_roster() {
        let mut game = valid_match();
        game.team_a = (0..16).map(|_| CARLOS.to_string()).collect();

        let issues = validator().validate_match(&game);

        assert!(matches!(issues.as_slice(), [ValidationError::RosterSize { found: 16, .. }]));
    }

    #[test]
    fn test_penalty_rules() {
        let mut penalty = valid_penalty();
        penalty.value = -4;
        penalty.reason = "  ".to_string();
        penalty.date = "20/01/2024".to_string();

        let issues = validator().validate_penalty(&penalty);

        assert_eq!(issues.len(), 3);
        assert!(issues.iter().any(|i| matches!(i, ValidationError::PenaltyValue { value: -4, .. })));
        assert!(issues.iter().any(|i| matches!(i, ValidationError::TextLength { field: "reason", .. })));
    }

    #[test]
    fn test_cash_entry_rules() {
        let entry = CashEntry {
            id: "c1".to_string(),
            date: "2024-01-20".to_string(),
            kind: CashEntryType::Entry,
            amount: 0.0,
            movement_type: MovementType::MonthlyFee,
            player_or_recipient: "x".repeat(201),
            comment: Some("ok".to_string()),
        };

        let issues = validator().validate_cash_entry(&entry);

        assert_eq!(issues.len(), 2);
        assert!(matches!(issues[0], ValidationError::AmountOutOfRange { .. }));
        assert!(matches!(issues[1], ValidationError::TextLength { field: "playerOrRecipient", found: 201, .. }));
    }

    #[test]
    fn test_snapshot_report_collects_everything() {
        let mut bad_match = valid_match();
        bad_match.goals_team_b = 99;
        let mut bad_penalty = valid_penalty();
        bad_penalty.value = 0;
        let snapshot = ClubSnapshot {
            matches: vec![valid_match(), bad_match],
            penalties: vec![bad_penalty],
            ..ClubSnapshot::default()
        };

        let report = validator().validate_snapshot(&snapshot);

        assert!(!report.is_valid());
        assert_eq!(report.issues.len(), 2);
    }
}
