use serde::{Deserialize, Serialize};

pub type PlayerId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipType {
    Monthly,
    Guest,
    Supporter,
}

impl MembershipType {
    pub fn label(&self) -> &str {
        match self {
            MembershipType::Monthly => "Mensalista",
            MembershipType::Guest => "Convidado",
            MembershipType::Supporter => "Sócio-torcedor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Goalkeeper,
    #[default]
    Field,
}

impl Position {
    pub fn label(&self) -> &str {
        match self {
            Position::Goalkeeper => "Goleiro",
            Position::Field => "Linha",
        }
    }
}

/// Club member as supplied by the data-access layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub membership_type: MembershipType,
    #[serde(default)]
    pub position: Position,
    pub active: bool,
    #[serde(default)]
    pub shirt_number: Option<u32>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
}

impl Player {
    /// Only active monthly members receive a standings row.
    pub fn is_ranking_eligible(&self) -> bool {
        self.active && self.membership_type == MembershipType::Monthly
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    TeamA,
    TeamB,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub date: String,
    pub team_a: Vec<PlayerId>,
    pub team_b: Vec<PlayerId>,
    pub goals_team_a: u32,
    pub goals_team_b: u32,
}

impl Match {
    /// Team A takes precedence when an id is listed on both rosters.
    pub fn side_of(&self, player_id: &str) -> Option<Side> {
        if self.team_a.iter().any(|id| id == player_id) {
            Some(Side::TeamA)
        } else if self.team_b.iter().any(|id| id == player_id) {
            Some(Side::TeamB)
        } else {
            None
        }
    }

    /// Goals (scored, conceded) from the point of view of one side.
    pub fn score_for(&self, side: Side) -> (u32, u32) {
        match side {
            Side::TeamA => (self.goals_team_a, self.goals_team_b),
            Side::TeamB => (self.goals_team_b, self.goals_team_a),
        }
    }

    pub fn goal_diff(&self) -> u32 {
        self.goals_team_a.abs_diff(self.goals_team_b)
    }

    /// Every roster entry, team A first. Duplicates are preserved.
    pub fn participants(&self) -> impl Iterator<Item = &PlayerId> {
        self.team_a.iter().chain(self.team_b.iter())
    }
}

/// Disciplinary deduction; `value` is expected in {-1, -2, -3}
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Penalty {
    pub id: String,
    pub date: String,
    pub player_id: PlayerId,
    pub value: i32,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CashEntryType {
    Entry,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    MonthlyFee,
    MemberMonthly,
    OneOffGame,
    MemberGame,
    FieldRental,
    Barbecue,
    Others,
}

impl MovementType {
    pub fn label(&self) -> &str {
        match self {
            MovementType::MonthlyFee => "Mensalidade",
            MovementType::MemberMonthly => "Mensalista",
            MovementType::OneOffGame => "Jogo Avulso",
            MovementType::MemberGame => "Jogo Sócio",
            MovementType::FieldRental => "Aluguel Campo",
            MovementType::Barbecue => "Churrasco",
            MovementType::Others => "Outros",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashEntry {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: CashEntryType,
    pub amount: f64,
    pub movement_type: MovementType,
    pub player_or_recipient: String,
    #[serde(default)]
    pub comment: Option<String>,
}
