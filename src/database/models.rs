use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct DbRun {
    pub id: i64,
    pub calculated_at: NaiveDateTime,
    pub player_count: i64,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct DbStandingEntry {
    pub id: i64,
    pub run_id: i64,
    pub player_id: String,
    pub player_name: String,
    pub position: i64,
    pub points: i64,
    pub penalty_points: i64,
    pub matches: i64,
    pub wins: i64,
    pub blowout_wins: i64,
    pub draws: i64,
    pub losses: i64,
    pub win_rate: f64,
}
