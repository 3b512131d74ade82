use serde::{Deserialize, Serialize};

/// Outcome of a shot attempt as recorded in the `EVENT_TYPE` column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    MadeShot,
    MissedShot,
    Other(String),
}

impl EventType {
    pub const MADE_LABEL: &'static str = "Made Shot";
    pub const MISSED_LABEL: &'static str = "Missed Shot";

    pub fn label(&self) -> &str {
        match self {
            EventType::MadeShot => Self::MADE_LABEL,
            EventType::MissedShot => Self::MISSED_LABEL,
            EventType::Other(label) => label,
        }
    }
}

impl From<String> for EventType {
    fn from(label: String) -> Self {
        match label.as_str() {
            Self::MADE_LABEL => EventType::MadeShot,
            Self::MISSED_LABEL => EventType::MissedShot,
            _ => EventType::Other(label),
        }
    }
}

impl From<EventType> for String {
    fn from(event_type: EventType) -> Self {
        match event_type {
            EventType::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

/// One recorded shot attempt. Locations are court-units: tenths of a foot
/// with the hoop at the origin and +Y pointing away from the baseline.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ShotEvent {
    #[serde(rename = "TEAM_NAME")]
    pub team_name: String,
    #[serde(rename = "PLAYER_NAME")]
    pub player_name: String,
    #[serde(rename = "EVENT_TYPE")]
    pub event_type: EventType,
    #[serde(rename = "LOC_X")]
    pub loc_x: i32,
    #[serde(rename = "LOC_Y")]
    pub loc_y: i32,
}

impl ShotEvent {
    pub fn location(&self) -> Point {
        Point {
            x: self.loc_x,
            y: self.loc_y,
        }
    }
}

/// Season totals for one player. Counting fields are season sums.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerSeasonStat {
    #[serde(rename = "PLAYER_NAME")]
    pub player_name: String,
    #[serde(rename = "AGE")]
    pub age: f64,
    #[serde(rename = "GP")]
    pub games_played: u32,
    #[serde(rename = "FG_PCT")]
    pub field_goal_pct: f64,
    #[serde(rename = "FG3_PCT")]
    pub three_point_pct: f64,
    #[serde(rename = "MIN")]
    pub minutes: f64,
    #[serde(rename = "PTS")]
    pub points: f64,
    #[serde(rename = "REB")]
    pub rebounds: f64,
    #[serde(rename = "AST")]
    pub assists: f64,
    #[serde(rename = "STL")]
    pub steals: f64,
    #[serde(rename = "BLK")]
    pub blocks: f64,
    #[serde(rename = "TOV")]
    pub turnovers: f64,
}

/// Per-game view of a [`PlayerSeasonStat`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedStat {
    pub player_name: String,
    pub age: f64,
    pub games_played: u32,
    pub field_goal_pct: f64,
    pub three_point_pct: f64,
    pub minutes: f64,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
