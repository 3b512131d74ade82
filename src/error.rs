use std::path::PathBuf;

/// Errors surfaced by the shot chart core.
#[derive(thiserror::Error, Debug)]
pub enum ShotChartError {
    /// A dataset file is missing, unreadable, or has malformed columns.
    #[error("failed to load dataset {path}: {source}")]
    DataSource {
        path: PathBuf,
        source: csv::Error,
    },

    /// The selected player has no row in the season statistics table.
    #[error("no season statistics found for player {player:?}")]
    PlayerNotFound { player: String },

    /// Games played is zero, so per-game rates are undefined.
    #[error("cannot compute per-game rates for {player:?}: games played is zero")]
    DivisionByZero { player: String },

    /// An event type that is neither a made nor a missed shot (strict mode only).
    #[error("unrecognized event type {label:?} in shots for {player:?}")]
    UnknownEventType { player: String, label: String },

    /// The drawing backend failed while rendering a scene.
    #[error("failed to render chart: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, ShotChartError>;
