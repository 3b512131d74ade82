use std::collections::BTreeSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::Reader;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{Result, ShotChartError};
use crate::models::{PlayerSeasonStat, ShotEvent};

pub fn read_records<T: DeserializeOwned, R: Read>(
    reader: R,
) -> std::result::Result<Vec<T>, csv::Error> {
    Reader::from_reader(reader).deserialize().collect()
}

fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let load = || -> std::result::Result<Vec<T>, csv::Error> {
        Reader::from_path(path)?.deserialize().collect()
    };
    load().map_err(|source| ShotChartError::DataSource {
        path: path.to_path_buf(),
        source,
    })
}

/// Read-only season tables. Each table is read from disk at most once; later
/// calls observe the same snapshot.
pub struct Dataset {
    shots_path: PathBuf,
    stats_path: PathBuf,
    shots: OnceCell<Vec<ShotEvent>>,
    stats: OnceCell<Vec<PlayerSeasonStat>>,
}

impl Dataset {
    pub fn new(shots_path: impl Into<PathBuf>, stats_path: impl Into<PathBuf>) -> Self {
        Self {
            shots_path: shots_path.into(),
            stats_path: stats_path.into(),
            shots: OnceCell::new(),
            stats: OnceCell::new(),
        }
    }

    /// A store whose tables are already in memory. Nothing is read from disk.
    pub fn from_records(shots: Vec<ShotEvent>, stats: Vec<PlayerSeasonStat>) -> Self {
        Self {
            shots_path: PathBuf::new(),
            stats_path: PathBuf::new(),
            shots: OnceCell::with_value(shots),
            stats: OnceCell::with_value(stats),
        }
    }

    pub fn load_shot_events(&self) -> Result<&[ShotEvent]> {
        if let Some(shots) = self.shots.get() {
            debug!(rows = shots.len(), "shot events served from cache");
        }
        self.shots
            .get_or_try_init(|| {
                let shots: Vec<ShotEvent> = read_csv(&self.shots_path)?;
                info!(path = %self.shots_path.display(), rows = shots.len(), "loaded shot events");
                Ok::<_, ShotChartError>(shots)
            })
            .map(Vec::as_slice)
    }

    pub fn load_player_stats(&self) -> Result<&[PlayerSeasonStat]> {
        if let Some(stats) = self.stats.get() {
            debug!(rows = stats.len(), "player stats served from cache");
        }
        self.stats
            .get_or_try_init(|| {
                let stats: Vec<PlayerSeasonStat> = read_csv(&self.stats_path)?;
                info!(path = %self.stats_path.display(), rows = stats.len(), "loaded player stats");
                Ok::<_, ShotChartError>(stats)
            })
            .map(Vec::as_slice)
    }
}

/// Team names appearing in the shot log, ascending.
pub fn distinct_teams(events: &[ShotEvent]) -> BTreeSet<&str> {
    events.iter().map(|event| event.team_name.as_str()).collect()
}

/// Players with at least one shot for `team`, ascending.
pub fn players_on_team<'a>(events: &'a [ShotEvent], team: &str) -> BTreeSet<&'a str> {
    events
        .iter()
        .filter(|event| event.team_name == team)
        .map(|event| event.player_name.as_str())
        .collect()
}

pub fn stats_for<'a>(
    stats: &'a [PlayerSeasonStat],
    player: &str,
) -> Result<&'a PlayerSeasonStat> {
    stats
        .iter()
        .find(|row| row.player_name == player)
        .ok_or_else(|| ShotChartError::PlayerNotFound {
            player: player.to_string(),
        })
}
