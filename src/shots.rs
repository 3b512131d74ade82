use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Result, ShotChartError};
use crate::models::{EventType, Point, ShotEvent};

/// What to do with an `EVENT_TYPE` that is neither a made nor a missed shot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownEventPolicy {
    /// Drop the event from both partitions and log a data-quality warning.
    #[default]
    Skip,
    /// Fail with [`ShotChartError::UnknownEventType`].
    Reject,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShotPartition {
    pub made: Vec<Point>,
    pub missed: Vec<Point>,
    /// Events for the player that were dropped as unrecognized.
    pub unrecognized: usize,
}

impl ShotPartition {
    pub fn attempts(&self) -> usize {
        self.made.len() + self.missed.len()
    }

    /// Share of recognized attempts that were made, `None` with no attempts.
    pub fn accuracy(&self) -> Option<f64> {
        match self.attempts() {
            0 => None,
            attempts => Some(self.made.len() as f64 / attempts as f64),
        }
    }
}

/// Splits `player`'s shots by outcome, keeping dataset order in each half.
pub fn partition_shots(
    events: &[ShotEvent],
    player: &str,
    policy: UnknownEventPolicy,
) -> Result<ShotPartition> {
    let mut partition = ShotPartition::default();
    let mut unknown_labels: BTreeMap<&str, usize> = BTreeMap::new();

    for event in events.iter().filter(|event| event.player_name == player) {
        match &event.event_type {
            EventType::MadeShot => partition.made.push(event.location()),
            EventType::MissedShot => partition.missed.push(event.location()),
            EventType::Other(label) => {
                if policy == UnknownEventPolicy::Reject {
                    return Err(ShotChartError::UnknownEventType {
                        player: player.to_string(),
                        label: label.clone(),
                    });
                }
                *unknown_labels.entry(label.as_str()).or_insert(0) += 1;
                partition.unrecognized += 1;
            }
        }
    }

    for (label, count) in &unknown_labels {
        warn!(player, label, count, "dropped shots with unrecognized event type");
    }
    debug!(
        player,
        made = partition.made.len(),
        missed = partition.missed.len(),
        "partitioned shots"
    );

    Ok(partition)
}
