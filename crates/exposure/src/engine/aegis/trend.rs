use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RiskLevel;

/// Point-in-time record of a score, as persisted for trend charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSnapshot {
    pub composite: u8,
    pub risk_level: RiskLevel,
    pub calculated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Rising,
    Falling,
    Stable,
}

/// Movement between the two most recent snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreTrend {
    pub latest: ScoreSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<ScoreSnapshot>,
    pub delta: i16,
    pub direction: TrendDirection,
    pub samples: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum TrendError {
    #[error("score history is empty")]
    EmptyHistory,
}

impl ScoreTrend {
    /// Order the history by `calculated_at` and compare the newest two entries.
    pub fn from_history(history: &[ScoreSnapshot]) -> Result<Self, TrendError> {
        let mut ordered: Vec<&ScoreSnapshot> = history.iter().collect();
        ordered.sort_by_key(|snapshot| snapshot.calculated_at);

        let latest = ordered.pop().ok_or(TrendError::EmptyHistory)?.clone();
        let previous = ordered.pop().cloned();

        let delta = previous
            .as_ref()
            .map(|prior| i16::from(latest.composite) - i16::from(prior.composite))
            .unwrap_or(0);
        let direction = match delta {
            d if d > 0 => TrendDirection::Rising,
            d if d < 0 => TrendDirection::Falling,
            _ => TrendDirection::Stable,
        };

        Ok(Self {
            latest,
            previous,
            delta,
            direction,
            samples: history.len(),
        })
    }
}
