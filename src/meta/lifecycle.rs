//! Insight lifecycle stages

use crate::chamber::Insight;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MS_PER_DAY: f64 = 86_400_000.0;

/// How far an insight has developed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    New,
    Growing,
    Mature,
    Integrated,
}

impl Lifecycle {
    /// Stage of `insight` as seen at `now`.
    ///
    /// The rules run in order and each may upgrade the result of the
    /// previous one: growing needs 2 observations over more than a day,
    /// mature needs 4 over more than a week, and a mature insight untouched
    /// for more than two weeks counts as integrated.
    pub fn of(insight: &Insight, now: DateTime<Utc>) -> Self {
        let age_days = days_between(insight.first_seen, now);
        let recency_days = days_between(insight.last_updated, now);
        let evidence = insight.strength.evidence_count();

        let mut stage = Lifecycle::New;
        if evidence >= 2 && age_days > 1.0 {
            stage = Lifecycle::Growing;
        }
        if evidence >= 4 && age_days > 7.0 {
            stage = Lifecycle::Mature;
        }
        if stage == Lifecycle::Mature && recency_days > 14.0 {
            stage = Lifecycle::Integrated;
        }
        stage
    }
}

fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / MS_PER_DAY
}
