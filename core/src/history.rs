use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Attempts, Value};

/// Summary of a game that reached a win or a loss.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub target: Value,
    pub attempts: Attempts,
    pub won: bool,
    pub finished_at: DateTime<Utc>,
}
