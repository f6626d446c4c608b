//! Export Snapshot
//!
//! Read-only JSON dump of every widget's state.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::board::TaskBoard;
use crate::contacts::ContactLog;
use crate::entity::{DomainError, DomainResult};
use crate::progress::ProgressCounter;
use crate::weekly::WeeklyCounter;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub exported_at: DateTime<Utc>,
    pub board: TaskBoard,
    pub outreach: ProgressCounter,
    pub nudges: WeeklyCounter,
    pub contacts: ContactLog,
    pub recent_log: Vec<String>,
}

impl DashboardSnapshot {
    pub fn to_pretty_json(&self) -> DomainResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| DomainError::Internal(e.to_string()))
    }

    pub fn file_name(&self) -> String {
        format!("dashboard-{}.json", self.exported_at.format("%Y-%m-%d"))
    }
}
