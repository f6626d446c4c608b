//! Dashboard Configuration
//!
//! Static seed data and UI tunables, normally parsed from the JSON file
//! embedded in the frontend. `Default` carries the same values.

use std::num::NonZeroU32;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::board::{Task, TaskBoard, TeamMember};
use crate::entity::{DomainError, DomainResult, EntityId};
use crate::progress::ProgressCounter;
use crate::weekly::{WeekRecord, WeeklyCounter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSeed {
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiSeed {
    pub current: u32,
    pub target: NonZeroU32,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySeed {
    #[serde(default)]
    pub current: u32,
    pub target: NonZeroU32,
    #[serde(default)]
    pub history: Vec<WeekRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// How long a toast stays visible
    pub toast_duration_ms: u32,
    /// Favours shown before "Show all"
    pub recent_favour_limit: usize,
    /// Lines kept by the in-memory log buffer
    pub log_capacity: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            toast_duration_ms: 4000,
            recent_favour_limit: crate::favours::COLLAPSED_LIMIT,
            log_capacity: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub members: Vec<MemberSeed>,
    pub kpi: KpiSeed,
    pub weekly: WeeklySeed,
    #[serde(default)]
    pub ui: UiSettings,
}

fn nonzero(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap_or(NonZeroU32::MIN)
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let member = |name: &str, tasks: &[&str]| MemberSeed {
            name: name.to_string(),
            tasks: tasks.iter().map(|t| t.to_string()).collect(),
        };
        Self {
            members: vec![
                member("Alice Johnson", &["Contact new leads", "Follow-up emails"]),
                member("Bob Smith", &["Create pitch deck"]),
                member("Charlie Brown", &["Research competitors"]),
                member("Diana Miller", &["Client meeting prep"]),
            ],
            kpi: KpiSeed {
                current: 12,
                target: nonzero(30),
                end_date: NaiveDate::from_ymd_opt(2025, 7, 31).unwrap_or_default(),
            },
            weekly: WeeklySeed {
                current: 3,
                target: nonzero(10),
                history: vec![
                    WeekRecord { week_number: 20, completed: 8 },
                    WeekRecord { week_number: 21, completed: 5 },
                    WeekRecord { week_number: 22, completed: 7 },
                ],
            },
            ui: UiSettings::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json).map_err(|e| DomainError::Config(e.to_string()))
    }

    /// Members get ids 1, 2, ...; tasks get their own sequence 1, 2, ...
    /// across the whole board, in seed order.
    pub fn build_board(&self) -> TaskBoard {
        let mut next_task = 0u64;
        let members = self
            .members
            .iter()
            .zip(1u64..)
            .map(|(seed, member_id)| {
                let tasks = seed
                    .tasks
                    .iter()
                    .map(|title| {
                        next_task += 1;
                        Task::new(EntityId(next_task), title.clone())
                    })
                    .collect();
                TeamMember::new(EntityId(member_id), seed.name.clone(), tasks)
            })
            .collect();
        TaskBoard::new(members)
    }

    pub fn build_progress(&self) -> ProgressCounter {
        ProgressCounter::new(self.kpi.current, self.kpi.target, self.kpi.end_date)
    }

    pub fn build_weekly(&self) -> WeeklyCounter {
        WeeklyCounter::new(self.weekly.current, self.weekly.target, self.weekly.history.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed() {
        let config = DashboardConfig::default();
        let board = config.build_board();
        let names: Vec<_> = board.members().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Alice Johnson", "Bob Smith", "Charlie Brown", "Diana Miller"]);
        assert_eq!(board.member(EntityId(1)).unwrap().tasks.len(), 2);
        assert_eq!(board.member(EntityId(4)).unwrap().tasks[0].id, EntityId(5));

        let kpi = config.build_progress();
        assert_eq!((kpi.current, kpi.target.get()), (12, 30));
        assert_eq!(kpi.progress(), 40);

        let weekly = config.build_weekly();
        assert_eq!((weekly.current, weekly.target.get()), (3, 10));
        assert_eq!(weekly.history.len(), 3);
    }

    #[test]
    fn test_embedded_seed_matches_default() {
        let embedded = include_str!("../../../seed.json");
        let parsed = DashboardConfig::from_json(embedded).unwrap();
        assert_eq!(parsed, DashboardConfig::default());
    }

    #[test]
    fn test_zero_target_rejected() {
        let json = r#"{
            "members": [],
            "kpi": { "current": 0, "target": 0, "end_date": "2025-07-31" },
            "weekly": { "target": 10 }
        }"#;
        let err = DashboardConfig::from_json(json).unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }

    #[test]
    fn test_optional_sections_default() {
        let json = r#"{
            "members": [{ "name": "Solo" }],
            "kpi": { "current": 1, "target": 5, "end_date": "2026-01-31" },
            "weekly": { "target": 4 }
        }"#;
        let config = DashboardConfig::from_json(json).unwrap();
        assert_eq!(config.ui, UiSettings::default());
        assert!(config.members[0].tasks.is_empty());
        assert_eq!(config.build_weekly().current, 0);
    }
}
