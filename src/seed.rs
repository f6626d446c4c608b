//! Seed Data
//!
//! Initial widget state, embedded at build time.

use dashboard_core::{DashboardConfig, DomainResult};

const SEED_JSON: &str = include_str!("../seed.json");

pub fn load() -> DomainResult<DashboardConfig> {
    DashboardConfig::from_json(SEED_JSON)
}
