//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Pagination parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub skip: i64,
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 100,
        }
    }
}

impl Pagination {
    /// Clamp to sane bounds (skip >= 0, 1 <= limit <= 100)
    pub fn clamped(self) -> Self {
        Self {
            skip: self.skip.max(0),
            limit: self.limit.clamp(1, 100),
        }
    }
}

/// Date-time window for history queries, inclusive at both ends
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateWindow {
    pub from_date: Option<chrono::DateTime<chrono::Utc>>,
    pub to_date: Option<chrono::DateTime<chrono::Utc>>,
}

impl DateWindow {
    pub fn contains(&self, at: chrono::DateTime<chrono::Utc>) -> bool {
        if let Some(from) = self.from_date {
            if at < from {
                return false;
            }
        }
        if let Some(to) = self.to_date {
            if at > to {
                return false;
            }
        }
        true
    }
}
