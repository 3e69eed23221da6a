//! Aggregate site statistics returned by `GET /api/stats`.

use serde::{Deserialize, Serialize};

use crate::config::DisplayFigures;

/// Snapshot of the in-memory counters plus the static marketing figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteStats {
    pub total_chat_sessions: u64,
    pub total_messages: u64,
    pub contact_submissions: u64,
    pub newsletter_subscribers: u64,
    pub uptime: String,
    pub active_merchants: String,
    pub total_processed: String,
}

/// Live counts gathered from the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreCounts {
    pub sessions: u64,
    pub turns: u64,
    pub contacts: u64,
    pub subscribers: u64,
}

impl SiteStats {
    /// Combine live counts with the configured display figures.
    pub fn new(counts: StoreCounts, display: &DisplayFigures) -> Self {
        Self {
            total_chat_sessions: counts.sessions,
            total_messages: counts.turns,
            contact_submissions: counts.contacts,
            newsletter_subscribers: counts.subscribers,
            uptime: display.uptime.clone(),
            active_merchants: display.active_merchants.clone(),
            total_processed: display.total_processed.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_stats_field_names() {
        let counts = StoreCounts {
            sessions: 1,
            turns: 2,
            contacts: 3,
            subscribers: 4,
        };
        let json = serde_json::to_value(SiteStats::new(counts, &DisplayFigures::default())).unwrap();
        assert_eq!(json["total_chat_sessions"], 1);
        assert_eq!(json["total_messages"], 2);
        assert_eq!(json["contact_submissions"], 3);
        assert_eq!(json["newsletter_subscribers"], 4);
        assert_eq!(json["uptime"], "99.9%");
        assert_eq!(json["active_merchants"], "10,000+");
        assert_eq!(json["total_processed"], "$2B+");
    }
}
