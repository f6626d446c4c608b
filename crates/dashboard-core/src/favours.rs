//! Recipient Log
//!
//! Read-only view over granted favours: newest first, collapsed to a few
//! entries unless expanded. The source list is never reordered.

use crate::progress::Favour;

/// Entries shown while collapsed
pub const COLLAPSED_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct RecipientLog {
    limit: usize,
}

impl Default for RecipientLog {
    fn default() -> Self {
        Self { limit: COLLAPSED_LIMIT }
    }
}

/// What the log displays for a given list and toggle state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientView<'a> {
    pub entries: Vec<&'a Favour>,
    pub total: usize,
    /// Whether the expand/collapse toggle is offered
    pub has_more: bool,
}

impl RecipientView<'_> {
    /// An empty log renders nothing at all
    pub fn is_hidden(&self) -> bool {
        self.total == 0
    }
}

impl RecipientLog {
    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    pub fn render<'a>(&self, favours: &'a [Favour], expanded: bool) -> RecipientView<'a> {
        let mut sorted: Vec<&Favour> = favours.iter().collect();
        // Stable: equal dates keep their list order
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        let total = sorted.len();
        if !expanded {
            sorted.truncate(self.limit);
        }
        RecipientView {
            entries: sorted,
            total,
            has_more: total > self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityId;
    use chrono::{TimeZone, Utc};

    fn favour(id: u64, name: &str, day: u32) -> Favour {
        Favour {
            id: EntityId(id),
            recipient_name: name.to_string(),
            date: Utc.with_ymd_and_hms(2025, 7, day, 12, 0, 0).unwrap(),
        }
    }

    fn names(view: &RecipientView<'_>) -> Vec<String> {
        view.entries.iter().map(|f| f.recipient_name.clone()).collect()
    }

    #[test]
    fn test_empty_log_is_hidden() {
        let view = RecipientLog::default().render(&[], false);
        assert!(view.is_hidden());
        assert!(!view.has_more);
    }

    #[test]
    fn test_sorted_newest_first_and_collapsed() {
        let favours = vec![
            favour(1, "Ana", 3),
            favour(2, "Ben", 9),
            favour(3, "Cy", 1),
            favour(4, "Dee", 5),
        ];
        let log = RecipientLog::default();

        let collapsed = log.render(&favours, false);
        assert_eq!(names(&collapsed), vec!["Ben", "Dee", "Ana"]);
        assert_eq!(collapsed.total, 4);
        assert!(collapsed.has_more);

        let expanded = log.render(&favours, true);
        assert_eq!(names(&expanded), vec!["Ben", "Dee", "Ana", "Cy"]);

        // Source order untouched
        assert_eq!(favours[0].recipient_name, "Ana");
    }

    #[test]
    fn test_no_toggle_at_limit() {
        let favours = vec![favour(1, "Ana", 3), favour(2, "Ben", 4), favour(3, "Cy", 5)];
        let view = RecipientLog::default().render(&favours, false);
        assert_eq!(view.entries.len(), 3);
        assert!(!view.has_more);
    }

    #[test]
    fn test_custom_limit() {
        let favours = vec![favour(1, "Ana", 3), favour(2, "Ben", 4)];
        let view = RecipientLog::with_limit(1).render(&favours, false);
        assert_eq!(names(&view), vec!["Ben"]);
        assert!(view.has_more);
    }
}
