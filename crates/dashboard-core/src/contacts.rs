//! Contact Log
//!
//! Free-text notes about contacts, most recent first. New entries are
//! inserted at the front rather than sorted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::Stamp;
use crate::entity::{DomainError, DomainResult, EntityId};
use crate::notify::{Notice, Notifier};
use crate::require_text;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: EntityId,
    pub name: String,
    pub notes: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLog {
    contacts: Vec<Contact>,
}

impl ContactLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn add_contact(&self, name: &str, notes: &str, stamp: Stamp, notifier: &dyn Notifier) -> DomainResult<Self> {
        let name = require_text(name, "contact name")?;
        let notes = require_text(notes, "notes")?;

        let mut contacts = Vec::with_capacity(self.contacts.len() + 1);
        contacts.push(Contact { id: stamp.id, name: name.clone(), notes, date: stamp.at });
        contacts.extend(self.contacts.iter().cloned());

        log::debug!("saved notes for {}", name);
        notifier.notify(Notice::success(
            "News saved",
            format!("Notes for {} have been saved successfully.", name),
        ));
        Ok(Self { contacts })
    }

    pub fn delete_contact(&self, id: EntityId, notifier: &dyn Notifier) -> DomainResult<Self> {
        if !self.contacts.iter().any(|c| c.id == id) {
            return Err(DomainError::NotFound(format!("contact {}", id)));
        }
        let contacts = self.contacts.iter().filter(|c| c.id != id).cloned().collect();
        notifier.notify(Notice::info("News deleted", "News item has been removed."));
        Ok(Self { contacts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{RecordingNotifier, Severity};
    use chrono::TimeZone;

    fn stamp(id: u64) -> Stamp {
        Stamp {
            id: EntityId(id),
            at: Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, id as u32).unwrap(),
        }
    }

    #[test]
    fn test_add_contact_prepends() {
        let notifier = RecordingNotifier::default();
        let log = ContactLog::new()
            .add_contact("Sam", "Met at expo", stamp(1), &notifier)
            .and_then(|l| l.add_contact(" Riley ", "  Call back Friday\nre: pricing ", stamp(2), &notifier))
            .unwrap();
        assert_eq!(log.contacts()[0].name, "Riley");
        assert_eq!(log.contacts()[0].notes, "Call back Friday\nre: pricing");
        assert_eq!(log.contacts()[1].name, "Sam");

        let notices = notifier.notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[1].message, "Notes for Riley have been saved successfully.");
    }

    #[test]
    fn test_add_contact_requires_both_fields() {
        let notifier = RecordingNotifier::default();
        let log = ContactLog::new();
        assert!(log.add_contact("Sam", "  ", stamp(1), &notifier).is_err());
        assert!(log.add_contact("", "notes", stamp(1), &notifier).is_err());
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn test_delete_contact() {
        let notifier = RecordingNotifier::default();
        let log = ContactLog::new()
            .add_contact("Sam", "Met at expo", stamp(1), &notifier)
            .and_then(|l| l.add_contact("Riley", "Call back", stamp(2), &notifier))
            .unwrap();

        let next = log.delete_contact(EntityId(1), &notifier).unwrap();
        assert_eq!(next.contacts().len(), 1);
        assert_eq!(next.contacts()[0].name, "Riley");
        assert_eq!(notifier.notices().last().unwrap().severity, Severity::Info);

        assert!(next.delete_contact(EntityId(1), &notifier).is_err());
        assert_eq!(notifier.notices().len(), 3);
    }
}
