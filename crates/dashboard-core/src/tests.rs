//! Dashboard Scenario Tests
//!
//! End-to-end flows across the seeded widgets.

#[cfg(test)]
mod tests {
    use crate::notify::{RecordingNotifier, Severity};
    use crate::{
        Clock, ContactLog, DashboardConfig, EntityId, FixedClock, IdGenerator, RecipientLog, WeekRecord,
    };
    use chrono::{TimeZone, Utc};

    fn setup() -> (DashboardConfig, IdGenerator, FixedClock) {
        let config = DashboardConfig::default();
        let ids = IdGenerator::starting_after(config.build_board().max_id());
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 7, 4, 15, 0, 0).unwrap());
        (config, ids, clock)
    }

    #[test]
    fn test_weekly_counter_clamps_after_seven_increments() {
        let (config, _, _) = setup();
        let mut weekly = config.build_weekly();
        assert_eq!(weekly.current, 3);
        for _ in 0..7 {
            weekly = weekly.increment();
        }
        assert_eq!(weekly.current, 10);
        weekly = weekly.increment();
        assert_eq!(weekly.current, 10);
    }

    #[test]
    fn test_weekly_reset_appends_after_seed_history() {
        let (config, _, clock) = setup();
        let weekly = config.build_weekly().increment();
        let reset = weekly.reset_week(&clock.now());
        assert_eq!(reset.current, 0);
        assert_eq!(reset.history.len(), 4);
        // July 4th is day 184 of 2025
        assert_eq!(reset.history[3], WeekRecord { week_number: 27, completed: 4 });
    }

    #[test]
    fn test_empty_contact_name_rejected() {
        let (_, ids, clock) = setup();
        let notifier = RecordingNotifier::default();
        let log = ContactLog::new();
        let result = log.add_contact("", "some notes", ids.stamp(&clock), &notifier);
        assert!(result.is_err());
        assert!(log.is_empty());
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn test_grant_favour_to_jordan() {
        let (config, ids, clock) = setup();
        let notifier = RecordingNotifier::default();
        let outreach = config.build_progress();
        assert_eq!((outreach.current, outreach.target.get()), (12, 30));

        let next = outreach.grant("Jordan", ids.stamp(&clock), &notifier).unwrap();
        assert_eq!(next.current, 13);
        assert_eq!(next.favours[0].recipient_name, "Jordan");
        assert_eq!(next.favours[0].date, clock.now());

        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].severity, Severity::Success);
        assert!(notices[0].message.contains("Jordan"));

        let view = RecipientLog::default().render(&next.favours, false);
        assert_eq!(view.entries.len(), 1);
        assert!(!view.has_more);
    }

    #[test]
    fn test_runtime_ids_never_collide_with_seed() {
        let (config, ids, _) = setup();
        let board = config.build_board();
        // A clock reading of zero still yields ids above the seeded ones
        let id = ids.next_id(0);
        assert!(id.get() > board.max_id());
        let next = board.add_task(EntityId(1), "Book venue", id).unwrap();
        let ids_in_column: Vec<_> = next.member(EntityId(1)).unwrap().tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids_in_column, vec![EntityId(1), EntityId(2), id]);
    }

    #[test]
    fn test_board_workflow() {
        let (config, ids, clock) = setup();
        let board = config.build_board();
        let task = ids.stamp(&clock).id;
        let next = board
            .add_task(EntityId(3), "Draft newsletter", task)
            .and_then(|b| b.toggle_completion(EntityId(3), task))
            .and_then(|b| b.move_task(task, EntityId(4), 0))
            .and_then(|b| b.rename_member(EntityId(4), "Diana M."))
            .unwrap();

        let charlie = next.member(EntityId(3)).unwrap();
        assert_eq!(charlie.tally(), (0, 1));
        let diana = next.member(EntityId(4)).unwrap();
        assert_eq!(diana.name, "Diana M.");
        assert_eq!(diana.tasks[0].title, "Draft newsletter");
        assert_eq!(diana.tally(), (1, 2));

        // Blank rename keeps the whole board as it was
        assert!(next.rename_member(EntityId(4), " ").is_err());
    }
}
