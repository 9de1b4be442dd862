//! Recurrence computation.
//!
//! Pure calendar arithmetic over a reminder's repeat policy: whether it is
//! due at a given instant, the successor occurrence after a firing, and
//! the seed occurrence at creation time. No IO, no clock access; callers
//! supply `now`.
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveDate, NaiveTime};
//! use remind_core::recurrence::first_occurrence;
//! use remind_types::RepeatPolicy;
//!
//! let now = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap() // a Monday
//!     .and_hms_opt(9, 0, 0).unwrap();
//! let at = NaiveTime::from_hms_opt(8, 30, 0).unwrap();
//!
//! // 08:30 already passed today, so a daily reminder seeds tomorrow.
//! let first = first_occurrence(None, at, RepeatPolicy::Daily, now);
//! assert_eq!(first.date(), NaiveDate::from_ymd_opt(2026, 3, 3).unwrap());
//! ```

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use remind_types::{Reminder, RepeatPolicy};

/// Whether a reminder should fire at `now`.
///
/// True iff the reminder is active and its next occurrence has been
/// reached. Retired reminders are never due, for any `now`.
pub fn is_due(reminder: &Reminder, now: NaiveDateTime) -> bool {
    reminder.active && reminder.next_occurrence <= now
}

/// Compute the reminder's state after it fired at `fired_at`.
///
/// A one-time reminder is retired (`active = false`, occurrence left
/// inert). A repeating reminder gets its successor occurrence, computed
/// from the date the firing was *observed*, rolled forward until strictly
/// after `fired_at`. Advancing from the observed date rather than the
/// stored occurrence means a long-overdue reminder fires once and resumes
/// its cadence, instead of burning through every missed occurrence.
pub fn advance(reminder: &Reminder, fired_at: NaiveDateTime) -> Reminder {
    let mut next = reminder.clone();
    match reminder.repeat {
        RepeatPolicy::None => {
            next.active = false;
        }
        policy => {
            next.next_occurrence = successor(fired_at.date(), reminder.trigger_time, policy);
        }
    }
    next
}

/// Seed occurrence for a reminder created at `now`.
///
/// With an explicit `date` the occurrence is taken literally, even in the
/// past: an intentionally backdated one-time reminder is immediately due.
/// Without one, the first candidate is the nearest date the policy allows
/// (today for daily/interval policies, the next matching day for weekly
/// and weekday policies); if that instant has already passed, it rolls
/// forward by the policy's unit so a reminder is never created already
/// overdue by accident. A one-time reminder whose time-of-day has passed
/// seeds tomorrow.
pub fn first_occurrence(
    date: Option<NaiveDate>,
    trigger_time: NaiveTime,
    policy: RepeatPolicy,
    now: NaiveDateTime,
) -> NaiveDateTime {
    if let Some(date) = date {
        return date.and_time(trigger_time);
    }

    let today = now.date();
    let candidate = match policy {
        RepeatPolicy::Weekly { weekday } => on_or_after(today, weekday),
        RepeatPolicy::Weekdays => working_day_on_or_after(today),
        RepeatPolicy::None | RepeatPolicy::Daily | RepeatPolicy::Every { .. } => today,
    }
    .and_time(trigger_time);

    if candidate > now {
        candidate
    } else {
        // Same-day instant already passed: one policy unit forward. A
        // one-time reminder rolls to tomorrow, matching the daily step.
        let effective = match policy {
            RepeatPolicy::None => RepeatPolicy::Daily,
            other => other,
        };
        successor(candidate.date(), trigger_time, effective)
    }
}

/// Next occurrence strictly after a firing on `fired_on`.
fn successor(fired_on: NaiveDate, trigger_time: NaiveTime, policy: RepeatPolicy) -> NaiveDateTime {
    let date = match policy {
        // One-time reminders are retired by `advance` and never reach here;
        // treat the occurrence as inert.
        RepeatPolicy::None => fired_on,
        RepeatPolicy::Daily => fired_on + Duration::days(1),
        RepeatPolicy::Weekly { weekday } => on_or_after(fired_on + Duration::days(1), weekday),
        RepeatPolicy::Weekdays => working_day_on_or_after(fired_on + Duration::days(1)),
        RepeatPolicy::Every { days } => fired_on + Duration::days(i64::from(days.max(1))),
    };
    date.and_time(trigger_time)
}

fn on_or_after(start: NaiveDate, weekday: Weekday) -> NaiveDate {
    let mut date = start;
    while date.weekday() != weekday {
        date += Duration::days(1);
    }
    date
}

fn working_day_on_or_after(start: NaiveDate) -> NaiveDate {
    let mut date = start;
    while matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        date += Duration::days(1);
    }
    date
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use uuid::Uuid;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn reminder(repeat: RepeatPolicy, next: NaiveDateTime) -> Reminder {
        Reminder {
            id: Uuid::new_v4(),
            title: "test".to_string(),
            description: String::new(),
            trigger_time: next.time(),
            repeat,
            next_occurrence: next,
            important: false,
            sound: None,
            sound_secs: None,
            active: true,
            created_at: next,
        }
    }

    // --- is_due ---

    #[test]
    fn test_due_at_and_after_occurrence() {
        let occurrence = ymd(2026, 3, 2).and_time(hm(14, 0));
        let r = reminder(RepeatPolicy::None, occurrence);

        assert!(!is_due(&r, ymd(2026, 3, 2).and_time(hm(13, 59))));
        assert!(is_due(&r, occurrence));
        assert!(is_due(&r, ymd(2026, 3, 2).and_time(hm(14, 1))));
        assert!(is_due(&r, ymd(2026, 4, 1).and_time(hm(0, 0))));
    }

    #[test]
    fn test_inactive_never_due() {
        let occurrence = ymd(2026, 3, 2).and_time(hm(14, 0));
        let mut r = reminder(RepeatPolicy::Daily, occurrence);
        r.active = false;

        assert!(!is_due(&r, occurrence));
        assert!(!is_due(&r, ymd(2030, 1, 1).and_time(hm(0, 0))));
    }

    // --- advance ---

    #[test]
    fn test_advance_one_time_retires() {
        let occurrence = ymd(2026, 3, 2).and_time(hm(14, 0));
        let r = reminder(RepeatPolicy::None, occurrence);

        let advanced = advance(&r, ymd(2026, 3, 2).and_time(hm(14, 1)));
        assert!(!advanced.active);
        // Occurrence stays inert for display.
        assert_eq!(advanced.next_occurrence, occurrence);
        assert!(!is_due(&advanced, ymd(2026, 3, 3).and_time(hm(14, 1))));
    }

    #[test]
    fn test_advance_daily_next_day_same_time() {
        let occurrence = ymd(2026, 3, 2).and_time(hm(8, 0));
        let r = reminder(RepeatPolicy::Daily, occurrence);

        let advanced = advance(&r, occurrence);
        assert_eq!(advanced.next_occurrence, ymd(2026, 3, 3).and_time(hm(8, 0)));
        assert!(advanced.active);

        // Firing again the next day advances another day.
        let again = advance(&advanced, advanced.next_occurrence);
        assert_eq!(again.next_occurrence, ymd(2026, 3, 4).and_time(hm(8, 0)));
    }

    #[test]
    fn test_advance_weekly_jumps_exactly_seven_days() {
        // 2026-03-02 is a Monday.
        let occurrence = ymd(2026, 3, 2).and_time(hm(10, 0));
        let r = reminder(
            RepeatPolicy::Weekly {
                weekday: Weekday::Mon,
            },
            occurrence,
        );

        let advanced = advance(&r, occurrence);
        assert_eq!(
            advanced.next_occurrence,
            ymd(2026, 3, 9).and_time(hm(10, 0))
        );
        assert_eq!(advanced.next_occurrence.weekday(), Weekday::Mon);
        assert_eq!(advanced.next_occurrence - occurrence, Duration::days(7));
    }

    #[test]
    fn test_advance_weekdays_skips_weekend() {
        // 2026-03-06 is a Friday.
        let friday = ymd(2026, 3, 6).and_time(hm(9, 0));
        let r = reminder(RepeatPolicy::Weekdays, friday);

        let advanced = advance(&r, friday);
        assert_eq!(advanced.next_occurrence, ymd(2026, 3, 9).and_time(hm(9, 0)));
        assert_eq!(advanced.next_occurrence.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_advance_weekdays_midweek_is_next_day() {
        // 2026-03-03 is a Tuesday.
        let tuesday = ymd(2026, 3, 3).and_time(hm(9, 0));
        let advanced = advance(&reminder(RepeatPolicy::Weekdays, tuesday), tuesday);
        assert_eq!(advanced.next_occurrence, ymd(2026, 3, 4).and_time(hm(9, 0)));
    }

    #[test]
    fn test_advance_custom_interval() {
        let occurrence = ymd(2026, 3, 2).and_time(hm(20, 0));
        let r = reminder(RepeatPolicy::Every { days: 10 }, occurrence);

        let advanced = advance(&r, occurrence);
        assert_eq!(
            advanced.next_occurrence,
            ymd(2026, 3, 12).and_time(hm(20, 0))
        );
    }

    #[test]
    fn test_advance_overdue_fires_once_and_resumes_cadence() {
        // Scheduled for the 2nd, machine was asleep, observed on the 5th.
        let r = reminder(RepeatPolicy::Daily, ymd(2026, 3, 2).and_time(hm(8, 0)));
        let observed = ymd(2026, 3, 5).and_time(hm(8, 30));

        let advanced = advance(&r, observed);
        // Next occurrence is from the observed date, not the stale one, so
        // the missed 3rd and 4th are skipped rather than replayed.
        assert_eq!(advanced.next_occurrence, ymd(2026, 3, 6).and_time(hm(8, 0)));
        assert!(!is_due(&advanced, observed));
    }

    // --- first_occurrence ---

    #[test]
    fn test_first_occurrence_today_when_still_ahead() {
        let now = ymd(2026, 3, 2).and_time(hm(9, 0));
        let first = first_occurrence(None, hm(14, 0), RepeatPolicy::None, now);
        assert_eq!(first, ymd(2026, 3, 2).and_time(hm(14, 0)));
    }

    #[test]
    fn test_first_occurrence_one_time_rolls_to_tomorrow() {
        let now = ymd(2026, 3, 2).and_time(hm(15, 0));
        let first = first_occurrence(None, hm(14, 0), RepeatPolicy::None, now);
        assert_eq!(first, ymd(2026, 3, 3).and_time(hm(14, 0)));
    }

    #[test]
    fn test_first_occurrence_exact_now_rolls_forward() {
        // "In the past" includes the current instant: creation at exactly
        // the trigger time schedules the next unit, not an immediate fire.
        let now = ymd(2026, 3, 2).and_time(hm(14, 0));
        let first = first_occurrence(None, hm(14, 0), RepeatPolicy::Daily, now);
        assert_eq!(first, ymd(2026, 3, 3).and_time(hm(14, 0)));
    }

    #[test]
    fn test_first_occurrence_explicit_past_date_is_honored() {
        let now = ymd(2026, 3, 2).and_time(hm(9, 0));
        let first = first_occurrence(
            Some(ymd(2026, 3, 1)),
            hm(14, 0),
            RepeatPolicy::None,
            now,
        );
        assert_eq!(first, ymd(2026, 3, 1).and_time(hm(14, 0)));
        assert!(first < now);
    }

    #[test]
    fn test_first_occurrence_weekly_lands_on_weekday() {
        // Created Monday morning for a Wednesday reminder.
        let now = ymd(2026, 3, 2).and_time(hm(9, 0));
        let first = first_occurrence(
            None,
            hm(8, 0),
            RepeatPolicy::Weekly {
                weekday: Weekday::Wed,
            },
            now,
        );
        assert_eq!(first, ymd(2026, 3, 4).and_time(hm(8, 0)));
    }

    #[test]
    fn test_first_occurrence_weekly_same_day_past_time_is_next_week() {
        // Created Monday 09:00 for a Monday 08:00 reminder.
        let now = ymd(2026, 3, 2).and_time(hm(9, 0));
        let first = first_occurrence(
            None,
            hm(8, 0),
            RepeatPolicy::Weekly {
                weekday: Weekday::Mon,
            },
            now,
        );
        assert_eq!(first, ymd(2026, 3, 9).and_time(hm(8, 0)));
    }

    #[test]
    fn test_first_occurrence_weekdays_on_saturday_is_monday() {
        // 2026-03-07 is a Saturday.
        let now = ymd(2026, 3, 7).and_time(hm(9, 0));
        let first = first_occurrence(None, hm(8, 0), RepeatPolicy::Weekdays, now);
        assert_eq!(first, ymd(2026, 3, 9).and_time(hm(8, 0)));
    }

    #[test]
    fn test_first_occurrence_interval_rolls_by_interval() {
        let now = ymd(2026, 3, 2).and_time(hm(15, 0));
        let first = first_occurrence(None, hm(14, 0), RepeatPolicy::Every { days: 5 }, now);
        assert_eq!(first, ymd(2026, 3, 7).and_time(hm(14, 0)));
    }

    // --- properties ---

    fn arb_policy() -> impl Strategy<Value = RepeatPolicy> {
        prop_oneof![
            Just(RepeatPolicy::Daily),
            Just(RepeatPolicy::Weekdays),
            (0u8..7).prop_map(|d| {
                let weekday = match d {
                    0 => Weekday::Mon,
                    1 => Weekday::Tue,
                    2 => Weekday::Wed,
                    3 => Weekday::Thu,
                    4 => Weekday::Fri,
                    5 => Weekday::Sat,
                    _ => Weekday::Sun,
                };
                RepeatPolicy::Weekly { weekday }
            }),
            (1u32..=90).prop_map(|days| RepeatPolicy::Every { days }),
        ]
    }

    proptest! {
        #[test]
        fn successor_is_strictly_after_firing(
            day_offset in 0i64..3650,
            hour in 0u32..24,
            minute in 0u32..60,
            fired_hour in 0u32..24,
            fired_minute in 0u32..60,
            policy in arb_policy(),
        ) {
            let base = ymd(2024, 1, 1) + Duration::days(day_offset);
            let trigger_time = hm(hour, minute);
            let fired_at = base.and_time(hm(fired_hour, fired_minute));

            let r = reminder(policy, base.and_time(trigger_time));
            let advanced = advance(&r, fired_at);

            // Never scheduled into the past, and never re-due at the
            // instant it just fired.
            prop_assert!(advanced.next_occurrence > fired_at);
            prop_assert_eq!(advanced.next_occurrence.time(), trigger_time);
            prop_assert!(advanced.active);

            match policy {
                RepeatPolicy::Weekly { weekday } => {
                    prop_assert_eq!(advanced.next_occurrence.weekday(), weekday);
                }
                RepeatPolicy::Weekdays => {
                    let day = advanced.next_occurrence.weekday();
                    prop_assert!(day != Weekday::Sat && day != Weekday::Sun);
                }
                _ => {}
            }
        }

        #[test]
        fn seed_without_explicit_date_is_in_the_future(
            day_offset in 0i64..3650,
            now_hour in 0u32..24,
            now_minute in 0u32..60,
            hour in 0u32..24,
            minute in 0u32..60,
            policy in arb_policy(),
        ) {
            let now = (ymd(2024, 1, 1) + Duration::days(day_offset))
                .and_time(hm(now_hour, now_minute));
            let first = first_occurrence(None, hm(hour, minute), policy, now);
            prop_assert!(first > now);
        }
    }
}
