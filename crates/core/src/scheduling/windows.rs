//! Materialization of weekly rules into absolute availability windows
//!
//! A rule's wall-clock times are interpreted in the practitioner's timezone
//! on one specific calendar date, then converted to UTC. Each boundary is
//! resolved independently, so a daylight-saving transition between a rule's
//! start and end changes the window's absolute length rather than shifting
//! it wholesale.
//!
//! Resolution policy for transition days:
//! - ambiguous wall-clock times (clocks rolled back) take the earlier instant
//! - nonexistent wall-clock times (clocks sprang forward) move forward to the
//!   first instant that exists
//! - a window lying entirely inside a spring-forward gap collapses and yields
//!   no interval for that date

use bookline_domain::constants::DST_GAP_SCAN_LIMIT_MINUTES;
use bookline_domain::{AvailabilityRule, BooklineError, Result, TimeSlot, Weekday};
use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Resolve a local wall-clock timestamp to an absolute instant
fn resolve_local(naive: NaiveDateTime, tz: Tz) -> Result<DateTime<Utc>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(instant) => Ok(instant.with_timezone(&Utc)),
        LocalResult::Ambiguous(earlier, _) => Ok(earlier.with_timezone(&Utc)),
        LocalResult::None => {
            // Inside a spring-forward gap. Scan forward for the first minute
            // that exists; bounded so a pathological zone cannot loop.
            let mut probe = naive;
            for _ in 0..DST_GAP_SCAN_LIMIT_MINUTES {
                probe += Duration::minutes(1);
                match tz.from_local_datetime(&probe) {
                    LocalResult::Single(instant) => return Ok(instant.with_timezone(&Utc)),
                    LocalResult::Ambiguous(earlier, _) => {
                        return Ok(earlier.with_timezone(&Utc));
                    }
                    LocalResult::None => {}
                }
            }
            Err(BooklineError::Config(format!(
                "wall-clock time {naive} cannot be resolved in timezone {tz}"
            )))
        }
    }
}

/// Build the absolute interval of one rule anchored to one date
///
/// The date's weekday must match the rule's weekday; selecting matching
/// rules is the caller's job (see [`windows_on`]).
///
/// Returns `Ok(None)` when the rule's whole window falls inside a
/// spring-forward gap and no interval exists on that date.
///
/// # Errors
/// Returns `Config` if a boundary cannot be resolved to any instant.
pub fn rule_slot_on(rule: &AvailabilityRule, date: NaiveDate, tz: Tz) -> Result<Option<TimeSlot>> {
    debug_assert_eq!(
        Weekday::from(date.weekday()),
        rule.day_of_week,
        "date must fall on the rule's weekday"
    );

    let start = resolve_local(date.and_time(rule.start.as_naive_time()), tz)?;
    let end = resolve_local(date.and_time(rule.end.as_naive_time()), tz)?;

    if start >= end {
        return Ok(None);
    }
    Ok(Some(TimeSlot { start, end }))
}

/// Materialize all availability windows for one calendar date
///
/// Selects the rules recurring on the date's weekday and anchors each to the
/// date. Zero matching rules means unavailable all day, not an error. The
/// returned intervals are in rule order; callers must treat them as a set.
///
/// # Errors
/// Returns `Config` if any matching rule cannot be resolved.
pub fn windows_on(rules: &[AvailabilityRule], date: NaiveDate, tz: Tz) -> Result<Vec<TimeSlot>> {
    let weekday = Weekday::from(date.weekday());

    let mut windows = Vec::new();
    for rule in rules.iter().filter(|rule| rule.day_of_week == weekday) {
        if let Some(slot) = rule_slot_on(rule, date, tz)? {
            windows.push(slot);
        }
    }
    Ok(windows)
}

#[cfg(test)]
mod tests {
    use bookline_domain::TimeOfDay;
    use chrono_tz::America::Chicago;
    use chrono_tz::Europe::Madrid;
    use chrono_tz::UTC;

    use super::*;

    fn rule(day: Weekday, start: (u8, u8), end: (u8, u8)) -> AvailabilityRule {
        AvailabilityRule::new(
            day,
            TimeOfDay::new(start.0, start.1).unwrap(),
            TimeOfDay::new(end.0, end.1).unwrap(),
        )
        .unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_plain_day_in_utc() {
        // 2025-03-10 is a Monday
        let slot = rule_slot_on(&rule(Weekday::Monday, (9, 0), (17, 0)), date(2025, 3, 10), UTC)
            .unwrap()
            .unwrap();

        assert_eq!(slot.start, utc(2025, 3, 10, 9, 0));
        assert_eq!(slot.end, utc(2025, 3, 10, 17, 0));
    }

    #[test]
    fn test_fixed_offset_day() {
        // Mid-winter Chicago is CST (UTC-6) all day
        let slot = rule_slot_on(&rule(Weekday::Monday, (9, 0), (17, 0)), date(2025, 1, 13), Chicago)
            .unwrap()
            .unwrap();

        assert_eq!(slot.start, utc(2025, 1, 13, 15, 0));
        assert_eq!(slot.end, utc(2025, 1, 13, 23, 0));
    }

    #[test]
    fn test_spring_forward_boundaries_resolve_independently() {
        // Chicago springs forward 2025-03-09 (Sunday): 02:00 CST jumps to
        // 03:00 CDT. A 01:00-04:00 rule keeps its CST start and gets a CDT
        // end, two absolute hours apart.
        let slot = rule_slot_on(&rule(Weekday::Sunday, (1, 0), (4, 0)), date(2025, 3, 9), Chicago)
            .unwrap()
            .unwrap();

        assert_eq!(slot.start, utc(2025, 3, 9, 7, 0)); // 01:00 CST
        assert_eq!(slot.end, utc(2025, 3, 9, 9, 0)); // 04:00 CDT
        assert_eq!(slot.duration(), Duration::hours(2));
    }

    #[test]
    fn test_spring_forward_in_madrid() {
        // Madrid springs forward 2025-03-30 (Sunday): 02:00 CET jumps to
        // 03:00 CEST. A fixed CET offset would put the end at 04:00 UTC.
        let slot = rule_slot_on(&rule(Weekday::Sunday, (1, 0), (5, 0)), date(2025, 3, 30), Madrid)
            .unwrap()
            .unwrap();

        assert_eq!(slot.start, utc(2025, 3, 30, 0, 0)); // 01:00 CET
        assert_eq!(slot.end, utc(2025, 3, 30, 3, 0)); // 05:00 CEST
    }

    #[test]
    fn test_start_inside_gap_moves_forward() {
        // 02:30 does not exist on the transition date; the window starts at
        // the first existing instant instead.
        let slot = rule_slot_on(&rule(Weekday::Sunday, (2, 30), (3, 30)), date(2025, 3, 9), Chicago)
            .unwrap()
            .unwrap();

        assert_eq!(slot.start, utc(2025, 3, 9, 8, 0)); // 03:00 CDT
        assert_eq!(slot.end, utc(2025, 3, 9, 8, 30));
    }

    #[test]
    fn test_window_entirely_inside_gap_collapses() {
        let collapsed =
            rule_slot_on(&rule(Weekday::Sunday, (2, 0), (3, 0)), date(2025, 3, 9), Chicago)
                .unwrap();
        assert!(collapsed.is_none());
    }

    #[test]
    fn test_fall_back_takes_earlier_instant() {
        // Chicago falls back 2025-11-02 (Sunday): 01:00-02:00 happens twice.
        // The ambiguous start resolves to its first occurrence (CDT), so the
        // window spans both passes of the repeated hour.
        let slot = rule_slot_on(&rule(Weekday::Sunday, (1, 0), (2, 0)), date(2025, 11, 2), Chicago)
            .unwrap()
            .unwrap();

        assert_eq!(slot.start, utc(2025, 11, 2, 6, 0)); // 01:00 CDT
        assert_eq!(slot.end, utc(2025, 11, 2, 8, 0)); // 02:00 CST
        assert_eq!(slot.duration(), Duration::hours(2));
    }

    #[test]
    fn test_windows_on_selects_matching_weekday() {
        let rules = vec![
            rule(Weekday::Monday, (9, 0), (12, 0)),
            rule(Weekday::Tuesday, (9, 0), (12, 0)),
            rule(Weekday::Monday, (14, 0), (17, 0)),
        ];

        let monday = windows_on(&rules, date(2025, 3, 10), UTC).unwrap();
        assert_eq!(monday.len(), 2);
        assert_eq!(monday[0].start, utc(2025, 3, 10, 9, 0));
        assert_eq!(monday[1].start, utc(2025, 3, 10, 14, 0));

        let wednesday = windows_on(&rules, date(2025, 3, 12), UTC).unwrap();
        assert!(wednesday.is_empty());
    }

    #[test]
    fn test_windows_on_drops_collapsed_windows() {
        let rules = vec![
            rule(Weekday::Sunday, (2, 0), (3, 0)),
            rule(Weekday::Sunday, (9, 0), (12, 0)),
        ];

        let windows = windows_on(&rules, date(2025, 3, 9), Chicago).unwrap();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].start, utc(2025, 3, 9, 14, 0)); // 09:00 CDT
    }
}
