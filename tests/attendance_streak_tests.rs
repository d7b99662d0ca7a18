use chrono::{Duration, NaiveDate};

use learnpath_engine::services::attendance::{self, ActivityReport, AttendanceDay};
use learnpath_engine::services::streak::{self, StreakState, StreakTransition};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
}

/// Marks the day the way the request layer does: accumulate, then advance the
/// streak only when the day counts as attended.
fn attend(
    days: &mut Vec<AttendanceDay>,
    state: &mut StreakState,
    date: NaiveDate,
    minutes: u32,
) -> bool {
    let found = days.iter().position(|d| d.date == date);
    let existing = match found {
        Some(index) => index,
        None => {
            days.push(AttendanceDay::new(date));
            days.len() - 1
        }
    };
    let report = ActivityReport {
        time_spent: minutes,
        videos_watched: 1,
        course_id: Some("course-1".to_string()),
        ..Default::default()
    };
    days[existing] = attendance::record_activity(&days[existing], &report);

    if days[existing].is_marked {
        *state = streak::register_activity(state, date).state;
    }
    days[existing].is_marked
}

#[test]
fn integration_week_of_study() {
    let mut days = Vec::new();
    let mut state = StreakState::default();

    for offset in 0..4 {
        assert!(attend(&mut days, &mut state, start() + Duration::days(offset), 15));
    }
    assert_eq!(state.current_streak, 4);

    // short session does not count and leaves the streak alone
    assert!(!attend(&mut days, &mut state, start() + Duration::days(4), 5));
    assert_eq!(state.current_streak, 4);

    assert!(attend(&mut days, &mut state, start() + Duration::days(6), 30));
    assert_eq!(state.current_streak, 1);
    assert_eq!(state.longest_streak, 4);
    assert_eq!(state.total_active_days, 5);
    assert_eq!(state.streak_history.len(), 1);
    assert_eq!(state.streak_history[0].length, 4);

    let summary = attendance::summarize(&days);
    assert_eq!(summary.total_days, 6);
    assert_eq!(summary.marked_days, 5);
    assert_eq!(summary.total_videos, 6);
    assert_eq!(summary.total_time_spent, 95);

    let calendar = attendance::month_calendar(2024, 4, &days).unwrap();
    assert_eq!(calendar.calendar.len(), 30);
    let marked: Vec<u32> = calendar
        .calendar
        .iter()
        .filter(|d| d.is_marked)
        .map(|d| chrono::Datelike::day(&d.date))
        .collect();
    assert_eq!(marked, vec![1, 2, 3, 4, 7]);
}

#[test]
fn integration_repeat_visit_same_day() {
    let mut days = Vec::new();
    let mut state = StreakState::default();
    assert!(attend(&mut days, &mut state, start(), 12));
    let change = streak::register_activity(&state, start());
    assert_eq!(change.transition, StreakTransition::SameDay);
    assert!(attend(&mut days, &mut state, start(), 3));
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].total_time_spent, 15);
    assert_eq!(state.current_streak, 1);
}
