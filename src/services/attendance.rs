use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PathError, PathResult};

const MIN_CHECKPOINTS_FOR_ATTENDANCE: u32 = 1;
const MIN_MINUTES_FOR_ATTENDANCE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDay {
    pub date: NaiveDate,
    #[serde(default)]
    pub checkpoints_completed: u32,
    #[serde(default)]
    pub videos_watched: u32,
    /// Minutes.
    #[serde(default)]
    pub total_time_spent: u32,
    #[serde(default)]
    pub courses_accessed: Vec<String>,
    #[serde(default)]
    pub is_marked: bool,
}

impl AttendanceDay {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            checkpoints_completed: 0,
            videos_watched: 0,
            total_time_spent: 0,
            courses_accessed: Vec::new(),
            is_marked: false,
        }
    }

    pub fn meets_criteria(&self) -> bool {
        self.checkpoints_completed >= MIN_CHECKPOINTS_FOR_ATTENDANCE
            || self.total_time_spent >= MIN_MINUTES_FOR_ATTENDANCE
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityReport {
    #[serde(default)]
    pub checkpoints_completed: u32,
    #[serde(default)]
    pub videos_watched: u32,
    #[serde(default)]
    pub time_spent: u32,
    #[serde(default)]
    pub course_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    pub total_days: usize,
    pub marked_days: usize,
    pub attendance_rate: f64,
    pub total_checkpoints: u64,
    pub total_videos: u64,
    pub total_time_spent: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_marked: bool,
    pub checkpoints_completed: u32,
    pub videos_watched: u32,
    pub time_spent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceCalendar {
    pub year: i32,
    pub month: u32,
    pub calendar: Vec<CalendarDay>,
}

/// Adds `activity` to the day's counters. Once marked a day stays marked.
pub fn record_activity(day: &AttendanceDay, activity: &ActivityReport) -> AttendanceDay {
    let mut next = day.clone();
    next.checkpoints_completed = next
        .checkpoints_completed
        .saturating_add(activity.checkpoints_completed);
    next.videos_watched = next.videos_watched.saturating_add(activity.videos_watched);
    next.total_time_spent = next.total_time_spent.saturating_add(activity.time_spent);

    if let Some(course_id) = &activity.course_id {
        if !next.courses_accessed.contains(course_id) {
            next.courses_accessed.push(course_id.clone());
        }
    }

    if next.meets_criteria() {
        next.is_marked = true;
    }
    next
}

pub fn summarize(days: &[AttendanceDay]) -> AttendanceSummary {
    let total_days = days.len();
    let marked_days = days.iter().filter(|d| d.is_marked).count();
    let attendance_rate = if total_days > 0 {
        marked_days as f64 / total_days as f64 * 100.0
    } else {
        0.0
    };

    AttendanceSummary {
        total_days,
        marked_days,
        attendance_rate,
        total_checkpoints: days.iter().map(|d| u64::from(d.checkpoints_completed)).sum(),
        total_videos: days.iter().map(|d| u64::from(d.videos_watched)).sum(),
        total_time_spent: days.iter().map(|d| u64::from(d.total_time_spent)).sum(),
    }
}

fn days_in_month(year: i32, month: u32) -> PathResult<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| PathError::Validation(format!("invalid month {year}-{month}")))?;
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .ok_or_else(|| PathError::Validation(format!("month out of range {year}-{month}")))?;
    Ok(next_first.signed_duration_since(first).num_days() as u32)
}

/// One entry per day of `month` (1-12); days without a record are zeroed.
pub fn month_calendar(
    year: i32,
    month: u32,
    days: &[AttendanceDay],
) -> PathResult<AttendanceCalendar> {
    let length = days_in_month(year, month)?;
    let in_month: Vec<&AttendanceDay> =
        days.iter().filter(|d| is_same_month(d.date, year, month)).collect();

    let calendar = (1..=length)
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .map(|date| {
            let record = in_month.iter().copied().find(|d| d.date == date);
            CalendarDay {
                date,
                is_marked: record.is_some_and(|r| r.is_marked),
                checkpoints_completed: record.map_or(0, |r| r.checkpoints_completed),
                videos_watched: record.map_or(0, |r| r.videos_watched),
                time_spent: record.map_or(0, |r| r.total_time_spent),
            }
        })
        .collect();

    Ok(AttendanceCalendar {
        year,
        month,
        calendar,
    })
}

pub fn is_same_month(date: NaiveDate, year: i32, month: u32) -> bool {
    date.year() == year && date.month() == month
}
