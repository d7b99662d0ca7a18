use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::adaptive::types::{ProgressRecord, ProgressStatus, VideoProgress};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoProgressUpdate {
    pub video: String,
    /// Seconds; `None` or zero keeps the stored value.
    #[serde(default)]
    pub watched_duration: Option<u32>,
    #[serde(default)]
    pub completed: bool,
}

/// Totals across every course a learner is enrolled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_courses_enrolled: usize,
    pub courses_in_progress: usize,
    pub courses_completed: usize,
    pub average_progress: f64,
    pub total_checkpoints_completed: u64,
    /// Minutes.
    pub total_time_spent: u64,
}

/// Percentage of tracked videos that are completed; 0 when nothing is tracked.
pub fn recompute_overall_progress(videos: &[VideoProgress]) -> f64 {
    if videos.is_empty() {
        return 0.0;
    }
    let completed = videos.iter().filter(|v| v.completed).count() as f64;
    completed / videos.len() as f64 * 100.0
}

pub fn course_status_for(overall_progress: f64, current: ProgressStatus) -> ProgressStatus {
    if overall_progress >= 100.0 {
        ProgressStatus::Completed
    } else if overall_progress > 0.0 {
        ProgressStatus::InProgress
    } else {
        current
    }
}

/// Returns the record with `update` applied and the course rollup refreshed.
///
/// `total_duration` and `total_checkpoints` describe the video and are only
/// used when the record has no entry for it yet.
pub fn record_video_progress(
    progress: &ProgressRecord,
    update: &VideoProgressUpdate,
    total_duration: u32,
    total_checkpoints: u32,
    now: DateTime<Utc>,
) -> ProgressRecord {
    let mut next = progress.clone();
    let watched = update.watched_duration.filter(|secs| *secs > 0);

    match next.videos_progress.iter_mut().find(|v| v.video == update.video) {
        Some(entry) => {
            if let Some(secs) = watched {
                entry.watched_duration = secs;
            }
            entry.last_watched_at = Some(now);
            if update.completed {
                entry.completed = true;
            }
        }
        None => next.videos_progress.push(VideoProgress {
            video: update.video.clone(),
            watched_duration: watched.unwrap_or(0),
            total_duration,
            completed: update.completed,
            checkpoints_completed: 0,
            total_checkpoints,
            last_watched_at: Some(now),
        }),
    }

    next.last_activity_date = Some(now);
    next.overall_progress = recompute_overall_progress(&next.videos_progress);
    next.status = course_status_for(next.overall_progress, next.status);

    tracing::debug!(
        video = %update.video,
        overall_progress = next.overall_progress,
        status = next.status.as_str(),
        "video progress recorded"
    );

    next
}

pub fn summarize_dashboard(records: &[ProgressRecord]) -> DashboardStats {
    let count_status =
        |status: ProgressStatus| records.iter().filter(|r| r.status == status).count();
    let average_progress = if records.is_empty() {
        0.0
    } else {
        records.iter().map(|r| r.overall_progress).sum::<f64>() / records.len() as f64
    };

    DashboardStats {
        total_courses_enrolled: records.len(),
        courses_in_progress: count_status(ProgressStatus::InProgress),
        courses_completed: count_status(ProgressStatus::Completed),
        average_progress,
        total_checkpoints_completed: records
            .iter()
            .map(|r| u64::from(r.total_checkpoints_completed))
            .sum(),
        total_time_spent: records.iter().map(|r| u64::from(r.total_time_spent)).sum(),
    }
}
