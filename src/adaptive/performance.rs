use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::config::{PathLimits, PerformanceThresholds};
use super::pacing::pace_for_performance;
use super::types::{AnswerRecord, Pace, PerformanceLevel, ProgressRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSnapshot {
    pub performance_level: PerformanceLevel,
    pub recommended_pace: Pace,
    pub weak_areas: Vec<String>,
    /// Percentage in `0..=100`.
    pub success_rate: f64,
    pub average_time_seconds: f64,
    pub sample_size: usize,
}

impl PerformanceSnapshot {
    /// Copy of `record` carrying the new classification; the caller persists it.
    pub fn apply_to(&self, record: &ProgressRecord) -> ProgressRecord {
        ProgressRecord {
            performance_level: self.performance_level,
            recommended_pace: self.recommended_pace,
            weak_areas: self.weak_areas.clone(),
            ..record.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PerformanceUpdate {
    Unchanged,
    Updated(PerformanceSnapshot),
}

impl PerformanceUpdate {
    pub fn snapshot(&self) -> Option<&PerformanceSnapshot> {
        match self {
            Self::Updated(snapshot) => Some(snapshot),
            Self::Unchanged => None,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

pub fn classify_performance(
    success_rate: f64,
    average_time_seconds: f64,
    thresholds: &PerformanceThresholds,
) -> PerformanceLevel {
    if success_rate >= thresholds.excellent_min_success_rate
        && average_time_seconds < thresholds.excellent_max_avg_time_secs
    {
        PerformanceLevel::Excellent
    } else if success_rate < thresholds.struggling_max_success_rate
        || average_time_seconds > thresholds.struggling_min_avg_time_secs
    {
        PerformanceLevel::Struggling
    } else {
        PerformanceLevel::Average
    }
}

/// Question ids missed at least `min_misses` times, in first-seen order.
pub fn identify_weak_areas(
    answers: &[AnswerRecord],
    min_misses: usize,
    limit: usize,
) -> Vec<String> {
    let mut misses: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for answer in answers.iter().filter(|a| !a.is_correct) {
        let count = misses.entry(answer.question_id.as_str()).or_insert(0);
        if *count == 0 {
            first_seen.push(answer.question_id.as_str());
        }
        *count += 1;
    }

    first_seen
        .into_iter()
        .filter(|id| misses.get(id).copied().unwrap_or(0) >= min_misses)
        .take(limit)
        .map(String::from)
        .collect()
}

/// Classifies the newest `limits.answer_window` answers (input is newest-first).
pub fn analyze_performance(
    recent_answers: &[AnswerRecord],
    thresholds: &PerformanceThresholds,
    limits: &PathLimits,
) -> PerformanceUpdate {
    let window_size = limits.clamped().answer_window;
    let window = &recent_answers[..recent_answers.len().min(window_size)];
    if window.is_empty() {
        return PerformanceUpdate::Unchanged;
    }

    let total = window.len() as f64;
    let correct = window.iter().filter(|a| a.is_correct).count() as f64;
    let success_rate = correct / total * 100.0;
    let average_time_seconds = window.iter().map(|a| a.time_spent_seconds).sum::<f64>() / total;

    let performance_level = classify_performance(success_rate, average_time_seconds, thresholds);

    PerformanceUpdate::Updated(PerformanceSnapshot {
        performance_level,
        recommended_pace: pace_for_performance(performance_level),
        weak_areas: identify_weak_areas(window, thresholds.weak_area_min_misses, limits.weak_areas),
        success_rate,
        average_time_seconds,
        sample_size: window.len(),
    })
}
