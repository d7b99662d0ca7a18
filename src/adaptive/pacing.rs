use super::config::PaceMultipliers;
use super::types::{LearnerBackground, Pace, PerformanceLevel};

/// Observed performance outranks the declared background.
pub fn determine_recommended_pace(
    background: LearnerBackground,
    performance_level: PerformanceLevel,
) -> Pace {
    match (performance_level, background) {
        (PerformanceLevel::Struggling, _) => Pace::Slow,
        (PerformanceLevel::Excellent, _) => Pace::Fast,
        (_, LearnerBackground::Beginner) => Pace::Slow,
        (_, LearnerBackground::Advanced) => Pace::Fast,
        _ => Pace::Normal,
    }
}

pub fn pace_for_performance(performance_level: PerformanceLevel) -> Pace {
    match performance_level {
        PerformanceLevel::Excellent => Pace::Fast,
        PerformanceLevel::Struggling => Pace::Slow,
        PerformanceLevel::Average => Pace::Normal,
    }
}

/// Minutes scaled by the pace multiplier, rounded to the nearest minute.
pub fn adjust_estimated_time(base_minutes: u32, pace: Pace, multipliers: &PaceMultipliers) -> u32 {
    (f64::from(base_minutes) * multipliers.for_pace(pace)).round() as u32
}
