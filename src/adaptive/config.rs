use serde::{Deserialize, Serialize};

use super::types::Pace;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementConfig {
    /// Share of a beginner course an intermediate learner skips.
    pub intermediate_skip_beginner: f64,
    /// Share of a beginner course an advanced learner skips.
    pub advanced_skip_beginner: f64,
    /// Share of an intermediate course an advanced learner skips.
    pub advanced_skip_intermediate: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            intermediate_skip_beginner: 0.25,
            advanced_skip_beginner: 0.5,
            advanced_skip_intermediate: 0.25,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaceMultipliers {
    pub slow: f64,
    pub normal: f64,
    pub fast: f64,
}

impl PaceMultipliers {
    pub fn for_pace(&self, pace: Pace) -> f64 {
        match pace {
            Pace::Slow => self.slow,
            Pace::Normal => self.normal,
            Pace::Fast => self.fast,
        }
    }
}

impl Default for PaceMultipliers {
    fn default() -> Self {
        Self {
            slow: 1.5,
            normal: 1.0,
            fast: 0.7,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceThresholds {
    pub excellent_min_success_rate: f64,
    pub excellent_max_avg_time_secs: f64,
    pub struggling_max_success_rate: f64,
    pub struggling_min_avg_time_secs: f64,
    pub weak_area_min_misses: usize,
}

impl Default for PerformanceThresholds {
    fn default() -> Self {
        Self {
            excellent_min_success_rate: 85.0,
            excellent_max_avg_time_secs: 45.0,
            struggling_max_success_rate: 60.0,
            struggling_min_avg_time_secs: 90.0,
            weak_area_min_misses: 2,
        }
    }
}

/// Upper bounds every configured limit is held to.
pub const MAX_RECOMMENDED_MODULES: usize = 3;
pub const MAX_CAREER_MATCHES: usize = 5;
pub const MAX_ANSWER_WINDOW: usize = 20;
pub const MAX_WEAK_AREAS: usize = 5;
pub const MAX_RECOMMENDED_COURSES: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathLimits {
    pub recommended_modules: usize,
    pub career_matches: usize,
    pub answer_window: usize,
    pub weak_areas: usize,
    pub recommended_courses: usize,
}

impl Default for PathLimits {
    fn default() -> Self {
        Self {
            recommended_modules: MAX_RECOMMENDED_MODULES,
            career_matches: MAX_CAREER_MATCHES,
            answer_window: MAX_ANSWER_WINDOW,
            weak_areas: MAX_WEAK_AREAS,
            recommended_courses: MAX_RECOMMENDED_COURSES,
        }
    }
}

impl PathLimits {
    /// Overrides may only tighten a limit. The answer window keeps at least one
    /// answer so a non-empty history always yields a classification.
    pub fn clamped(&self) -> Self {
        Self {
            recommended_modules: self.recommended_modules.min(MAX_RECOMMENDED_MODULES),
            career_matches: self.career_matches.min(MAX_CAREER_MATCHES),
            answer_window: self.answer_window.clamp(1, MAX_ANSWER_WINDOW),
            weak_areas: self.weak_areas.min(MAX_WEAK_AREAS),
            recommended_courses: self.recommended_courses.min(MAX_RECOMMENDED_COURSES),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveConfig {
    pub placement: PlacementConfig,
    pub pace_multipliers: PaceMultipliers,
    pub thresholds: PerformanceThresholds,
    pub limits: PathLimits,
}

fn env_usize(key: &str) -> Option<usize> {
    std::env::var(key).ok().and_then(|val| val.trim().parse::<usize>().ok())
}

impl AdaptiveConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(val) = env_usize("LEARNPATH_ANSWER_WINDOW") {
            config.limits.answer_window = val;
        }
        if let Some(val) = env_usize("LEARNPATH_RECOMMENDED_COUNT") {
            config.limits.recommended_modules = val;
        }
        if let Some(val) = env_usize("LEARNPATH_CAREER_LIMIT") {
            config.limits.career_matches = val;
        }
        if let Some(val) = env_usize("LEARNPATH_COURSE_LIMIT") {
            config.limits.recommended_courses = val;
        }

        config.limits = config.limits.clamped();
        config
    }
}
