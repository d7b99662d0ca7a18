use serde::{Deserialize, Serialize};

use super::career::CareerRecommendation;
use super::types::{CareerGoal, DifficultyLevel, LearnerBackground, Pace, PerformanceLevel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerContext {
    pub background: LearnerBackground,
    pub career_goal: CareerGoal,
    pub performance_level: PerformanceLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseContext {
    pub id: String,
    pub title: String,
    pub difficulty: DifficultyLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathModule {
    pub id: String,
    pub title: String,
    pub order: u32,
    pub difficulty: DifficultyLevel,
    pub is_unlocked: bool,
    pub is_recommended: bool,
    /// Minutes, already scaled by the recommended pace.
    pub estimated_time: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptivePath {
    pub starting_module: usize,
    pub recommended_pace: Pace,
    pub total_modules: usize,
    pub modules: Vec<PathModule>,
    pub career_recommendations: Vec<CareerRecommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptivePathView {
    pub user: LearnerContext,
    pub course: CourseContext,
    pub adaptive_path: AdaptivePath,
    pub recommendations: Vec<String>,
}

impl AdaptivePathView {
    pub fn unlocked_modules(&self) -> impl Iterator<Item = &PathModule> {
        self.adaptive_path.modules.iter().filter(|m| m.is_unlocked)
    }

    pub fn total_estimated_minutes(&self) -> u32 {
        self.adaptive_path.modules.iter().map(|m| m.estimated_time).sum()
    }

    /// Response body for the path endpoint.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
