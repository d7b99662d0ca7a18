use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PathError, PathResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearnerBackground {
    Beginner,
    Intermediate,
    Advanced,
}

impl LearnerBackground {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl FromStr for LearnerBackground {
    type Err = PathError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(PathError::Validation(format!(
                "invalid learner background '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl FromStr for DifficultyLevel {
    type Err = PathError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(PathError::Validation(format!(
                "invalid difficulty level '{other}'"
            ))),
        }
    }
}

/// Career goal a learner declares at registration.
///
/// Serialized in kebab-case; the display labels stored by older records
/// ("Software Developer", "ML Engineer", ...) are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CareerGoal {
    #[serde(alias = "Software Developer")]
    SoftwareDeveloper,
    #[serde(alias = "Data Analyst")]
    DataAnalyst,
    #[serde(alias = "Teacher")]
    Teacher,
    #[serde(alias = "Web Developer")]
    WebDeveloper,
    #[serde(alias = "ML Engineer")]
    MlEngineer,
    #[serde(alias = "Other")]
    Other,
}

impl CareerGoal {
    pub const ALL: [Self; 6] = [
        Self::SoftwareDeveloper,
        Self::DataAnalyst,
        Self::Teacher,
        Self::WebDeveloper,
        Self::MlEngineer,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SoftwareDeveloper => "software-developer",
            Self::DataAnalyst => "data-analyst",
            Self::Teacher => "teacher",
            Self::WebDeveloper => "web-developer",
            Self::MlEngineer => "ml-engineer",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SoftwareDeveloper => "Software Developer",
            Self::DataAnalyst => "Data Analyst",
            Self::Teacher => "Teacher",
            Self::WebDeveloper => "Web Developer",
            Self::MlEngineer => "ML Engineer",
            Self::Other => "Other",
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, Self::Other)
    }
}

impl FromStr for CareerGoal {
    type Err = PathError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase().replace([' ', '_'], "-");
        match normalized.as_str() {
            "software-developer" => Ok(Self::SoftwareDeveloper),
            "data-analyst" => Ok(Self::DataAnalyst),
            "teacher" => Ok(Self::Teacher),
            "web-developer" => Ok(Self::WebDeveloper),
            "ml-engineer" => Ok(Self::MlEngineer),
            "other" => Ok(Self::Other),
            _ => Err(PathError::Validation(format!(
                "invalid career goal '{value}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceLevel {
    Struggling,
    #[default]
    Average,
    Excellent,
}

impl PerformanceLevel {
    pub const ALL: [Self; 3] = [Self::Struggling, Self::Average, Self::Excellent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Struggling => "struggling",
            Self::Average => "average",
            Self::Excellent => "excellent",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "struggling" => Self::Struggling,
            "excellent" => Self::Excellent,
            _ => Self::Average,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl Pace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Normal => "normal",
            Self::Fast => "fast",
        }
    }

    /// Unknown labels fall back to `Normal`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "slow" => Self::Slow,
            "fast" => Self::Fast,
            _ => Self::Normal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    NeedsRevision,
}

impl ProgressStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::NeedsRevision => "needs-revision",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "in-progress" => Self::InProgress,
            "completed" => Self::Completed,
            "needs-revision" => Self::NeedsRevision,
            _ => Self::NotStarted,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProfile {
    #[serde(default)]
    pub background: Option<LearnerBackground>,
    #[serde(default)]
    pub career_goal: Option<CareerGoal>,
}

impl LearnerProfile {
    pub fn new(background: LearnerBackground, career_goal: CareerGoal) -> Self {
        Self {
            background: Some(background),
            career_goal: Some(career_goal),
        }
    }

    /// Path generation personalizes on both fields, so either one missing is
    /// rejected instead of being replaced by a guessed default.
    pub fn resolve(&self) -> PathResult<ResolvedProfile> {
        let background = self
            .background
            .ok_or_else(|| PathError::validation("learner background is required"))?;
        let career_goal = self
            .career_goal
            .ok_or_else(|| PathError::validation("career goal is required"))?;
        Ok(ResolvedProfile {
            background,
            career_goal,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedProfile {
    pub background: LearnerBackground,
    pub career_goal: CareerGoal,
}

fn default_published() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub difficulty_level: DifficultyLevel,
    #[serde(default)]
    pub career_goals: Vec<CareerGoal>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub enrolled_students: u64,
    #[serde(default = "default_published")]
    pub is_published: bool,
}

impl Course {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        difficulty: DifficultyLevel,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            difficulty_level: difficulty,
            career_goals: Vec::new(),
            average_rating: 0.0,
            enrolled_students: 0,
            is_published: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub difficulty_level: DifficultyLevel,
    /// Minutes.
    #[serde(default)]
    pub estimated_time: u32,
    pub order: u32,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

impl Module {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        order: u32,
        difficulty: DifficultyLevel,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            difficulty_level: difficulty,
            estimated_time: 0,
            order,
            prerequisites: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleProgress {
    pub module: String,
    #[serde(default)]
    pub status: ProgressStatus,
    #[serde(default)]
    pub videos_completed: u32,
    #[serde(default)]
    pub total_videos: u32,
    #[serde(default)]
    pub quiz_score: Option<f64>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl ModuleProgress {
    pub fn new(module: impl Into<String>, status: ProgressStatus) -> Self {
        Self {
            module: module.into(),
            status,
            videos_completed: 0,
            total_videos: 0,
            quiz_score: None,
            completed_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoProgress {
    pub video: String,
    /// Seconds watched.
    #[serde(default)]
    pub watched_duration: u32,
    #[serde(default)]
    pub total_duration: u32,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub checkpoints_completed: u32,
    #[serde(default)]
    pub total_checkpoints: u32,
    #[serde(default)]
    pub last_watched_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(default)]
    pub status: ProgressStatus,
    #[serde(default)]
    pub overall_progress: f64,
    #[serde(default)]
    pub modules_progress: Vec<ModuleProgress>,
    #[serde(default)]
    pub videos_progress: Vec<VideoProgress>,
    #[serde(default)]
    pub performance_level: PerformanceLevel,
    #[serde(default)]
    pub recommended_pace: Pace,
    #[serde(default)]
    pub weak_areas: Vec<String>,
    #[serde(default)]
    pub average_quiz_score: f64,
    #[serde(default)]
    pub total_checkpoints_completed: u32,
    /// Minutes.
    #[serde(default)]
    pub total_time_spent: u32,
    #[serde(default)]
    pub last_activity_date: Option<DateTime<Utc>>,
}

impl ProgressRecord {
    pub fn with_modules(modules_progress: Vec<ModuleProgress>) -> Self {
        Self {
            modules_progress,
            ..Default::default()
        }
    }

    /// `None` when the record carries no entry for the module.
    pub fn module_status(&self, module_id: &str) -> Option<ProgressStatus> {
        self.modules_progress
            .iter()
            .find(|entry| entry.module == module_id)
            .map(|entry| entry.status)
    }

    pub fn has_started(&self, module_id: &str) -> bool {
        matches!(
            self.module_status(module_id),
            Some(status) if status != ProgressStatus::NotStarted
        )
    }

    pub fn is_completed(&self, module_id: &str) -> bool {
        self.module_status(module_id) == Some(ProgressStatus::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub is_correct: bool,
    pub time_spent_seconds: f64,
    pub question_id: String,
}

impl AnswerRecord {
    pub fn new(question_id: impl Into<String>, is_correct: bool, time_spent_seconds: f64) -> Self {
        Self {
            is_correct,
            time_spent_seconds,
            question_id: question_id.into(),
        }
    }
}
